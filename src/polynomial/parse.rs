// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Text form of rational polynomials, as written by the `Display` impl:
//! `-3 + 0*x + 1*x^2`. Any single identifier may be used as the indeterminate,
//! coefficients may be written as `p/q`, and a bare `x^n` has coefficient 1.

use crate::polynomial::Polynomial;
use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, digit1, multispace0, satisfy},
    combinator::{opt, peek, recognize},
    multi::{fold_many0, many0},
    sequence::{pair, preceded, tuple},
    IResult,
};
use num_bigint::BigInt;
use num_rational::Ratio;
use num_traits::{One, Zero};
use std::str::FromStr;
use thiserror::Error;

/// largest exponent accepted when parsing; the coefficient vector is dense,
/// so larger degrees are rejected instead of allocated
pub const MAX_PARSED_DEGREE: usize = 1 << 16;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PolynomialParseError {
    #[error("polynomial text is empty")]
    Empty,
    #[error("polynomial has more than one indeterminate: `{first}` and `{second}`")]
    MultipleIndeterminates { first: String, second: String },
    #[error("invalid polynomial syntax at byte {position}")]
    InvalidSyntax { position: usize },
    #[error("exponent `{exponent}` is too large")]
    ExponentTooLarge { exponent: String },
    #[error("coefficient has a zero denominator")]
    DivisionByZero,
}

#[derive(Debug)]
struct RawTerm<'a> {
    negative: bool,
    numerator: Option<&'a str>,
    denominator: Option<&'a str>,
    monomial: Option<(&'a str, Option<&'a str>)>,
}

fn parse_signs(input: &str) -> IResult<&str, bool> {
    fold_many0(
        preceded(multispace0, alt((char('+'), char('-')))),
        || false,
        |negative, sign| negative ^ (sign == '-'),
    )(input)
}

fn parse_coefficient(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    pair(
        digit1,
        opt(preceded(
            pair(multispace0, char('/')),
            preceded(multispace0, digit1),
        )),
    )(input)
}

fn parse_identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(input)
}

fn parse_monomial(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    pair(
        parse_identifier,
        opt(preceded(
            pair(multispace0, char('^')),
            preceded(multispace0, digit1),
        )),
    )(input)
}

fn parse_term(input: &str) -> IResult<&str, RawTerm<'_>> {
    let (input, negative) = parse_signs(input)?;
    let (input, _) = multispace0(input)?;
    let (input, coefficient) = opt(parse_coefficient)(input)?;
    let (input, monomial) = match coefficient {
        Some(_) => opt(alt((
            preceded(tuple((multispace0, char('*'), multispace0)), parse_monomial),
            parse_monomial,
        )))(input)?,
        None => {
            let (input, monomial) = parse_monomial(input)?;
            (input, Some(monomial))
        }
    };
    let (numerator, denominator) = match coefficient {
        Some((numerator, denominator)) => (Some(numerator), denominator),
        None => (None, None),
    };
    Ok((
        input,
        RawTerm {
            negative,
            numerator,
            denominator,
            monomial,
        },
    ))
}

/// every term after the first must be introduced by a `+` or `-`
fn parse_following_term(input: &str) -> IResult<&str, RawTerm<'_>> {
    preceded(
        peek(preceded(multispace0, alt((char('+'), char('-'))))),
        parse_term,
    )(input)
}

fn parse_terms(input: &str) -> IResult<&str, (RawTerm<'_>, Vec<RawTerm<'_>>)> {
    let (input, first) = parse_term(input)?;
    let (input, rest) = many0(parse_following_term)(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, (first, rest)))
}

fn parse_integer(text: &str, position: usize) -> Result<BigInt, PolynomialParseError> {
    text.parse()
        .map_err(|_| PolynomialParseError::InvalidSyntax { position })
}

impl FromStr for Polynomial<Ratio<BigInt>> {
    type Err = PolynomialParseError;
    fn from_str(text: &str) -> Result<Self, PolynomialParseError> {
        if text.trim().is_empty() {
            return Err(PolynomialParseError::Empty);
        }
        let position_of = |rest: &str| text.len() - rest.len();
        let (remaining, (first, rest)) = match parse_terms(text) {
            Ok(parsed) => parsed,
            Err(nom::Err::Error(error)) | Err(nom::Err::Failure(error)) => {
                return Err(PolynomialParseError::InvalidSyntax {
                    position: position_of(error.input),
                })
            }
            Err(nom::Err::Incomplete(_)) => {
                return Err(PolynomialParseError::InvalidSyntax {
                    position: text.len(),
                })
            }
        };
        if !remaining.is_empty() {
            return Err(PolynomialParseError::InvalidSyntax {
                position: position_of(remaining),
            });
        }
        let mut indeterminate: Option<&str> = None;
        let mut coefficients: Vec<Ratio<BigInt>> = Vec::new();
        for term in Some(first).into_iter().chain(rest) {
            let mut coefficient = match term.numerator {
                Some(numerator) => {
                    let numerator = parse_integer(numerator, position_of(numerator))?;
                    let denominator = match term.denominator {
                        Some(denominator) => parse_integer(denominator, position_of(denominator))?,
                        None => BigInt::one(),
                    };
                    if denominator.is_zero() {
                        return Err(PolynomialParseError::DivisionByZero);
                    }
                    Ratio::new(numerator, denominator)
                }
                None => Ratio::one(),
            };
            if term.negative {
                coefficient = -coefficient;
            }
            let power = match term.monomial {
                None => 0,
                Some((name, exponent)) => {
                    match indeterminate {
                        None => indeterminate = Some(name),
                        Some(first) if first != name => {
                            return Err(PolynomialParseError::MultipleIndeterminates {
                                first: first.into(),
                                second: name.into(),
                            })
                        }
                        Some(_) => {}
                    }
                    match exponent {
                        None => 1,
                        Some(exponent) => exponent
                            .parse::<usize>()
                            .ok()
                            .filter(|&power| power <= MAX_PARSED_DEGREE)
                            .ok_or_else(|| PolynomialParseError::ExponentTooLarge {
                                exponent: exponent.into(),
                            })?,
                    }
                }
            };
            let len = power
                .checked_add(1)
                .ok_or_else(|| PolynomialParseError::ExponentTooLarge {
                    exponent: power.to_string(),
                })?;
            if coefficients.len() < len {
                coefficients.resize(len, Ratio::zero());
            }
            coefficients[power] += coefficient;
        }
        Ok(coefficients.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(coefficients: &[(i64, i64)]) -> Polynomial<Ratio<BigInt>> {
        coefficients
            .iter()
            .map(|&(n, d)| Ratio::new(BigInt::from(n), BigInt::from(d)))
            .collect()
    }

    #[test]
    fn test_parse_display_form() {
        let parsed: Polynomial<Ratio<BigInt>> = "-3 + 0*x + 1*x^2".parse().unwrap();
        assert_eq!(parsed, p(&[(-3, 1), (0, 1), (1, 1)]));
        let parsed: Polynomial<Ratio<BigInt>> = "-1 + -1/3*x".parse().unwrap();
        assert_eq!(parsed, p(&[(-1, 1), (-1, 3)]));
    }

    #[test]
    fn test_parse_free_form() {
        let parsed: Polynomial<Ratio<BigInt>> = "3*t - 1".parse().unwrap();
        assert_eq!(parsed, p(&[(-1, 1), (3, 1)]));
        let parsed: Polynomial<Ratio<BigInt>> = "t^2 - 3".parse().unwrap();
        assert_eq!(parsed, p(&[(-3, 1), (0, 1), (1, 1)]));
        let parsed: Polynomial<Ratio<BigInt>> = "  -x^3 + 2x - 1/2 + x ".parse().unwrap();
        assert_eq!(parsed, p(&[(-1, 2), (3, 1), (0, 1), (-1, 1)]));
        let parsed: Polynomial<Ratio<BigInt>> = "5".parse().unwrap();
        assert_eq!(parsed, p(&[(5, 1)]));
        let parsed: Polynomial<Ratio<BigInt>> = "x - x".parse().unwrap();
        assert!(parsed.is_zero());
    }

    #[test]
    fn test_parse_degree_limit() {
        let text = format!("x^{} - 1", MAX_PARSED_DEGREE);
        let parsed: Polynomial<Ratio<BigInt>> = text.parse().unwrap();
        assert_eq!(parsed.degree(), Some(MAX_PARSED_DEGREE));
        let text = format!("x^{}", MAX_PARSED_DEGREE + 1);
        assert_eq!(
            text.parse::<Polynomial<Ratio<BigInt>>>(),
            Err(PolynomialParseError::ExponentTooLarge {
                exponent: (MAX_PARSED_DEGREE + 1).to_string()
            })
        );
    }

    #[test]
    fn test_display_round_trip() {
        let poly = p(&[(7, 2), (-1, 3), (0, 1), (11, 1)]);
        let parsed: Polynomial<Ratio<BigInt>> = poly.to_string().parse().unwrap();
        assert_eq!(parsed, poly);
    }

    #[test]
    fn test_parse_errors() {
        fn parse(text: &str) -> Result<Polynomial<Ratio<BigInt>>, PolynomialParseError> {
            text.parse()
        }
        assert_eq!(parse("   "), Err(PolynomialParseError::Empty));
        assert_eq!(
            parse("x*1 + y"),
            Err(PolynomialParseError::InvalidSyntax { position: 1 })
        );
        assert_eq!(
            parse("x^2 + y - 1"),
            Err(PolynomialParseError::MultipleIndeterminates {
                first: "x".into(),
                second: "y".into(),
            })
        );
        assert_eq!(parse("1/0*x"), Err(PolynomialParseError::DivisionByZero));
        assert_eq!(
            parse("x^99999999999999999999999"),
            Err(PolynomialParseError::ExponentTooLarge {
                exponent: "99999999999999999999999".into()
            })
        );
        assert_eq!(
            parse("x^18446744073709551615 + 1"),
            Err(PolynomialParseError::ExponentTooLarge {
                exponent: "18446744073709551615".into()
            })
        );
        assert_eq!(
            parse("x^4000000000"),
            Err(PolynomialParseError::ExponentTooLarge {
                exponent: "4000000000".into()
            })
        );
        assert_eq!(
            parse("3 + "),
            Err(PolynomialParseError::InvalidSyntax { position: 2 })
        );
        assert_eq!(
            parse("2 x"),
            Err(PolynomialParseError::InvalidSyntax { position: 2 })
        );
    }
}
