// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::Polynomial;
use crate::polynomial::PolynomialParseError;
use crate::traits::ExactDiv;
use crate::traits::GCD;
use crate::util::DebugAsDisplay;
use lazy_static::lazy_static;
use num_bigint::BigInt;
use num_bigint::BigUint;
use num_rational::Ratio;
use num_traits::One;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace, warn};

lazy_static! {
    static ref ONE_HALF: Ratio<BigInt> = Ratio::new(BigInt::one(), BigInt::from(2));
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RealAlgebraicNumberError {
    #[error("invalid polynomial: {0}")]
    InvalidPolynomial(#[from] PolynomialParseError),
    #[error("invalid interval bound `{text}`: {message}")]
    InvalidBound { text: String, message: String },
    #[error("polynomial is not square-free")]
    NotSquareFree,
    #[error("invalid interval: lower bound {lower_bound} is greater than upper bound {upper_bound}")]
    InvalidInterval {
        lower_bound: Ratio<BigInt>,
        upper_bound: Ratio<BigInt>,
    },
    #[error("polynomial has no root in [{lower_bound}, {upper_bound}]")]
    NoRootInInterval {
        lower_bound: Ratio<BigInt>,
        upper_bound: Ratio<BigInt>,
    },
    #[error("interval contains {root_count} roots of the polynomial instead of exactly one")]
    AmbiguousInterval { root_count: usize },
    #[error("polynomial is zero and has no degree")]
    DegreeError,
}

#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    #[error("numbers were not separated after {rounds} bisection rounds")]
    BisectionLimitExceeded { rounds: usize },
}

/// Per-call limits for `RealAlgebraicNumber::compare_with_config`.
///
/// Two distinct but very close roots can need many bisection rounds before
/// their isolating intervals separate; callers that need bounded latency set
/// `max_bisection_rounds` and handle `CompareError::BisectionLimitExceeded`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CompareConfig {
    pub max_bisection_rounds: Option<usize>,
}

impl CompareConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_max_bisection_rounds(self, max_bisection_rounds: usize) -> Self {
        Self {
            max_bisection_rounds: Some(max_bisection_rounds),
        }
    }
}

/// A real root of a square-free polynomial with rational coefficients,
/// identified by an interval `[lower_bound, upper_bound]` that contains no other root.
///
/// Values are immutable: refinement returns a new value sharing the same polynomial.
/// Rational values are always stored as `denom * x - numer` with
/// `lower_bound == upper_bound`.
#[derive(Clone)]
pub struct RealAlgebraicNumber {
    polynomial: Arc<Polynomial<Ratio<BigInt>>>,
    lower_bound: Ratio<BigInt>,
    upper_bound: Ratio<BigInt>,
    is_rational: bool,
}

impl fmt::Debug for RealAlgebraicNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RealAlgebraicNumber")
            .field("polynomial", &DebugAsDisplay(&*self.polynomial))
            .field("lower_bound", &DebugAsDisplay(&self.lower_bound))
            .field("upper_bound", &DebugAsDisplay(&self.upper_bound))
            .field("is_rational", &self.is_rational)
            .finish()
    }
}

impl fmt::Display for RealAlgebraicNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_rational {
            write!(f, "{}", self.lower_bound)
        } else {
            write!(
                f,
                "root of {} in [{}, {}]",
                self.polynomial, self.lower_bound, self.upper_bound
            )
        }
    }
}

macro_rules! impl_from_int_or_ratio {
    ($t:ident) => {
        impl From<$t> for RealAlgebraicNumber {
            fn from(value: $t) -> Self {
                Self::from_rational(BigInt::from(value).into())
            }
        }

        impl From<Ratio<$t>> for RealAlgebraicNumber {
            fn from(value: Ratio<$t>) -> Self {
                let (numer, denom) = value.into_raw();
                Self::from_rational(Ratio::new(BigInt::from(numer), BigInt::from(denom)))
            }
        }
    };
}

impl_from_int_or_ratio!(u8);
impl_from_int_or_ratio!(u16);
impl_from_int_or_ratio!(u32);
impl_from_int_or_ratio!(u64);
impl_from_int_or_ratio!(u128);
impl_from_int_or_ratio!(usize);
impl_from_int_or_ratio!(BigUint);
impl_from_int_or_ratio!(i8);
impl_from_int_or_ratio!(i16);
impl_from_int_or_ratio!(i32);
impl_from_int_or_ratio!(i64);
impl_from_int_or_ratio!(i128);
impl_from_int_or_ratio!(isize);
impl_from_int_or_ratio!(BigInt);

impl RealAlgebraicNumber {
    /// validates `polynomial` and the interval `[lower_bound, upper_bound]`.
    ///
    /// An interval with exactly one endpoint on a root of `polynomial` is
    /// collapsed to that endpoint. A degree-0 polynomial `c` denotes the
    /// rational `c`.
    pub fn new(
        polynomial: Polynomial<Ratio<BigInt>>,
        lower_bound: Ratio<BigInt>,
        upper_bound: Ratio<BigInt>,
    ) -> Result<Self, RealAlgebraicNumberError> {
        if lower_bound > upper_bound {
            return Err(RealAlgebraicNumberError::InvalidInterval {
                lower_bound,
                upper_bound,
            });
        }
        let degree = polynomial
            .degree()
            .ok_or(RealAlgebraicNumberError::DegreeError)?;
        if !polynomial.is_square_free() {
            return Err(RealAlgebraicNumberError::NotSquareFree);
        }
        if degree == 0 {
            let value = polynomial.coefficient(0);
            debug!(%value, "constant polynomial denotes a rational value");
            return Ok(Self::from_rational(value));
        }
        match (
            polynomial.sign_at(&lower_bound),
            polynomial.sign_at(&upper_bound),
        ) {
            (Some(lower_sign), Some(upper_sign)) if lower_sign == upper_sign => {
                Err(RealAlgebraicNumberError::NoRootInInterval {
                    lower_bound,
                    upper_bound,
                })
            }
            (Some(_), Some(_)) => {
                let root_count = polynomial
                    .to_sturm_sequence()
                    .distinct_real_root_count_in(&lower_bound, &upper_bound);
                if root_count != 1 {
                    return Err(RealAlgebraicNumberError::AmbiguousInterval { root_count });
                }
                Ok(Self::new_unchecked(
                    Arc::new(polynomial),
                    lower_bound,
                    upper_bound,
                ))
            }
            (None, None) => {
                if lower_bound == upper_bound {
                    Ok(Self::from_rational(lower_bound))
                } else {
                    // the lower bound itself plus the roots in (lower_bound, upper_bound]
                    let root_count = 1 + polynomial
                        .to_sturm_sequence()
                        .distinct_real_root_count_in(&lower_bound, &upper_bound);
                    Err(RealAlgebraicNumberError::AmbiguousInterval { root_count })
                }
            }
            (None, Some(_)) => {
                warn!(
                    %polynomial,
                    %lower_bound,
                    %upper_bound,
                    "lower bound is a root, collapsing interval to it"
                );
                Ok(Self::from_rational(lower_bound))
            }
            (Some(_), None) => {
                warn!(
                    %polynomial,
                    %lower_bound,
                    %upper_bound,
                    "upper bound is a root, collapsing interval to it"
                );
                Ok(Self::from_rational(upper_bound))
            }
        }
    }
    /// callers must uphold the type's invariants
    pub(crate) fn new_unchecked(
        polynomial: Arc<Polynomial<Ratio<BigInt>>>,
        lower_bound: Ratio<BigInt>,
        upper_bound: Ratio<BigInt>,
    ) -> Self {
        let is_rational = lower_bound == upper_bound;
        Self {
            polynomial,
            lower_bound,
            upper_bound,
            is_rational,
        }
    }
    fn from_rational(value: Ratio<BigInt>) -> Self {
        let polynomial: Polynomial<Ratio<BigInt>> = vec![
            Ratio::from_integer(-value.numer()),
            Ratio::from_integer(value.denom().clone()),
        ]
        .into();
        Self {
            polynomial: Arc::new(polynomial),
            lower_bound: value.clone(),
            upper_bound: value,
            is_rational: true,
        }
    }
    /// rebuilds a number from its text parts, e.g. as written by `to_text_parts`
    pub fn from_text_parts(
        polynomial: &str,
        lower_bound: &str,
        upper_bound: &str,
    ) -> Result<Self, RealAlgebraicNumberError> {
        fn parse_bound(text: &str) -> Result<Ratio<BigInt>, RealAlgebraicNumberError> {
            text.trim()
                .parse()
                .map_err(|err| RealAlgebraicNumberError::InvalidBound {
                    text: text.into(),
                    message: format!("{}", err),
                })
        }
        let polynomial: Polynomial<Ratio<BigInt>> = polynomial.parse()?;
        Self::new(
            polynomial,
            parse_bound(lower_bound)?,
            parse_bound(upper_bound)?,
        )
    }
    pub fn to_text_parts(&self) -> (String, String, String) {
        (
            self.polynomial.to_string(),
            self.lower_bound.to_string(),
            self.upper_bound.to_string(),
        )
    }
    #[inline]
    pub fn polynomial(&self) -> &Polynomial<Ratio<BigInt>> {
        &self.polynomial
    }
    #[inline]
    pub fn interval(&self) -> (&Ratio<BigInt>, &Ratio<BigInt>) {
        (&self.lower_bound, &self.upper_bound)
    }
    #[inline]
    pub fn lower_bound(&self) -> &Ratio<BigInt> {
        &self.lower_bound
    }
    #[inline]
    pub fn upper_bound(&self) -> &Ratio<BigInt> {
        &self.upper_bound
    }
    #[inline]
    pub fn is_rational(&self) -> bool {
        self.is_rational
    }
    pub fn to_rational(&self) -> Option<Ratio<BigInt>> {
        if self.is_rational {
            Some(self.lower_bound.clone())
        } else {
            None
        }
    }
    pub fn degree(&self) -> usize {
        self.polynomial.degree().expect("known to be non-zero")
    }
    /// compares `self` with the rational `value`.
    ///
    /// When `value` lies strictly inside the isolating interval, `self` is
    /// refined at `value` first.
    pub fn compare_rational(&self, value: &Ratio<BigInt>) -> Ordering {
        if self.is_rational {
            let ordering = self.lower_bound.cmp(value);
            assert!(
                ordering != Ordering::Equal || self.polynomial.sign_at(value).is_none(),
                "rational real algebraic number isn't a root of its polynomial"
            );
            ordering
        } else if *value >= self.upper_bound {
            // the polynomial is nonzero at both bounds, so the root is strictly inside
            Ordering::Less
        } else if *value <= self.lower_bound {
            Ordering::Greater
        } else {
            let refined = self.refine_at(value);
            debug_assert!(
                refined.is_rational
                    || refined.lower_bound == *value
                    || refined.upper_bound == *value
            );
            refined.compare_rational(value)
        }
    }
    /// splits the isolating interval at `at`, returning the half that keeps the root.
    ///
    /// returns a clone of `self` when `self` is rational or `at` is outside the
    /// open interval.
    pub fn refine_at(&self, at: &Ratio<BigInt>) -> RealAlgebraicNumber {
        if self.is_rational || *at <= self.lower_bound || *at >= self.upper_bound {
            return self.clone();
        }
        match self.polynomial.sign_at(at) {
            None => Self::from_rational(at.clone()),
            Some(sign) if Some(sign) == self.polynomial.sign_at(&self.lower_bound) => {
                Self::new_unchecked(
                    self.polynomial.clone(),
                    at.clone(),
                    self.upper_bound.clone(),
                )
            }
            Some(_) => Self::new_unchecked(
                self.polynomial.clone(),
                self.lower_bound.clone(),
                at.clone(),
            ),
        }
    }
    pub fn bisect_range(&self) -> RealAlgebraicNumber {
        let middle = (&self.lower_bound + &self.upper_bound) * &*ONE_HALF;
        self.refine_at(&middle)
    }
    fn has_same_representation(&self, rhs: &Self) -> bool {
        (Arc::ptr_eq(&self.polynomial, &rhs.polynomial) || self.polynomial == rhs.polynomial)
            && self.lower_bound == rhs.lower_bound
            && self.upper_bound == rhs.upper_bound
    }
    /// decides the order without touching the polynomials when either side is
    /// rational or the isolating intervals are disjoint
    fn fast_path_ordering(lhs: &Self, rhs: &Self) -> Option<Ordering> {
        if rhs.is_rational {
            Some(lhs.compare_rational(&rhs.lower_bound))
        } else if lhs.is_rational {
            Some(rhs.compare_rational(&lhs.lower_bound).reverse())
        } else if lhs.upper_bound <= rhs.lower_bound {
            Some(Ordering::Less)
        } else if lhs.lower_bound >= rhs.upper_bound {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
    /// replaces the polynomial by `gcd` if the root is a root of `gcd`,
    /// otherwise by `polynomial / gcd`
    fn eliminate_shared_root(&self, gcd: &Polynomial<Ratio<BigInt>>) -> Self {
        if self.is_rational || gcd.degree() == Some(0) {
            return self.clone();
        }
        let polynomial =
            if gcd.sign_at(&self.lower_bound) != gcd.sign_at(&self.upper_bound) {
                gcd.clone()
            } else {
                (*self.polynomial).clone().exact_div(gcd)
            };
        if polynomial.degree() == Some(1) {
            let value = Ratio::new(
                -polynomial.coefficient(0).numer() * polynomial.coefficient(1).denom(),
                polynomial.coefficient(0).denom() * polynomial.coefficient(1).numer(),
            );
            debug_assert!(self.lower_bound < value && value < self.upper_bound);
            return Self::from_rational(value);
        }
        Self::new_unchecked(
            Arc::new(polynomial),
            self.lower_bound.clone(),
            self.upper_bound.clone(),
        )
    }
    /// exact comparison of two real algebraic numbers
    pub fn compare(&self, rhs: &Self) -> Ordering {
        match self.compare_with_config(rhs, &CompareConfig::default()) {
            Ok(ordering) => ordering,
            Err(CompareError::BisectionLimitExceeded { .. }) => {
                unreachable!("comparison without a bisection limit can't exceed it")
            }
        }
    }
    pub fn compare_with_config(
        &self,
        rhs: &Self,
        config: &CompareConfig,
    ) -> Result<Ordering, CompareError> {
        if self.has_same_representation(rhs) {
            debug!("identical representations");
            return Ok(Ordering::Equal);
        }
        if let Some(ordering) = Self::fast_path_ordering(self, rhs) {
            return Ok(ordering);
        }
        let overlap_lower_bound = self.lower_bound.clone().max(rhs.lower_bound.clone());
        let overlap_upper_bound = self.upper_bound.clone().min(rhs.upper_bound.clone());
        let mut lhs = self.clone();
        let mut rhs = rhs.clone();
        for bound in &[&overlap_lower_bound, &overlap_upper_bound] {
            lhs = lhs.refine_at(bound);
            if let Some(ordering) = Self::fast_path_ordering(&lhs, &rhs) {
                debug!("decided after aligning left interval");
                return Ok(ordering);
            }
        }
        for bound in &[&overlap_lower_bound, &overlap_upper_bound] {
            rhs = rhs.refine_at(bound);
            if let Some(ordering) = Self::fast_path_ordering(&lhs, &rhs) {
                debug!("decided after aligning right interval");
                return Ok(ordering);
            }
        }
        debug_assert!(lhs.interval() == (&overlap_lower_bound, &overlap_upper_bound));
        debug_assert!(rhs.interval() == (&overlap_lower_bound, &overlap_upper_bound));
        let gcd = lhs.polynomial.gcd(&*rhs.polynomial);
        lhs = lhs.eliminate_shared_root(&gcd);
        rhs = rhs.eliminate_shared_root(&gcd);
        if let Some(ordering) = Self::fast_path_ordering(&lhs, &rhs) {
            debug!(%gcd, "decided after shared root elimination");
            return Ok(ordering);
        }
        if gcd.sign_at(&overlap_lower_bound) != gcd.sign_at(&overlap_upper_bound) {
            debug!(%gcd, "both numbers are the same root of the common factor");
            return Ok(Ordering::Equal);
        }
        let mut rounds = 0usize;
        loop {
            if let Some(max_bisection_rounds) = config.max_bisection_rounds {
                if rounds >= max_bisection_rounds {
                    return Err(CompareError::BisectionLimitExceeded { rounds });
                }
            }
            lhs = lhs.bisect_range();
            rhs = rhs.bisect_range();
            rounds += 1;
            trace!(rounds, lhs = ?lhs, rhs = ?rhs, "bisection round");
            if let Some(ordering) = Self::fast_path_ordering(&lhs, &rhs) {
                debug!(rounds, "separated by bisection");
                return Ok(ordering);
            }
        }
    }
}

impl PartialEq for RealAlgebraicNumber {
    fn eq(&self, rhs: &RealAlgebraicNumber) -> bool {
        self.compare(rhs) == Ordering::Equal
    }
}

impl Eq for RealAlgebraicNumber {}

impl PartialOrd for RealAlgebraicNumber {
    fn partial_cmp(&self, rhs: &RealAlgebraicNumber) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for RealAlgebraicNumber {
    fn cmp(&self, rhs: &RealAlgebraicNumber) -> Ordering {
        self.compare(rhs)
    }
}
