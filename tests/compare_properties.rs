// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Property tests for the ordering of real algebraic numbers, checked against
//! an exact oracle built from each value's sign and square.

use algebraic_order::prelude::*;
use num_bigint::BigInt;
use num_rational::Ratio;
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
enum Sample {
    Rational(Ratio<BigInt>),
    /// `sqrt(k)` or `-sqrt(k)` for a non-square `k`
    Sqrt {
        k: i64,
        negative: bool,
        extra_factor: bool,
        bisections: usize,
    },
}

fn ri(v: i64) -> Ratio<BigInt> {
    Ratio::from_integer(BigInt::from(v))
}

fn integer_sqrt(k: i64) -> i64 {
    let mut s = 0;
    while (s + 1) * (s + 1) <= k {
        s += 1;
    }
    s
}

impl Sample {
    fn sign(&self) -> Ordering {
        match self {
            Sample::Rational(v) => v.cmp(&ri(0)),
            Sample::Sqrt { negative: true, .. } => Ordering::Less,
            Sample::Sqrt { negative: false, .. } => Ordering::Greater,
        }
    }

    fn square(&self) -> Ratio<BigInt> {
        match self {
            Sample::Rational(v) => v * v,
            Sample::Sqrt { k, .. } => ri(*k),
        }
    }

    fn oracle_cmp(&self, rhs: &Sample) -> Ordering {
        match self.sign().cmp(&rhs.sign()) {
            Ordering::Equal => {}
            ordering => return ordering,
        }
        let magnitude = self.square().cmp(&rhs.square());
        match self.sign() {
            Ordering::Less => magnitude.reverse(),
            _ => magnitude,
        }
    }

    fn build(&self) -> RealAlgebraicNumber {
        match self {
            Sample::Rational(v) => RealAlgebraicNumber::from(v.clone()),
            &Sample::Sqrt {
                k,
                negative,
                extra_factor,
                bisections,
            } => {
                let s = integer_sqrt(k);
                let (lower_bound, upper_bound) = if negative {
                    (ri(-s - 1), ri(-s))
                } else {
                    (ri(s), ri(s + 1))
                };
                let mut polynomial: Polynomial<Ratio<BigInt>> =
                    vec![ri(-k), ri(0), ri(1)].into();
                if extra_factor {
                    // a root well outside the isolating interval
                    polynomial *= Polynomial::from(vec![ri(-s - 5), ri(1)]);
                }
                let mut value = RealAlgebraicNumber::new(polynomial, lower_bound, upper_bound)
                    .expect("valid isolating interval");
                for _ in 0..bisections {
                    value = value.bisect_range();
                }
                value
            }
        }
    }
}

fn sample_strategy() -> impl Strategy<Value = Sample> {
    prop_oneof![
        (-60i64..60, 1i64..8)
            .prop_map(|(n, d)| Sample::Rational(Ratio::new(BigInt::from(n), BigInt::from(d)))),
        (2i64..40, any::<bool>(), any::<bool>(), 0usize..6)
            .prop_filter("k must not be a perfect square", |(k, ..)| {
                let s = integer_sqrt(*k);
                s * s != *k
            })
            .prop_map(|(k, negative, extra_factor, bisections)| Sample::Sqrt {
                k,
                negative,
                extra_factor,
                bisections,
            }),
    ]
}

fn random_sample(rng: &mut Pcg64Mcg) -> Sample {
    if rng.gen_bool(0.3) {
        let n: i64 = rng.gen_range(-60..60);
        let d: i64 = rng.gen_range(1..8);
        return Sample::Rational(Ratio::new(BigInt::from(n), BigInt::from(d)));
    }
    loop {
        let k: i64 = rng.gen_range(2..40);
        let s = integer_sqrt(k);
        if s * s != k {
            return Sample::Sqrt {
                k,
                negative: rng.gen(),
                extra_factor: rng.gen(),
                bisections: rng.gen_range(0..6),
            };
        }
    }
}

#[test]
fn sort_matches_oracle() {
    let mut rng = Pcg64Mcg::seed_from_u64(0x5eed);
    for _ in 0..10 {
        let mut samples: Vec<Sample> = (0..30).map(|_| random_sample(&mut rng)).collect();
        let mut values: Vec<RealAlgebraicNumber> = samples.iter().map(Sample::build).collect();
        values.sort();
        samples.sort_by(Sample::oracle_cmp);
        for (value, sample) in values.iter().zip(&samples) {
            assert_eq!(value.compare(&sample.build()), Ordering::Equal, "{}", value);
        }
    }
}

#[test]
fn bisection_limit_only_affects_undecided_comparisons() {
    let config = CompareConfig::new().with_max_bisection_rounds(0);
    let sqrt_2 = Sample::Sqrt {
        k: 2,
        negative: false,
        extra_factor: false,
        bisections: 0,
    }
    .build();
    let sqrt_3 = Sample::Sqrt {
        k: 3,
        negative: false,
        extra_factor: true,
        bisections: 0,
    }
    .build();
    // [1, 2] for both, so only bisection can separate them
    assert_eq!(
        sqrt_2.compare_with_config(&sqrt_3, &config),
        Err(CompareError::BisectionLimitExceeded { rounds: 0 })
    );
    assert_eq!(
        sqrt_2.compare_with_config(&sqrt_3, &CompareConfig::new().with_max_bisection_rounds(8)),
        Ok(Ordering::Less)
    );
    assert_eq!(
        sqrt_2.compare_with_config(&RealAlgebraicNumber::from(2), &config),
        Ok(Ordering::Less)
    );
}

proptest! {
    #[test]
    fn compare_matches_oracle(a in sample_strategy(), b in sample_strategy()) {
        let expected = a.oracle_cmp(&b);
        let (x, y) = (a.build(), b.build());
        prop_assert_eq!(x.compare(&y), expected);
        prop_assert_eq!(y.compare(&x), expected.reverse());
        prop_assert_eq!(x < y, expected == Ordering::Less);
        prop_assert_eq!(x == y, expected == Ordering::Equal);
    }

    #[test]
    fn compare_is_reflexive(a in sample_strategy(), bisections in 0usize..4) {
        let x = a.build();
        prop_assert_eq!(x.compare(&x), Ordering::Equal);
        let mut refined = x.clone();
        for _ in 0..bisections {
            refined = refined.bisect_range();
        }
        prop_assert_eq!(x.compare(&refined), Ordering::Equal);
        prop_assert_eq!(refined.compare(&x), Ordering::Equal);
        prop_assert!(x <= refined && !(x < refined));
    }

    #[test]
    fn compare_is_transitive(
        a in sample_strategy(),
        b in sample_strategy(),
        c in sample_strategy()
    ) {
        let (x, y, z) = (a.build(), b.build(), c.build());
        if x <= y && y <= z {
            prop_assert!(x <= z);
        }
        if x >= y && y >= z {
            prop_assert!(x >= z);
        }
    }

    #[test]
    fn compare_rational_is_consistent(
        a in sample_strategy(),
        n in -60i64..60,
        d in 1i64..8
    ) {
        let value = Ratio::new(BigInt::from(n), BigInt::from(d));
        let x = a.build();
        let expected = x.compare(&RealAlgebraicNumber::from(value.clone()));
        prop_assert_eq!(x.compare_rational(&value), expected);
        prop_assert_eq!(expected, a.oracle_cmp(&Sample::Rational(value)));
    }

    #[test]
    fn refine_at_preserves_value(a in sample_strategy(), n in -60i64..60, d in 1i64..8) {
        let at = Ratio::new(BigInt::from(n), BigInt::from(d));
        let x = a.build();
        let refined = x.refine_at(&at);
        prop_assert_eq!(refined.compare(&x), Ordering::Equal);
        prop_assert!(x.lower_bound() <= refined.lower_bound());
        prop_assert!(refined.upper_bound() <= x.upper_bound());
        if x.lower_bound() < &at && &at < x.upper_bound() {
            prop_assert!(
                refined.is_rational()
                    || refined.lower_bound() == &at
                    || refined.upper_bound() == &at
            );
        }
        let again = refined.refine_at(&at);
        prop_assert_eq!(again.interval(), refined.interval());
    }

    #[test]
    fn text_parts_round_trip(a in sample_strategy()) {
        let x = a.build();
        let (polynomial, lower_bound, upper_bound) = x.to_text_parts();
        let parsed = RealAlgebraicNumber::from_text_parts(&polynomial, &lower_bound, &upper_bound)
            .expect("text parts of a valid number parse");
        prop_assert_eq!(parsed.polynomial(), x.polynomial());
        prop_assert_eq!(parsed.interval(), x.interval());
        prop_assert_eq!(parsed.is_rational(), x.is_rational());
    }
}
