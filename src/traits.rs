// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::Ratio;

pub trait GCD<Rhs = Self> {
    type Output;
    fn gcd(&self, rhs: &Rhs) -> Self::Output;
}

/// division that is known to leave no remainder
pub trait ExactDiv<Rhs = Self>: Sized {
    type Output;
    fn checked_exact_div(self, rhs: Rhs) -> Option<Self::Output>;
    fn exact_div(self, rhs: Rhs) -> Self::Output {
        self.checked_exact_div(rhs)
            .expect("exact division had a nonzero remainder")
    }
}

pub trait PolynomialEval<T> {
    fn eval(self, x: &T) -> T;
}

pub trait Derivative {
    type Output;
    fn derivative(self) -> Self::Output;
}

/// converts a term's power into a coefficient, used for derivatives
pub trait MakeCoefficient<T> {
    fn make_coefficient(v: T) -> Self;
}

macro_rules! impl_make_coefficient_for_primitive {
    ($($t:ident),*) => {
        $(
            impl MakeCoefficient<usize> for $t {
                fn make_coefficient(v: usize) -> Self {
                    v as $t
                }
            }
        )*
    };
}

impl_make_coefficient_for_primitive!(i32, i64, i128, isize);

impl MakeCoefficient<usize> for BigInt {
    fn make_coefficient(v: usize) -> Self {
        v.into()
    }
}

impl<T: MakeCoefficient<usize> + Clone + Integer> MakeCoefficient<usize> for Ratio<T> {
    fn make_coefficient(v: usize) -> Self {
        Ratio::from_integer(T::make_coefficient(v))
    }
}
