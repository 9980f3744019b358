// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::polynomial::{Polynomial, PolynomialDivSupported};
use crate::traits::ExactDiv;
use num_traits::{CheckedDiv, CheckedRem, Zero};
use std::borrow::Borrow;
use std::convert::identity;
use std::mem;
use std::ops::{Div, DivAssign, Rem, RemAssign};

fn quotient_len(numerator_len: usize, denominator_len: usize) -> Option<usize> {
    debug_assert_ne!(denominator_len, 0);
    if numerator_len < denominator_len {
        None
    } else {
        Some(1 + numerator_len - denominator_len)
    }
}

impl<T: PolynomialDivSupported> Polynomial<T> {
    /// long division over a field; returns `None` when `rhs` is zero
    pub fn checked_div_rem(self, rhs: &Self) -> Option<(Self, Self)> {
        let divisor_last = rhs.highest_power_coefficient()?;
        let quotient_len = match quotient_len(self.len(), rhs.len()) {
            None => return Some((Zero::zero(), self)),
            Some(quotient_len) => quotient_len,
        };
        let mut remainder = self.coefficients;
        let mut quotient = vec![T::zero(); quotient_len];
        for quotient_index in (0..quotient_len).rev() {
            let remainder_last = remainder.pop().expect("remainder length already checked");
            let quotient_coefficient = remainder_last / divisor_last;
            for (divisor_index, divisor_coefficient) in
                rhs.coefficients[..rhs.len() - 1].iter().enumerate()
            {
                remainder[quotient_index + divisor_index] -=
                    &(quotient_coefficient.clone() * divisor_coefficient);
            }
            quotient[quotient_index] = quotient_coefficient;
        }
        Some((quotient.into(), remainder.into()))
    }
    pub fn div_rem(self, rhs: &Self) -> (Self, Self) {
        self.checked_div_rem(rhs)
            .expect("polynomial division by zero")
    }
}

impl<T: PolynomialDivSupported> CheckedDiv for Polynomial<T> {
    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        Some(self.clone().checked_div_rem(rhs)?.0)
    }
}

impl<T: PolynomialDivSupported> CheckedRem for Polynomial<T> {
    fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        Some(self.clone().checked_div_rem(rhs)?.1)
    }
}

impl<'a, T: PolynomialDivSupported> ExactDiv<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn checked_exact_div(self, rhs: &'a Polynomial<T>) -> Option<Polynomial<T>> {
        let (quotient, remainder) = self.checked_div_rem(rhs)?;
        if remainder.is_zero() {
            Some(quotient)
        } else {
            None
        }
    }
}

impl<T: PolynomialDivSupported> ExactDiv for Polynomial<T> {
    type Output = Polynomial<T>;
    fn checked_exact_div(self, rhs: Polynomial<T>) -> Option<Polynomial<T>> {
        self.checked_exact_div(&rhs)
    }
}

macro_rules! impl_div_rem {
    ($l:ty, $l_to_owned:expr, $r:ty) => {
        impl<T: PolynomialDivSupported> Div<$r> for $l {
            type Output = Polynomial<T>;
            fn div(self, rhs: $r) -> Polynomial<T> {
                $l_to_owned(self).div_rem(rhs.borrow()).0
            }
        }

        impl<T: PolynomialDivSupported> Rem<$r> for $l {
            type Output = Polynomial<T>;
            fn rem(self, rhs: $r) -> Polynomial<T> {
                $l_to_owned(self).div_rem(rhs.borrow()).1
            }
        }
    };
}

impl_div_rem!(Polynomial<T>, identity, Polynomial<T>);
impl_div_rem!(Polynomial<T>, identity, &'_ Polynomial<T>);
impl_div_rem!(&'_ Polynomial<T>, Clone::clone, Polynomial<T>);

impl<'a, 'b, T: PolynomialDivSupported> Div<&'a Polynomial<T>> for &'b Polynomial<T> {
    type Output = Polynomial<T>;
    fn div(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        self.clone().div_rem(rhs).0
    }
}

impl<'a, 'b, T: PolynomialDivSupported> Rem<&'a Polynomial<T>> for &'b Polynomial<T> {
    type Output = Polynomial<T>;
    fn rem(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        self.clone().div_rem(rhs).1
    }
}

macro_rules! impl_div_rem_eq {
    ($r:ty) => {
        impl<T: PolynomialDivSupported> DivAssign<$r> for Polynomial<T> {
            fn div_assign(&mut self, rhs: $r) {
                let lhs = mem::replace(self, Zero::zero());
                *self = lhs / rhs;
            }
        }

        impl<T: PolynomialDivSupported> RemAssign<$r> for Polynomial<T> {
            fn rem_assign(&mut self, rhs: $r) {
                let lhs = mem::replace(self, Zero::zero());
                *self = lhs % rhs;
            }
        }
    };
}

impl_div_rem_eq!(Polynomial<T>);
impl_div_rem_eq!(&'_ Polynomial<T>);
