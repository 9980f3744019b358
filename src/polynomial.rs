// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::traits::{Derivative, GCD, MakeCoefficient, PolynomialEval};
use crate::util::Sign;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{NumAssign, One, Zero};
use std::fmt;
use std::iter::FromIterator;
use std::ops::Deref;
use std::ops::{AddAssign, Div, Mul, Neg, SubAssign};
use std::slice;
use std::vec;

mod add_sub;
mod div_rem;
mod gcd;
mod mul;
mod parse;

pub use self::parse::{PolynomialParseError, MAX_PARSED_DEGREE};

/// coefficient types usable in a `Polynomial`
pub trait PolynomialCoefficient:
    Clone
    + Zero
    + One
    + PartialOrd
    + Neg<Output = Self>
    + MakeCoefficient<usize>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> Mul<&'a Self, Output = Self>
{
}

impl<T> PolynomialCoefficient for T where
    T: Clone
        + Zero
        + One
        + PartialOrd
        + Neg<Output = T>
        + MakeCoefficient<usize>
        + for<'a> AddAssign<&'a T>
        + for<'a> SubAssign<&'a T>
        + for<'a> Mul<&'a T, Output = T>
{
}

/// coefficient types that form a field, so polynomial division never needs pseudo-division
pub trait PolynomialDivSupported:
    PolynomialCoefficient + for<'a> Div<&'a Self, Output = Self>
{
}

impl<T> PolynomialDivSupported for Ratio<T> where
    T: Clone + Integer + NumAssign + Neg<Output = T> + MakeCoefficient<usize>
{
}

/// A single-variable polynomial.
///
/// the term at index `n` is `self.coefficients()[n] * pow(x, n)`
///
/// # Invariants
///
/// `self.coefficients().last()` is either `None` or `Some(v)` where `!v.is_zero()`
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Polynomial<T> {
    coefficients: Vec<T>,
}

impl<T> Default for Polynomial<T> {
    fn default() -> Self {
        Self {
            coefficients: Vec::default(),
        }
    }
}

impl<T: Zero> From<Vec<T>> for Polynomial<T> {
    fn from(coefficients: Vec<T>) -> Self {
        let mut retval = Self { coefficients };
        retval.remove_extra_zeros();
        retval
    }
}

impl<T: Zero> FromIterator<T> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<T>>().into()
    }
}

impl<T> Polynomial<T> {
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.coefficients.iter()
    }
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
    /// returns `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }
    pub fn highest_power_coefficient(&self) -> Option<&T> {
        self.coefficients.last()
    }
    pub fn coefficient(&self, power: usize) -> T
    where
        T: Zero + Clone,
    {
        self.coefficients
            .get(power)
            .cloned()
            .unwrap_or_else(Zero::zero)
    }
    fn remove_extra_zeros(&mut self)
    where
        T: Zero,
    {
        while let Some(tail) = self.coefficients.last() {
            if tail.is_zero() {
                self.coefficients.pop();
            } else {
                break;
            }
        }
    }
    pub fn sign_at(&self, x: &T) -> Option<Sign>
    where
        T: PolynomialCoefficient,
    {
        Sign::new(&PolynomialEval::eval(self, x))
    }
}

impl<T: PolynomialDivSupported> Polynomial<T> {
    /// returns `self` divided by its highest power coefficient; zero stays zero
    pub fn into_monic(self) -> Self {
        let divisor = match self.highest_power_coefficient() {
            Some(v) if !v.is_one() => v.clone(),
            _ => return self,
        };
        self.into_iter()
            .map(|coefficient| coefficient / &divisor)
            .collect()
    }
    /// a polynomial is square-free when it is coprime with its derivative
    pub fn is_square_free(&self) -> bool {
        if self.is_zero() {
            return false;
        }
        self.gcd(&self.derivative()).degree() == Some(0)
    }
    pub fn to_sturm_sequence(&self) -> SturmSequence<T> {
        self.clone().into_sturm_sequence()
    }
    pub fn into_sturm_sequence(self) -> SturmSequence<T> {
        if self.is_zero() {
            return SturmSequence(vec![]);
        }
        let mut next = (&self).derivative();
        let mut sturm_sequence = Vec::with_capacity(self.len());
        sturm_sequence.push(self);
        while !next.is_zero() {
            let remainder = match sturm_sequence.last() {
                Some(last) => -(last % &next),
                None => unreachable!(),
            };
            sturm_sequence.push(next);
            next = remainder;
        }
        SturmSequence(sturm_sequence)
    }
}

impl<'a, T: PolynomialCoefficient> PolynomialEval<T> for &'a Polynomial<T> {
    fn eval(self, x: &T) -> T {
        let mut iter = self.iter().rev();
        if let Some(last) = iter.next() {
            let mut retval = last.clone();
            for coefficient in iter {
                retval = retval * x;
                retval += coefficient;
            }
            retval
        } else {
            T::zero()
        }
    }
}

impl<T: PolynomialCoefficient> PolynomialEval<T> for Polynomial<T> {
    fn eval(self, x: &T) -> T {
        PolynomialEval::eval(&self, x)
    }
}

impl<T> IntoIterator for Polynomial<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.coefficients.is_empty() {
            write!(f, "0")
        } else {
            for (power, coefficient) in self.coefficients.iter().enumerate() {
                match power {
                    0 => write!(f, "{}", coefficient)?,
                    1 => write!(f, " + {}*x", coefficient)?,
                    _ => write!(f, " + {}*x^{}", coefficient, power)?,
                }
            }
            Ok(())
        }
    }
}

impl<'a, T: PolynomialCoefficient> Derivative for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn derivative(self) -> Polynomial<T> {
        let mut iter = self.iter().enumerate();
        if iter.next().is_none() {
            return Default::default();
        }
        iter.map(|(power, coefficient)| coefficient.clone() * &T::make_coefficient(power))
            .collect()
    }
}

impl<T: PolynomialCoefficient> Derivative for Polynomial<T> {
    type Output = Polynomial<T>;
    fn derivative(self) -> Polynomial<T> {
        (&self).derivative()
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct SturmSequence<T>(Vec<Polynomial<T>>);

impl<T: PolynomialCoefficient> SturmSequence<T> {
    fn count_sign_changes<EvalFn: FnMut(&Polynomial<T>) -> Option<Sign>>(
        &self,
        mut eval_fn: EvalFn,
    ) -> usize {
        let mut sign_change_count = 0;
        let mut last_sign = None;
        for polynomial in &self.0 {
            if let Some(sign) = eval_fn(polynomial) {
                if last_sign.map_or(false, |last_sign| last_sign != sign) {
                    sign_change_count += 1;
                }
                last_sign = Some(sign);
            }
        }
        sign_change_count
    }
    pub fn sign_changes_at(&self, x: &T) -> usize {
        self.count_sign_changes(|polynomial| polynomial.sign_at(x))
    }
    /// number of distinct real roots in `(lower_bound, upper_bound]`
    pub fn distinct_real_root_count_in(&self, lower_bound: &T, upper_bound: &T) -> usize {
        self.sign_changes_at(lower_bound)
            .saturating_sub(self.sign_changes_at(upper_bound))
    }
}

impl<T> Deref for SturmSequence<T> {
    type Target = [Polynomial<T>];
    fn deref(&self) -> &[Polynomial<T>] {
        &self.0
    }
}
