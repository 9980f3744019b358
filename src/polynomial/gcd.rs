// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::polynomial::{Polynomial, PolynomialDivSupported};
use crate::traits::GCD;
use num_traits::Zero;
use std::mem;

impl<T: PolynomialDivSupported> GCD for Polynomial<T> {
    type Output = Self;
    /// returns the monic greatest common divisor, or zero when both inputs are zero
    fn gcd(&self, rhs: &Self) -> Self {
        let mut lhs = self.clone();
        let mut rhs = rhs.clone();
        if lhs.len() < rhs.len() {
            mem::swap(&mut lhs, &mut rhs);
        }
        // now lhs.len() >= rhs.len()
        while !rhs.is_zero() {
            let remainder = lhs % &rhs;
            lhs = mem::replace(&mut rhs, remainder);
        }
        lhs.into_monic()
    }
}
