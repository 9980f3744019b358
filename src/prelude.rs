// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
pub use crate::{
    algebraic_numbers::{CompareConfig, CompareError, RealAlgebraicNumber, RealAlgebraicNumberError},
    polynomial::{Polynomial, PolynomialParseError},
    traits::{Derivative as _, ExactDiv as _, PolynomialEval as _, GCD as _},
};
pub use num_traits::{CheckedDiv as _, CheckedRem as _, One as _, Zero as _};
