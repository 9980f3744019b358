// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Exact ordering of real algebraic numbers.
//!
//! A [`RealAlgebraicNumber`](algebraic_numbers::RealAlgebraicNumber) is a root of a
//! square-free rational polynomial together with an interval isolating that root.
//! Comparisons never round: they refine intervals, cancel common factors, and
//! bisect until the answer is certain.

pub mod algebraic_numbers;
pub mod polynomial;
pub mod prelude;
pub mod traits;
pub mod util;
