// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Numerical utilities used by the tests.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
use crate::float_core::FloatCore;
// ---------------------------------------------------------------------------
// near_equal
/// Check that two values are nearly equal:
///
/// ```text
///     | x - y | <= a + r * ( |x| + |y| )
/// ```
///
/// * r : the relative error bound.
/// * a : the absolute error bound.
///
/// # Example
/// ```
/// use taylorad::near_equal;
/// let x = 3.000000001f64;
/// let y = 3.0f64;
/// assert!(   near_equal(&x, &y, &1e-8, &0.0) );
/// assert!( ! near_equal(&x, &y, &1e-10, &0.0) );
/// ```
pub fn near_equal<V>(x : &V, y : &V, r : &V, a : &V) -> bool
where
    for<'b> &'b V : std::ops::Add<&'b V, Output = V> ,
    for<'b> &'b V : std::ops::Sub<&'b V, Output = V> ,
    for<'b> &'b V : std::ops::Mul<&'b V, Output = V> ,
    V : FloatCore + PartialOrd ,
{
    let diff  = (x - y).abs();
    let scale = &x.abs() + &y.abs();
    let bound = a + &(r * &scale);
    diff <= bound
}
