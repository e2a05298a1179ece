// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//! This pub module defines the FloatCore trait
//!
//! Link to [parent module](super)
// ----------------------------------------------------------------------------
//
/// The FloatCore trait
///
/// This is the set of special values and elementary functions that the
/// Taylor coefficient kernels require of a value type; see
/// [doc_generic_v](crate::doc_generic_v) .
///
/// The `sign` function is -1, 0, +1 for negative, zero, positive arguments
/// (note that this maps zero to zero, unlike `f64::signum` ).
pub trait FloatCore {
    fn nan()  -> Self;
    fn zero() -> Self;
    fn one()  -> Self;
    //
    fn exp(&self)  -> Self;
    fn log(&self)  -> Self;
    fn sqrt(&self) -> Self;
    fn sin(&self)  -> Self;
    fn cos(&self)  -> Self;
    fn asin(&self) -> Self;
    fn acos(&self) -> Self;
    fn atan(&self) -> Self;
    fn abs(&self)  -> Self;
    fn sign(&self) -> Self;
}
//
// impl_float_core_for_primitive
/// Implements the FloatCore trait for a primitive float type
///
/// * P : is f32 or f64
macro_rules! impl_float_core_for_primitive{ ($P:ident) => {
    impl crate::float_core::FloatCore for $P {
        fn nan()  -> Self { $P::NAN }
        fn zero() -> Self { 0 as $P }
        fn one()  -> Self { 1 as $P }
        //
        fn exp(&self)  -> Self { $P::exp(*self) }
        fn log(&self)  -> Self { $P::ln(*self) }
        fn sqrt(&self) -> Self { $P::sqrt(*self) }
        fn sin(&self)  -> Self { $P::sin(*self) }
        fn cos(&self)  -> Self { $P::cos(*self) }
        fn asin(&self) -> Self { $P::asin(*self) }
        fn acos(&self) -> Self { $P::acos(*self) }
        fn atan(&self) -> Self { $P::atan(*self) }
        fn abs(&self)  -> Self { $P::abs(*self) }
        fn sign(&self) -> Self {
            if *self == (0 as $P) {
                0 as $P
            } else {
                $P::signum(*self)
            }
        }
    }
} }
pub(crate) use impl_float_core_for_primitive;
