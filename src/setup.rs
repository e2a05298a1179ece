// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//
//! This pub(crate) module does setup for the possible value types.
//!
//! Link to [parent module](super)
// ----------------------------------------------------------------------------
//
// use
use std::sync::LazyLock;
use std::sync::RwLock;
use std::thread::LocalKey;
use std::cell::RefCell;
use crate::AD;
// ----------------------------------------------------------------------------
/// Set up the traits that a primitive float type needs as a value type.
///
/// * P : is f32 or f64
macro_rules! setup_primitive_type{ ($P:ident) => {
    crate::float_core::impl_float_core_for_primitive!($P);
    crate::hash::impl_value_type_hash!($P);
    crate::vec_ad::impl_to_index_for_primitive!($P);
} }
//
/// Set up taylorad to do calculations with value type V; see
/// [doc_generic_v](crate::doc_generic_v) .
///
/// This macro must be executed once for any type *V*  where `AD<V>` is
/// used. The taylorad package automatically executes this macro
/// for the following types: `f32` , `f64` , `AD<f32>` , `AD<f64>` .
macro_rules! setup_this_value_type{ ($V:ty) => {
    crate::tape::impl_this_thread_tape!($V);
    crate::ad::binary::impl_value_op_ad!($V);
    crate::ad::impl_ad_from_f32!($V);
    crate::discrete::impl_global_discrete_vec!($V);
    crate::op::info::impl_global_op_info_vec!($V);
} }
// ----------------------------------------------------------------------------
//
// primitive value types
setup_primitive_type!(f32);
setup_primitive_type!(f64);
//
setup_this_value_type!(f32);
setup_this_value_type!(f64);
crate::ad::impl_ad_from_f64!(f64);
//
// AD value types; i.e., tapes whose values are themselves recorded
setup_this_value_type!( AD<f32> );
setup_this_value_type!( AD<f64> );
crate::ad::impl_ad_from_f64!( AD<f64> );
