// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//
//! taylorad records the floating point operations that evaluate a function
//! as an operation sequence on a tape. The tape is replayed forward,
//! propagating Taylor coefficients of any order, and backward, propagating
//! adjoints, to compute derivatives of the function.
//!
//! # Example
//! ```
//! use taylorad::{start_recording, stop_recording};
//!
//! // record f(x) = x[0] * x[1]
//! let x          = vec![ 3f64, 4f64 ];
//! let ax         = start_recording(x);
//! let ay         = vec![ &ax[0] * &ax[1] ];
//! let mut f      = stop_recording(ay);
//!
//! // evaluate f and f' at x = (5, 6)
//! let y          = f.forward(0, vec![ 5f64, 6f64 ] );
//! assert_eq!( y[0], 30f64 );
//! let dy         = f.forward(1, vec![ 1f64, 0f64 ] );
//! assert_eq!( dy[0], 6f64 );
//! ```
// ---------------------------------------------------------------------------
// sub-modules
pub mod ad;
pub mod discrete;
pub mod float_core;
pub mod fun;
pub(crate) mod hash;
pub mod ode;
pub mod op;
pub(crate) mod setup;
pub mod tape;
pub(crate) mod taylor;
pub mod utility;
pub mod vec_ad;
// ---------------------------------------------------------------------------
// use
//
pub use crate::ad::{
    AD,
    ad_from_value,
    ad_from_vector,
    ad_to_vector,
};
pub use crate::ad::cond_exp::{
    cond_exp,
    cond_exp_eq,
    cond_exp_le,
    cond_exp_lt,
};
pub use crate::ad::print::print_for;
pub use crate::discrete::{
    discrete,
    discrete_register,
};
pub use crate::float_core::FloatCore;
pub use crate::fun::ADFun;
pub use crate::ode::runge45;
pub use crate::tape::{
    IndexT,
    abandon_recording,
    start_recording,
    stop_recording,
};
pub use crate::utility::near_equal;
pub use crate::vec_ad::ADVec;
// ---------------------------------------------------------------------------
/// Documentation for the taylorad generic type parameter V.
///
/// The generic parameter *V* , in `AD` < *V* > and other generic types ,
/// is the type used for calculating values.
/// It does not have dependency information that represents
/// how each value is related to the domain variables (independent variables).
/// The crate sets itself up for the following value types:
/// `f32` , `f64` , `AD<f32>` , `AD<f64>` ;
/// the last two enable recording tapes whose values are themselves recorded,
/// which is how derivatives of derivatives are computed.
pub fn doc_generic_v() {}
