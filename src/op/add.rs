// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Evaluate the Add operators
//!
//! Link to [parent module](super)
//!
//! * V : see [doc_generic_v](crate::doc_generic_v)
//!
//! * [op::id](crate::op::id)
//!     * ADD_PV_OP : parameter + variable
//!     * ADD_VP_OP : variable + parameter
//!     * ADD_VV_OP : variable + variable
//!
//! * arg
//!     * arg\[0\]:  Variable or parameter index of left operand.
//!     * arg\[1\]:  Variable or parameter index of right operand.
// --------------------------------------------------------------------------
// use
//
use crate::IndexT;
use crate::float_core::FloatCore;
use crate::op::binary;
use crate::op::id::{
    ADD_PV_OP,
    ADD_VP_OP,
    ADD_VV_OP,
};
use crate::op::info::OpInfo;
use crate::tape::TapeRec;
use crate::taylor::Taylor;
// -------------------------------------------------------------------------
// add_pv_forward, add_vp_forward, add_vv_forward
// add_pv_reverse, add_vp_reverse, add_vv_reverse
binary::linear_binary_op!(Add, +, +=);
// ---------------------------------------------------------------------------
// set_op_info
/// Set the operator information for all the Add operators.
///
/// * op_info_vec :
/// The map from [op::id](crate::op::id) to operator information.
/// The map results for ADD_PV_OP, ADD_VP_OP, and ADD_VV_OP are set.
pub(crate) fn set_op_info<V>( op_info_vec : &mut Vec< OpInfo<V> > )
where
    for<'a> &'a V : std::ops::Add<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    V             : Clone + FloatCore ,
{
    op_info_vec[ADD_PV_OP as usize] = OpInfo{
        name    : "add_pv",
        forward : add_pv_forward::<V>,
        reverse : add_pv_reverse::<V>,
    };
    op_info_vec[ADD_VP_OP as usize] = OpInfo{
        name    : "add_vp",
        forward : add_vp_forward::<V>,
        reverse : add_vp_reverse::<V>,
    };
    op_info_vec[ADD_VV_OP as usize] = OpInfo{
        name    : "add_vv",
        forward : add_vv_forward::<V>,
        reverse : add_vv_reverse::<V>,
    };
}
