// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Evaluate the Sub operators
//!
//! Link to [parent module](super)
//!
//! * V : see [doc_generic_v](crate::doc_generic_v)
//!
//! * [op::id](crate::op::id)
//!     * SUB_PV_OP : parameter - variable
//!     * SUB_VP_OP : variable - parameter
//!     * SUB_VV_OP : variable - variable
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
    SUB_PV_OP,
    SUB_VP_OP,
    SUB_VV_OP,
};
use crate::op::info::OpInfo;
use crate::tape::TapeRec;
use crate::taylor::Taylor;
// -------------------------------------------------------------------------
// sub_pv_forward, sub_vp_forward, sub_vv_forward
// sub_pv_reverse, sub_vp_reverse, sub_vv_reverse
binary::linear_binary_op!(Sub, -, -=);
// ---------------------------------------------------------------------------
// set_op_info
/// Set the operator information for all the Sub operators.
///
/// * op_info_vec :
/// The map from [op::id](crate::op::id) to operator information.
/// The map results for SUB_PV_OP, SUB_VP_OP, and SUB_VV_OP are set.
pub(crate) fn set_op_info<V>( op_info_vec : &mut Vec< OpInfo<V> > )
where
    for<'a> &'a V : std::ops::Sub<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    for<'a> V     : std::ops::SubAssign<&'a V> ,
    V             : Clone + FloatCore ,
{
    op_info_vec[SUB_PV_OP as usize] = OpInfo{
        name    : "sub_pv",
        forward : sub_pv_forward::<V>,
        reverse : sub_pv_reverse::<V>,
    };
    op_info_vec[SUB_VP_OP as usize] = OpInfo{
        name    : "sub_vp",
        forward : sub_vp_forward::<V>,
        reverse : sub_vp_reverse::<V>,
    };
    op_info_vec[SUB_VV_OP as usize] = OpInfo{
        name    : "sub_vv",
        forward : sub_vv_forward::<V>,
        reverse : sub_vv_reverse::<V>,
    };
}
