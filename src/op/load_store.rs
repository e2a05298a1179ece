// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Evaluate the taped vector store and load operators
//!
//! Link to [parent module](super)
//!
//! * arg\[0\]:  Index identifying the taped vector (diagnostic only).
//! * arg\[1\]:  Variable or parameter index of the slot index operand.
//! * arg\[2\]:  For a store, the variable or parameter index of the value
//!   being stored; for a load, the variable index of the store result
//!   for the slot that was read (resolved while recording, the buffer
//!   being write once).
//!
//! A store's result variable mirrors the stored value, so loads and the
//! reverse sweep only ever deal with variables. The slot index operand
//! is kept on the tape so the record stays a faithful account of the
//! recorded computation; replay does not re-resolve the lookup.
// --------------------------------------------------------------------------
// use
//
use crate::IndexT;
use crate::float_core::FloatCore;
use crate::op::id::{
    LD_P_OP,
    LD_V_OP,
    ST_PP_OP,
    ST_PV_OP,
    ST_VP_OP,
    ST_VV_OP,
};
use crate::op::info::OpInfo;
use crate::op::misc::no_op_reverse;
use crate::tape::TapeRec;
use crate::taylor::Taylor;
// -------------------------------------------------------------------------
// store_par_forward
/// forward when the stored value is the parameter arg\[2\];
/// see [ForwardOp](crate::op::info::ForwardOp)
fn store_par_forward<V> (
    rec    : &TapeRec<V>    ,
    p      : usize          ,
    zero   : bool           ,
    arg    : &[IndexT]      ,
    i_var  : usize          ,
    taylor : &mut Taylor<V> ,
) -> usize
where
    V : Clone + FloatCore ,
{
    debug_assert_eq!( arg.len(), 3 );
    let (_lower, res) = taylor.split_row_mut(i_var);
    let k0 = if zero { 0 } else { p };
    for k in k0 ..= p {
        if k == 0 {
            res[0] = rec.get_par( arg[2] as usize ).clone();
        } else {
            res[k] = V::zero();
        }
    }
    0
}
//
// copy_var_forward
/// forward when the result mirrors the variable arg\[2\]
/// (a store of a variable, or any load);
/// see [ForwardOp](crate::op::info::ForwardOp)
fn copy_var_forward<V> (
    _rec   : &TapeRec<V>    ,
    p      : usize          ,
    zero   : bool           ,
    arg    : &[IndexT]      ,
    i_var  : usize          ,
    taylor : &mut Taylor<V> ,
) -> usize
where
    V : Clone ,
{
    debug_assert_eq!( arg.len(), 3 );
    debug_assert!( (arg[2] as usize) < i_var );
    let (lower, res) = taylor.split_row_mut(i_var);
    let y  = lower.row( arg[2] as usize );
    let k0 = if zero { 0 } else { p };
    for k in k0 ..= p {
        res[k] = y[k].clone();
    }
    0
}
// -------------------------------------------------------------------------
// copy_var_reverse
/// reverse for [copy_var_forward] : the result adjoint flows to the
/// mirrored variable; see [ReverseOp](crate::op::info::ReverseOp)
fn copy_var_reverse<V> (
    _rec    : &TapeRec<V>    ,
    d       : usize          ,
    arg     : &[IndexT]      ,
    i_var   : usize          ,
    _taylor : &Taylor<V>     ,
    partial : &mut Taylor<V> ,
)
where
    for<'a> V : std::ops::AddAssign<&'a V> ,
    V : Clone ,
{
    debug_assert_eq!( arg.len(), 3 );
    let (mut lower, upper) = partial.split_row_mut(i_var);
    let pz = &upper[0 ..= d];
    let py = lower.row_mut( arg[2] as usize );
    for k in 0 ..= d {
        py[k] += &pz[k];
    }
}
// ---------------------------------------------------------------------------
// set_op_info
/// Set the operator information for the store and load operators.
pub(crate) fn set_op_info<V>( op_info_vec : &mut Vec< OpInfo<V> > )
where
    for<'a> V : std::ops::AddAssign<&'a V> ,
    V         : Clone + FloatCore ,
{
    op_info_vec[ST_PP_OP as usize] = OpInfo{
        name    : "st_pp",
        forward : store_par_forward::<V>,
        reverse : no_op_reverse::<V>,
    };
    op_info_vec[ST_PV_OP as usize] = OpInfo{
        name    : "st_pv",
        forward : copy_var_forward::<V>,
        reverse : copy_var_reverse::<V>,
    };
    op_info_vec[ST_VP_OP as usize] = OpInfo{
        name    : "st_vp",
        forward : store_par_forward::<V>,
        reverse : no_op_reverse::<V>,
    };
    op_info_vec[ST_VV_OP as usize] = OpInfo{
        name    : "st_vv",
        forward : copy_var_forward::<V>,
        reverse : copy_var_reverse::<V>,
    };
    op_info_vec[LD_P_OP as usize] = OpInfo{
        name    : "ld_p",
        forward : copy_var_forward::<V>,
        reverse : copy_var_reverse::<V>,
    };
    op_info_vec[LD_V_OP as usize] = OpInfo{
        name    : "ld_v",
        forward : copy_var_forward::<V>,
        reverse : copy_var_reverse::<V>,
    };
}
