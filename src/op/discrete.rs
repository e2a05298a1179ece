// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Evaluate the discrete function call operator
//!
//! Link to [parent module](super)
//!
//! * arg\[0\]:  Registry index of the discrete function.
//! * arg\[1\]:  Variable index of the operand.
//!
//! The result value is the function of the operand's zero order value
//! and all the higher order coefficients are zero,
//! the function being piecewise constant.
// --------------------------------------------------------------------------
// use
//
use crate::IndexT;
use crate::discrete::get_fn;
use crate::discrete::sealed::GlobalDiscreteVec;
use crate::float_core::FloatCore;
use crate::op::id::DIS_OP;
use crate::op::info::OpInfo;
use crate::op::misc::no_op_reverse;
use crate::tape::TapeRec;
use crate::taylor::Taylor;
// -------------------------------------------------------------------------
// dis_forward
/// see [ForwardOp](crate::op::info::ForwardOp)
fn dis_forward<V> (
    _rec   : &TapeRec<V>    ,
    p      : usize          ,
    zero   : bool           ,
    arg    : &[IndexT]      ,
    i_var  : usize          ,
    taylor : &mut Taylor<V> ,
) -> usize
where
    V : Clone + FloatCore + GlobalDiscreteVec ,
{
    debug_assert_eq!( arg.len(), 2 );
    debug_assert!( (arg[1] as usize) < i_var );
    let (lower, res) = taylor.split_row_mut(i_var);
    let x  = lower.row( arg[1] as usize );
    let k0 = if zero { 0 } else { p };
    for k in k0 ..= p {
        if k == 0 {
            let fun = get_fn::<V>( arg[0] as usize );
            res[0]  = fun( &x[0] );
        } else {
            res[k] = V::zero();
        }
    }
    0
}
// ---------------------------------------------------------------------------
// set_op_info
/// Set the operator information for the DIS_OP operator.
pub(crate) fn set_op_info<V>( op_info_vec : &mut Vec< OpInfo<V> > )
where
    V : Clone + FloatCore + GlobalDiscreteVec ,
{
    op_info_vec[DIS_OP as usize] = OpInfo{
        name    : "dis",
        forward : dis_forward::<V>,
        reverse : no_op_reverse::<V>,
    };
}
