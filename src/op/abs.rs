// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Evaluate the abs operator
//!
//! Link to [parent module](super)
//!
//! * arg\[0\]:  Variable index of the operand.
//!
//! z\[k\] = sign( x\[0\] ) * x\[k\] .
//! At x\[0\] equal zero the sign is zero, so the value and every
//! derivative coefficient are zero there.
// --------------------------------------------------------------------------
// use
//
use crate::IndexT;
use crate::float_core::FloatCore;
use crate::op::id::ABS_OP;
use crate::op::info::OpInfo;
use crate::tape::TapeRec;
use crate::taylor::Taylor;
// -------------------------------------------------------------------------
// abs_forward
/// see [ForwardOp](crate::op::info::ForwardOp)
fn abs_forward<V> (
    _rec   : &TapeRec<V>    ,
    p      : usize          ,
    zero   : bool           ,
    arg    : &[IndexT]      ,
    i_var  : usize          ,
    taylor : &mut Taylor<V> ,
) -> usize
where
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    V : Clone + FloatCore ,
{
    debug_assert_eq!( arg.len(), 1 );
    debug_assert!( (arg[0] as usize) < i_var );
    let (lower, res) = taylor.split_row_mut(i_var);
    let x    = lower.row( arg[0] as usize );
    let sign = x[0].sign();
    let k0   = if zero { 0 } else { p };
    for k in k0 ..= p {
        res[k] = &sign * &x[k];
    }
    0
}
// -------------------------------------------------------------------------
// abs_reverse
/// see [ReverseOp](crate::op::info::ReverseOp)
fn abs_reverse<V> (
    _rec    : &TapeRec<V>    ,
    d       : usize          ,
    arg     : &[IndexT]      ,
    i_var   : usize          ,
    taylor  : &Taylor<V>     ,
    partial : &mut Taylor<V> ,
)
where
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    V : Clone + FloatCore ,
{
    debug_assert_eq!( arg.len(), 1 );
    let sign = taylor.row( arg[0] as usize )[0].sign();
    let (mut lower, upper) = partial.split_row_mut(i_var);
    let pz = &upper[0 ..= d];
    let px = lower.row_mut( arg[0] as usize );
    for k in 0 ..= d {
        let term = &sign * &pz[k];
        px[k] += &term;
    }
}
// ---------------------------------------------------------------------------
// set_op_info
/// Set the operator information for the ABS_OP operator.
pub(crate) fn set_op_info<V>( op_info_vec : &mut Vec< OpInfo<V> > )
where
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    V             : Clone + FloatCore ,
{
    op_info_vec[ABS_OP as usize] = OpInfo{
        name    : "abs",
        forward : abs_forward::<V>,
        reverse : abs_reverse::<V>,
    };
}
