// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Evaluate the exp operator
//!
//! Link to [parent module](super)
//!
//! * arg\[0\]:  Variable index of the operand.
//!
//! From z' = z * x' :
//! z\[k\] = sum over 1 <= j <= k of (j/k) * x\[j\] * z\[k-j\] .
// --------------------------------------------------------------------------
// use
//
use crate::IndexT;
use crate::float_core::FloatCore;
use crate::op::id::EXP_OP;
use crate::op::info::{
    OpInfo,
    order_ratio,
};
use crate::tape::TapeRec;
use crate::taylor::Taylor;
// -------------------------------------------------------------------------
// exp_forward
/// see [ForwardOp](crate::op::info::ForwardOp)
fn exp_forward<V> (
    _rec   : &TapeRec<V>    ,
    p      : usize          ,
    zero   : bool           ,
    arg    : &[IndexT]      ,
    i_var  : usize          ,
    taylor : &mut Taylor<V> ,
) -> usize
where
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    V : Clone + From<f32> + FloatCore ,
{
    debug_assert_eq!( arg.len(), 1 );
    debug_assert!( (arg[0] as usize) < i_var );
    let (lower, res) = taylor.split_row_mut(i_var);
    let x  = lower.row( arg[0] as usize );
    let k0 = if zero { 0 } else { p };
    for k in k0 ..= p {
        if k == 0 {
            res[0] = x[0].exp();
        } else {
            let mut sum = V::zero();
            for j in 1 ..= k {
                let fac  = order_ratio::<V>(j, k);
                let term = &(&fac * &x[j]) * &res[k - j];
                sum += &term;
            }
            res[k] = sum;
        }
    }
    0
}
// -------------------------------------------------------------------------
// exp_reverse
/// see [ReverseOp](crate::op::info::ReverseOp)
fn exp_reverse<V> (
    _rec    : &TapeRec<V>    ,
    d       : usize          ,
    arg     : &[IndexT]      ,
    i_var   : usize          ,
    taylor  : &Taylor<V>     ,
    partial : &mut Taylor<V> ,
)
where
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    V : Clone + From<f32> ,
{
    debug_assert_eq!( arg.len(), 1 );
    let x_row = taylor.row( arg[0] as usize );
    let z_row = taylor.row( i_var );
    let (mut lower, upper) = partial.split_row_mut(i_var);
    let pz = &mut upper[0 ..= d];
    for k in (1 ..= d).rev() {
        for j in 1 ..= k {
            let fac    = order_ratio::<V>(j, k);
            let fac_pz = &fac * &pz[k];
            let term   = &fac_pz * &z_row[k - j];
            let px     = lower.row_mut( arg[0] as usize );
            px[j]     += &term;
            let term   = &fac_pz * &x_row[j];
            pz[k - j] += &term;
        }
    }
    // z[0] = exp( x[0] )
    let term = &pz[0] * &z_row[0];
    let px   = lower.row_mut( arg[0] as usize );
    px[0]   += &term;
}
// ---------------------------------------------------------------------------
// set_op_info
/// Set the operator information for the EXP_OP operator.
pub(crate) fn set_op_info<V>( op_info_vec : &mut Vec< OpInfo<V> > )
where
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    V             : Clone + From<f32> + FloatCore ,
{
    op_info_vec[EXP_OP as usize] = OpInfo{
        name    : "exp",
        forward : exp_forward::<V>,
        reverse : exp_reverse::<V>,
    };
}
