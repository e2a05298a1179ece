// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Evaluate the log operator
//!
//! Link to [parent module](super)
//!
//! * arg\[0\]:  Variable index of the operand.
//!
//! Inverting x = exp(z) :
//! z\[k\] = ( x\[k\] - sum over 1 <= j < k of (j/k) * z\[j\] * x\[k-j\] )
//! / x\[0\] .
// --------------------------------------------------------------------------
// use
//
use crate::IndexT;
use crate::float_core::FloatCore;
use crate::op::id::LOG_OP;
use crate::op::info::{
    OpInfo,
    order_ratio,
};
use crate::tape::TapeRec;
use crate::taylor::Taylor;
// -------------------------------------------------------------------------
// log_forward
/// see [ForwardOp](crate::op::info::ForwardOp)
fn log_forward<V> (
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
    for<'a> V     : std::ops::SubAssign<&'a V> ,
    V : Clone + From<f32> + FloatCore ,
{
    debug_assert_eq!( arg.len(), 1 );
    debug_assert!( (arg[0] as usize) < i_var );
    let (lower, res) = taylor.split_row_mut(i_var);
    let x  = lower.row( arg[0] as usize );
    let k0 = if zero { 0 } else { p };
    for k in k0 ..= p {
        if k == 0 {
            res[0] = x[0].log();
        } else {
            let mut num = x[k].clone();
            for j in 1 .. k {
                let fac  = order_ratio::<V>(j, k);
                let term = &(&fac * &res[j]) * &x[k - j];
                num -= &term;
            }
            res[k] = &num / &x[0];
        }
    }
    0
}
// -------------------------------------------------------------------------
// log_reverse
/// see [ReverseOp](crate::op::info::ReverseOp)
fn log_reverse<V> (
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
    for<'a> V     : std::ops::SubAssign<&'a V> ,
    V : Clone + From<f32> ,
{
    debug_assert_eq!( arg.len(), 1 );
    let x_row = taylor.row( arg[0] as usize );
    let z_row = taylor.row( i_var );
    let (mut lower, upper) = partial.split_row_mut(i_var);
    let pz = &mut upper[0 ..= d];
    for k in (1 ..= d).rev() {
        let pzk = &pz[k] / &x_row[0];
        {   let px = lower.row_mut( arg[0] as usize );
            px[k] += &pzk;
        }
        for j in 1 .. k {
            let fac     = order_ratio::<V>(j, k);
            let fac_pzk = &fac * &pzk;
            let term    = &fac_pzk * &x_row[k - j];
            pz[j]      -= &term;
            let term    = &fac_pzk * &z_row[j];
            let px      = lower.row_mut( arg[0] as usize );
            px[k - j]  -= &term;
        }
        let term = &pzk * &z_row[k];
        let px   = lower.row_mut( arg[0] as usize );
        px[0]   -= &term;
    }
    // z[0] = log( x[0] )
    let term = &pz[0] / &x_row[0];
    let px   = lower.row_mut( arg[0] as usize );
    px[0]   += &term;
}
// ---------------------------------------------------------------------------
// set_op_info
/// Set the operator information for the LOG_OP operator.
pub(crate) fn set_op_info<V>( op_info_vec : &mut Vec< OpInfo<V> > )
where
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    for<'a> V     : std::ops::SubAssign<&'a V> ,
    V             : Clone + From<f32> + FloatCore ,
{
    op_info_vec[LOG_OP as usize] = OpInfo{
        name    : "log",
        forward : log_forward::<V>,
        reverse : log_reverse::<V>,
    };
}
