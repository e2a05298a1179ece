// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Evaluate the sqrt operator
//!
//! Link to [parent module](super)
//!
//! * arg\[0\]:  Variable index of the operand.
//!
//! From z * z = x :
//! z\[k\] = ( x\[k\] - sum over 1 <= j < k of z\[j\] * z\[k-j\] )
//! / ( 2 * z\[0\] ) .
// --------------------------------------------------------------------------
// use
//
use crate::IndexT;
use crate::float_core::FloatCore;
use crate::op::id::SQRT_OP;
use crate::op::info::OpInfo;
use crate::tape::TapeRec;
use crate::taylor::Taylor;
// -------------------------------------------------------------------------
// sqrt_forward
/// see [ForwardOp](crate::op::info::ForwardOp)
fn sqrt_forward<V> (
    _rec   : &TapeRec<V>    ,
    p      : usize          ,
    zero   : bool           ,
    arg    : &[IndexT]      ,
    i_var  : usize          ,
    taylor : &mut Taylor<V> ,
) -> usize
where
    for<'a> &'a V : std::ops::Add<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    for<'a> V     : std::ops::SubAssign<&'a V> ,
    V : Clone + FloatCore ,
{
    debug_assert_eq!( arg.len(), 1 );
    debug_assert!( (arg[0] as usize) < i_var );
    let two          = &V::one() + &V::one();
    let (lower, res) = taylor.split_row_mut(i_var);
    let x  = lower.row( arg[0] as usize );
    let k0 = if zero { 0 } else { p };
    for k in k0 ..= p {
        if k == 0 {
            res[0] = x[0].sqrt();
        } else {
            let mut num = x[k].clone();
            for j in 1 .. k {
                let term = &res[j] * &res[k - j];
                num -= &term;
            }
            res[k] = &num / &(&two * &res[0]);
        }
    }
    0
}
// -------------------------------------------------------------------------
// sqrt_reverse
/// see [ReverseOp](crate::op::info::ReverseOp)
fn sqrt_reverse<V> (
    _rec    : &TapeRec<V>    ,
    d       : usize          ,
    arg     : &[IndexT]      ,
    i_var   : usize          ,
    taylor  : &Taylor<V>     ,
    partial : &mut Taylor<V> ,
)
where
    for<'a> &'a V : std::ops::Add<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    for<'a> V     : std::ops::SubAssign<&'a V> ,
    V : Clone + FloatCore ,
{
    debug_assert_eq!( arg.len(), 1 );
    let two   = &V::one() + &V::one();
    let z_row = taylor.row( i_var );
    let (mut lower, upper) = partial.split_row_mut(i_var);
    let pz = &mut upper[0 ..= d];
    for k in (1 ..= d).rev() {
        let pzk = &pz[k] / &(&two * &z_row[0]);
        {   let px = lower.row_mut( arg[0] as usize );
            px[k] += &pzk;
        }
        let two_pzk = &two * &pzk;
        for j in 1 .. k {
            let term = &two_pzk * &z_row[k - j];
            pz[j]   -= &term;
        }
        let term = &two_pzk * &z_row[k];
        pz[0]   -= &term;
    }
    // z[0] = sqrt( x[0] )
    let term = &pz[0] / &(&two * &z_row[0]);
    let px   = lower.row_mut( arg[0] as usize );
    px[0]   += &term;
}
// ---------------------------------------------------------------------------
// set_op_info
/// Set the operator information for the SQRT_OP operator.
pub(crate) fn set_op_info<V>( op_info_vec : &mut Vec< OpInfo<V> > )
where
    for<'a> &'a V : std::ops::Add<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    for<'a> V     : std::ops::SubAssign<&'a V> ,
    V             : Clone + FloatCore ,
{
    op_info_vec[SQRT_OP as usize] = OpInfo{
        name    : "sqrt",
        forward : sqrt_forward::<V>,
        reverse : sqrt_reverse::<V>,
    };
}
