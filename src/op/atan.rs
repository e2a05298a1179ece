// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Evaluate the atan operator
//!
//! Link to [parent module](super)
//!
//! * arg\[0\]:  Variable index of the operand.
//!
//! The operator produces two variables: the result and the companion
//! u = 1 + x * x at the next variable index. From u * z' = x' :
//! ```text
//!     u[k] = sum over 0 <= j <= k of x[j] * x[k-j]             (k >= 1)
//!     z[k] = ( x[k]
//!            - (1/k) * sum over 0 < j < k of j * z[j] * u[k-j] ) / u[0]
//! ```
// --------------------------------------------------------------------------
// use
//
use crate::IndexT;
use crate::float_core::FloatCore;
use crate::op::id::ATAN_OP;
use crate::op::info::{
    OpInfo,
    order_ratio,
};
use crate::tape::TapeRec;
use crate::taylor::Taylor;
// -------------------------------------------------------------------------
// atan_forward
/// see [ForwardOp](crate::op::info::ForwardOp)
fn atan_forward<V> (
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
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    for<'a> V     : std::ops::SubAssign<&'a V> ,
    V : Clone + From<f32> + FloatCore ,
{
    debug_assert_eq!( arg.len(), 1 );
    debug_assert!( (arg[0] as usize) < i_var );
    let stride = taylor.stride();
    let (lower, upper)  = taylor.split_row_mut(i_var);
    let (z_row, rest)   = upper.split_at_mut(stride);
    let u_row           = &mut rest[0 .. stride];
    let x               = lower.row( arg[0] as usize );
    let k0              = if zero { 0 } else { p };
    for k in k0 ..= p {
        if k == 0 {
            u_row[0] = &V::one() + &(&x[0] * &x[0]);
            z_row[0] = x[0].atan();
        } else {
            // u[k]
            let mut sum = V::zero();
            for j in 0 ..= k {
                let term = &x[j] * &x[k - j];
                sum += &term;
            }
            u_row[k] = sum;
            //
            // z[k]
            let mut num = x[k].clone();
            for j in 1 .. k {
                let fac  = order_ratio::<V>(j, k);
                let term = &(&fac * &z_row[j]) * &u_row[k - j];
                num -= &term;
            }
            z_row[k] = &num / &u_row[0];
        }
    }
    0
}
// -------------------------------------------------------------------------
// atan_reverse
/// see [ReverseOp](crate::op::info::ReverseOp)
fn atan_reverse<V> (
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
    V : Clone + From<f32> + FloatCore ,
{
    debug_assert_eq!( arg.len(), 1 );
    let two     = &V::one() + &V::one();
    let x_index = arg[0] as usize;
    let x_row   = taylor.row( x_index );
    let z_row   = taylor.row( i_var );
    let u_row   = taylor.row( i_var + 1 );
    let stride  = partial.stride();
    let (mut lower, upper) = partial.split_row_mut(i_var);
    let (pz, rest)         = upper.split_at_mut(stride);
    let pu                 = &mut rest[0 .. stride];
    for k in (1 ..= d).rev() {
        //
        // through z[k]
        let pzk = &pz[k] / &u_row[0];
        {   let px = lower.row_mut( x_index );
            px[k] += &pzk;
        }
        for j in 1 .. k {
            let fac     = order_ratio::<V>(j, k);
            let fac_pzk = &fac * &pzk;
            let term    = &fac_pzk * &u_row[k - j];
            pz[j]      -= &term;
            let term    = &fac_pzk * &z_row[j];
            pu[k - j]  -= &term;
        }
        let term = &pzk * &z_row[k];
        pu[0]   -= &term;
        //
        // through u[k] = sum of x[j] * x[k-j]
        let two_puk = &two * &pu[k];
        for m in 0 ..= k {
            let term = &two_puk * &x_row[k - m];
            let px   = lower.row_mut( x_index );
            px[m]   += &term;
        }
    }
    // z[0] = atan( x[0] ) and u[0] = 1 + x[0] * x[0]
    let term = &pz[0] / &u_row[0];
    {   let px = lower.row_mut( x_index );
        px[0] += &term;
    }
    let term = &(&two * &pu[0]) * &x_row[0];
    let px   = lower.row_mut( x_index );
    px[0]   += &term;
}
// ---------------------------------------------------------------------------
// set_op_info
/// Set the operator information for the ATAN_OP operator.
pub(crate) fn set_op_info<V>( op_info_vec : &mut Vec< OpInfo<V> > )
where
    for<'a> &'a V : std::ops::Add<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    for<'a> V     : std::ops::SubAssign<&'a V> ,
    V             : Clone + From<f32> + FloatCore ,
{
    op_info_vec[ATAN_OP as usize] = OpInfo{
        name    : "atan",
        forward : atan_forward::<V>,
        reverse : atan_reverse::<V>,
    };
}
