// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Evaluate the sin and cos operators
//!
//! Link to [parent module](super)
//!
//! * arg\[0\]:  Variable index of the operand.
//!
//! Sine and cosine are computed in pairs: each operator produces two
//! variables, the result and its companion at the next variable index
//! (cos for SIN_OP, sin for COS_OP). The coupled recurrences are
//! s\[k\] =   sum over 1 <= j <= k of (j/k) * x\[j\] * c\[k-j\]
//! c\[k\] = - sum over 1 <= j <= k of (j/k) * x\[j\] * s\[k-j\] .
// --------------------------------------------------------------------------
// use
//
use crate::IndexT;
use crate::float_core::FloatCore;
use crate::op::id::{
    COS_OP,
    SIN_OP,
};
use crate::op::info::{
    OpInfo,
    order_ratio,
};
use crate::tape::TapeRec;
use crate::taylor::Taylor;
use crate::taylor::Rows;
// -------------------------------------------------------------------------
// forward_sin_cos
/// computes orders k0 ..= p of the sine row s and cosine row c
/// from the operand row x.
fn forward_sin_cos<V> (
    x  : &[V]     ,
    s  : &mut [V] ,
    c  : &mut [V] ,
    p  : usize    ,
    k0 : usize    ,
)
where
    for<'a> &'a V : std::ops::Sub<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    V : Clone + From<f32> + FloatCore ,
{
    for k in k0 ..= p {
        if k == 0 {
            s[0] = x[0].sin();
            c[0] = x[0].cos();
        } else {
            let mut sum_s = V::zero();
            let mut sum_c = V::zero();
            for j in 1 ..= k {
                let fac  = order_ratio::<V>(j, k);
                let fx   = &fac * &x[j];
                let term = &fx * &c[k - j];
                sum_s += &term;
                let term = &fx * &s[k - j];
                sum_c += &term;
            }
            s[k] = sum_s;
            c[k] = &V::zero() - &sum_c;
        }
    }
}
// -------------------------------------------------------------------------
// reverse_sin_cos
/// adds the adjoint contributions of the pair recurrences:
/// ps and pc are the adjoint rows of sine and cosine,
/// the operand contribution goes to row x_index of lower.
fn reverse_sin_cos<V> (
    d       : usize              ,
    x_row   : &[V]               ,
    s_row   : &[V]               ,
    c_row   : &[V]               ,
    ps      : &mut [V]           ,
    pc      : &mut [V]           ,
    lower   : &mut Rows<'_, V>   ,
    x_index : usize              ,
)
where
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    for<'a> V     : std::ops::SubAssign<&'a V> ,
    V : Clone + From<f32> ,
{
    for k in (1 ..= d).rev() {
        for j in 1 ..= k {
            let fac = order_ratio::<V>(j, k);
            //
            // through s[k]
            let fac_ps = &fac * &ps[k];
            let term   = &fac_ps * &c_row[k - j];
            let px     = lower.row_mut( x_index );
            px[j]     += &term;
            let term   = &fac_ps * &x_row[j];
            pc[k - j] += &term;
            //
            // through c[k]
            let fac_pc = &fac * &pc[k];
            let term   = &fac_pc * &s_row[k - j];
            let px     = lower.row_mut( x_index );
            px[j]     -= &term;
            let term   = &fac_pc * &x_row[j];
            ps[k - j] -= &term;
        }
    }
    // s[0] = sin( x[0] ) , c[0] = cos( x[0] )
    let term = &ps[0] * &c_row[0];
    let px   = lower.row_mut( x_index );
    px[0]   += &term;
    let term = &pc[0] * &s_row[0];
    px[0]   -= &term;
}
// -------------------------------------------------------------------------
// sin_forward
/// see [ForwardOp](crate::op::info::ForwardOp)
fn sin_forward<V> (
    _rec   : &TapeRec<V>    ,
    p      : usize          ,
    zero   : bool           ,
    arg    : &[IndexT]      ,
    i_var  : usize          ,
    taylor : &mut Taylor<V> ,
) -> usize
where
    for<'a> &'a V : std::ops::Sub<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    V : Clone + From<f32> + FloatCore ,
{
    debug_assert_eq!( arg.len(), 1 );
    debug_assert!( (arg[0] as usize) < i_var );
    let stride = taylor.stride();
    let (lower, upper)  = taylor.split_row_mut(i_var);
    let (s_row, rest)   = upper.split_at_mut(stride);
    let c_row           = &mut rest[0 .. stride];
    let x               = lower.row( arg[0] as usize );
    let k0              = if zero { 0 } else { p };
    forward_sin_cos::<V>(x, s_row, c_row, p, k0);
    0
}
//
// cos_forward
/// see [ForwardOp](crate::op::info::ForwardOp)
fn cos_forward<V> (
    _rec   : &TapeRec<V>    ,
    p      : usize          ,
    zero   : bool           ,
    arg    : &[IndexT]      ,
    i_var  : usize          ,
    taylor : &mut Taylor<V> ,
) -> usize
where
    for<'a> &'a V : std::ops::Sub<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    V : Clone + From<f32> + FloatCore ,
{
    debug_assert_eq!( arg.len(), 1 );
    debug_assert!( (arg[0] as usize) < i_var );
    let stride = taylor.stride();
    let (lower, upper)  = taylor.split_row_mut(i_var);
    let (c_row, rest)   = upper.split_at_mut(stride);
    let s_row           = &mut rest[0 .. stride];
    let x               = lower.row( arg[0] as usize );
    let k0              = if zero { 0 } else { p };
    forward_sin_cos::<V>(x, s_row, c_row, p, k0);
    0
}
// -------------------------------------------------------------------------
// sin_reverse
/// see [ReverseOp](crate::op::info::ReverseOp)
fn sin_reverse<V> (
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
    let x_row  = taylor.row( arg[0] as usize );
    let s_row  = taylor.row( i_var );
    let c_row  = taylor.row( i_var + 1 );
    let stride = partial.stride();
    let (mut lower, upper) = partial.split_row_mut(i_var);
    let (ps, rest)         = upper.split_at_mut(stride);
    let pc                 = &mut rest[0 .. stride];
    reverse_sin_cos::<V>(
        d, x_row, s_row, c_row, ps, pc, &mut lower, arg[0] as usize
    );
}
//
// cos_reverse
/// see [ReverseOp](crate::op::info::ReverseOp)
fn cos_reverse<V> (
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
    let x_row  = taylor.row( arg[0] as usize );
    let c_row  = taylor.row( i_var );
    let s_row  = taylor.row( i_var + 1 );
    let stride = partial.stride();
    let (mut lower, upper) = partial.split_row_mut(i_var);
    let (pc, rest)         = upper.split_at_mut(stride);
    let ps                 = &mut rest[0 .. stride];
    reverse_sin_cos::<V>(
        d, x_row, s_row, c_row, ps, pc, &mut lower, arg[0] as usize
    );
}
// ---------------------------------------------------------------------------
// set_op_info
/// Set the operator information for the SIN_OP and COS_OP operators.
pub(crate) fn set_op_info<V>( op_info_vec : &mut Vec< OpInfo<V> > )
where
    for<'a> &'a V : std::ops::Sub<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    for<'a> V     : std::ops::SubAssign<&'a V> ,
    V             : Clone + From<f32> + FloatCore ,
{
    op_info_vec[SIN_OP as usize] = OpInfo{
        name    : "sin",
        forward : sin_forward::<V>,
        reverse : sin_reverse::<V>,
    };
    op_info_vec[COS_OP as usize] = OpInfo{
        name    : "cos",
        forward : cos_forward::<V>,
        reverse : cos_reverse::<V>,
    };
}
