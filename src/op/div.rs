// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Evaluate the Div operators
//!
//! Link to [parent module](super)
//!
//! * V : see [doc_generic_v](crate::doc_generic_v)
//!
//! * [op::id](crate::op::id)
//!     * DIV_PV_OP : parameter / variable
//!     * DIV_VP_OP : variable / parameter
//!     * DIV_VV_OP : variable / variable
//!
//! * arg
//!     * arg\[0\]:  Variable or parameter index of left operand.
//!     * arg\[1\]:  Variable or parameter index of right operand.
//!
//! The recurrence comes from z * y = x :
//! z\[k\] = ( x\[k\] - sum over j < k of z\[j\] * y\[k-j\] ) / y\[0\] .
// --------------------------------------------------------------------------
// use
//
use crate::IndexT;
use crate::float_core::FloatCore;
use crate::op::id::{
    DIV_PV_OP,
    DIV_VP_OP,
    DIV_VV_OP,
};
use crate::op::info::OpInfo;
use crate::tape::TapeRec;
use crate::taylor::Taylor;
// -------------------------------------------------------------------------
// div_pv_forward
/// forward for parameter / variable;
/// see [ForwardOp](crate::op::info::ForwardOp)
fn div_pv_forward<V> (
    rec    : &TapeRec<V>    ,
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
    V : Clone + FloatCore ,
{
    debug_assert_eq!( arg.len(), 2 );
    debug_assert!( (arg[1] as usize) < i_var );
    let (lower, res) = taylor.split_row_mut(i_var);
    let y  = lower.row( arg[1] as usize );
    let k0 = if zero { 0 } else { p };
    for k in k0 ..= p {
        let mut num = if k == 0 {
            rec.get_par( arg[0] as usize ).clone()
        } else {
            V::zero()
        };
        for j in 0 .. k {
            let term = &res[j] * &y[k - j];
            num -= &term;
        }
        res[k] = &num / &y[0];
    }
    0
}
//
// div_vp_forward
/// forward for variable / parameter;
/// see [ForwardOp](crate::op::info::ForwardOp)
fn div_vp_forward<V> (
    rec    : &TapeRec<V>    ,
    p      : usize          ,
    zero   : bool           ,
    arg    : &[IndexT]      ,
    i_var  : usize          ,
    taylor : &mut Taylor<V> ,
) -> usize
where
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    V : Clone ,
{
    debug_assert_eq!( arg.len(), 2 );
    debug_assert!( (arg[0] as usize) < i_var );
    let (lower, res) = taylor.split_row_mut(i_var);
    let x  = lower.row( arg[0] as usize );
    let k0 = if zero { 0 } else { p };
    for k in k0 ..= p {
        res[k] = &x[k] / rec.get_par( arg[1] as usize );
    }
    0
}
//
// div_vv_forward
/// forward for variable / variable;
/// see [ForwardOp](crate::op::info::ForwardOp)
fn div_vv_forward<V> (
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
    V : Clone ,
{
    debug_assert_eq!( arg.len(), 2 );
    debug_assert!( (arg[0] as usize) < i_var );
    debug_assert!( (arg[1] as usize) < i_var );
    let (lower, res) = taylor.split_row_mut(i_var);
    let x  = lower.row( arg[0] as usize );
    let y  = lower.row( arg[1] as usize );
    let k0 = if zero { 0 } else { p };
    for k in k0 ..= p {
        let mut num = x[k].clone();
        for j in 0 .. k {
            let term = &res[j] * &y[k - j];
            num -= &term;
        }
        res[k] = &num / &y[0];
    }
    0
}
// -------------------------------------------------------------------------
// div_pv_reverse
/// reverse for parameter / variable;
/// see [ReverseOp](crate::op::info::ReverseOp)
fn div_pv_reverse<V> (
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
    for<'a> V     : std::ops::SubAssign<&'a V> ,
    V : Clone ,
{
    debug_assert_eq!( arg.len(), 2 );
    let y_row = taylor.row( arg[1] as usize );
    let z_row = taylor.row( i_var );
    let (mut lower, upper) = partial.split_row_mut(i_var);
    let pz = &mut upper[0 ..= d];
    for k in (0 ..= d).rev() {
        let pzk = &pz[k] / &y_row[0];
        for j in 1 ..= k {
            let term   = &pzk * &y_row[j];
            pz[k - j] -= &term;
            let term   = &pzk * &z_row[k - j];
            let py     = lower.row_mut( arg[1] as usize );
            py[j]     -= &term;
        }
        let term = &pzk * &z_row[k];
        let py   = lower.row_mut( arg[1] as usize );
        py[0]   -= &term;
    }
}
//
// div_vp_reverse
/// reverse for variable / parameter;
/// see [ReverseOp](crate::op::info::ReverseOp)
fn div_vp_reverse<V> (
    rec     : &TapeRec<V>    ,
    d       : usize          ,
    arg     : &[IndexT]      ,
    i_var   : usize          ,
    _taylor : &Taylor<V>     ,
    partial : &mut Taylor<V> ,
)
where
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    V : Clone ,
{
    debug_assert_eq!( arg.len(), 2 );
    let (mut lower, upper) = partial.split_row_mut(i_var);
    let pz = &upper[0 ..= d];
    let px = lower.row_mut( arg[0] as usize );
    for k in 0 ..= d {
        let term = &pz[k] / rec.get_par( arg[1] as usize );
        px[k] += &term;
    }
}
//
// div_vv_reverse
/// reverse for variable / variable;
/// see [ReverseOp](crate::op::info::ReverseOp)
///
/// Processes the orders downward, using the result's adjoint row as
/// scratch for the contributions that flow through the lower order
/// result coefficients.
fn div_vv_reverse<V> (
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
    V : Clone ,
{
    debug_assert_eq!( arg.len(), 2 );
    let y_row = taylor.row( arg[1] as usize );
    let z_row = taylor.row( i_var );
    let (mut lower, upper) = partial.split_row_mut(i_var);
    let pz = &mut upper[0 ..= d];
    for k in (0 ..= d).rev() {
        let pzk = &pz[k] / &y_row[0];
        {   let px = lower.row_mut( arg[0] as usize );
            px[k] += &pzk;
        }
        for j in 1 ..= k {
            let term   = &pzk * &y_row[j];
            pz[k - j] -= &term;
            let term   = &pzk * &z_row[k - j];
            let py     = lower.row_mut( arg[1] as usize );
            py[j]     -= &term;
        }
        let term = &pzk * &z_row[k];
        let py   = lower.row_mut( arg[1] as usize );
        py[0]   -= &term;
    }
}
// ---------------------------------------------------------------------------
// set_op_info
/// Set the operator information for all the Div operators.
///
/// * op_info_vec :
/// The map from [op::id](crate::op::id) to operator information.
/// The map results for DIV_PV_OP, DIV_VP_OP, and DIV_VV_OP are set.
pub(crate) fn set_op_info<V>( op_info_vec : &mut Vec< OpInfo<V> > )
where
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    for<'a> V     : std::ops::SubAssign<&'a V> ,
    V             : Clone + FloatCore ,
{
    op_info_vec[DIV_PV_OP as usize] = OpInfo{
        name    : "div_pv",
        forward : div_pv_forward::<V>,
        reverse : div_pv_reverse::<V>,
    };
    op_info_vec[DIV_VP_OP as usize] = OpInfo{
        name    : "div_vp",
        forward : div_vp_forward::<V>,
        reverse : div_vp_reverse::<V>,
    };
    op_info_vec[DIV_VV_OP as usize] = OpInfo{
        name    : "div_vv",
        forward : div_vv_forward::<V>,
        reverse : div_vv_reverse::<V>,
    };
}
