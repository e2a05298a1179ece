// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Evaluate the Mul operators
//!
//! Link to [parent module](super)
//!
//! * V : see [doc_generic_v](crate::doc_generic_v)
//!
//! * [op::id](crate::op::id)
//!     * MUL_PV_OP : parameter * variable
//!     * MUL_VP_OP : variable * parameter
//!     * MUL_VV_OP : variable * variable
//!
//! * arg
//!     * arg\[0\]:  Variable or parameter index of left operand.
//!     * arg\[1\]:  Variable or parameter index of right operand.
//!
//! The variable variable case is the Leibniz convolution
//! z\[k\] = sum over j of x\[j\] * y\[k-j\] ;
//! a parameter scales every coefficient of the other operand.
// --------------------------------------------------------------------------
// use
//
use crate::IndexT;
use crate::float_core::FloatCore;
use crate::op::id::{
    MUL_PV_OP,
    MUL_VP_OP,
    MUL_VV_OP,
};
use crate::op::info::OpInfo;
use crate::tape::TapeRec;
use crate::taylor::Taylor;
// -------------------------------------------------------------------------
// mul_pv_forward
/// forward for parameter * variable;
/// see [ForwardOp](crate::op::info::ForwardOp)
fn mul_pv_forward<V> (
    rec    : &TapeRec<V>    ,
    p      : usize          ,
    zero   : bool           ,
    arg    : &[IndexT]      ,
    i_var  : usize          ,
    taylor : &mut Taylor<V> ,
) -> usize
where
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    V : Clone ,
{
    debug_assert_eq!( arg.len(), 2 );
    debug_assert!( (arg[1] as usize) < i_var );
    let (lower, res) = taylor.split_row_mut(i_var);
    let y  = lower.row( arg[1] as usize );
    let k0 = if zero { 0 } else { p };
    for k in k0 ..= p {
        res[k] = rec.get_par( arg[0] as usize ) * &y[k];
    }
    0
}
//
// mul_vp_forward
/// forward for variable * parameter;
/// see [ForwardOp](crate::op::info::ForwardOp)
fn mul_vp_forward<V> (
    rec    : &TapeRec<V>    ,
    p      : usize          ,
    zero   : bool           ,
    arg    : &[IndexT]      ,
    i_var  : usize          ,
    taylor : &mut Taylor<V> ,
) -> usize
where
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    V : Clone ,
{
    debug_assert_eq!( arg.len(), 2 );
    debug_assert!( (arg[0] as usize) < i_var );
    let (lower, res) = taylor.split_row_mut(i_var);
    let x  = lower.row( arg[0] as usize );
    let k0 = if zero { 0 } else { p };
    for k in k0 ..= p {
        res[k] = &x[k] * rec.get_par( arg[1] as usize );
    }
    0
}
//
// mul_vv_forward
/// forward for variable * variable;
/// see [ForwardOp](crate::op::info::ForwardOp)
fn mul_vv_forward<V> (
    _rec   : &TapeRec<V>    ,
    p      : usize          ,
    zero   : bool           ,
    arg    : &[IndexT]      ,
    i_var  : usize          ,
    taylor : &mut Taylor<V> ,
) -> usize
where
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    V : Clone + FloatCore ,
{
    debug_assert_eq!( arg.len(), 2 );
    debug_assert!( (arg[0] as usize) < i_var );
    debug_assert!( (arg[1] as usize) < i_var );
    let (lower, res) = taylor.split_row_mut(i_var);
    let x  = lower.row( arg[0] as usize );
    let y  = lower.row( arg[1] as usize );
    let k0 = if zero { 0 } else { p };
    for k in k0 ..= p {
        let mut sum = V::zero();
        for j in 0 ..= k {
            let term = &x[j] * &y[k - j];
            sum += &term;
        }
        res[k] = sum;
    }
    0
}
// -------------------------------------------------------------------------
// mul_pv_reverse
/// reverse for parameter * variable;
/// see [ReverseOp](crate::op::info::ReverseOp)
fn mul_pv_reverse<V> (
    rec     : &TapeRec<V>    ,
    d       : usize          ,
    arg     : &[IndexT]      ,
    i_var   : usize          ,
    _taylor : &Taylor<V>     ,
    partial : &mut Taylor<V> ,
)
where
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    V : Clone ,
{
    debug_assert_eq!( arg.len(), 2 );
    let (mut lower, upper) = partial.split_row_mut(i_var);
    let pz = &upper[0 ..= d];
    let py = lower.row_mut( arg[1] as usize );
    for k in 0 ..= d {
        let term = rec.get_par( arg[0] as usize ) * &pz[k];
        py[k] += &term;
    }
}
//
// mul_vp_reverse
/// reverse for variable * parameter;
/// see [ReverseOp](crate::op::info::ReverseOp)
fn mul_vp_reverse<V> (
    rec     : &TapeRec<V>    ,
    d       : usize          ,
    arg     : &[IndexT]      ,
    i_var   : usize          ,
    _taylor : &Taylor<V>     ,
    partial : &mut Taylor<V> ,
)
where
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    V : Clone ,
{
    debug_assert_eq!( arg.len(), 2 );
    let (mut lower, upper) = partial.split_row_mut(i_var);
    let pz = &upper[0 ..= d];
    let px = lower.row_mut( arg[0] as usize );
    for k in 0 ..= d {
        let term = &pz[k] * rec.get_par( arg[1] as usize );
        px[k] += &term;
    }
}
//
// mul_vv_reverse
/// reverse for variable * variable;
/// see [ReverseOp](crate::op::info::ReverseOp)
///
/// The operands may be the same variable (e.g. x * x);
/// the two accumulation loops are sequential so that case just adds twice.
fn mul_vv_reverse<V> (
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
    V : Clone ,
{
    debug_assert_eq!( arg.len(), 2 );
    let x_row = taylor.row( arg[0] as usize );
    let y_row = taylor.row( arg[1] as usize );
    let (mut lower, upper) = partial.split_row_mut(i_var);
    let pz = &upper[0 ..= d];
    {   let px = lower.row_mut( arg[0] as usize );
        for k in 0 ..= d {
            for j in 0 ..= k {
                let term = &pz[k] * &y_row[k - j];
                px[j] += &term;
            }
        }
    }
    {   let py = lower.row_mut( arg[1] as usize );
        for k in 0 ..= d {
            for j in 0 ..= k {
                let term = &pz[k] * &x_row[j];
                py[k - j] += &term;
            }
        }
    }
}
// ---------------------------------------------------------------------------
// set_op_info
/// Set the operator information for all the Mul operators.
///
/// * op_info_vec :
/// The map from [op::id](crate::op::id) to operator information.
/// The map results for MUL_PV_OP, MUL_VP_OP, and MUL_VV_OP are set.
pub(crate) fn set_op_info<V>( op_info_vec : &mut Vec< OpInfo<V> > )
where
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    V             : Clone + FloatCore ,
{
    op_info_vec[MUL_PV_OP as usize] = OpInfo{
        name    : "mul_pv",
        forward : mul_pv_forward::<V>,
        reverse : mul_pv_reverse::<V>,
    };
    op_info_vec[MUL_VP_OP as usize] = OpInfo{
        name    : "mul_vp",
        forward : mul_vp_forward::<V>,
        reverse : mul_vp_reverse::<V>,
    };
    op_info_vec[MUL_VV_OP as usize] = OpInfo{
        name    : "mul_vv",
        forward : mul_vv_forward::<V>,
        reverse : mul_vv_reverse::<V>,
    };
}
