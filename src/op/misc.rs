// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Evaluate the sentinel, independent, parameter, and tracing operators
//!
//! Link to [parent module](super)
//!
//! * NON_OP : the sentinel at variable index zero; never dispatched.
//! * INV_OP : declares an independent variable; the sweep drivers seed
//!   its coefficients, so both kernels do nothing.
//! * PAR_OP : materializes the parameter arg\[0\] as a variable.
//! * PRI_P_OP , PRI_V_OP : print text arg\[0\] and the value of
//!   operand arg\[1\] during zero order forward; inert for derivatives.
// --------------------------------------------------------------------------
// use
//
use crate::IndexT;
use crate::float_core::FloatCore;
use crate::op::id::{
    INV_OP,
    NON_OP,
    PAR_OP,
    PRI_P_OP,
    PRI_V_OP,
};
use crate::op::info::OpInfo;
use crate::tape::TapeRec;
use crate::taylor::Taylor;
// -------------------------------------------------------------------------
// no_op_forward
/// forward kernel for the operators that compute nothing;
/// see [ForwardOp](crate::op::info::ForwardOp)
pub(crate) fn no_op_forward<V> (
    _rec    : &TapeRec<V>    ,
    _p      : usize          ,
    _zero   : bool           ,
    _arg    : &[IndexT]      ,
    _i_var  : usize          ,
    _taylor : &mut Taylor<V> ,
) -> usize
{   0 }
//
// no_op_reverse
/// reverse kernel for the operators with no adjoint contribution;
/// see [ReverseOp](crate::op::info::ReverseOp)
pub(crate) fn no_op_reverse<V> (
    _rec     : &TapeRec<V>    ,
    _d       : usize          ,
    _arg     : &[IndexT]      ,
    _i_var   : usize          ,
    _taylor  : &Taylor<V>     ,
    _partial : &mut Taylor<V> ,
)
{ }
// -------------------------------------------------------------------------
// par_forward
/// forward for the parameter operator;
/// see [ForwardOp](crate::op::info::ForwardOp)
fn par_forward<V> (
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
    debug_assert_eq!( arg.len(), 1 );
    let (_lower, res) = taylor.split_row_mut(i_var);
    let k0 = if zero { 0 } else { p };
    for k in k0 ..= p {
        if k == 0 {
            res[0] = rec.get_par( arg[0] as usize ).clone();
        } else {
            res[k] = V::zero();
        }
    }
    0
}
// -------------------------------------------------------------------------
// pri_p_forward
/// forward for tracing a parameter;
/// see [ForwardOp](crate::op::info::ForwardOp)
fn pri_p_forward<V> (
    rec     : &TapeRec<V>    ,
    p       : usize          ,
    zero    : bool           ,
    arg     : &[IndexT]      ,
    _i_var  : usize          ,
    _taylor : &mut Taylor<V> ,
) -> usize
where
    V : std::fmt::Display ,
{
    debug_assert_eq!( arg.len(), 2 );
    if zero || p == 0 {
        print!( "{}{}",
            rec.get_txt( arg[0] as usize ),
            rec.get_par( arg[1] as usize ),
        );
    }
    0
}
//
// pri_v_forward
/// forward for tracing a variable;
/// see [ForwardOp](crate::op::info::ForwardOp)
fn pri_v_forward<V> (
    rec    : &TapeRec<V>    ,
    p      : usize          ,
    zero   : bool           ,
    arg    : &[IndexT]      ,
    _i_var : usize          ,
    taylor : &mut Taylor<V> ,
) -> usize
where
    V : std::fmt::Display ,
    V : Clone ,
{
    debug_assert_eq!( arg.len(), 2 );
    if zero || p == 0 {
        print!( "{}{}",
            rec.get_txt( arg[0] as usize ),
            taylor.row( arg[1] as usize )[0],
        );
    }
    0
}
// ---------------------------------------------------------------------------
// set_op_info
/// Set the operator information for
/// NON_OP, INV_OP, PAR_OP, PRI_P_OP, and PRI_V_OP.
pub(crate) fn set_op_info<V>( op_info_vec : &mut Vec< OpInfo<V> > )
where
    V : Clone + FloatCore + std::fmt::Display ,
{
    op_info_vec[NON_OP as usize] = OpInfo{
        name    : "non",
        forward : no_op_forward::<V>,
        reverse : no_op_reverse::<V>,
    };
    op_info_vec[INV_OP as usize] = OpInfo{
        name    : "inv",
        forward : no_op_forward::<V>,
        reverse : no_op_reverse::<V>,
    };
    op_info_vec[PAR_OP as usize] = OpInfo{
        name    : "par",
        forward : par_forward::<V>,
        reverse : no_op_reverse::<V>,
    };
    op_info_vec[PRI_P_OP as usize] = OpInfo{
        name    : "pri_p",
        forward : pri_p_forward::<V>,
        reverse : no_op_reverse::<V>,
    };
    op_info_vec[PRI_V_OP as usize] = OpInfo{
        name    : "pri_v",
        forward : pri_v_forward::<V>,
        reverse : no_op_reverse::<V>,
    };
}
