// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Information about an operator given it's operator id.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// use
//
use crate::IndexT;
use crate::discrete::sealed::GlobalDiscreteVec;
use crate::float_core::FloatCore;
use crate::op::id::*;
use crate::tape::TapeRec;
use crate::taylor::Taylor;
//
#[cfg(doc)]
use crate::doc_generic_v;
// ---------------------------------------------------------------------------
// num_var
/// Number of variables that an operator produces.
///
/// The operators sin, cos, asin, acos, and atan produce two variables:
/// the result and, at the next variable index, the companion quantity that
/// the forward and reverse recurrences share.
pub(crate) fn num_var(op : u8) -> usize {
    match op {
        ACOS_OP | ASIN_OP | ATAN_OP | COS_OP | SIN_OP     => 2,
        //
        EQ_F_PP_OP ..= EQ_T_VV_OP                         => 0,
        LE_F_PP_OP ..= LE_T_VV_OP                         => 0,
        LT_F_PP_OP ..= LT_T_VV_OP                         => 0,
        PRI_P_OP | PRI_V_OP                               => 0,
        //
        _                                                 => 1,
    }
}
// ---------------------------------------------------------------------------
// num_ind
/// Number of operand indices that an operator stores on the tape.
pub(crate) fn num_ind(op : u8) -> usize {
    match op {
        INV_OP | NON_OP                                   => 0,
        //
        ABS_OP   | ACOS_OP | ASIN_OP | ATAN_OP | COS_OP   => 1,
        EXP_OP   | LOG_OP  | PAR_OP  | SIN_OP  | SQRT_OP  => 1,
        //
        ADD_PV_OP ..= ADD_VV_OP                           => 2,
        DIV_PV_OP ..= DIV_VV_OP                           => 2,
        MUL_PV_OP ..= MUL_VV_OP                           => 2,
        SUB_PV_OP ..= SUB_VV_OP                           => 2,
        DIS_OP                                            => 2,
        EQ_F_PP_OP ..= EQ_T_VV_OP                         => 2,
        LE_F_PP_OP ..= LE_T_VV_OP                         => 2,
        LT_F_PP_OP ..= LT_T_VV_OP                         => 2,
        PRI_P_OP | PRI_V_OP                               => 2,
        //
        CE_PPP_OP ..= CE_VVV_OP                           => 3,
        LD_P_OP | LD_V_OP                                 => 3,
        ST_PP_OP ..= ST_VV_OP                             => 3,
        //
        _ => panic!( "num_ind: {op} is not a valid operator id" ),
    }
}
// ---------------------------------------------------------------------------
// ForwardOp
/// Forward sweep evaluation of one operator.
///
/// * V : see [doc_generic_v]
///
/// * rec :
/// the operation sequence; used to fetch parameters and text.
///
/// * p :
/// the Taylor coefficient order being computed.
///
/// * zero :
/// if true, the kernel computes the coefficients of orders 0 ..= p ;
/// otherwise only order p, the coefficients of lower orders being
/// left from a previous sweep.
///
/// * arg :
/// the operand indices for this use of the operator.
///
/// * i_var :
/// the variable index of (the first of) this operator's results.
///
/// * taylor :
/// the coefficient arena. Rows below i_var are inputs,
/// the rows for this operator's results are outputs.
///
/// * return :
/// the number of comparison results that no longer agree with the tape;
/// zero for all operators except the comparison records.
pub type ForwardOp<V> = fn(
    _rec    : &TapeRec<V>    ,
    _p      : usize          ,
    _zero   : bool           ,
    _arg    : &[IndexT]      ,
    _i_var  : usize          ,
    _taylor : &mut Taylor<V> ,
) -> usize;
//
// panic_forward
/// default [ForwardOp] function will panic
pub(crate) fn panic_forward<V>(
    _rec    : &TapeRec<V>    ,
    _p      : usize          ,
    _zero   : bool           ,
    _arg    : &[IndexT]      ,
    _i_var  : usize          ,
    _taylor : &mut Taylor<V> ,
) -> usize
{   panic!(); }
// ---------------------------------------------------------------------------
// ReverseOp
/// Reverse sweep evaluation of one operator.
///
/// * V : see [doc_generic_v]
///
/// * d :
/// the highest order with non-zero adjoints.
///
/// * taylor :
/// the coefficient arena left by forward sweeps of order d or greater.
///
/// * partial :
/// the adjoint arena, same row layout as taylor with d + 1 columns.
/// The kernel adds, to the adjoint rows of its operands, the partials of
/// this operator's result with respect to those operands, summed over the
/// orders 0 ..= d . The result's own adjoint row may be used as scratch.
///
/// * Other arguments : see [ForwardOp] .
pub type ReverseOp<V> = fn(
    _rec     : &TapeRec<V>    ,
    _d       : usize          ,
    _arg     : &[IndexT]      ,
    _i_var   : usize          ,
    _taylor  : &Taylor<V>     ,
    _partial : &mut Taylor<V> ,
);
//
// panic_reverse
/// default [ReverseOp] function will panic
pub(crate) fn panic_reverse<V>(
    _rec     : &TapeRec<V>    ,
    _d       : usize          ,
    _arg     : &[IndexT]      ,
    _i_var   : usize          ,
    _taylor  : &Taylor<V>     ,
    _partial : &mut Taylor<V> ,
)
{   panic!(); }
// ---------------------------------------------------------------------------
// order_ratio
/// The factor j / k used by the coefficient recurrences.
/// The orders j and k are small integers, so the conversion through f32
/// is exact and the division happens in V at working precision.
pub(crate) fn order_ratio<V>(j : usize, k : usize) -> V
where
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    V : From<f32> ,
{
    let num = V::from( j as f32 );
    let den = V::from( k as f32 );
    &num / &den
}
// ---------------------------------------------------------------------------
/// Information for one operator
pub struct OpInfo<V> {
    //
    /// name the user sees for this operator
    pub name    : &'static str,
    //
    /// forward sweep evaluation for this operator
    pub forward : ForwardOp<V>,
    //
    /// reverse sweep evaluation for this operator
    pub reverse : ReverseOp<V>,
}
impl<V> Clone for OpInfo<V> {
    fn clone(&self) -> Self {
        Self {
            name    : self.name,
            forward : self.forward,
            reverse : self.reverse,
        }
    }
}
// ---------------------------------------------------------------------------
// op_info_vec
/// returns the vector of length NUMBER_OP
/// that maps each operator id to it's [OpInfo] .
pub(crate) fn op_info_vec<V>() -> Vec< OpInfo<V> >
where
    // add, sub, mul, div
    for<'a> &'a V : std::ops::Add<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Sub<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    // compound assignment
    for<'a> V : std::ops::AddAssign<&'a V> ,
    for<'a> V : std::ops::SubAssign<&'a V> ,
    //
    V : Clone + From<f32> + PartialOrd + std::fmt::Display +
        FloatCore + GlobalDiscreteVec ,
{
    let empty = OpInfo {
        name    : &"panic",
        forward : panic_forward::<V>,
        reverse : panic_reverse::<V>,
    };
    let mut result : Vec< OpInfo<V> > = vec![ empty; NUMBER_OP as usize ];
    crate::op::abs::set_op_info::<V>(&mut result);
    crate::op::add::set_op_info::<V>(&mut result);
    crate::op::asin_acos::set_op_info::<V>(&mut result);
    crate::op::atan::set_op_info::<V>(&mut result);
    crate::op::compare::set_op_info::<V>(&mut result);
    crate::op::cond_exp::set_op_info::<V>(&mut result);
    crate::op::discrete::set_op_info::<V>(&mut result);
    crate::op::div::set_op_info::<V>(&mut result);
    crate::op::exp::set_op_info::<V>(&mut result);
    crate::op::load_store::set_op_info::<V>(&mut result);
    crate::op::log::set_op_info::<V>(&mut result);
    crate::op::misc::set_op_info::<V>(&mut result);
    crate::op::mul::set_op_info::<V>(&mut result);
    crate::op::sin_cos::set_op_info::<V>(&mut result);
    crate::op::sqrt::set_op_info::<V>(&mut result);
    crate::op::sub::set_op_info::<V>(&mut result);
    result
}
// ---------------------------------------------------------------------------
//
// GlobalOpInfoVec
/// returns a reference to the map from operator id to [OpInfo]
///
/// ```text
///     GlobalOpInfoVec::get()
/// ```
///
/// * V : see [doc_generic_v]
pub trait GlobalOpInfoVec
where
    Self : Sized + 'static,
{
    fn get() -> &'static std::sync::LazyLock< Vec< OpInfo<Self> > >;
}
// impl_global_op_info_vec!
/// Implement GlobalOpInfoVec for the value type *V* ; see [doc_generic_v]
///
/// This macro can be invoked from anywhere given the following use
/// statements:
/// ```text
///     use std::sync::LazyLock;
/// ```
macro_rules! impl_global_op_info_vec{ ($V:ty) => {
    #[doc = concat!(
        "Operator information used when evaluating `",
        stringify!($V), "` operation sequences"
    ) ]
    impl crate::op::info::GlobalOpInfoVec for $V {
        fn get() -> &'static LazyLock<
            Vec< crate::op::info::OpInfo<$V> >
        > {
            pub static OP_INFO_VEC :
                LazyLock< Vec< crate::op::info::OpInfo<$V> > > =
                    LazyLock::new(
                        || crate::op::info::op_info_vec::<$V>()
                    );
            &OP_INFO_VEC
        }
    }
} }
pub(crate) use impl_global_op_info_vec;
