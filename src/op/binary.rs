// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Kernels that are shared by the linear binary operators.
//!
//! Link to [parent module](super)
//!
//! Addition and subtraction act coefficient by coefficient,
//! so one macro produces the kernels for both;
//! a parameter operand contributes only at order zero.
// ---------------------------------------------------------------------------
//
/// Define the forward and reverse kernels for one linear binary operator.
///
/// * Name     : is the operator name; i.e., Add or Sub.
/// * Op       : is the operator token; i.e., + or - .
/// * OpAssign : is the compound token for the right operand's adjoint
///   contribution; i.e., += for Add and -= for Sub.
///
/// This defines the following functions in the invoking module:
/// ```text
///     {name}_pv_forward  {name}_vp_forward  {name}_vv_forward
///     {name}_pv_reverse  {name}_vp_reverse  {name}_vv_reverse
/// ```
macro_rules! linear_binary_op {
( $Name:ident, $Op:tt, $OpAssign:tt ) => { paste::paste! {
    // -----------------------------------------------------------------------
    // forward
    // -----------------------------------------------------------------------
    #[doc = concat!(
        "forward for parameter ", stringify!($Op), " variable",
        "; see [ForwardOp](crate::op::info::ForwardOp)"
    ) ]
    pub(crate) fn [< $Name:lower _pv_forward >] <V> (
        rec    : &TapeRec<V>    ,
        p      : usize          ,
        zero   : bool           ,
        arg    : &[IndexT]      ,
        i_var  : usize          ,
        taylor : &mut Taylor<V> ,
    ) -> usize
    where
        for<'a> &'a V : std::ops::$Name<&'a V, Output = V> ,
        V : Clone + FloatCore ,
    {
        debug_assert_eq!( arg.len(), 2 );
        debug_assert!( (arg[1] as usize) < i_var );
        let (lower, res) = taylor.split_row_mut(i_var);
        let y  = lower.row( arg[1] as usize );
        let k0 = if zero { 0 } else { p };
        for k in k0 ..= p {
            if k == 0 {
                res[0] = rec.get_par( arg[0] as usize ) $Op &y[0];
            } else {
                res[k] = &V::zero() $Op &y[k];
            }
        }
        0
    }
    //
    #[doc = concat!(
        "forward for variable ", stringify!($Op), " parameter",
        "; see [ForwardOp](crate::op::info::ForwardOp)"
    ) ]
    pub(crate) fn [< $Name:lower _vp_forward >] <V> (
        rec    : &TapeRec<V>    ,
        p      : usize          ,
        zero   : bool           ,
        arg    : &[IndexT]      ,
        i_var  : usize          ,
        taylor : &mut Taylor<V> ,
    ) -> usize
    where
        for<'a> &'a V : std::ops::$Name<&'a V, Output = V> ,
        V : Clone + FloatCore ,
    {
        debug_assert_eq!( arg.len(), 2 );
        debug_assert!( (arg[0] as usize) < i_var );
        let (lower, res) = taylor.split_row_mut(i_var);
        let x  = lower.row( arg[0] as usize );
        let k0 = if zero { 0 } else { p };
        for k in k0 ..= p {
            if k == 0 {
                res[0] = &x[0] $Op rec.get_par( arg[1] as usize );
            } else {
                res[k] = &x[k] $Op &V::zero();
            }
        }
        0
    }
    //
    #[doc = concat!(
        "forward for variable ", stringify!($Op), " variable",
        "; see [ForwardOp](crate::op::info::ForwardOp)"
    ) ]
    pub(crate) fn [< $Name:lower _vv_forward >] <V> (
        _rec   : &TapeRec<V>    ,
        p      : usize          ,
        zero   : bool           ,
        arg    : &[IndexT]      ,
        i_var  : usize          ,
        taylor : &mut Taylor<V> ,
    ) -> usize
    where
        for<'a> &'a V : std::ops::$Name<&'a V, Output = V> ,
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
            res[k] = &x[k] $Op &y[k];
        }
        0
    }
    // -----------------------------------------------------------------------
    // reverse
    // -----------------------------------------------------------------------
    #[doc = concat!(
        "reverse for parameter ", stringify!($Op), " variable",
        "; see [ReverseOp](crate::op::info::ReverseOp)"
    ) ]
    pub(crate) fn [< $Name:lower _pv_reverse >] <V> (
        _rec    : &TapeRec<V>    ,
        d       : usize          ,
        arg     : &[IndexT]      ,
        i_var   : usize          ,
        _taylor : &Taylor<V>     ,
        partial : &mut Taylor<V> ,
    )
    where
        for<'a> V : std::ops::[< $Name Assign >] <&'a V> ,
        V : Clone ,
    {
        debug_assert_eq!( arg.len(), 2 );
        let (mut lower, upper) = partial.split_row_mut(i_var);
        let pz = &upper[0 ..= d];
        let py = lower.row_mut( arg[1] as usize );
        for k in 0 ..= d {
            py[k] $OpAssign &pz[k];
        }
    }
    //
    #[doc = concat!(
        "reverse for variable ", stringify!($Op), " parameter",
        "; see [ReverseOp](crate::op::info::ReverseOp)"
    ) ]
    pub(crate) fn [< $Name:lower _vp_reverse >] <V> (
        _rec    : &TapeRec<V>    ,
        d       : usize          ,
        arg     : &[IndexT]      ,
        i_var   : usize          ,
        _taylor : &Taylor<V>     ,
        partial : &mut Taylor<V> ,
    )
    where
        for<'a> V : std::ops::AddAssign<&'a V> ,
        V : Clone ,
    {
        debug_assert_eq!( arg.len(), 2 );
        let (mut lower, upper) = partial.split_row_mut(i_var);
        let pz = &upper[0 ..= d];
        let px = lower.row_mut( arg[0] as usize );
        for k in 0 ..= d {
            px[k] += &pz[k];
        }
    }
    //
    #[doc = concat!(
        "reverse for variable ", stringify!($Op), " variable",
        "; see [ReverseOp](crate::op::info::ReverseOp)"
    ) ]
    pub(crate) fn [< $Name:lower _vv_reverse >] <V> (
        _rec    : &TapeRec<V>    ,
        d       : usize          ,
        arg     : &[IndexT]      ,
        i_var   : usize          ,
        _taylor : &Taylor<V>     ,
        partial : &mut Taylor<V> ,
    )
    where
        for<'a> V : std::ops::AddAssign<&'a V> ,
        for<'a> V : std::ops::[< $Name Assign >] <&'a V> ,
        V : Clone ,
    {
        debug_assert_eq!( arg.len(), 2 );
        let (mut lower, upper) = partial.split_row_mut(i_var);
        let pz = &upper[0 ..= d];
        {   let px = lower.row_mut( arg[0] as usize );
            for k in 0 ..= d {
                px[k] += &pz[k];
            }
        }
        {   let py = lower.row_mut( arg[1] as usize );
            for k in 0 ..= d {
                py[k] $OpAssign &pz[k];
            }
        }
    }
} } }
pub(crate) use linear_binary_op;
