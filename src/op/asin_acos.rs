// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Evaluate the asin and acos operators
//!
//! Link to [parent module](super)
//!
//! * arg\[0\]:  Variable index of the operand.
//!
//! Both operators produce two variables: the result and the companion
//! u = sqrt( 1 - x * x ) at the next variable index.
//! With b = 1 - x * x the recurrences are
//! ```text
//!     b[k] = - sum over 0 <= j <= k of x[j] * x[k-j]           (k >= 1)
//!     u[k] = ( b[k] - sum over 0 < j < k of u[j] * u[k-j] ) / ( 2 * u[0] )
//!     z[k] = ( s * x[k]
//!            - (1/k) * sum over 0 < j < k of j * z[j] * u[k-j] ) / u[0]
//! ```
//! where s is +1 for asin and -1 for acos
//! (u * z' = x' for asin and u * z' = - x' for acos).
// --------------------------------------------------------------------------
// use
//
use crate::IndexT;
use crate::float_core::FloatCore;
use crate::op::id::{
    ACOS_OP,
    ASIN_OP,
};
use crate::op::info::{
    OpInfo,
    order_ratio,
};
use crate::tape::TapeRec;
use crate::taylor::Taylor;
use crate::taylor::Rows;
// -------------------------------------------------------------------------
// forward_asin_acos
/// computes orders k0 ..= p of the result row z and companion row u;
/// minus is true for acos.
fn forward_asin_acos<V> (
    x     : &[V]     ,
    z     : &mut [V] ,
    u     : &mut [V] ,
    p     : usize    ,
    k0    : usize    ,
    minus : bool     ,
)
where
    for<'a> &'a V : std::ops::Sub<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Add<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    for<'a> V     : std::ops::SubAssign<&'a V> ,
    V : Clone + From<f32> + FloatCore ,
{
    let two = &V::one() + &V::one();
    for k in k0 ..= p {
        if k == 0 {
            let b0 = &V::one() - &(&x[0] * &x[0]);
            u[0]   = b0.sqrt();
            z[0]   = if minus { x[0].acos() } else { x[0].asin() };
        } else {
            // u[k]
            let mut num = V::zero();
            for j in 0 ..= k {
                let term = &x[j] * &x[k - j];
                num -= &term;
            }
            for j in 1 .. k {
                let term = &u[j] * &u[k - j];
                num -= &term;
            }
            u[k] = &num / &(&two * &u[0]);
            //
            // z[k]
            let mut num = if minus {
                &V::zero() - &x[k]
            } else {
                x[k].clone()
            };
            for j in 1 .. k {
                let fac  = order_ratio::<V>(j, k);
                let term = &(&fac * &z[j]) * &u[k - j];
                num -= &term;
            }
            z[k] = &num / &u[0];
        }
    }
}
// -------------------------------------------------------------------------
// reverse_asin_acos
/// adds the adjoint contributions of the pair recurrences;
/// minus is true for acos.
fn reverse_asin_acos<V> (
    d       : usize            ,
    x_row   : &[V]             ,
    z_row   : &[V]             ,
    u_row   : &[V]             ,
    pz      : &mut [V]         ,
    pu      : &mut [V]         ,
    lower   : &mut Rows<'_, V> ,
    x_index : usize            ,
    minus   : bool             ,
)
where
    for<'a> &'a V : std::ops::Add<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    for<'a> V     : std::ops::SubAssign<&'a V> ,
    V : Clone + From<f32> + FloatCore ,
{
    let two = &V::one() + &V::one();
    for k in (1 ..= d).rev() {
        //
        // through z[k]
        let pzk = &pz[k] / &u_row[0];
        {   let px = lower.row_mut( x_index );
            if minus {
                px[k] -= &pzk;
            } else {
                px[k] += &pzk;
            }
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
        // through u[k]
        let puk     = &pu[k] / &(&two * &u_row[0]);
        let two_puk = &two * &puk;
        for j in 1 .. k {
            let term = &two_puk * &u_row[k - j];
            pu[j]   -= &term;
        }
        let term = &two_puk * &u_row[k];
        pu[0]   -= &term;
        //
        // through b[k] = - sum of x[j] * x[k-j]
        for m in 0 ..= k {
            let term = &two_puk * &x_row[k - m];
            let px   = lower.row_mut( x_index );
            px[m]   -= &term;
        }
    }
    // z[0] and u[0] = sqrt( 1 - x[0] * x[0] )
    let term = &pz[0] / &u_row[0];
    {   let px = lower.row_mut( x_index );
        if minus {
            px[0] -= &term;
        } else {
            px[0] += &term;
        }
    }
    let term = &(&pu[0] * &x_row[0]) / &u_row[0];
    let px   = lower.row_mut( x_index );
    px[0]   -= &term;
}
// -------------------------------------------------------------------------
/// Create the forward and reverse kernels for ASIN_OP or ACOS_OP.
macro_rules! asin_acos_kernels { ($name:ident, $minus:expr) => { paste::paste! {
    #[doc = concat!(
        "forward for ", stringify!($name),
        "; see [ForwardOp](crate::op::info::ForwardOp)"
    ) ]
    fn [< $name _forward >] <V> (
        _rec   : &TapeRec<V>    ,
        p      : usize          ,
        zero   : bool           ,
        arg    : &[IndexT]      ,
        i_var  : usize          ,
        taylor : &mut Taylor<V> ,
    ) -> usize
    where
        for<'a> &'a V : std::ops::Add<&'a V, Output = V> ,
        for<'a> &'a V : std::ops::Sub<&'a V, Output = V> ,
        for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
        for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
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
        forward_asin_acos::<V>(x, z_row, u_row, p, k0, $minus);
        0
    }
    //
    #[doc = concat!(
        "reverse for ", stringify!($name),
        "; see [ReverseOp](crate::op::info::ReverseOp)"
    ) ]
    fn [< $name _reverse >] <V> (
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
        let x_row  = taylor.row( arg[0] as usize );
        let z_row  = taylor.row( i_var );
        let u_row  = taylor.row( i_var + 1 );
        let stride = partial.stride();
        let (mut lower, upper) = partial.split_row_mut(i_var);
        let (pz, rest)         = upper.split_at_mut(stride);
        let pu                 = &mut rest[0 .. stride];
        reverse_asin_acos::<V>(
            d, x_row, z_row, u_row, pz, pu,
            &mut lower, arg[0] as usize, $minus,
        );
    }
} } }
asin_acos_kernels!(asin, false);
asin_acos_kernels!(acos, true);
// ---------------------------------------------------------------------------
// set_op_info
/// Set the operator information for the ASIN_OP and ACOS_OP operators.
pub(crate) fn set_op_info<V>( op_info_vec : &mut Vec< OpInfo<V> > )
where
    for<'a> &'a V : std::ops::Add<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Sub<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Mul<&'a V, Output = V> ,
    for<'a> &'a V : std::ops::Div<&'a V, Output = V> ,
    for<'a> V     : std::ops::AddAssign<&'a V> ,
    for<'a> V     : std::ops::SubAssign<&'a V> ,
    V             : Clone + From<f32> + FloatCore ,
{
    op_info_vec[ASIN_OP as usize] = OpInfo{
        name    : "asin",
        forward : asin_forward::<V>,
        reverse : asin_reverse::<V>,
    };
    op_info_vec[ACOS_OP as usize] = OpInfo{
        name    : "acos",
        forward : acos_forward::<V>,
        reverse : acos_reverse::<V>,
    };
}
