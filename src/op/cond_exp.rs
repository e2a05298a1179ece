// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Evaluate the conditional expression operators
//!
//! Link to [parent module](super)
//!
//! * arg\[0\]:  Variable or parameter index of the comparator.
//! * arg\[1\]:  Variable or parameter index of the true case.
//! * arg\[2\]:  Variable or parameter index of the false case.
//!
//! The branch is selected by the current zero order value of the
//! comparator: the true case when it is greater than zero.
//! The result coefficients are the selected operand's coefficients
//! (a parameter operand contributes only at order zero) and the adjoint
//! is routed to the selected operand only.
// --------------------------------------------------------------------------
// use
//
use crate::IndexT;
use crate::float_core::FloatCore;
use crate::op::id::{
    CE_PPP_OP,
    CE_PPV_OP,
    CE_PVP_OP,
    CE_PVV_OP,
    CE_VPP_OP,
    CE_VPV_OP,
    CE_VVP_OP,
    CE_VVV_OP,
};
use crate::op::info::OpInfo;
use crate::tape::TapeRec;
use crate::taylor::Taylor;
// -------------------------------------------------------------------------
/// Create the forward and reverse kernels for one conditional flavor.
///
/// * flavor : is ppp .. vvv; each letter tells whether the comparator,
///   true case, and false case are a parameter (p) or a variable (v).
macro_rules! cond_exp_kernels {
( $flavor:ident, $c_var:expr, $t_var:expr, $f_var:expr ) => { paste::paste! {
    #[doc = concat!(
        "forward for the conditional flavor ", stringify!($flavor),
        "; see [ForwardOp](crate::op::info::ForwardOp)"
    ) ]
    fn [< ce_ $flavor _forward >] <V> (
        rec    : &TapeRec<V>    ,
        p      : usize          ,
        zero   : bool           ,
        arg    : &[IndexT]      ,
        i_var  : usize          ,
        taylor : &mut Taylor<V> ,
    ) -> usize
    where
        V : Clone + PartialOrd + FloatCore ,
    {
        debug_assert_eq!( arg.len(), 3 );
        let (lower, res) = taylor.split_row_mut(i_var);
        //
        // flag_pos
        let flag_pos = {
            let czero = V::zero();
            if $c_var {
                czero < lower.row( arg[0] as usize )[0]
            } else {
                czero < *rec.get_par( arg[0] as usize )
            }
        };
        //
        // chosen, chosen_var
        let (chosen, chosen_var) = if flag_pos {
            ( arg[1] as usize, $t_var )
        } else {
            ( arg[2] as usize, $f_var )
        };
        //
        let k0 = if zero { 0 } else { p };
        for k in k0 ..= p {
            res[k] = if chosen_var {
                lower.row( chosen )[k].clone()
            } else if k == 0 {
                rec.get_par( chosen ).clone()
            } else {
                V::zero()
            };
        }
        0
    }
    //
    #[doc = concat!(
        "reverse for the conditional flavor ", stringify!($flavor),
        "; see [ReverseOp](crate::op::info::ReverseOp)"
    ) ]
    fn [< ce_ $flavor _reverse >] <V> (
        rec     : &TapeRec<V>    ,
        d       : usize          ,
        arg     : &[IndexT]      ,
        i_var   : usize          ,
        taylor  : &Taylor<V>     ,
        partial : &mut Taylor<V> ,
    )
    where
        for<'a> V : std::ops::AddAssign<&'a V> ,
        V : Clone + PartialOrd + FloatCore ,
    {
        debug_assert_eq!( arg.len(), 3 );
        //
        // flag_pos
        let flag_pos = {
            let czero = V::zero();
            if $c_var {
                czero < taylor.row( arg[0] as usize )[0]
            } else {
                czero < *rec.get_par( arg[0] as usize )
            }
        };
        //
        // chosen, chosen_var
        let (chosen, chosen_var) = if flag_pos {
            ( arg[1] as usize, $t_var )
        } else {
            ( arg[2] as usize, $f_var )
        };
        //
        if chosen_var {
            let (mut lower, upper) = partial.split_row_mut(i_var);
            let pz  = &upper[0 ..= d];
            let pch = lower.row_mut( chosen );
            for k in 0 ..= d {
                pch[k] += &pz[k];
            }
        }
    }
} } }
//
cond_exp_kernels!(ppp, false, false, false);
cond_exp_kernels!(ppv, false, false, true );
cond_exp_kernels!(pvp, false, true , false);
cond_exp_kernels!(pvv, false, true , true );
cond_exp_kernels!(vpp, true , false, false);
cond_exp_kernels!(vpv, true , false, true );
cond_exp_kernels!(vvp, true , true , false);
cond_exp_kernels!(vvv, true , true , true );
// ---------------------------------------------------------------------------
// set_op_info
/// Set the operator information for the eight conditional flavors.
pub(crate) fn set_op_info<V>( op_info_vec : &mut Vec< OpInfo<V> > )
where
    for<'a> V : std::ops::AddAssign<&'a V> ,
    V         : Clone + PartialOrd + FloatCore ,
{
    op_info_vec[CE_PPP_OP as usize] = OpInfo{
        name    : "ce_ppp",
        forward : ce_ppp_forward::<V>,
        reverse : ce_ppp_reverse::<V>,
    };
    op_info_vec[CE_PPV_OP as usize] = OpInfo{
        name    : "ce_ppv",
        forward : ce_ppv_forward::<V>,
        reverse : ce_ppv_reverse::<V>,
    };
    op_info_vec[CE_PVP_OP as usize] = OpInfo{
        name    : "ce_pvp",
        forward : ce_pvp_forward::<V>,
        reverse : ce_pvp_reverse::<V>,
    };
    op_info_vec[CE_PVV_OP as usize] = OpInfo{
        name    : "ce_pvv",
        forward : ce_pvv_forward::<V>,
        reverse : ce_pvv_reverse::<V>,
    };
    op_info_vec[CE_VPP_OP as usize] = OpInfo{
        name    : "ce_vpp",
        forward : ce_vpp_forward::<V>,
        reverse : ce_vpp_reverse::<V>,
    };
    op_info_vec[CE_VPV_OP as usize] = OpInfo{
        name    : "ce_vpv",
        forward : ce_vpv_forward::<V>,
        reverse : ce_vpv_reverse::<V>,
    };
    op_info_vec[CE_VVP_OP as usize] = OpInfo{
        name    : "ce_vvp",
        forward : ce_vvp_forward::<V>,
        reverse : ce_vvp_reverse::<V>,
    };
    op_info_vec[CE_VVV_OP as usize] = OpInfo{
        name    : "ce_vvv",
        forward : ce_vvv_forward::<V>,
        reverse : ce_vvv_reverse::<V>,
    };
}
