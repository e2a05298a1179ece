// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Evaluate the comparison record operators
//!
//! Link to [parent module](super)
//!
//! * arg\[0\]:  Variable or parameter index of the left operand.
//! * arg\[1\]:  Variable or parameter index of the right operand.
//!
//! A comparison record produces no variable. Its forward kernel
//! re-evaluates the comparison at the current zero order values and
//! returns one when the outcome differs from the recorded one; the sweep
//! driver sums these into the compare_change diagnostic.
//! The reverse kernel does nothing.
// --------------------------------------------------------------------------
// use
//
use crate::IndexT;
use crate::op::id::*;
use crate::op::info::OpInfo;
use crate::op::misc::no_op_reverse;
use crate::tape::TapeRec;
use crate::taylor::Taylor;
// -------------------------------------------------------------------------
/// Create the forward kernel for one comparison record.
///
/// * family   : is eq, le, or lt.
/// * Cmp      : is the comparison token; i.e., ==, <=, or < .
/// * res      : is f or t, the recorded outcome.
/// * expected : is the recorded outcome as a bool.
/// * flavor   : is pp, pv, vp, or vv.
/// * l_var , r_var : whether the operands are variables.
macro_rules! compare_forward {
(   $family:ident, $Cmp:tt, $res:ident, $expected:expr,
    $flavor:ident, $l_var:expr, $r_var:expr
) => { paste::paste! {
    #[doc = concat!(
        "forward for ", stringify!($family), "_", stringify!($res), "_",
        stringify!($flavor),
        "; see [ForwardOp](crate::op::info::ForwardOp)"
    ) ]
    fn [< $family _ $res _ $flavor _forward >] <V> (
        rec     : &TapeRec<V>    ,
        _p      : usize          ,
        _zero   : bool           ,
        arg     : &[IndexT]      ,
        _i_var  : usize          ,
        taylor  : &mut Taylor<V> ,
    ) -> usize
    where
        V : PartialOrd ,
        V : Clone ,
    {
        debug_assert_eq!( arg.len(), 2 );
        let lhs : &V = if $l_var {
            &taylor.row( arg[0] as usize )[0]
        } else {
            rec.get_par( arg[0] as usize )
        };
        let rhs : &V = if $r_var {
            &taylor.row( arg[1] as usize )[0]
        } else {
            rec.get_par( arg[1] as usize )
        };
        let result = lhs $Cmp rhs;
        if result == $expected { 0 } else { 1 }
    }
} } }
//
/// Create the eight forward kernels for one comparison family.
macro_rules! compare_family { ($family:ident, $Cmp:tt) => {
    compare_forward!($family, $Cmp, f, false, pp, false, false);
    compare_forward!($family, $Cmp, f, false, pv, false, true );
    compare_forward!($family, $Cmp, f, false, vp, true , false);
    compare_forward!($family, $Cmp, f, false, vv, true , true );
    compare_forward!($family, $Cmp, t, true , pp, false, false);
    compare_forward!($family, $Cmp, t, true , pv, false, true );
    compare_forward!($family, $Cmp, t, true , vp, true , false);
    compare_forward!($family, $Cmp, t, true , vv, true , true );
} }
//
compare_family!(eq, ==);
compare_family!(le, <=);
compare_family!(lt, <);
// ---------------------------------------------------------------------------
// set_op_info
/// Set the operator information for the 24 comparison records.
pub(crate) fn set_op_info<V>( op_info_vec : &mut Vec< OpInfo<V> > )
where
    V : PartialOrd ,
    V : Clone ,
{
    /// one table entry per comparison record
    macro_rules! set_one {
    ( $ID:ident, $family:ident, $res:ident, $flavor:ident ) => {
        paste::paste! {
            op_info_vec[$ID as usize] = OpInfo{
                name    : concat!(
                    stringify!($family), "_",
                    stringify!($res), "_",
                    stringify!($flavor)
                ),
                forward : [< $family _ $res _ $flavor _forward >]::<V>,
                reverse : no_op_reverse::<V>,
            };
        }
    } }
    set_one!(EQ_F_PP_OP, eq, f, pp);
    set_one!(EQ_F_PV_OP, eq, f, pv);
    set_one!(EQ_F_VP_OP, eq, f, vp);
    set_one!(EQ_F_VV_OP, eq, f, vv);
    set_one!(EQ_T_PP_OP, eq, t, pp);
    set_one!(EQ_T_PV_OP, eq, t, pv);
    set_one!(EQ_T_VP_OP, eq, t, vp);
    set_one!(EQ_T_VV_OP, eq, t, vv);
    //
    set_one!(LE_F_PP_OP, le, f, pp);
    set_one!(LE_F_PV_OP, le, f, pv);
    set_one!(LE_F_VP_OP, le, f, vp);
    set_one!(LE_F_VV_OP, le, f, vv);
    set_one!(LE_T_PP_OP, le, t, pp);
    set_one!(LE_T_PV_OP, le, t, pv);
    set_one!(LE_T_VP_OP, le, t, vp);
    set_one!(LE_T_VV_OP, le, t, vv);
    //
    set_one!(LT_F_PP_OP, lt, f, pp);
    set_one!(LT_F_PV_OP, lt, f, pv);
    set_one!(LT_F_VP_OP, lt, f, vp);
    set_one!(LT_F_VV_OP, lt, f, vv);
    set_one!(LT_T_PP_OP, lt, t, pp);
    set_one!(LT_T_PV_OP, lt, t, pv);
    set_one!(LT_T_VP_OP, lt, t, vp);
    set_one!(LT_T_VV_OP, lt, t, vv);
}
