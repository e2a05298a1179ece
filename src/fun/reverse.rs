// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//
//! This pub(crate) module defines the reverse sweep driver.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
//
use crate::op::id::NON_OP;
use crate::op::info::{
    GlobalOpInfoVec,
    num_ind,
    num_var,
};
use crate::tape::TapeRec;
use crate::taylor::Taylor;
// ---------------------------------------------------------------------------
// reverse_sweep
/// Traverse the operation sequence backward and dispatch each operator's
/// reverse kernel.
///
/// * d :
/// the highest adjoint order; the coefficients of orders 0 ..= d must
/// already be in taylor.
///
/// * rec :
/// the operation sequence.
///
/// * taylor :
/// the coefficient arena left by the forward sweeps.
///
/// * partial :
/// the adjoint arena, d + 1 columns per variable.
/// On input the dependent variable rows hold the seed weights; on
/// return the independent variable rows hold the partials.
/// The rows for the other variables are work space.
pub(crate) fn reverse_sweep<V>(
    d       : usize          ,
    rec     : &TapeRec<V>    ,
    taylor  : &Taylor<V>     ,
    partial : &mut Taylor<V> ,
)
where
    V : GlobalOpInfoVec ,
{
    let op_info_vec = &*< V as GlobalOpInfoVec >::get();
    //
    // i_op, i_var, i_ind
    // counters run backward from one past the last position
    let mut i_op  = rec.num_op();
    let mut i_var = rec.tot_num_var();
    let mut i_ind = rec.num_ind();
    //
    while i_op > 1 {
        i_op -= 1;
        let op    = rec.get_op(i_op);
        let n_ind = num_ind(op);
        //
        i_var -= num_var(op);
        debug_assert!( i_ind >= n_ind );
        i_ind -= n_ind;
        let arg = rec.get_ind(n_ind, i_ind);
        //
        let reverse = op_info_vec[op as usize].reverse;
        reverse(rec, d, arg, i_var, taylor, partial);
    }
    // the sweep must come back to the sentinel's base values
    debug_assert_eq!( i_op, 1 );
    debug_assert_eq!( rec.get_op(0), NON_OP );
    debug_assert_eq!( i_var, num_var( NON_OP ) );
    debug_assert_eq!( i_ind, 0 );
}
