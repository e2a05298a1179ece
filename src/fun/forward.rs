// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//
//! This pub(crate) module defines the forward sweep driver.
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
// forward_sweep
/// Traverse the operation sequence in variable index order and dispatch
/// each operator's forward kernel.
///
/// * zero :
/// if true the kernels compute the coefficients of every order up to p
/// (an order zero sweep, or a recomputation);
/// otherwise only order p is computed, extending a previous sweep.
///
/// * p :
/// the coefficient order being computed.
///
/// * rec :
/// the operation sequence.
///
/// * taylor :
/// the coefficient arena; on input the rows for the independent
/// variables hold their order p coefficients, on return every row does.
///
/// * return :
/// the number of comparison records whose outcome at the current zero
/// order values differs from the recorded outcome.
pub(crate) fn forward_sweep<V>(
    zero   : bool           ,
    p      : usize          ,
    rec    : &TapeRec<V>    ,
    taylor : &mut Taylor<V> ,
) -> usize
where
    V : GlobalOpInfoVec ,
{
    let op_info_vec = &*< V as GlobalOpInfoVec >::get();
    //
    // i_var, i_ind
    // running counters; the sentinel at position zero owns variable zero
    let mut compare_change = 0;
    let mut i_var          = num_var( NON_OP );
    let mut i_ind          = 0;
    //
    for i_op in 1 .. rec.num_op() {
        let op    = rec.get_op(i_op);
        let n_ind = num_ind(op);
        let arg   = rec.get_ind(n_ind, i_ind);
        //
        let forward     = op_info_vec[op as usize].forward;
        compare_change += forward(rec, p, zero, arg, i_var, taylor);
        //
        i_var += num_var(op);
        i_ind += n_ind;
    }
    debug_assert_eq!( i_var, rec.tot_num_var() );
    debug_assert_eq!( i_ind, rec.num_ind() );
    //
    compare_change
}
