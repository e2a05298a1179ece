// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//
//! This pub module implements the `AD<V>` comparison operators.
//!
//! Link to [parent module](super)
//!
//! A comparison between tracked scalars produces a plain bool and records
//! the outcome that was observed; e.g., `ax < ay` evaluating to false
//! during a recording appends an LT_F record with the operand indices.
//! The record produces no variable. Its only purpose is the
//! compare_change count: a forward sweep re-evaluates each recorded
//! comparison at the current zero order values and counts the records
//! whose outcome would differ, warning the caller that the tape's branch
//! structure no longer matches the function it was recorded from.
//!
//! A direct `partial_cmp` call compares the values without recording;
//! there is no three way comparison record.
// ---------------------------------------------------------------------------
use std::thread::LocalKey;
use std::cell::RefCell;
//
use crate::{
    AD,
    IndexT,
};
use crate::hash::TypeHash;
use crate::op::id;
use crate::tape::Tape;
use crate::tape::sealed::ThisThreadTape;
// ---------------------------------------------------------------------------
// record_compare
/// Record one comparison outcome.
///
/// * family :
/// the first operator id of the comparison family;
/// i.e., EQ_F_PP_OP, LE_F_PP_OP, or LT_F_PP_OP.
/// The eight flavors of one family are contiguous in the order
/// outcome (false, true) major, then left operand kind, then right.
///
/// * result :
/// the outcome observed for the comparison at the recorded values.
fn record_compare<V> (
    tape   : &mut Tape<V> ,
    family : u8           ,
    result : bool         ,
    lhs    : &AD<V>       ,
    rhs    : &AD<V>       ,
)
where
    V : Clone + TypeHash ,
{
    if ! tape.recording {
        return;
    }
    let var_lhs = lhs.tape_id == tape.tape_id;
    let var_rhs = rhs.tape_id == tape.tape_id;
    if ! ( var_lhs || var_rhs ) {
        return;
    }
    //
    // op
    let offset : u8 =
        4 * (result as u8) + 2 * (var_lhs as u8) + (var_rhs as u8);
    tape.rec.put_op( family + offset );
    //
    // operand indices
    let i_lhs = if var_lhs {
        lhs.index as IndexT
    } else {
        tape.rec.put_par( &lhs.value )
    };
    let i_rhs = if var_rhs {
        rhs.index as IndexT
    } else {
        tape.rec.put_par( &rhs.value )
    };
    tape.rec.put_ind( &[ i_lhs, i_rhs ] );
}
// ---------------------------------------------------------------------------
// with_record
/// Evaluate one comparison and record its outcome on this thread's tape.
fn with_record<V> (
    family : u8     ,
    result : bool   ,
    lhs    : &AD<V> ,
    rhs    : &AD<V> ,
) -> bool
where
    V : Clone + TypeHash + 'static + ThisThreadTape ,
{
    let local_key : &LocalKey< RefCell< Tape<V> > > =
        ThisThreadTape::get();
    local_key.with_borrow_mut( |tape|
        record_compare::<V>( tape, family, result, lhs, rhs )
    );
    result
}
// ---------------------------------------------------------------------------
// PartialEq
/// `AD<V>` equality; the observed outcome is recorded as an EQ record.
///
/// # Example
/// ```
/// use taylorad::ad_from_value;
/// let ax = ad_from_value( 3f64 );
/// let ay = ad_from_value( 3f64 );
/// assert!( ax == ay );
/// ```
impl<V> PartialEq for AD<V>
where
    V : Clone + TypeHash + PartialEq + 'static + ThisThreadTape ,
{
    fn eq(&self, rhs : &Self) -> bool {
        let result = self.value == rhs.value;
        with_record::<V>( id::EQ_F_PP_OP, result, self, rhs )
    }
}
// ---------------------------------------------------------------------------
// PartialOrd
/// `AD<V>` ordering.
///
/// `lt` and `le` record LT and LE records;
/// `gt` and `ge` are the same comparisons with the operands swapped
/// (there are no GT or GE records).
///
/// # Example
/// ```
/// use taylorad::ad_from_value;
/// let ax = ad_from_value( 3f64 );
/// let ay = ad_from_value( 4f64 );
/// assert!( ax < ay );
/// assert!( ay >= ax );
/// ```
impl<V> PartialOrd for AD<V>
where
    V : Clone + TypeHash + PartialOrd + 'static + ThisThreadTape ,
{
    // value comparison only; nothing to record for a three way result
    fn partial_cmp(&self, rhs : &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp( &rhs.value )
    }
    //
    fn lt(&self, rhs : &Self) -> bool {
        let result = self.value < rhs.value;
        with_record::<V>( id::LT_F_PP_OP, result, self, rhs )
    }
    //
    fn le(&self, rhs : &Self) -> bool {
        let result = self.value <= rhs.value;
        with_record::<V>( id::LE_F_PP_OP, result, self, rhs )
    }
    //
    fn gt(&self, rhs : &Self) -> bool {
        let result = rhs.value < self.value;
        with_record::<V>( id::LT_F_PP_OP, result, rhs, self )
    }
    //
    fn ge(&self, rhs : &Self) -> bool {
        let result = rhs.value <= self.value;
        with_record::<V>( id::LE_F_PP_OP, result, rhs, self )
    }
}
