// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//
//! This pub module implements conditional expressions for `AD<V>`.
//!
//! Link to [parent module](super)
//!
//! A conditional expression is a taped branch: the record keeps all three
//! operands and every replay of the tape re-selects the branch from the
//! comparator value at the current point, so forward and reverse sweeps
//! follow the branch that the current zero order values select.
// ---------------------------------------------------------------------------
use std::thread::LocalKey;
use std::cell::RefCell;
//
use crate::{
    AD,
    FloatCore,
    IndexT,
};
use crate::hash::TypeHash;
use crate::op::id;
use crate::tape::Tape;
use crate::tape::sealed::ThisThreadTape;
//
#[cfg(doc)]
use crate::doc_generic_v;
// ---------------------------------------------------------------------------
// record_cond_exp
/// Record one conditional expression;
/// the eight flavors are contiguous in the order comparator kind major,
/// then true case kind, then false case kind.
fn record_cond_exp<V> (
    tape     : &mut Tape<V> ,
    aflag    : &AD<V>       ,
    if_true  : &AD<V>       ,
    if_false : &AD<V>       ,
) -> (usize, usize)
where
    V : Clone + TypeHash ,
{
    if ! tape.recording {
        return (0, 0);
    }
    let var_c = aflag.tape_id    == tape.tape_id;
    let var_t = if_true.tape_id  == tape.tape_id;
    let var_f = if_false.tape_id == tape.tape_id;
    if ! ( var_c || var_t || var_f ) {
        return (0, 0);
    }
    //
    // op
    let offset : u8 =
        4 * (var_c as u8) + 2 * (var_t as u8) + (var_f as u8);
    let new_index = tape.rec.put_op( id::CE_PPP_OP + offset );
    //
    // operand indices
    let i_c = if var_c {
        aflag.index as IndexT
    } else {
        tape.rec.put_par( &aflag.value )
    };
    let i_t = if var_t {
        if_true.index as IndexT
    } else {
        tape.rec.put_par( &if_true.value )
    };
    let i_f = if var_f {
        if_false.index as IndexT
    } else {
        tape.rec.put_par( &if_false.value )
    };
    tape.rec.put_ind( &[ i_c, i_t, i_f ] );
    //
    (tape.tape_id, new_index)
}
// ---------------------------------------------------------------------------
// cond_exp
/// The conditional expression primitive.
///
/// * Syntax :
/// ```text
///     az = cond_exp(&aflag, &if_true, &if_false)
/// ```
///
/// * V : see [doc_generic_v]
///
/// * az :
/// has the value of if_true when the comparator aflag is greater than
/// zero and the value of if_false otherwise.
/// When the tape is replayed at a different point the comparator is
/// re-evaluated and the branch is re-selected; see [cond_exp_lt] for the
/// version that also reports branch flips through compare_change.
///
/// # Example
/// ```
/// use taylorad::{ad_from_value, cond_exp};
/// let aflag = ad_from_value( -1f64 );
/// let at    = ad_from_value(  2f64 );
/// let af    = ad_from_value(  3f64 );
/// let az    = cond_exp(&aflag, &at, &af);
/// assert_eq!( az.to_value(), 3f64 );
/// ```
pub fn cond_exp<V> (
    aflag    : &AD<V> ,
    if_true  : &AD<V> ,
    if_false : &AD<V> ,
) -> AD<V>
where
    V : Clone + TypeHash + FloatCore + PartialOrd +
        'static + ThisThreadTape ,
{
    // new_value
    let new_value = if aflag.value > V::zero() {
        if_true.value.clone()
    } else {
        if_false.value.clone()
    };
    //
    // local_key
    let local_key : &LocalKey< RefCell< Tape<V> > > =
        ThisThreadTape::get();
    //
    // new_tape_id, new_index
    let (new_tape_id, new_index) = local_key.with_borrow_mut( |tape|
        record_cond_exp::<V>( tape, aflag, if_true, if_false )
    );
    //
    AD::new(new_tape_id, new_index, new_value)
}
// ---------------------------------------------------------------------------
/// Conditional expressions on a comparison of two tracked scalars.
///
/// * Syntax :
/// ```text
///     az = cond_exp_lt(&left, &right, &if_true, &if_false)
///     az = cond_exp_le(&left, &right, &if_true, &if_false)
///     az = cond_exp_eq(&left, &right, &if_true, &if_false)
/// ```
///
/// * V : see [doc_generic_v]
///
/// * az :
/// has the value of if_true when left < right (resp. <= , ==)
/// and the value of if_false otherwise.
///
/// Besides the conditional itself, the comparison outcome is recorded, so
/// replaying the tape at a point where the other branch is selected shows
/// up in the function object's compare_change count (the conditional
/// still returns the value for the re-selected branch).
///
/// # Example
/// ```
/// use taylorad::{ad_from_value, cond_exp_lt};
/// let ax = ad_from_value( 1f64 );
/// let ay = ad_from_value( 2f64 );
/// // |x - y| without abs
/// let d1 = &ax - &ay;
/// let d2 = &ay - &ax;
/// let az = cond_exp_lt(&ax, &ay, &d2, &d1);
/// assert_eq!( az.to_value(), 1f64 );
/// ```
pub fn doc_cond_exp_compare() { }
//
// cond_exp_lt
/// if_true when left < right, if_false otherwise;
/// see [doc_cond_exp_compare]
pub fn cond_exp_lt<V> (
    left     : &AD<V> ,
    right    : &AD<V> ,
    if_true  : &AD<V> ,
    if_false : &AD<V> ,
) -> AD<V>
where
    for<'a> &'a V : std::ops::Sub<&'a V, Output=V> ,
    V : Clone + TypeHash + FloatCore + PartialOrd +
        'static + ThisThreadTape ,
{
    // record the observed outcome so branch flips are counted
    left.lt( right );
    //
    // right - left > 0 exactly when left < right
    let aflag : AD<V> = right - left;
    cond_exp( &aflag, if_true, if_false )
}
//
// cond_exp_le
/// if_true when left <= right, if_false otherwise;
/// see [doc_cond_exp_compare]
pub fn cond_exp_le<V> (
    left     : &AD<V> ,
    right    : &AD<V> ,
    if_true  : &AD<V> ,
    if_false : &AD<V> ,
) -> AD<V>
where
    for<'a> &'a V : std::ops::Sub<&'a V, Output=V> ,
    V : Clone + TypeHash + FloatCore + PartialOrd +
        'static + ThisThreadTape ,
{
    // record the observed outcome so branch flips are counted
    left.le( right );
    //
    // left - right > 0 exactly when the false case is selected
    let aflag : AD<V> = left - right;
    cond_exp( &aflag, if_false, if_true )
}
//
// cond_exp_eq
/// if_true when left == right, if_false otherwise;
/// see [doc_cond_exp_compare]
pub fn cond_exp_eq<V> (
    left     : &AD<V> ,
    right    : &AD<V> ,
    if_true  : &AD<V> ,
    if_false : &AD<V> ,
) -> AD<V>
where
    for<'a> &'a V : std::ops::Sub<&'a V, Output=V> ,
    V : Clone + TypeHash + FloatCore + PartialEq + PartialOrd +
        'static + ThisThreadTape ,
{
    // record the observed outcome so branch flips are counted
    let _ = left == right;
    //
    // equal when neither difference is positive
    let pos   : AD<V> = left - right;
    let neg   : AD<V> = right - left;
    let inner = cond_exp( &neg, if_false, if_true );
    cond_exp( &pos, if_false, &inner )
}
