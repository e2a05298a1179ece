// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//! This pub(crate) module implements FloatCore for AD types
//!
//! Link to [parent module](super)
//!
//! Each elementary function computes its value and, when its operand is a
//! variable on the recording in progress, records the corresponding
//! operator. The operators sin, cos, asin, acos, and atan reserve two
//! variable indices: the result and the companion quantity
//! (cos for sin, sqrt(1 - x * x) for asin and acos, 1 + x * x for atan)
//! that the coefficient recurrences need. The companion is recorded even
//! when nothing else uses it, so it always occupies the next index.
// ---------------------------------------------------------------------------
use std::thread::LocalKey;
use std::cell::RefCell;
//
use crate::{
    AD,
    FloatCore,
    IndexT,
};
use crate::ad::ad_from_value;
use crate::op::id;
use crate::tape::Tape;
use crate::tape::sealed::ThisThreadTape;
// ---------------------------------------------------------------------------
// record_unary
/// Record one unary operator whose operand is a variable on this recording;
/// returns the (tape_id, index) pair for the result.
fn record_unary<V> (
    tape    : &mut Tape<V> ,
    op      : u8           ,
    operand : &AD<V>       ,
) -> (usize, usize)
{
    if ! tape.recording {
        return (0, 0);
    }
    if operand.tape_id != tape.tape_id {
        return (0, 0);
    }
    let new_index = tape.rec.put_op( op );
    tape.rec.put_ind( &[ operand.index as IndexT ] );
    (tape.tape_id, new_index)
}
// ---------------------------------------------------------------------------
/// Create one FloatCore method for `AD<V>` ;
/// i.e., the method that evaluates and records one unary operator.
macro_rules! ad_unary_method { ($name:ident, $OP:ident) => { paste::paste! {
    fn $name(&self) -> Self {
        //
        // new_value
        let new_value = self.value.$name();
        //
        // local_key
        let local_key : &LocalKey< RefCell< Tape<V> > > =
            ThisThreadTape::get();
        //
        // new_tape_id, new_index
        let (new_tape_id, new_index) = local_key.with_borrow_mut(
            |tape| record_unary::<V>( tape, id::$OP, self )
        );
        //
        AD::new(new_tape_id, new_index, new_value)
    }
} } }
// ---------------------------------------------------------------------------
/// Implements the FloatCore trait for AD types.
///
/// The `sign` result is a parameter: its derivative is zero wherever it is
/// defined, so no operator is recorded for it.
///
/// # Example
/// ```
/// use taylorad::{FloatCore, ad_from_value};
/// let ax = ad_from_value( 4f64 );
/// let ay = FloatCore::sqrt( &ax );
/// assert_eq!( ay.to_value(), 2f64 );
/// ```
impl<V> FloatCore for AD<V>
where
    V : Clone + FloatCore + 'static + ThisThreadTape ,
{
    fn nan()  -> Self { ad_from_value( V::nan() ) }
    fn zero() -> Self { ad_from_value( V::zero() ) }
    fn one()  -> Self { ad_from_value( V::one() ) }
    //
    ad_unary_method!(exp,  EXP_OP);
    ad_unary_method!(log,  LOG_OP);
    ad_unary_method!(sqrt, SQRT_OP);
    ad_unary_method!(sin,  SIN_OP);
    ad_unary_method!(cos,  COS_OP);
    ad_unary_method!(asin, ASIN_OP);
    ad_unary_method!(acos, ACOS_OP);
    ad_unary_method!(atan, ATAN_OP);
    ad_unary_method!(abs,  ABS_OP);
    //
    fn sign(&self) -> Self {
        ad_from_value( self.value.sign() )
    }
}
