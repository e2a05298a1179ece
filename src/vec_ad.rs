// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//
//! This pub module defines the taped write once vector.
//!
//! Link to [parent module](super)
//!
//! An [ADVec] is an indexed buffer whose stores and loads go on the tape,
//! so a recorded function can contain table lookups.
//! Each slot may be stored exactly once.
//! A load is resolved, while recording, to the store for the slot that
//! the index selects; the tape keeps that binding together with the
//! index operand, and replay does not re-resolve the lookup.
// ---------------------------------------------------------------------------
use std::thread::LocalKey;
use std::cell::RefCell;
//
use crate::{
    AD,
    IndexT,
};
use crate::hash::TypeHash;
use crate::op::id::{
    LD_P_OP,
    LD_V_OP,
    ST_PP_OP,
    ST_PV_OP,
    ST_VP_OP,
    ST_VV_OP,
};
use crate::tape::Tape;
use crate::tape::sealed::ThisThreadTape;
// ---------------------------------------------------------------------------
// ToIndex
/// Conversion from a value to a slot index (truncation toward zero).
pub trait ToIndex {
    fn to_index(&self) -> usize;
}
/// Implement the ToIndex trait for a primitive float type
macro_rules! impl_to_index_for_primitive{ ($P:ident) => {
    impl crate::vec_ad::ToIndex for $P {
        fn to_index(&self) -> usize { *self as usize }
    }
} }
pub(crate) use impl_to_index_for_primitive;
//
/// An AD object converts as its value.
impl<V : ToIndex> ToIndex for AD<V> {
    fn to_index(&self) -> usize {
        self.value.to_index()
    }
}
// ---------------------------------------------------------------------------
// ADVec
/// A write once vector whose stores and loads are recorded.
///
/// # Example
/// ```
/// use taylorad::{ADVec, ad_from_value, start_recording, stop_recording};
///
/// let table = vec![ 10f64, 20f64, 30f64 ];
/// let ax    = start_recording( vec![ 5f64 ] );
/// let mut av : ADVec<f64> = ADVec::new( table.len() );
/// for i in 0 .. table.len() {
///     av.set( &ad_from_value(i as f64), &ad_from_value(table[i]) );
/// }
/// let a1    = av.get( &ad_from_value(1f64) );
/// let ay    = vec![ &ax[0] + &a1 ];
/// let mut f = stop_recording(ay);
///
/// let y = f.forward(0, vec![ 7f64 ] );
/// assert_eq!( y[0], 27f64 );
/// ```
pub struct ADVec<V> {
    //
    // tape_id
    /// the recording this vector's slot bindings belong to.
    tape_id : usize,
    //
    // vec_id
    /// identifies this vector among the taped vectors of that recording.
    vec_id  : usize,
    //
    // value
    /// the stored value for each slot; None until the slot is stored.
    value   : Vec< Option<V> >,
    //
    // var
    /// for each stored slot, the variable index of the store result
    /// on the recording identified by tape_id.
    var     : Vec< Option<IndexT> >,
}
// ---------------------------------------------------------------------------
impl<V> ADVec<V>
where
    V : Clone + TypeHash + ToIndex + 'static + ThisThreadTape ,
{
    //
    // ADVec::new
    /// A vector with the specified number of slots, none stored yet.
    pub fn new(len : usize) -> Self {
        Self {
            tape_id : 0,
            vec_id  : 0,
            value   : vec![ None; len ],
            var     : vec![ None; len ],
        }
    }
    //
    // len
    /// Number of slots in this vector.
    pub fn len(&self) -> usize {
        self.value.len()
    }
    //
    // set
    /// Store a value in the slot that aindex selects.
    /// Each slot can be stored at most once.
    pub fn set(&mut self, aindex : &AD<V>, avalue : &AD<V>) {
        let slot = aindex.value.to_index();
        assert!( slot < self.value.len(),
            "ADVec::set: index is out of range"
        );
        assert!( self.value[slot].is_none(),
            "ADVec::set: this slot has already been stored"
        );
        self.value[slot] = Some( avalue.value.clone() );
        //
        // local_key
        let local_key : &LocalKey< RefCell< Tape<V> > > =
            ThisThreadTape::get();
        local_key.with_borrow_mut( |tape| {
            if ! tape.recording {
                return;
            }
            //
            // bind this vector to the recording in progress
            if self.tape_id != tape.tape_id {
                self.tape_id    = tape.tape_id;
                self.vec_id     = tape.n_vec_ad;
                tape.n_vec_ad  += 1;
                self.var        = vec![ None; self.value.len() ];
            }
            //
            // op
            let var_index = aindex.tape_id == tape.tape_id;
            let var_value = avalue.tape_id == tape.tape_id;
            let op = match (var_index, var_value) {
                (false, false) => ST_PP_OP,
                (false, true ) => ST_PV_OP,
                (true , false) => ST_VP_OP,
                (true , true ) => ST_VV_OP,
            };
            let res = tape.rec.put_op( op );
            //
            // operand indices
            let i_index = if var_index {
                aindex.index as IndexT
            } else {
                tape.rec.put_par( &aindex.value )
            };
            let i_value = if var_value {
                avalue.index as IndexT
            } else {
                tape.rec.put_par( &avalue.value )
            };
            tape.rec.put_ind( &[ self.vec_id as IndexT, i_index, i_value ] );
            //
            self.var[slot] = Some( res as IndexT );
        } );
    }
    //
    // get
    /// Load the value stored in the slot that aindex selects.
    /// The slot must already have been stored.
    pub fn get(&self, aindex : &AD<V>) -> AD<V> {
        let slot = aindex.value.to_index();
        assert!( slot < self.value.len(),
            "ADVec::get: index is out of range"
        );
        let new_value = match &self.value[slot] {
            Some(value) => value.clone(),
            None => panic!( "ADVec::get: this slot has not been stored" ),
        };
        //
        // local_key
        let local_key : &LocalKey< RefCell< Tape<V> > > =
            ThisThreadTape::get();
        let (new_tape_id, new_index) = local_key.with_borrow_mut( |tape| {
            if ! tape.recording || self.tape_id != tape.tape_id {
                return (0, 0);
            }
            //
            // st_var
            // slots stored outside this recording act as parameters
            let st_var = match self.var[slot] {
                Some(var)  => var,
                None       => return (0, 0),
            };
            //
            // op
            let var_index = aindex.tape_id == tape.tape_id;
            let op  = if var_index { LD_V_OP } else { LD_P_OP };
            let res = tape.rec.put_op( op );
            //
            // operand indices
            let i_index = if var_index {
                aindex.index as IndexT
            } else {
                tape.rec.put_par( &aindex.value )
            };
            tape.rec.put_ind( &[ self.vec_id as IndexT, i_index, st_var ] );
            //
            (tape.tape_id, res)
        } );
        //
        AD::new(new_tape_id, new_index, new_value)
    }
}
