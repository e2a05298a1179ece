// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//
//! This pub module defines tape objects and functions
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
//
use std::cell::RefCell;
use std::thread::LocalKey;
use std::sync::Mutex;
//
use rustc_hash::FxHashMap;
//
use crate::{
    AD,
    ADFun,
};
use crate::hash::TypeHash;
use crate::op::id::{
    INV_OP,
    NON_OP,
    PAR_OP,
};
use crate::op::info::num_var;
//
#[cfg(doc)]
use crate::doc_generic_v;
//
/// The type is used, instead of usize, to save space in vectors of indices.
pub type IndexT = u32;
// ---------------------------------------------------------------------------
// TapeRec
/// An operation sequence; i.e., a single assignment representation of
/// a function where each variable is assigned by exactly one operator.
pub struct TapeRec<V> {
    //
    // op_all
    /// For each position in the operation sequence, op_all\[i_op\]
    /// is the corresponding operator id.
    /// Position zero always holds NON_OP, the sentinel that accounts for
    /// the reserved variable index zero.
    pub(crate) op_all  : Vec<u8>,
    //
    // ind_all
    /// Flat concatenation of all the operand indices.
    /// The slice for op_all\[i_op\] has length num_ind( op_all\[i_op\] )
    /// and starts where the previous operator's slice ended.
    pub(crate) ind_all : Vec<IndexT>,
    //
    // par_all
    /// The parameter pool; i.e., the constants captured while recording.
    pub(crate) par_all : Vec<V>,
    //
    // txt_all
    /// The text pool used by the tracing operators.
    pub(crate) txt_all : Vec<String>,
    //
    // num_var
    /// Total number of variables; i.e., the sum of num_var over op_all .
    pub(crate) num_var : usize,
    //
    // par_map
    /// maps a value hash to the parameter indices with that hash;
    /// used so that equal values share one parameter index.
    pub(crate) par_map : FxHashMap< u64, Vec<IndexT> >,
}
// ---------------------------------------------------------------------------
impl<V> TapeRec<V> {
    //
    // TapeRec::new
    /// An operation sequence containing just the NON_OP sentinel,
    /// so the first recorded operator produces variable index one.
    pub(crate) fn new() -> Self {
        let mut rec = Self {
            op_all  : Vec::new(),
            ind_all : Vec::new(),
            par_all : Vec::new(),
            txt_all : Vec::new(),
            num_var : 0,
            par_map : FxHashMap::default(),
        };
        rec.put_op( NON_OP );
        rec
    }
    //
    // put_op
    /// Append one operator and reserve its variable indices.
    /// The return value is the variable index for the first result;
    /// the reservation happens here, before the operands are appended.
    pub(crate) fn put_op(&mut self, op : u8) -> usize {
        let res      = self.num_var;
        self.op_all.push( op );
        self.num_var += num_var( op );
        res
    }
    //
    // put_ind
    /// Append the operand indices for the most recent put_op .
    pub(crate) fn put_ind(&mut self, ind : &[IndexT]) {
        debug_assert!(
            ind.len() == crate::op::info::num_ind(
                *self.op_all.last().unwrap()
            )
        );
        self.ind_all.extend_from_slice( ind );
    }
    //
    // put_txt
    /// Append one text to the text pool and return its index.
    pub(crate) fn put_txt(&mut self, text : &str) -> IndexT {
        let index = self.txt_all.len() as IndexT;
        self.txt_all.push( text.to_string() );
        index
    }
    //
    // get_op
    /// The operator id at position i_op of the operation sequence.
    pub(crate) fn get_op(&self, i_op : usize) -> u8 {
        self.op_all[i_op]
    }
    //
    // get_ind
    /// The slice of n_ind operand indices starting at position offset.
    pub(crate) fn get_ind(&self, n_ind : usize, offset : usize) -> &[IndexT] {
        &self.ind_all[ offset .. offset + n_ind ]
    }
    //
    // get_par
    /// The parameter with the specified index.
    pub(crate) fn get_par(&self, index : usize) -> &V {
        &self.par_all[index]
    }
    //
    // get_txt
    pub(crate) fn get_txt(&self, index : usize) -> &str {
        &self.txt_all[index]
    }
    //
    // tot_num_var
    /// Total number of variables, including the reserved variable zero.
    pub(crate) fn tot_num_var(&self) -> usize {
        self.num_var
    }
    //
    // num_op
    /// Number of operators in the operation sequence.
    pub(crate) fn num_op(&self) -> usize {
        self.op_all.len()
    }
    //
    // num_ind
    /// Number of operand indices in the operation sequence.
    pub(crate) fn num_ind(&self) -> usize {
        self.ind_all.len()
    }
}
// ---------------------------------------------------------------------------
impl<V> TapeRec<V>
where
    V : Clone + TypeHash ,
{
    //
    // put_par
    /// Append one value to the parameter pool and return its index.
    /// If an equal value is already in the pool, its index is returned
    /// instead and the pool is unchanged.
    pub(crate) fn put_par(&mut self, value : &V) -> IndexT {
        let hash     = value.type_hash();
        let indices  = self.par_map.entry( hash ).or_default();
        for &index in indices.iter() {
            if self.par_all[index as usize].value_eq( value ) {
                return index;
            }
        }
        let new_index = self.par_all.len() as IndexT;
        indices.push( new_index );
        self.par_all.push( value.clone() );
        new_index
    }
}
// ---------------------------------------------------------------------------
// Tape
///
/// `Tape` < *V* > is the type where an `AD<V>`
/// operation sequence is recorded.
///
/// * V : see [doc_generic_v]
pub struct Tape<V> {
    //
    // rec
    /// the operation sequence being recorded.
    pub(crate) rec       : TapeRec<V>,
    //
    // recording
    /// if true a recording is currently in progress on this tape.
    pub(crate) recording : bool,
    //
    // tape_id
    /// a different tape_id is chosen for each recording.
    pub(crate) tape_id   : usize,
    //
    // n_domain
    /// number of independent variables in the current recording.
    pub(crate) n_domain  : usize,
    //
    // n_vec_ad
    /// number of taped vectors bound to the current recording.
    pub(crate) n_vec_ad  : usize,
}
// ---------------------------------------------------------------------------
impl<V> Tape<V> {
    //
    // Tape::new
    /// Sets recording false and tape_id to zero.
    /// (The tape with tape_id zero never has recording true.)
    pub fn new() -> Self {
        Self {
            rec       : TapeRec::new(),
            recording : false,
            tape_id   : 0,
            n_domain  : 0,
            n_vec_ad  : 0,
        }
    }
}
// ---------------------------------------------------------------------------
// NEXT_TAPE_ID
/// The tape_id values that have been used are 1 .. NEXT_TAPE_ID.
/// (The tape_id 0 is not used for a recording.)
pub(crate) static NEXT_TAPE_ID : Mutex<usize> = Mutex::new(1);
// ---------------------------------------------------------------------------
//
// sealed::ThisThreadTape
pub (crate) mod sealed {
    //! The sub-module sealed is used to seal traits in this package.
    //
    use super::Tape;
    use std::cell::RefCell;
    use std::thread::LocalKey;
    //
    /// ```text
    ///     local_key : &LocalKey< RefCell< Tape<V> > > = ThisThreadTape::get()
    //      local_key.with_borrow_mut( |tape| { ... } )
    /// ```
    /// Sets `tape` to a reference to the tape for recording `AD<V>`
    /// operations.
    pub trait ThisThreadTape
        where
        Self : Sized + 'static ,
    {
        fn get() -> &'static LocalKey< RefCell< Tape<Self> > >;
    }
}
// impl_this_thread_tape!
/// Implement ThisThreadTape for the value type V
///
/// * V : see [doc_generic_v]
///
/// This macro must be executed once for any type *V*  where
/// `AD<V>` is used. The taylorad package automatically executes it
/// for the following types: `f32` , `f64` , `AD<f32>` , `AD<f64>` .
///
/// This macro can be invoked from anywhere given the following use
/// statements:
/// ```text
///     use std::thread::LocalKey;
///     use std::cell::RefCell;
/// ```
macro_rules! impl_this_thread_tape{ ($V:ty) => {
    #[doc = concat!(
        "This threads tape for recording ",
        "`AD<" , stringify!($V), ">` operations"
    ) ]
    impl crate::tape::sealed::ThisThreadTape for $V {
        fn get() -> &'static LocalKey<
                RefCell< crate::tape::Tape<$V> >
            > {
            thread_local! {
                pub(crate) static THIS_THREAD_TAPE : RefCell<
                    crate::tape::Tape<$V>
                > = RefCell::new( crate::tape::Tape::new() );
            }
            &THIS_THREAD_TAPE
        }
    }
} }
pub(crate) use impl_this_thread_tape;
// ----------------------------------------------------------------------------
// start_recording
//
/// This starts recording a new `AD<V>` operation sequence.
///
/// * Syntax :
/// ```text
///     adomain = start_recording(domain)
/// ```
///
/// * V : see [doc_generic_v]
///
/// * Recording :
/// There must not currently be a recording in process on the current thread
/// when start_recording is called.
/// The recording is stopped when [stop_recording] is called and
/// discarded when [abandon_recording] is called.
///
/// * domain :
/// This vector contains the value of the domain (independent) variables
/// for use during the recording. It must not be empty.
///
/// * adomain :
/// The return is a vector of variables
/// with the same length and values as domain.
/// Dependencies with respect to these variables will be recorded on
/// the tape for this thread.
/// The independent variables get the variable indices
/// 1 .. domain.len() in registration order.
///
/// * Example : see [stop_recording]
pub fn start_recording<V>(domain : Vec<V> ) -> Vec< AD<V> >
where
    V : Clone + Sized + 'static + sealed::ThisThreadTape ,
{
    assert_ne!( domain.len(), 0,
        "start_recording: domain is empty"
    );
    //
    // tape_id
    let tape_id : usize;
    {   let mut next_tape_id = NEXT_TAPE_ID.lock().unwrap();
        //
        // The rest of this block has a lock, so it is fast and can't fail.
        tape_id        = *next_tape_id;
        *next_tape_id += 1;
    }
    let local_key : &LocalKey< RefCell< Tape<V> > > =
        sealed::ThisThreadTape::get();
    let index_all : Vec<usize> = local_key.with_borrow_mut( |tape| {
        assert_ne!( tape_id, 0);
        assert!( ! tape.recording ,
            "start_recording: This thread's tape is already recording"
        );
        //
        tape.rec         = TapeRec::new();
        tape.tape_id     = tape_id;
        tape.recording   = true;
        tape.n_domain    = domain.len();
        tape.n_vec_ad    = 0;
        //
        // one INV_OP per independent variable
        let mut index_all = Vec::with_capacity( domain.len() );
        for _j in 0 .. domain.len() {
            index_all.push( tape.rec.put_op( INV_OP ) );
        }
        index_all
    } );
    //
    // adomain
    let adomain = domain.into_iter().zip( index_all ).map(
        | (value, index) | AD::new(tape_id, index, value)
    ).collect();
    //
    adomain
}
// ----------------------------------------------------------------------------
// stop_recording
//
/// Stops a recording and moves it to an ADFun object.
///
/// * Syntax :
/// ```text
///     f = stop_recording(arange)
/// ```
///
/// * V : see [doc_generic_v]
///
/// * Recording :
/// There must currently be a recording in process on the current thread
/// when stop_recording is called.
///
/// * arange :
/// This `Vec< AD<V> >` specifies the range space (dependent) variables.
/// It must not be empty. An element that is not a variable on the
/// current recording is first materialized as one; i.e., a parameter
/// operator is recorded for it.
///
/// * f :
/// The return value is an [ADFun] containing the operation sequence
/// that computed arange as a function of the domain variables returned by
/// [start_recording] .
/// It can be used to compute the values for the function and its
/// derivatives of any order.
///
/// # Example
/// ```
/// use taylorad::start_recording;
/// use taylorad::stop_recording;
/// let domain  : Vec<f32>  = vec![ 1.0, 2.0 ];
/// let adomain             = start_recording( domain );
/// let sum                 = &adomain[0] + &adomain[1];
/// let diff                = &adomain[0] - &adomain[1];
/// let times               = &adomain[0] * &adomain[1];
/// let arange              = vec![ sum, diff, times ];
/// let f                   = stop_recording( arange );
/// assert_eq!( f.domain_len(), 2);
/// assert_eq!( f.range_len(), 3);
/// ```
pub fn stop_recording<V>( arange : Vec< AD<V> > ) -> ADFun<V>
where
    V : Clone + TypeHash + Sized + 'static + sealed::ThisThreadTape ,
{
    assert_ne!( arange.len(), 0,
        "stop_recording: range is empty"
    );
    //
    // tape
    let local_key : &LocalKey< RefCell< Tape<V> > > =
        sealed::ThisThreadTape::get();
    local_key.with_borrow_mut( |tape| {
        //
        // tape.recording
        assert!( tape.recording ,
            "stop_recording: This thread's tape is not recording"
        );
        tape.recording = false;
        //
        // dep_var
        // promote range elements that are not variables on this recording
        let mut dep_var : Vec<IndexT> = Vec::with_capacity( arange.len() );
        for ay in arange.iter() {
            let index : usize;
            if ay.tape_id == tape.tape_id {
                index = ay.index;
            } else {
                let i_par = tape.rec.put_par( &ay.value );
                index     = tape.rec.put_op( PAR_OP );
                tape.rec.put_ind( &[ i_par ] );
            }
            dep_var.push( index as IndexT );
        }
        //
        // check documented assumptions
        match IndexT::try_from( tape.rec.num_ind() ) {
            Err(_) => panic!( "tape.rec.num_ind() > IndexT::MAX" ),
            Ok(_)  => (),
        }
        match IndexT::try_from( tape.rec.tot_num_var() ) {
            Err(_) => panic!( "tape.rec.tot_num_var() > IndexT::MAX" ),
            Ok(_)  => (),
        }
        //
        // ind_var
        let ind_var : Vec<IndexT> =
            (1 ..= tape.n_domain).map( |i| i as IndexT ).collect();
        //
        // rec, tape.rec
        let rec = std::mem::replace( &mut tape.rec, TapeRec::new() );
        //
        ADFun::from_recording( rec, ind_var, dep_var )
    } )
}
// ----------------------------------------------------------------------------
// abandon_recording
//
/// Discards the recording in progress on this thread's tape.
///
/// Use this when a recording turns out not to be needed;
/// the tracked scalars bound to it become parameters.
///
/// # Example
/// ```
/// use taylorad::{start_recording, abandon_recording};
/// let _ax = start_recording( vec![ 1f64 ] );
/// abandon_recording::<f64>();
/// // would panic without the abandon above
/// let _bx = start_recording( vec![ 2f64 ] );
/// # abandon_recording::<f64>();
/// ```
pub fn abandon_recording<V>()
where
    V : Clone + Sized + 'static + sealed::ThisThreadTape ,
{
    let local_key : &LocalKey< RefCell< Tape<V> > > =
        sealed::ThisThreadTape::get();
    local_key.with_borrow_mut( |tape| {
        assert!( tape.recording ,
            "abandon_recording: This thread's tape is not recording"
        );
        tape.recording = false;
        tape.rec       = TapeRec::new();
    } );
}
