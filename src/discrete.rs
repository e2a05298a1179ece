// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//
//! This pub module defines taped calls to discrete functions.
//!
//! Link to [parent module](super)
//!
//! A discrete function is an application defined piecewise constant
//! function; e.g., a table lookup that selects a coefficient.
//! Its derivative is zero wherever it is defined, so the tape records
//! the call and replays the value, and the coefficients of order
//! greater than zero are zero.
// ---------------------------------------------------------------------------
use std::thread::LocalKey;
use std::cell::RefCell;
//
use crate::{
    AD,
    IndexT,
};
use crate::op::id::DIS_OP;
use crate::tape::Tape;
use crate::tape::sealed::ThisThreadTape;
//
#[cfg(doc)]
use crate::doc_generic_v;
// ---------------------------------------------------------------------------
// DiscreteFn
/// The type of a discrete function for the value type V;
/// see [doc_generic_v]
pub type DiscreteFn<V> = fn(&V) -> V;
// ---------------------------------------------------------------------------
// sealed::GlobalDiscreteVec
pub (crate) mod sealed {
    //! The sub-module sealed is used to seal traits in this package.
    //
    use std::sync::LazyLock;
    use std::sync::RwLock;
    use super::DiscreteFn;
    //
    /// The registry of discrete functions for the value type Self.
    pub trait GlobalDiscreteVec
    where
        Self : Sized + 'static ,
    {
        fn get() -> &'static LazyLock< RwLock< Vec< DiscreteFn<Self> > > >;
    }
}
// impl_global_discrete_vec!
/// Implement GlobalDiscreteVec for the value type *V* ;
/// see [doc_generic_v]
///
/// This macro can be invoked from anywhere given the following use
/// statements:
/// ```text
///     use std::sync::LazyLock;
///     use std::sync::RwLock;
/// ```
macro_rules! impl_global_discrete_vec{ ($V:ty) => {
    #[doc = concat!(
        "The discrete functions registered for `", stringify!($V), "`"
    ) ]
    impl crate::discrete::sealed::GlobalDiscreteVec for $V {
        fn get() -> &'static LazyLock<
            RwLock< Vec< crate::discrete::DiscreteFn<$V> > >
        > {
            pub static DISCRETE_VEC : LazyLock<
                RwLock< Vec< crate::discrete::DiscreteFn<$V> > >
            > = LazyLock::new( || RwLock::new( Vec::new() ) );
            &DISCRETE_VEC
        }
    }
} }
pub(crate) use impl_global_discrete_vec;
// ---------------------------------------------------------------------------
// discrete_register
/// Register one discrete function and return its index.
///
/// * Syntax :
/// ```text
///     index = discrete_register::<V>(fun)
/// ```
/// The index identifies fun in later calls to [discrete] ;
/// registration is process wide for the value type V.
///
/// * Example : see [discrete]
pub fn discrete_register<V>( fun : DiscreteFn<V> ) -> usize
where
    V : sealed::GlobalDiscreteVec ,
{
    let lock    = &**< V as sealed::GlobalDiscreteVec >::get();
    let mut vec = lock.write().unwrap();
    vec.push( fun );
    vec.len() - 1
}
// ---------------------------------------------------------------------------
// get_fn
/// The discrete function with the specified index.
pub(crate) fn get_fn<V>( index : usize ) -> DiscreteFn<V>
where
    V : sealed::GlobalDiscreteVec ,
{
    let lock = &**< V as sealed::GlobalDiscreteVec >::get();
    let vec  = lock.read().unwrap();
    assert!( index < vec.len(),
        "discrete: index does not correspond to a registered function"
    );
    vec[index]
}
// ---------------------------------------------------------------------------
// discrete
/// Evaluate and tape one discrete function call.
///
/// * Syntax :
/// ```text
///     ay = discrete(index, &ax)
/// ```
///
/// * index : the value returned by [discrete_register] for the function.
///
/// * ay :
/// has the value fun( ax ). If ax is a variable on the recording in
/// progress, the call is recorded; every replay evaluates fun at the
/// current zero order value and the higher order coefficients are zero.
///
/// # Example
/// ```
/// use taylorad::{discrete, discrete_register};
/// use taylorad::{start_recording, stop_recording};
///
/// // a piecewise constant interest rate
/// fn rate(x : &f64) -> f64 {
///     if *x < 100.0 { 0.02 } else { 0.05 }
/// }
///
/// let index = discrete_register::<f64>(rate);
/// let ax    = start_recording( vec![ 150f64 ] );
/// let ar    = discrete(index, &ax[0]);
/// let ay    = vec![ &ax[0] * &ar ];
/// let mut f = stop_recording(ay);
///
/// let y     = f.forward(0, vec![ 50f64 ] );
/// assert_eq!( y[0], 50.0 * 0.02 );
/// let dy    = f.forward(1, vec![ 1f64 ] );
/// assert_eq!( dy[0], 0.02 );
/// ```
pub fn discrete<V>( index : usize, ax : &AD<V> ) -> AD<V>
where
    V : Clone + sealed::GlobalDiscreteVec + ThisThreadTape ,
{
    let fun       = get_fn::<V>( index );
    let new_value = fun( &ax.value );
    //
    // local_key
    let local_key : &LocalKey< RefCell< Tape<V> > > =
        ThisThreadTape::get();
    //
    // new_tape_id, new_index
    let (new_tape_id, new_index) = local_key.with_borrow_mut( |tape| {
        if ! tape.recording || ax.tape_id != tape.tape_id {
            return (0, 0);
        }
        let new_index = tape.rec.put_op( DIS_OP );
        tape.rec.put_ind( &[ index as IndexT, ax.index as IndexT ] );
        (tape.tape_id, new_index)
    } );
    //
    AD::new(new_tape_id, new_index, new_value)
}
