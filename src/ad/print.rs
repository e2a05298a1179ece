// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//
//! This pub module implements the tracing hook for recordings.
//!
//! Link to [parent module](super)
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
// print_for
/// Record a value to be printed during zero order forward sweeps.
///
/// * Syntax :
/// ```text
///     print_for(text, &ax)
/// ```
///
/// Each zero order forward sweep of the resulting function object prints
/// *text* followed by the current value that corresponds to *ax* .
/// The record is inert for the derivative calculations.
/// If there is no recording in progress this prints nothing and
/// records nothing.
///
/// # Example
/// ```
/// use taylorad::{start_recording, stop_recording, print_for};
/// let ax    = start_recording( vec![ 2f64 ] );
/// print_for( "x = ", &ax[0] );
/// let ay    = vec![ &ax[0] * &ax[0] ];
/// let mut f = stop_recording( ay );
/// // prints "x = 3" on standard output
/// let y     = f.forward(0, vec![ 3f64 ] );
/// assert_eq!( y[0], 9f64 );
/// ```
pub fn print_for<V>( text : &str, a : &AD<V> )
where
    V : Clone + TypeHash + 'static + ThisThreadTape ,
{
    let local_key : &LocalKey< RefCell< Tape<V> > > =
        ThisThreadTape::get();
    local_key.with_borrow_mut( |tape| {
        if ! tape.recording {
            return;
        }
        let i_txt = tape.rec.put_txt( text );
        if a.tape_id == tape.tape_id {
            tape.rec.put_op( id::PRI_V_OP );
            tape.rec.put_ind( &[ i_txt, a.index as IndexT ] );
        } else {
            let i_par = tape.rec.put_par( &a.value );
            tape.rec.put_op( id::PRI_P_OP );
            tape.rec.put_ind( &[ i_txt, i_par ] );
        }
    } );
}
