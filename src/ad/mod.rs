// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//
//! This pub module defines the automatic differentiation class `AD<V>`.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// sub-modules
pub mod binary;
pub mod compare;
pub mod cond_exp;
pub mod print;
pub mod unary;
// ---------------------------------------------------------------------------
//
#[cfg(doc)]
use crate::doc_generic_v;
//
// AD
/// AD acts like V but in addition can record a function evaluation.
///
/// * V : see [doc_generic_v]
///
/// An AD object is in one of two states:
/// 1.  A parameter; i.e., a constant as far as any recording is concerned.
///     Its tape_id is zero, or is left over from a recording that has
///     ended, or belongs to a tape for a different thread.
/// 2.  A variable on this thread's tape; i.e., its tape_id matches the
///     tape_id of the recording in progress and index is its variable
///     index on that tape.
///
/// A variable on some other tape is treated as a parameter by the
/// current recording; its value is captured as a constant.
#[derive(Clone, Debug)]
pub struct AD<V> {
    //
    // tape_id
    /// This is the tape_id that the value of index below corresponds to.
    /// The tape_id zero never identifies a recording.
    pub(crate) tape_id : usize,
    //
    // index
    /// If this AD object's tape_id matches this thread's tape,
    /// *index* is the variable index on that tape for this AD object.
    pub(crate) index   : usize,
    //
    // value
    /// is the value of this AD object.
    pub(crate) value   : V,
}
//
// new
impl<V> AD<V> {
    //
    /// Create an arbitrary new AD object.
    pub(crate) fn new(
        new_tape_id : usize,
        new_index   : usize,
        new_value   : V,
    ) -> Self {
        Self {
            tape_id : new_tape_id,
            index   : new_index,
            value   : new_value,
        }
    }
}
//
// to_value
impl<V> AD<V> {
    //
    /// Convert an AD object to a value
    /// (its variable information is lost).
    ///
    /// # Example
    /// ```
    /// use taylorad::ad_from_value;
    /// let ax  = ad_from_value( 3f64 );
    /// assert_eq!( ax.to_value(), 3f64 );
    /// ```
    pub fn to_value(self) -> V {
        self.value
    }
}
// ---------------------------------------------------------------------------
// Display
//
/// Display only shows the value and ignores the variable information.
///
/// # Example
/// ```
/// use taylorad::ad_from_value;
/// let ax  = ad_from_value( 5f64 );
/// let s   = format!( "{ax}" );
/// assert_eq!(s, "5");
/// ```
impl<V : std::fmt::Display> std::fmt::Display for AD<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
// ---------------------------------------------------------------------------
// ad_from_value
/// Convert a value to an AD object with no function information;
/// i.e., a constant parameter.
///
/// # Example
/// ```
/// use taylorad::ad_from_value;
/// let x   = 3f32;
/// let ax  = ad_from_value(x);
/// assert_eq!( ax.to_value(), 3f32 );
/// ```
pub fn ad_from_value<V>(value : V) -> AD<V> {
    let tape_id   = 0;
    let index     = 0;
    AD::new(tape_id, index, value)
}
// ---------------------------------------------------------------------------
// ad_from_vector
/// Convert a vector to a vector of AD objects with no function information;
/// i.e., a vector of constant parameters.
///
/// # Example
/// ```
/// use taylorad::ad_from_vector;
/// let x    = vec![ 3f64, 4f64 ];
/// let ax   = ad_from_vector(x);
/// assert_eq!( ax[0].clone().to_value(), 3f64 );
/// assert_eq!( ax[1].clone().to_value(), 4f64 );
/// ```
pub fn ad_from_vector<V> ( vec : Vec<V> ) -> Vec< AD<V> > {
    assert_ne!( vec.len() , 0 );
    let avec      = vec.into_iter().map( |value| {
        let tape_id   = 0;
        let index     = 0;
        AD::new(tape_id, index, value)
    } ).collect();
    avec
}
// ---------------------------------------------------------------------------
// ad_to_vector
/// Convert a vector of AD objects to a vector of values
/// (any variable information is lost).
///
/// # Example
/// ```
/// use taylorad::{ad_from_vector, ad_to_vector};
/// let ax    = ad_from_vector( vec![ 3f64, 4f64 ] );
/// let y     = ad_to_vector(ax);
/// assert_eq!( y , vec![ 3f64, 4f64 ] );
/// ```
pub fn ad_to_vector<V> ( avec : Vec< AD<V> > ) -> Vec<V> {
    assert_ne!( avec.len() , 0 );
    let vec  = avec.into_iter().map( |ad| ad.value).collect();
    vec
}
// -------------------------------------------------------------------------
// impl_ad_from_f32
/// Implement from f32 for `AD<V>` .
///
/// * V : see [doc_generic_v]
///
/// This macro must be executed once for any type *V*  where
/// `AD<V>` is used. The taylorad package automatically executes it
/// for the following types: `f32` , `f64` , `AD<f32>` , `AD<f64>` .
///
/// This macro can be invoked from anywhere.
macro_rules! impl_ad_from_f32{ ($V:ty) => {
    impl From<f32> for crate::AD<$V> {
        fn from( f32_value : f32 ) -> crate::AD<$V> {
            let tape_id         = 0;
            let index           = 0;
            let value      : $V = f32_value.into();
            crate::AD::new(tape_id, index, value)
        }
    }
} }
pub(crate) use impl_ad_from_f32;
// -------------------------------------------------------------------------
// impl_ad_from_f64
/// Implement from f64 for `AD<V>` .
///
/// Only AD objects with f64 precision are supported; e.g.,
/// `AD<f32>` is not supported.
///
/// This macro can be invoked from anywhere.
macro_rules! impl_ad_from_f64{ ($V:ty) => {
    impl From<f64> for crate::AD<$V> {
        fn from( f64_value : f64 ) -> crate::AD<$V> {
            let tape_id         = 0;
            let index           = 0;
            let value      : $V = f64_value.into();
            crate::AD::new(tape_id, index, value)
        }
    }
} }
pub(crate) use impl_ad_from_f64;
