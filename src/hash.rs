// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//
//! This pub(crate) module defines the hashing methods used by taylorad.
//!
//! Link to [parent module](super)
//!
//! The tape uses [TypeHash] to deduplicate its parameter pool:
//! two parameters share an index when value_eq is true.
//! The comparison must not record anything, so it is a separate method
//! instead of `PartialEq` ( `==` on an `AD` records a comparison operator ).
// -------------------------------------------------------------------------
//
// TypeHash
/// Computes the taylorad hash for a value type using rustc_hash::FxHasher
/// and compares values without recording.
pub trait TypeHash
{   fn type_hash(&self) -> u64;
    fn value_eq(&self, other : &Self) -> bool;
}
//
// impl_value_type_hash
/// Implement the TypeHash trait for a primitive float type
///
/// * P : is f32 or f64
macro_rules! impl_value_type_hash {
    ( $P:ident ) => { impl crate::hash::TypeHash for $P
        {   fn type_hash (&self) -> u64
            {   use std::hash::{Hash, Hasher};
                let mut state = rustc_hash::FxHasher::default();
                let element = ordered_float::OrderedFloat( *self );
                element.hash(&mut state);
                state.finish()
            }
            fn value_eq(&self, other : &Self) -> bool
            {   let lhs = ordered_float::OrderedFloat( *self );
                let rhs = ordered_float::OrderedFloat( *other );
                lhs == rhs
            }
        }
    };
}
pub(crate) use impl_value_type_hash;
//
// TypeHash for AD<V>
/// An AD object hashes as its value;
/// the variable information does not contribute.
impl<V : crate::hash::TypeHash> crate::hash::TypeHash for crate::AD<V> {
    fn type_hash(&self) -> u64
    {   self.value.type_hash() }
    //
    fn value_eq(&self, other : &Self) -> bool
    {   self.value.value_eq( &other.value ) }
}
