// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//
//! This pub module implements the binary `AD<V>` operators.
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
use crate::ad::ad_from_value;
use crate::float_core::FloatCore;
use crate::hash::TypeHash;
use crate::op::id;
use crate::tape::Tape;
use crate::tape::sealed::ThisThreadTape;
//
#[cfg(doc)]
use crate::doc_generic_v;
// ---------------------------------------------------------------------------
/// Binary `AD<V>` operators.
///
/// * Syntax :
/// ```text
///        az = &ax Op &ay
///        az = &ax Op &y
///        az = &x  Op &ay
/// ```
///
/// * V : see [doc_generic_v]
///
/// * Op : is the source code token for this binary operator;
/// i.e., `+` , `-` , `*` , or `/` .
///
/// * ax : left hand side `AD<V>` object
/// * ay : right hand side `AD<V>` object
/// * az : result `AD<V>` object
///
/// * x  : left hand side *V* object
/// * y  : right hand side *V* object
///
/// If neither operand is a variable on the recording in progress
/// (or there is no recording in progress) the result is a parameter and
/// nothing is recorded. Otherwise the operator is recorded with the
/// flavor, variable-variable, variable-parameter, or parameter-variable,
/// that matches its operands, and a parameter operand's value is placed
/// in the tape's parameter pool.
///
/// # Example
///```
/// use taylorad::ad_from_value;
///
/// let ax  = ad_from_value( 3f64 );
/// let y   = 4f64;
/// let az  = &ax * &y;
/// assert_eq!( az.to_value(), 12f64 );
///
/// let x   = 3f64;
/// let ay  = ad_from_value( 4f64 );
/// let az  = &x * &ay;
/// assert_eq!( az.to_value(), 12f64 );
/// ```
pub fn doc_ad_binary_op() { }
//
/// Add one binary operator to the `AD<V>` class;
//
/// * V : see [doc_generic_v]
/// * Name : is the operator name; i.e., Add, Sub, Mul, or Div.
/// * Op : is the operator token; i.e., +, -, *, or /.
///
/// see [doc_ad_binary_op]
macro_rules! ad_binary_op { ($Name:ident, $Op:tt) => { paste::paste! {
    // -----------------------------------------------------------------------
    fn [< record_ $Name:lower _aa >]<V> (
        tape: &mut Tape<V> ,
        lhs:       &AD<V>  ,
        rhs:       &AD<V>  ,
    ) -> (usize, usize)
    where
        V : Clone + TypeHash ,
    {
        if ! tape.recording {
            return (0, 0);
        }
        //
        // var_lhs, var_rhs
        let var_lhs = lhs.tape_id == tape.tape_id;
        let var_rhs = rhs.tape_id == tape.tape_id;
        if ! ( var_lhs || var_rhs ) {
            return (0, 0);
        }
        //
        // new_index, tape.rec
        let new_index : usize;
        if var_lhs && var_rhs {
            new_index = tape.rec.put_op( id::[< $Name:upper _VV_OP >] );
            tape.rec.put_ind( &[
                lhs.index as IndexT,
                rhs.index as IndexT,
            ] );
        } else if var_lhs {
            new_index   = tape.rec.put_op( id::[< $Name:upper _VP_OP >] );
            let par_rhs = tape.rec.put_par( &rhs.value );
            tape.rec.put_ind( &[ lhs.index as IndexT, par_rhs ] );
        } else {
            new_index   = tape.rec.put_op( id::[< $Name:upper _PV_OP >] );
            let par_lhs = tape.rec.put_par( &lhs.value );
            tape.rec.put_ind( &[ par_lhs, rhs.index as IndexT ] );
        }
        (tape.tape_id, new_index)
    }
    //
    #[doc = concat!(
        "& `AD<V>` ", stringify!($Op), " & `AD<V>`",
        "; see [doc_ad_binary_op]"
    )]
    impl<V> std::ops::$Name< &AD<V> > for &AD<V>
    where
        for<'a> &'a V: std::ops::$Name<&'a V, Output=V>,
        V : Clone + TypeHash + 'static + crate::tape::sealed::ThisThreadTape ,
    {   type Output = AD<V>;
        //
        fn [< $Name:lower >](self , rhs : &AD<V> ) -> AD<V>
        {
            // new_value
            let new_value     = &self.value  $Op &rhs.value;
            //
            // local_key
            let local_key : &LocalKey< RefCell< Tape<V> > > =
                ThisThreadTape::get();
            //
            // new_tape_id, new_index
            let (new_tape_id, new_index) =
                local_key.with_borrow_mut( |tape|
                    [< record_ $Name:lower _aa >]::<V> ( tape, self, rhs )
            );
            //
            // result
            AD::new(new_tape_id, new_index, new_value)
        }
    }
    // -----------------------------------------------------------------------
    fn [< record_ $Name:lower _av >]<V> (
        tape: &mut Tape<V> ,
        lhs:       &AD<V>  ,
        rhs:       &V      ,
    ) -> (usize, usize)
    where
        V : Clone + TypeHash ,
    {
        if ! tape.recording {
            return (0, 0);
        }
        if lhs.tape_id != tape.tape_id {
            return (0, 0);
        }
        //
        // new_index, tape.rec
        let new_index = tape.rec.put_op( id::[< $Name:upper _VP_OP >] );
        let par_rhs   = tape.rec.put_par( rhs );
        tape.rec.put_ind( &[ lhs.index as IndexT, par_rhs ] );
        //
        (tape.tape_id, new_index)
    }
    //
    #[doc = concat!(
        "& `AD<V>` ", stringify!($Op), " & `V`",
        "; see [doc_ad_binary_op]"
    )]
    impl<V> std::ops::$Name< &V > for &AD<V>
    where
        for<'a> &'a V: std::ops::$Name<&'a V, Output=V>,
        V : Clone + TypeHash + 'static + crate::tape::sealed::ThisThreadTape ,
    {   type Output = AD<V>;
        //
        fn [< $Name:lower >](self , rhs : &V ) -> AD<V>
        {
            // new_value
            let new_value     = &self.value  $Op rhs;
            //
            // local_key
            let local_key : &LocalKey< RefCell< Tape<V> > > =
                ThisThreadTape::get();
            //
            // new_tape_id, new_index
            let (new_tape_id, new_index) =
                local_key.with_borrow_mut( |tape|
                    [< record_ $Name:lower _av >]::<V> ( tape, self, rhs )
            );
            //
            // result
            AD::new(new_tape_id, new_index, new_value)
        }
    }
} } }
//
ad_binary_op!(Add, +);
ad_binary_op!(Sub, -);
ad_binary_op!(Mul, *);
ad_binary_op!(Div, /);
// ---------------------------------------------------------------------------
/// Compound Assignment `AD<V>` operators.
///
/// Syntax :
/// ```text
///     ax Op &ay
///     ax Op &y
/// ```
///
/// * V : see [doc_generic_v]
///
/// * Op : is the source code token for this binary operator;
/// i.e., `+=` , `-=` , `*=` , or `/=` .
///
/// * ax : left hand side `AD<V>` object.
/// * ay : right hand side `AD<V>` object
/// * y  : right hand side *V* object
///
/// # Example
/// ```
/// use taylorad::ad_from_value;
///
/// let mut ax   = ad_from_value( 3f64 );
/// let y        = 4f64;
/// ax          -= &y;
/// assert_eq!( ax.to_value(), -1f64 );
/// ```
pub fn doc_ad_compound_op() { }
//
/// Add one compound assignment operator to the `AD<V>` class;
///
/// * V : see [doc_generic_v]
///
/// * Name : is the operator name without Assign at the end;
/// i.e., Add, Sub, Mul, or Div.
///
/// * Op : is the operator token; i.e., +=, -=, *=, or /= .
///
/// see [doc_ad_compound_op]
macro_rules! ad_compound_op { ($Name:ident, $Op:tt) => { paste::paste! {
    //
    #[doc = concat!(
        "`AD<V>` ", stringify!($Op), " & `AD<V>`",
        "; see [doc_ad_compound_op]"
    )]
    impl<V> std::ops::[< $Name Assign >] < &AD<V> > for AD<V>
    where
        V : Clone + TypeHash + 'static +
            for<'a> std::ops::[< $Name Assign >] <&'a V> +
            crate::tape::sealed::ThisThreadTape ,
    {   //
        fn [< $Name:lower _assign >] (&mut self, rhs : &AD<V> )
        {   //
            // local_key
            let local_key : &LocalKey< RefCell< Tape<V> > > =
                ThisThreadTape::get();
            //
            // new_tape_id, new_index
            let (new_tape_id, new_index) =
                local_key.with_borrow_mut( |tape|
                    [< record_ $Name:lower _aa >]::<V> ( tape, self, rhs )
            );
            //
            // self
            self.tape_id   = new_tape_id;
            self.index     = new_index;
            self.value $Op &rhs.value;
        }
    }
    // ------------------------------------------------------------------------
    #[doc = concat!(
        "`AD<V>` ", stringify!($Op), " & V; see [doc_ad_compound_op]"
    )]
    impl<V> std::ops::[< $Name Assign >] <&V> for AD<V>
    where
        V : Clone + TypeHash + 'static +
            for<'a> std::ops::[< $Name Assign >] <&'a V> +
            crate::tape::sealed::ThisThreadTape ,
    {   //
        fn [< $Name:lower _assign >] (&mut self, rhs : &V)
        {   //
            // local_key
            let local_key : &LocalKey< RefCell< Tape<V> > > =
                ThisThreadTape::get();
            //
            // new_tape_id, new_index
            let (new_tape_id, new_index) =
                local_key.with_borrow_mut( |tape|
                    [< record_ $Name:lower _av >]::<V> ( tape, self, rhs )
            );
            //
            // self
            self.tape_id   = new_tape_id;
            self.index     = new_index;
            self.value $Op rhs;
        }
    }
} } }
//
ad_compound_op!(Add, +=);
ad_compound_op!(Sub, -=);
ad_compound_op!(Mul, *=);
ad_compound_op!(Div, /=);
// ---------------------------------------------------------------------------
// record_value_op_ad!
//
/// Create function that records
/// one binary operation where lhs is *V* and rhs is `AD<V>` .
///
/// * Name         : is the operator name; i.e., Add, Sub, Mul, or Div.
///
/// * Op           : is the operator token; i.e., +, -, *, or /.
///
/// * Function Name: `record_value_` *name* `_ad` where *name* is
///  a lower case version of Name.
macro_rules! record_value_op_ad{ ($Name:ident, $Op:tt) => { paste::paste! {
    #[doc = concat!( "record one ", stringify!($Name),
        " where lhs is a value and rhs is a variable"
    ) ]
    pub(crate) fn [< record_value_ $Name:lower _ad >]<V> (
        tape: &mut Tape<V> ,
        lhs:       &V      ,
        rhs:       &AD<V>  ,
    ) -> (usize, usize)
    where
        V : Clone + TypeHash ,
    {
        if ! tape.recording {
            return (0, 0);
        }
        if rhs.tape_id != tape.tape_id {
            return (0, 0);
        }
        //
        // new_index, tape.rec
        let new_index = tape.rec.put_op( id::[< $Name:upper _PV_OP >] );
        let par_lhs   = tape.rec.put_par( lhs );
        tape.rec.put_ind( &[ par_lhs, rhs.index as IndexT ] );
        //
        (tape.tape_id, new_index)
    }
} } }
record_value_op_ad!(Add, +);
record_value_op_ad!(Sub, -);
record_value_op_ad!(Mul, *);
record_value_op_ad!(Div, /);
// ---------------------------------------------------------------------------
// impl_value_op_ad!
//
// If you try to make this implementation generic w.r.t V,
// you get a message saying that f32 and f64 must be covered
// because they are not local types.
//
/// Implement one binary `AD<V>` operator where lhs is a *V* object.
///
/// * V : see [doc_generic_v]
/// * Name : is the operator name; i.e., Add, Sub, Mul, or Div.
/// * Op : is the operator token; i.e., +, -, *, or /.
///
/// If *V* is the only argument to this macro, it will invoke itself
/// with *Op* equal to +, -, *, / and the corresponding *Name* .
///
/// see [doc_ad_binary_op]
///
/// This macro can be invoked from anywhere given the following use
/// statements:
/// ```text
///     use std::thread::LocalKey;
///     use std::cell::RefCell;
///     use crate::ad::AD;
/// ```
macro_rules! impl_value_op_ad{
    ($V:ty)                      => {
        crate::ad::binary::impl_value_op_ad!($V, Add, +);
        crate::ad::binary::impl_value_op_ad!($V, Sub, -);
        crate::ad::binary::impl_value_op_ad!($V, Mul, *);
        crate::ad::binary::impl_value_op_ad!($V, Div, /);
    };
    ($V:ty, $Name:ident, $Op:tt) => { paste::paste! {
        #[doc =
        "see [doc_ad_binary_op](crate::ad::binary::doc_ad_binary_op)"
        ]
        impl std::ops::$Name< &AD<$V> > for & $V
        where
            for <'a> &'a $V : std::ops::$Name<&'a $V, Output=$V>,
        {   type Output = AD<$V>;
            //
            #[ doc = concat!(
                "compute & `", stringify!($V), "` ",
                stringify!($Op), " & `AD<", stringify!($V), ">` "
            ) ]
            fn [< $Name:lower >]
                (self , rhs : &AD<$V>
            ) -> AD<$V> {
                //
                // new_value
                let new_value = self $Op &rhs.value;
                //
                // local_key
                let local_key : &LocalKey<
                    RefCell< crate::tape::Tape<$V> >
                > = crate::tape::sealed::ThisThreadTape::get();
                //
                // new_tape_id, new_index
                let (new_tape_id, new_index) =
                    local_key.with_borrow_mut( |tape|
                        crate::ad::binary::[< record_value_ $Name:lower _ad >]
                            ::<$V> ( tape, &self, &rhs )
                    );
                //
                // result
                AD::new(new_tape_id, new_index, new_value)
            }
        }
    } }
}
pub(crate) use impl_value_op_ad;
// ---------------------------------------------------------------------------
// Neg
//
/// Unary minus for `AD<V>` .
///
/// The operation sequence has no unary minus operator;
/// this records zero minus the operand.
///
/// # Example
/// ```
/// use taylorad::ad_from_value;
/// let ax  = ad_from_value( 3f64 );
/// let ay  = - &ax;
/// assert_eq!( ay.to_value(), -3f64 );
/// ```
impl<V> std::ops::Neg for &AD<V>
where
    for<'a> &'a V : std::ops::Sub<&'a V, Output=V>,
    V : Clone + TypeHash + FloatCore + 'static +
        crate::tape::sealed::ThisThreadTape ,
{   type Output = AD<V>;
    //
    fn neg(self) -> AD<V> {
        let azero = ad_from_value( V::zero() );
        &azero - self
    }
}
