// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
// Taped write once vectors: stores, loads, and their derivatives.
//
use taylorad::{
    ADVec,
    ad_from_value,
    start_recording,
    stop_recording,
};
//
// table_lookup
// a table of constants read with a variable index
#[test]
fn table_lookup() {
    let table = vec![ 10f64, 20f64, 30f64 ];
    let ax    = start_recording( vec![ 1f64 ] );
    //
    let mut av : ADVec<f64> = ADVec::new( table.len() );
    for i in 0 .. table.len() {
        av.set( &ad_from_value(i as f64), &ad_from_value(table[i]) );
    }
    assert_eq!( av.len(), 3 );
    //
    // the index is the domain variable, with value 1 while recording
    let aentry = av.get( &ax[0] );
    let ay     = vec![ &ax[0] + &aentry ];
    let mut f  = stop_recording(ay);
    //
    let y = f.forward(0, vec![ 1f64 ] );
    assert_eq!( y[0], 21f64 );
    //
    // replay keeps the recorded slot binding; only the index operand's
    // own contribution changes
    let y = f.forward(0, vec![ 2f64 ] );
    assert_eq!( y[0], 22f64 );
}
//
// stored_variable
// a stored variable carries derivatives through the load
#[test]
fn stored_variable() {
    let ax = start_recording( vec![ 3f64 ] );
    //
    let mut av : ADVec<f64> = ADVec::new(2);
    let azero  = ad_from_value( 0f64 );
    let aone   = ad_from_value( 1f64 );
    let asq    = &ax[0] * &ax[0];
    av.set( &azero, &asq );
    av.set( &aone, &ad_from_value( 5f64 ) );
    //
    let ay    = vec![ av.get( &azero ) ];
    let mut f = stop_recording(ay);
    //
    let y = f.forward(0, vec![ 3f64 ] );
    assert_eq!( y[0], 9f64 );
    let dy = f.forward(1, vec![ 1f64 ] );
    assert_eq!( dy[0], 6f64 );
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert_eq!( dx[0], 6f64 );
}
//
// plain_buffer
// with no recording in progress an ADVec is a plain write once buffer
#[test]
fn plain_buffer() {
    let mut av : ADVec<f64> = ADVec::new(2);
    av.set( &ad_from_value(0f64), &ad_from_value(7f64) );
    let a = av.get( &ad_from_value(0f64) );
    assert_eq!( a.to_value(), 7f64 );
}
//
// write_once
#[test]
#[should_panic(expected = "already been stored")]
fn write_once() {
    let mut av : ADVec<f64> = ADVec::new(1);
    av.set( &ad_from_value(0f64), &ad_from_value(1f64) );
    av.set( &ad_from_value(0f64), &ad_from_value(2f64) );
}
//
// read_before_write
#[test]
#[should_panic(expected = "has not been stored")]
fn read_before_write() {
    let av : ADVec<f64> = ADVec::new(1);
    let _  = av.get( &ad_from_value(0f64) );
}
