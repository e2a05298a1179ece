// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
// Comparison records and the compare_change diagnostic.
//
use taylorad::{
    ad_from_value,
    start_recording,
    stop_recording,
};
//
// variable_variable
#[test]
fn variable_variable() {
    let ax = start_recording( vec![ 1f64, 2f64 ] );
    //
    // recorded as true
    let less  = ax[0] < ax[1];
    assert!( less );
    // recorded as false
    let equal = ax[0] == ax[1];
    assert!( ! equal );
    //
    let ay    = vec![ &ax[0] + &ax[1] ];
    let mut f = stop_recording(ay);
    //
    // same outcomes as the recording
    f.forward(0, vec![ 1f64, 2f64 ] );
    assert_eq!( f.compare_change(), 0 );
    //
    // the less than flips
    f.forward(0, vec![ 2f64, 1f64 ] );
    assert_eq!( f.compare_change(), 1 );
    //
    // the less than flips and the equality flips
    f.forward(0, vec![ 2f64, 2f64 ] );
    assert_eq!( f.compare_change(), 2 );
}
//
// variable_parameter
#[test]
fn variable_parameter() {
    let ax    = start_recording( vec![ 1f64 ] );
    let afive = ad_from_value( 5f64 );
    //
    // recorded as true
    let less = ax[0] < afive;
    assert!( less );
    // swapped operand order records the same comparison
    let more = afive > ax[0];
    assert!( more );
    //
    let ay    = vec![ &ax[0] * &ax[0] ];
    let mut f = stop_recording(ay);
    //
    f.forward(0, vec![ 1f64 ] );
    assert_eq!( f.compare_change(), 0 );
    //
    // both records flip
    f.forward(0, vec![ 6f64 ] );
    assert_eq!( f.compare_change(), 2 );
    //
    // a later order does not change the count
    f.forward(1, vec![ 1f64 ] );
    assert_eq!( f.compare_change(), 2 );
}
//
// le_and_ge
#[test]
fn le_and_ge() {
    let ax = start_recording( vec![ 3f64 ] );
    let a3 = ad_from_value( 3f64 );
    //
    // recorded as true
    let le = ax[0] <= a3;
    assert!( le );
    let ge = ax[0] >= a3;
    assert!( ge );
    //
    let ay    = vec![ &ax[0] + &a3 ];
    let mut f = stop_recording(ay);
    //
    f.forward(0, vec![ 3f64 ] );
    assert_eq!( f.compare_change(), 0 );
    //
    // x <= 3 flips, 3 <= x does not
    f.forward(0, vec![ 4f64 ] );
    assert_eq!( f.compare_change(), 1 );
    //
    // 3 <= x flips, x <= 3 does not
    f.forward(0, vec![ 2f64 ] );
    assert_eq!( f.compare_change(), 1 );
}
//
// parameters_only
// a comparison between parameters is not recorded
#[test]
fn parameters_only() {
    let ax = start_recording( vec![ 1f64 ] );
    let a2 = ad_from_value( 2f64 );
    let a3 = ad_from_value( 3f64 );
    let _  = a2 < a3;
    //
    let ay    = vec![ &ax[0] + &a2 ];
    let mut f = stop_recording(ay);
    //
    f.forward(0, vec![ 9f64 ] );
    assert_eq!( f.compare_change(), 0 );
}
