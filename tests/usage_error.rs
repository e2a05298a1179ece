// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
// Contract violations are reported as panics with a message that names
// the entry point; each test runs on its own thread so a poisoned
// recording state cannot leak between them.
//
use taylorad::{
    abandon_recording,
    start_recording,
    stop_recording,
};
//
// empty_domain
#[test]
#[should_panic(expected = "start_recording: domain is empty")]
fn empty_domain() {
    let _ax = start_recording( Vec::<f64>::new() );
}
//
// already_recording
#[test]
#[should_panic(expected = "already recording")]
fn already_recording() {
    let _ax = start_recording( vec![ 1f64 ] );
    let _bx = start_recording( vec![ 2f64 ] );
}
//
// stop_without_start
#[test]
#[should_panic(expected = "not recording")]
fn stop_without_start() {
    let ay = vec![ taylorad::ad_from_value( 1f64 ) ];
    let _f = stop_recording(ay);
}
//
// empty_range
#[test]
#[should_panic(expected = "range is empty")]
fn empty_range() {
    let _ax = start_recording( vec![ 1f64 ] );
    let _f  = stop_recording( Vec::< taylorad::AD<f64> >::new() );
}
//
// forward_wrong_length
#[test]
#[should_panic(expected = "xp length")]
fn forward_wrong_length() {
    let ax    = start_recording( vec![ 1f64, 2f64 ] );
    let ay    = vec![ &ax[0] + &ax[1] ];
    let mut f = stop_recording(ay);
    let _y    = f.forward(0, vec![ 1f64 ] );
}
//
// forward_order_gap
#[test]
#[should_panic(expected = "p is greater than")]
fn forward_order_gap() {
    let ax    = start_recording( vec![ 1f64 ] );
    let ay    = vec![ &ax[0] + &ax[0] ];
    let mut f = stop_recording(ay);
    // order one before order zero
    let _y    = f.forward(1, vec![ 1f64 ] );
}
//
// reverse_above_order
#[test]
#[should_panic(expected = "d is greater than")]
fn reverse_above_order() {
    let ax    = start_recording( vec![ 1f64 ] );
    let ay    = vec![ &ax[0] + &ax[0] ];
    let mut f = stop_recording(ay);
    f.forward(0, vec![ 1f64 ] );
    let _dx   = f.reverse(1, vec![ 1f64 ] );
}
//
// abandon_allows_restart
#[test]
fn abandon_allows_restart() {
    let _ax = start_recording( vec![ 1f64 ] );
    abandon_recording::<f64>();
    let bx    = start_recording( vec![ 2f64 ] );
    let by    = vec![ &bx[0] * &bx[0] ];
    let mut f = stop_recording(by);
    let y     = f.forward(0, vec![ 2f64 ] );
    assert_eq!( y[0], 4f64 );
}
