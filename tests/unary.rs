// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
// The exp, log, sqrt, and abs operators:
// values, Taylor coefficients, and adjoints.
//
use taylorad::{
    FloatCore,
    near_equal,
    start_recording,
    stop_recording,
};
//
fn ok(value : f64, check : f64) -> bool {
    near_equal( &value, &check, &1e-12, &1e-12 )
}
//
// test_exp
#[test]
fn test_exp() {
    let ax    = start_recording( vec![ 2f64 ] );
    let ay    = vec![ FloatCore::exp( &ax[0] ) ];
    let mut f = stop_recording(ay);
    //
    let e2 = 2f64.exp();
    let y  = f.forward(0, vec![ 2f64 ] );
    assert!( ok( y[0], e2 ) );
    let dy = f.forward(1, vec![ 1f64 ] );
    assert!( ok( dy[0], e2 ) );
    let ddy = f.forward(2, vec![ 0f64 ] );
    assert!( ok( ddy[0], e2 / 2.0 ) );
    //
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert!( ok( dx[0], e2 ) );
    //
    // z1 = exp(x0) * x1 : partials w.r.t. (x0, x1) at x1 = 1
    let partials = f.reverse(1, vec![ 1f64 ] );
    assert!( ok( partials[0], e2 ) );
    assert!( ok( partials[1], e2 ) );
}
//
// test_log
#[test]
fn test_log() {
    let ax    = start_recording( vec![ 2f64 ] );
    let ay    = vec![ FloatCore::log( &ax[0] ) ];
    let mut f = stop_recording(ay);
    //
    let y  = f.forward(0, vec![ 2f64 ] );
    assert!( ok( y[0], 2f64.ln() ) );
    let dy = f.forward(1, vec![ 1f64 ] );
    assert!( ok( dy[0], 0.5 ) );
    // log''(x) / 2! = - 1 / (2 x * x)
    let ddy = f.forward(2, vec![ 0f64 ] );
    assert!( ok( ddy[0], -0.125 ) );
    //
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert!( ok( dx[0], 0.5 ) );
    //
    // z1 = x1 / x0 : partials w.r.t. (x0, x1) at (2, 1)
    let partials = f.reverse(1, vec![ 1f64 ] );
    assert!( ok( partials[0], -0.25 ) );
    assert!( ok( partials[1], 0.5 ) );
}
//
// test_sqrt
#[test]
fn test_sqrt() {
    let ax    = start_recording( vec![ 4f64 ] );
    let ay    = vec![ FloatCore::sqrt( &ax[0] ) ];
    let mut f = stop_recording(ay);
    //
    let y  = f.forward(0, vec![ 4f64 ] );
    assert!( ok( y[0], 2.0 ) );
    let dy = f.forward(1, vec![ 1f64 ] );
    assert!( ok( dy[0], 0.25 ) );
    // sqrt''(4) / 2! = - 1 / 64
    let ddy = f.forward(2, vec![ 0f64 ] );
    assert!( ok( ddy[0], -1.0 / 64.0 ) );
    //
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert!( ok( dx[0], 0.25 ) );
}
//
// test_abs
#[test]
fn test_abs() {
    let ax    = start_recording( vec![ -3f64 ] );
    let ay    = vec![ FloatCore::abs( &ax[0] ) ];
    let mut f = stop_recording(ay);
    //
    let y  = f.forward(0, vec![ -3f64 ] );
    assert_eq!( y[0], 3f64 );
    let dy = f.forward(1, vec![ 1f64 ] );
    assert_eq!( dy[0], -1f64 );
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert_eq!( dx[0], -1f64 );
    //
    // on the positive side
    let y  = f.forward(0, vec![ 5f64 ] );
    assert_eq!( y[0], 5f64 );
    let dy = f.forward(1, vec![ 1f64 ] );
    assert_eq!( dy[0], 1f64 );
}
//
// test_abs_at_zero
// at x equal zero the taped derivative of abs is zero at every order
#[test]
fn test_abs_at_zero() {
    let ax    = start_recording( vec![ 0f64 ] );
    let ay    = vec![ FloatCore::abs( &ax[0] ) ];
    let mut f = stop_recording(ay);
    //
    let y  = f.forward(0, vec![ 0f64 ] );
    assert_eq!( y[0], 0f64 );
    let dy = f.forward(1, vec![ 1f64 ] );
    assert_eq!( dy[0], 0f64 );
    let ddy = f.forward(2, vec![ 0f64 ] );
    assert_eq!( ddy[0], 0f64 );
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert_eq!( dx[0], 0f64 );
    assert_eq!( f.compare_change(), 0 );
}
//
// test_neg
// unary minus records zero minus the operand
#[test]
fn test_neg() {
    let ax    = start_recording( vec![ 2f64 ] );
    let ay    = vec![ - &ax[0] ];
    let mut f = stop_recording(ay);
    //
    let y  = f.forward(0, vec![ 2f64 ] );
    assert_eq!( y[0], -2f64 );
    let dy = f.forward(1, vec![ 1f64 ] );
    assert_eq!( dy[0], -1f64 );
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert_eq!( dx[0], -1f64 );
}
