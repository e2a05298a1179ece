// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
// Forward mode evaluation of function values and Taylor coefficients.
//
use taylorad::{
    FloatCore,
    near_equal,
    start_recording,
    stop_recording,
};
//
// identity
#[test]
fn identity() {
    let ax    = start_recording( vec![ 3.5f64 ] );
    let ay    = vec![ ax[0].clone() ];
    let mut f = stop_recording(ay);
    //
    assert_eq!( f.domain_len(), 1 );
    assert_eq!( f.range_len(),  1 );
    //
    let y  = f.forward(0, vec![ 3.5f64 ] );
    assert_eq!( y[0], 3.5f64 );
    assert_eq!( f.order(), 0 );
    //
    let dy = f.forward(1, vec![ 1f64 ] );
    assert_eq!( dy[0], 1f64 );
    assert_eq!( f.order(), 1 );
    //
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert_eq!( dx[0], 1f64 );
}
//
// cube
// f(x) = x * x * x recorded at x = 2
#[test]
fn cube() {
    let ax    = start_recording( vec![ 2f64 ] );
    let ay    = vec![ &( &ax[0] * &ax[0] ) * &ax[0] ];
    let mut f = stop_recording(ay);
    //
    let y     = f.forward(0, vec![ 2f64 ] );
    assert_eq!( y[0], 8f64 );
    //
    let dy    = f.forward(1, vec![ 1f64 ] );
    assert_eq!( dy[0], 12f64 );
    //
    // order two coefficient is f''(2) / 2! = 12 / 2
    let ddy   = f.forward(2, vec![ 0f64 ] );
    assert_eq!( ddy[0], 6f64 );
    assert_eq!( f.order(), 2 );
    //
    // an order zero sweep starts over at a new point
    let y     = f.forward(0, vec![ 3f64 ] );
    assert_eq!( y[0], 27f64 );
    assert_eq!( f.order(), 0 );
    let dy    = f.forward(1, vec![ 1f64 ] );
    assert_eq!( dy[0], 27f64 );
}
//
// exp_times_sin
// f(x) = exp(x) * sin(x) at x = 1
#[test]
fn exp_times_sin() {
    let ax    = start_recording( vec![ 1f64 ] );
    let aexp  = FloatCore::exp( &ax[0] );
    let asin  = FloatCore::sin( &ax[0] );
    let ay    = vec![ &aexp * &asin ];
    let mut f = stop_recording(ay);
    //
    let y     = f.forward(0, vec![ 1f64 ] );
    let check = 1f64.exp() * 1f64.sin();
    assert!( near_equal( &y[0], &check, &1e-12, &0.0 ) );
    //
    let dy    = f.forward(1, vec![ 1f64 ] );
    let check = 1f64.exp() * ( 1f64.sin() + 1f64.cos() );
    assert!( near_equal( &dy[0], &check, &1e-12, &0.0 ) );
}
//
// division
// f(x, y) = x / y and the higher order coefficients of the quotient
#[test]
fn division() {
    let ax    = start_recording( vec![ 1f64, 2f64 ] );
    let ay    = vec![ &ax[0] / &ax[1] ];
    let mut f = stop_recording(ay);
    //
    // x(t) = 1 + t , y(t) = 2 + t :
    // z(t) = (1 + t) / (2 + t) = 1 - 1 / (2 + t)
    // z    = 1/2 + (1/4) t - (1/8) t^2 + ...
    let z0 = f.forward(0, vec![ 1f64, 2f64 ] );
    assert!( near_equal( &z0[0], &0.5,    &1e-12, &0.0 ) );
    let z1 = f.forward(1, vec![ 1f64, 1f64 ] );
    assert!( near_equal( &z1[0], &0.25,   &1e-12, &0.0 ) );
    let z2 = f.forward(2, vec![ 0f64, 0f64 ] );
    assert!( near_equal( &z2[0], &-0.125, &1e-12, &0.0 ) );
}
//
// fresh_function_value
// order zero forward on a freshly constructed function is the function
// value, whatever happened during the recording
#[test]
fn fresh_function_value() {
    let ax    = start_recording( vec![ 5f64, 7f64 ] );
    let asum  = &ax[0] + &ax[1];
    let aprod = &ax[0] * &ax[1];
    let mut f = stop_recording( vec![ asum, aprod ] );
    //
    let y = f.forward(0, vec![ 2f64, 3f64 ] );
    assert_eq!( y, vec![ 5f64, 6f64 ] );
}
//
// dependent_parameter
// a range element that does not depend on the domain is recorded
// through the parameter operator
#[test]
fn dependent_parameter() {
    let ax    = start_recording( vec![ 2f64 ] );
    let apar  = taylorad::ad_from_value( 4f64 );
    let ay    = vec![ &ax[0] + &ax[0], apar ];
    let mut f = stop_recording(ay);
    //
    let y  = f.forward(0, vec![ 3f64 ] );
    assert_eq!( y, vec![ 6f64, 4f64 ] );
    let dy = f.forward(1, vec![ 1f64 ] );
    assert_eq!( dy, vec![ 2f64, 0f64 ] );
}
