// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
// The paired operators sin, cos, asin, acos, atan:
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
// test_sin
#[test]
fn test_sin() {
    let ax    = start_recording( vec![ 1f64 ] );
    let ay    = vec![ FloatCore::sin( &ax[0] ) ];
    let mut f = stop_recording(ay);
    //
    let y  = f.forward(0, vec![ 1f64 ] );
    assert!( ok( y[0], 1f64.sin() ) );
    let dy = f.forward(1, vec![ 1f64 ] );
    assert!( ok( dy[0], 1f64.cos() ) );
    // sin''(1) / 2! = - sin(1) / 2
    let ddy = f.forward(2, vec![ 0f64 ] );
    assert!( ok( ddy[0], -1f64.sin() / 2.0 ) );
    //
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert!( ok( dx[0], 1f64.cos() ) );
    //
    // z1 = cos(x0) * x1 : partials w.r.t. (x0, x1) at x1 = 1
    let partials = f.reverse(1, vec![ 1f64 ] );
    assert!( ok( partials[0], -1f64.sin() ) );
    assert!( ok( partials[1], 1f64.cos() ) );
}
//
// test_cos
#[test]
fn test_cos() {
    let ax    = start_recording( vec![ 1f64 ] );
    let ay    = vec![ FloatCore::cos( &ax[0] ) ];
    let mut f = stop_recording(ay);
    //
    let y  = f.forward(0, vec![ 1f64 ] );
    assert!( ok( y[0], 1f64.cos() ) );
    let dy = f.forward(1, vec![ 1f64 ] );
    assert!( ok( dy[0], -1f64.sin() ) );
    let ddy = f.forward(2, vec![ 0f64 ] );
    assert!( ok( ddy[0], -1f64.cos() / 2.0 ) );
    //
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert!( ok( dx[0], -1f64.sin() ) );
}
//
// test_asin
#[test]
fn test_asin() {
    let x0    = 0.5f64;
    let ax    = start_recording( vec![ x0 ] );
    let ay    = vec![ FloatCore::asin( &ax[0] ) ];
    let mut f = stop_recording(ay);
    //
    let y  = f.forward(0, vec![ x0 ] );
    assert!( ok( y[0], x0.asin() ) );
    //
    // asin'(x) = 1 / sqrt(1 - x * x)
    let b  = 1.0 - x0 * x0;
    let dy = f.forward(1, vec![ 1f64 ] );
    assert!( ok( dy[0], 1.0 / b.sqrt() ) );
    //
    // asin''(x) / 2! = x / ( 2 * (1 - x * x)^(3/2) )
    let ddy = f.forward(2, vec![ 0f64 ] );
    assert!( ok( ddy[0], x0 / ( 2.0 * b * b.sqrt() ) ) );
    //
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert!( ok( dx[0], 1.0 / b.sqrt() ) );
}
//
// test_acos
#[test]
fn test_acos() {
    let x0    = 0.5f64;
    let ax    = start_recording( vec![ x0 ] );
    let ay    = vec![ FloatCore::acos( &ax[0] ) ];
    let mut f = stop_recording(ay);
    //
    let y  = f.forward(0, vec![ x0 ] );
    assert!( ok( y[0], x0.acos() ) );
    //
    let b  = 1.0 - x0 * x0;
    let dy = f.forward(1, vec![ 1f64 ] );
    assert!( ok( dy[0], -1.0 / b.sqrt() ) );
    //
    let ddy = f.forward(2, vec![ 0f64 ] );
    assert!( ok( ddy[0], -x0 / ( 2.0 * b * b.sqrt() ) ) );
    //
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert!( ok( dx[0], -1.0 / b.sqrt() ) );
}
//
// test_atan
#[test]
fn test_atan() {
    let x0    = 0.5f64;
    let ax    = start_recording( vec![ x0 ] );
    let ay    = vec![ FloatCore::atan( &ax[0] ) ];
    let mut f = stop_recording(ay);
    //
    let y  = f.forward(0, vec![ x0 ] );
    assert!( ok( y[0], x0.atan() ) );
    //
    // atan'(x) = 1 / (1 + x * x)
    let u  = 1.0 + x0 * x0;
    let dy = f.forward(1, vec![ 1f64 ] );
    assert!( ok( dy[0], 1.0 / u ) );
    //
    // atan''(x) / 2! = - x / (1 + x * x)^2
    let ddy = f.forward(2, vec![ 0f64 ] );
    assert!( ok( ddy[0], -x0 / ( u * u ) ) );
    //
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert!( ok( dx[0], 1.0 / u ) );
}
//
// test_reverse_second_order
// reverse at order one through the sin pair recurrence:
// z1 = cos(x0) * x1, so its partial w.r.t. x0 is - sin(x0) * x1
#[test]
fn test_reverse_second_order() {
    let x0    = 0.7f64;
    let ax    = start_recording( vec![ x0 ] );
    let ay    = vec![ FloatCore::sin( &ax[0] ) ];
    let mut f = stop_recording(ay);
    //
    f.forward(0, vec![ x0 ] );
    f.forward(1, vec![ 0.5f64 ] );
    let partials = f.reverse(1, vec![ 1f64 ] );
    assert!( ok( partials[0], -x0.sin() * 0.5 ) );
    assert!( ok( partials[1], x0.cos() ) );
}
