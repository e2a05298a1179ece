// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
// Derivatives of derivatives: the value type of a tape can itself be a
// tracked scalar on another tape.
//
use taylorad::{
    AD,
    FloatCore,
    ad_from_value,
    near_equal,
    start_recording,
    stop_recording,
};
//
// second_derivative_of_cube
// f(x) = x * x * x ; the inner recording evaluates f'(x) = 3 * x * x as
// a taped computation, the outer function object differentiates it.
#[test]
fn second_derivative_of_cube() {
    //
    // recording on the f64 tape
    let ax : Vec< AD<f64> > = start_recording( vec![ 2f64 ] );
    //
    // recording on the AD<f64> tape
    let aax : Vec< AD< AD<f64> > > =
        start_recording( vec![ ax[0].clone() ] );
    let aay   = &( &aax[0] * &aax[0] ) * &aax[0];
    let mut g = stop_recording( vec![ aay ] );
    //
    // f'(x) as a computation recorded on the f64 tape
    g.forward(0, vec![ ax[0].clone() ] );
    let dg = g.reverse(0, vec![ ad_from_value( 1f64 ) ] );
    //
    // the outer function is f'
    let mut f = stop_recording( vec![ dg[0].clone() ] );
    //
    let y = f.forward(0, vec![ 2f64 ] );
    assert!( near_equal( &y[0], &12f64, &1e-12, &0.0 ) );   // f'(2)
    //
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert!( near_equal( &dx[0], &12f64, &1e-12, &0.0 ) );  // f''(2)
    //
    let y = f.forward(0, vec![ 5f64 ] );
    assert!( near_equal( &y[0], &75f64, &1e-12, &0.0 ) );   // f'(5)
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert!( near_equal( &dx[0], &30f64, &1e-12, &0.0 ) );  // f''(5)
}
//
// second_derivative_of_exp_sin
// the same pattern through the elementary functions
#[test]
fn second_derivative_of_exp_sin() {
    let x0 = 0.5f64;
    //
    let ax : Vec< AD<f64> > = start_recording( vec![ x0 ] );
    //
    let aax : Vec< AD< AD<f64> > > =
        start_recording( vec![ ax[0].clone() ] );
    let aay   = &FloatCore::exp( &aax[0] ) * &FloatCore::sin( &aax[0] );
    let mut g = stop_recording( vec![ aay ] );
    //
    g.forward(0, vec![ ax[0].clone() ] );
    let dg    = g.reverse(0, vec![ ad_from_value( 1f64 ) ] );
    let mut f = stop_recording( vec![ dg[0].clone() ] );
    //
    // f'(x)  = exp(x) * ( sin(x) + cos(x) )
    // f''(x) = 2 * exp(x) * cos(x)
    let y = f.forward(0, vec![ x0 ] );
    let check = x0.exp() * ( x0.sin() + x0.cos() );
    assert!( near_equal( &y[0], &check, &1e-12, &0.0 ) );
    //
    let dx = f.reverse(0, vec![ 1f64 ] );
    let check = 2.0 * x0.exp() * x0.cos();
    assert!( near_equal( &dx[0], &check, &1e-12, &0.0 ) );
}
//
// foreign_variable_is_parameter
// a variable from a different (already closed) recording is captured
// as a constant by the recording in progress
#[test]
fn foreign_variable_is_parameter() {
    let ax = start_recording( vec![ 3f64 ] );
    let a  = &ax[0] * &ax[0];
    let f  = stop_recording( vec![ a.clone() ] );
    drop(f);
    //
    // a is no longer a variable; the new recording treats it as 9.0
    let bx    = start_recording( vec![ 1f64 ] );
    let by    = vec![ &bx[0] + &a ];
    let mut g = stop_recording(by);
    //
    let y  = g.forward(0, vec![ 2f64 ] );
    assert_eq!( y[0], 11f64 );
    let dy = g.forward(1, vec![ 1f64 ] );
    assert_eq!( dy[0], 1f64 );
}
