// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
// Taped calls to discrete (piecewise constant) functions.
//
use taylorad::{
    discrete,
    discrete_register,
    start_recording,
    stop_recording,
};
//
// step
fn step(x : &f64) -> f64 {
    if *x < 0.0 { -1.0 } else { 1.0 }
}
//
// zero_derivative
#[test]
fn zero_derivative() {
    let index = discrete_register::<f64>(step);
    //
    let ax    = start_recording( vec![ 2f64 ] );
    let astep = discrete(index, &ax[0]);
    let ay    = vec![ &ax[0] * &astep ];
    let mut f = stop_recording(ay);
    //
    let y = f.forward(0, vec![ 2f64 ] );
    assert_eq!( y[0], 2f64 );
    //
    // the step contributes value but no derivative
    let dy = f.forward(1, vec![ 1f64 ] );
    assert_eq!( dy[0], 1f64 );
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert_eq!( dx[0], 1f64 );
    //
    // replay re-evaluates the discrete function
    let y = f.forward(0, vec![ -2f64 ] );
    assert_eq!( y[0], 2f64 );
    let dy = f.forward(1, vec![ 1f64 ] );
    assert_eq!( dy[0], -1f64 );
}
//
// parameter_argument
// a discrete call on a parameter is a plain value computation
#[test]
fn parameter_argument() {
    let index = discrete_register::<f64>(step);
    //
    let ax    = start_recording( vec![ 1f64 ] );
    let apar  = taylorad::ad_from_value( -5f64 );
    let astep = discrete(index, &apar);
    let ay    = vec![ &ax[0] + &astep ];
    let mut f = stop_recording(ay);
    //
    let y = f.forward(0, vec![ 1f64 ] );
    assert_eq!( y[0], 0f64 );
}
