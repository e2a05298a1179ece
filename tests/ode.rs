// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
// The Runge-Kutta solver, by itself and composed with a recording.
//
use taylorad::{
    AD,
    ad_from_value,
    near_equal,
    runge45,
    start_recording,
    stop_recording,
};
//
// exp_decay
// x'(t) = - x(t) with x(0) = 1 , so x(1) = exp(-1)
#[test]
fn exp_decay() {
    let mut f = | _t : &f64, x : &Vec<f64> | vec![ - x[0] ];
    let (xf, e) = runge45(&mut f, 10, &0f64, &1f64, &vec![ 1f64 ]);
    //
    let check = (-1f64).exp();
    assert!( near_equal( &xf[0], &check, &0.0, &1e-7 ) );
    assert!( e[0] < 1e-7 );
}
//
// taped_exp_decay
// the same integration on AD values; the recorded function maps the
// initial condition to the final value, so its derivative is exp(-1)
#[test]
fn taped_exp_decay() {
    let ax = start_recording( vec![ 1f64 ] );
    //
    let mut ode = | _t : &AD<f64>, x : &Vec< AD<f64> > | vec![ - &x[0] ];
    let ati = ad_from_value( 0f64 );
    let atf = ad_from_value( 1f64 );
    let (axf, _ae) = runge45(&mut ode, 10, &ati, &atf, &vec![ ax[0].clone() ]);
    //
    let mut f = stop_recording( vec![ axf[0].clone() ] );
    //
    let check = (-1f64).exp();
    let y = f.forward(0, vec![ 1f64 ] );
    assert!( near_equal( &y[0], &check, &0.0, &1e-7 ) );
    //
    // the solution is linear in the initial condition
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert!( near_equal( &dx[0], &check, &0.0, &1e-7 ) );
    //
    // a different initial condition on the same tape
    let y = f.forward(0, vec![ 2f64 ] );
    assert!( near_equal( &y[0], &(2.0 * check), &0.0, &1e-6 ) );
}
//
// two_state_system
// x0' = x1 , x1' = - x0 rotates; at t = pi / 2 the states swap
#[test]
fn two_state_system() {
    let mut f = | _t : &f64, x : &Vec<f64> | vec![ x[1], - x[0] ];
    let half_pi = std::f64::consts::FRAC_PI_2;
    let (xf, _e) = runge45(&mut f, 20, &0f64, &half_pi, &vec![ 1f64, 0f64 ]);
    //
    assert!( near_equal( &xf[0], &0f64, &0.0, &1e-7 ) );
    assert!( near_equal( &xf[1], &-1f64, &0.0, &1e-7 ) );
}
