// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
// Conditional expressions: branch selection, branch flips, and
// adjoint routing.
//
use taylorad::{
    ad_from_value,
    cond_exp,
    cond_exp_eq,
    cond_exp_lt,
    start_recording,
    stop_recording,
};
//
// branch_flip
// f(x) = if x < 0 then -x else x, recorded at x = 1.
// Replaying at x = -1 returns the re-selected branch value and raises
// the compare_change diagnostic.
#[test]
fn branch_flip() {
    let ax    = start_recording( vec![ 1f64 ] );
    let azero = ad_from_value( 0f64 );
    let aneg  = - &ax[0];
    let ay    = vec![ cond_exp_lt( &ax[0], &azero, &aneg, &ax[0] ) ];
    let mut f = stop_recording(ay);
    //
    let y = f.forward(0, vec![ 1f64 ] );
    assert_eq!( y[0], 1f64 );
    assert_eq!( f.compare_change(), 0 );
    //
    let y = f.forward(0, vec![ -1f64 ] );
    assert_eq!( y[0], 1f64 );
    assert_eq!( f.compare_change(), 1 );
    //
    // the derivative follows the re-selected branch
    let dy = f.forward(1, vec![ 1f64 ] );
    assert_eq!( dy[0], -1f64 );
}
//
// adjoint_routing
// the reverse sweep sends the adjoint to the branch that the current
// comparator value selects
#[test]
fn adjoint_routing() {
    let ax    = start_recording( vec![ 1f64 ] );
    let atwo  = ad_from_value( 2f64 );
    let asq   = &ax[0] * &ax[0];
    let alin  = &ax[0] * &3f64;
    // x * x when x < 2, 3 * x otherwise
    let ay    = vec![ cond_exp_lt( &ax[0], &atwo, &asq, &alin ) ];
    let mut f = stop_recording(ay);
    //
    f.forward(0, vec![ 1f64 ] );
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert_eq!( dx[0], 2f64 );          // d (x * x) / dx at 1
    //
    f.forward(0, vec![ 5f64 ] );
    assert_eq!( f.compare_change(), 1 );
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert_eq!( dx[0], 3f64 );          // d (3 * x) / dx
}
//
// primitive_flag
// the primitive selects the true case when the comparator is positive
#[test]
fn primitive_flag() {
    let ax    = start_recording( vec![ 3f64 ] );
    let at    = &ax[0] * &10f64;
    let af    = &ax[0] * &100f64;
    let ay    = vec![ cond_exp( &ax[0], &at, &af ) ];
    let mut f = stop_recording(ay);
    //
    let y = f.forward(0, vec![ 3f64 ] );
    assert_eq!( y[0], 30f64 );
    //
    let y = f.forward(0, vec![ -3f64 ] );
    assert_eq!( y[0], -300f64 );
    // the primitive alone has no comparison record
    assert_eq!( f.compare_change(), 0 );
}
//
// parameter_cases
// branch operands that are parameters contribute only at order zero
#[test]
fn parameter_cases() {
    let ax    = start_recording( vec![ 1f64 ] );
    let aone  = ad_from_value( 1f64 );
    let atwo  = ad_from_value( 2f64 );
    let ay    = vec![ cond_exp( &ax[0], &aone, &atwo ) ];
    let mut f = stop_recording(ay);
    //
    let y = f.forward(0, vec![ 1f64 ] );
    assert_eq!( y[0], 1f64 );
    let dy = f.forward(1, vec![ 1f64 ] );
    assert_eq!( dy[0], 0f64 );
    //
    let y = f.forward(0, vec![ -1f64 ] );
    assert_eq!( y[0], 2f64 );
}
//
// equality_case
#[test]
fn equality_case() {
    let ax    = start_recording( vec![ 2f64 ] );
    let atwo  = ad_from_value( 2f64 );
    let at    = &ax[0] * &10f64;
    let af    = &ax[0] * &100f64;
    let ay    = vec![ cond_exp_eq( &ax[0], &atwo, &at, &af ) ];
    let mut f = stop_recording(ay);
    //
    let y = f.forward(0, vec![ 2f64 ] );
    assert_eq!( y[0], 20f64 );
    assert_eq!( f.compare_change(), 0 );
    //
    let y = f.forward(0, vec![ 3f64 ] );
    assert_eq!( y[0], 300f64 );
    assert_eq!( f.compare_change(), 1 );
}
