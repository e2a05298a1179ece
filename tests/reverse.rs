// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
// Reverse mode evaluation of adjoints.
//
use taylorad::{
    near_equal,
    start_recording,
    stop_recording,
};
//
// cube_first_derivative
#[test]
fn cube_first_derivative() {
    let ax    = start_recording( vec![ 2f64 ] );
    let ay    = vec![ &( &ax[0] * &ax[0] ) * &ax[0] ];
    let mut f = stop_recording(ay);
    //
    f.forward(0, vec![ 2f64 ] );
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert_eq!( dx, vec![ 12f64 ] );
}
//
// jacobian
// f(x, y) = [ x * y , x + y ] at (3, 4);
// one reverse sweep per row of the Jacobian
#[test]
fn jacobian() {
    let ax    = start_recording( vec![ 3f64, 4f64 ] );
    let ay    = vec![ &ax[0] * &ax[1] , &ax[0] + &ax[1] ];
    let mut f = stop_recording(ay);
    //
    f.forward(0, vec![ 3f64, 4f64 ] );
    let row0 = f.reverse(0, vec![ 1f64, 0f64 ] );
    let row1 = f.reverse(0, vec![ 0f64, 1f64 ] );
    assert_eq!( row0, vec![ 4f64, 3f64 ] );
    assert_eq!( row1, vec![ 1f64, 1f64 ] );
}
//
// forward_reverse_duality
// for any domain seed xi and range weight w :
// w . forward(1, xi) == reverse(0, w) . xi
#[test]
fn forward_reverse_duality() {
    let ax    = start_recording( vec![ 3f64, 4f64 ] );
    let aquot = &ax[0] / &ax[1];
    let aexp  = taylorad::FloatCore::exp( &( &ax[0] * &ax[1] ) );
    let mut f = stop_recording( vec![ aquot, aexp ] );
    //
    f.forward(0, vec![ 0.3f64, 0.4f64 ] );
    //
    let xi = vec![ 1f64, 2f64 ];
    let w  = vec![ 2f64, 5f64 ];
    //
    let dy    = f.forward(1, xi.clone() );
    let left  = w[0] * dy[0] + w[1] * dy[1];
    //
    let dx    = f.reverse(0, w.clone() );
    let right = dx[0] * xi[0] + dx[1] * xi[1];
    //
    assert!( near_equal( &left, &right, &1e-12, &0.0 ) );
}
//
// second_order_adjoint
// f(x) = x * x * x ; after forward orders zero and one with direction 1,
// reverse at order one gives the partials of the order one range
// coefficient, 3 * x * x, with respect to the order zero and order one
// domain coefficients
#[test]
fn second_order_adjoint() {
    let ax    = start_recording( vec![ 2f64 ] );
    let ay    = vec![ &( &ax[0] * &ax[0] ) * &ax[0] ];
    let mut f = stop_recording(ay);
    //
    f.forward(0, vec![ 2f64 ] );
    f.forward(1, vec![ 1f64 ] );
    //
    // z1 = 3 * x0 * x0 * x1 :
    // partial w.r.t. x0 is 6 * x0 * x1 = 12 ,
    // partial w.r.t. x1 is 3 * x0 * x0 = 12
    let partials = f.reverse(1, vec![ 1f64 ] );
    assert_eq!( partials.len(), 2 );
    assert!( near_equal( &partials[0], &12f64, &1e-12, &0.0 ) );
    assert!( near_equal( &partials[1], &12f64, &1e-12, &0.0 ) );
}
//
// repeated_variable
// both operands of an operator can be the same variable
#[test]
fn repeated_variable() {
    let ax    = start_recording( vec![ 3f64 ] );
    let ay    = vec![ &ax[0] * &ax[0] ];
    let mut f = stop_recording(ay);
    //
    f.forward(0, vec![ 3f64 ] );
    let dx = f.reverse(0, vec![ 1f64 ] );
    assert_eq!( dx, vec![ 6f64 ] );
}
