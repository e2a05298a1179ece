// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//
//! This pub module defines an embedded 4th and 5th order Runge-Kutta
//! ODE solver.
//!
//! Link to [parent module](super)
//!
//! The solver is generic in its scalar type so it can run on `AD<V>`
//! values and be recorded; differentiating the recording then gives
//! derivatives of the ODE solution.
// ---------------------------------------------------------------------------
use crate::float_core::FloatCore;
//
// frac
/// the fraction n / d as a scalar; the numerators and denominators of
/// the tableau are small integers, exactly representable in f32,
/// and the division happens at the scalar's working precision.
fn frac<S>(n : f32, d : f32) -> S
where
    for<'a> &'a S : std::ops::Div<&'a S, Output = S> ,
    S : From<f32> ,
{
    let num = S::from(n);
    let den = S::from(d);
    &num / &den
}
// ---------------------------------------------------------------------------
// runge45
/// Solve an initial value problem with the Cash-Karp embedded
/// 4th and 5th order Runge-Kutta method using fixed steps.
///
/// * Syntax :
/// ```text
///     (xf, e) = runge45(&mut f, m, &ti, &tf, &xi)
/// ```
///
/// * f :
/// evaluates the right hand side of the differential equation; i.e.,
/// given t and x(t) it returns x'(t) as a vector of the same length
/// as xi.
///
/// * m :
/// the number of steps; the step size is (tf - ti) / m and the global
/// error of xf is order six in the step size.
///
/// * ti , tf :
/// the initial and final time.
///
/// * xi :
/// the value of x(ti).
///
/// * xf :
/// the 5th order approximation for x(tf).
///
/// * e :
/// an element wise bound on the difference between xf and the embedded
/// 4th order solution; an estimate for the error in xf.
///
/// # Example
/// ```
/// use taylorad::runge45;
/// // x'(t) = - x(t) , x(0) = 1 , so x(1) = exp(-1)
/// let mut f = | _t : &f64, x : &Vec<f64> | vec![ - x[0] ];
/// let (xf, _e) = runge45(&mut f, 10, &0f64, &1f64, &vec![ 1f64 ]);
/// assert!( ( xf[0] - (-1f64).exp() ).abs() < 1e-7 );
/// ```
pub fn runge45<S, F>(
    f  : &mut F  ,
    m  : usize   ,
    ti : &S      ,
    tf : &S      ,
    xi : &Vec<S> ,
) -> ( Vec<S>, Vec<S> )
where
    F : FnMut(&S, &Vec<S>) -> Vec<S> ,
    for<'a> &'a S : std::ops::Add<&'a S, Output = S> ,
    for<'a> &'a S : std::ops::Sub<&'a S, Output = S> ,
    for<'a> &'a S : std::ops::Mul<&'a S, Output = S> ,
    for<'a> &'a S : std::ops::Div<&'a S, Output = S> ,
    for<'a> S     : std::ops::AddAssign<&'a S> ,
    S : Clone + From<f32> + FloatCore ,
{
    assert!( m >= 1,
        "runge45: m is less than one"
    );
    let n = xi.len();
    //
    // Cash-Karp tableau
    let c : [S; 6] = [
        S::zero(),
        frac::<S>(1.0, 5.0),
        frac::<S>(3.0, 10.0),
        frac::<S>(3.0, 5.0),
        S::one(),
        frac::<S>(7.0, 8.0),
    ];
    let a : [Vec<S>; 6] = [
        vec![],
        vec![ frac::<S>(1.0, 5.0) ],
        vec![ frac::<S>(3.0, 40.0), frac::<S>(9.0, 40.0) ],
        vec![ frac::<S>(3.0, 10.0), frac::<S>(-9.0, 10.0), frac::<S>(6.0, 5.0) ],
        vec![
            frac::<S>(-11.0, 54.0),
            frac::<S>(5.0, 2.0),
            frac::<S>(-70.0, 27.0),
            frac::<S>(35.0, 27.0),
        ],
        vec![
            frac::<S>(1631.0, 55296.0),
            frac::<S>(175.0, 512.0),
            frac::<S>(575.0, 13824.0),
            frac::<S>(44275.0, 110592.0),
            frac::<S>(253.0, 4096.0),
        ],
    ];
    let b5 : [S; 6] = [
        frac::<S>(37.0, 378.0),
        S::zero(),
        frac::<S>(250.0, 621.0),
        frac::<S>(125.0, 594.0),
        S::zero(),
        frac::<S>(512.0, 1771.0),
    ];
    let b4 : [S; 6] = [
        frac::<S>(2825.0, 27648.0),
        S::zero(),
        frac::<S>(18575.0, 48384.0),
        frac::<S>(13525.0, 55296.0),
        frac::<S>(277.0, 14336.0),
        frac::<S>(1.0, 4.0),
    ];
    //
    // h
    let m_s = S::from( m as f32 );
    let h   = &(tf - ti) / &m_s;
    //
    let mut x = xi.clone();
    let mut t = ti.clone();
    let mut e = vec![ S::zero(); n ];
    for _step in 0 .. m {
        //
        // k[i] = h * f( t + c[i] * h , x + sum of a[i][j] * k[j] )
        let mut k : Vec< Vec<S> > = Vec::with_capacity(6);
        for i in 0 .. 6 {
            let t_stage     = &t + &( &c[i] * &h );
            let mut x_stage = x.clone();
            for j in 0 .. i {
                for l in 0 .. n {
                    let term    = &a[i][j] * &k[j][l];
                    x_stage[l] += &term;
                }
            }
            let dx = f(&t_stage, &x_stage);
            assert_eq!( dx.len(), n,
                "runge45: f returns a vector with the wrong length"
            );
            let ki : Vec<S> = dx.iter().map( |dxl| &h * dxl ).collect();
            k.push(ki);
        }
        //
        // 5th order step, and the difference from the embedded 4th order
        for l in 0 .. n {
            let mut sum5 = x[l].clone();
            let mut sum4 = x[l].clone();
            for i in 0 .. 6 {
                let term = &b5[i] * &k[i][l];
                sum5 += &term;
                let term = &b4[i] * &k[i][l];
                sum4 += &term;
            }
            let diff = &sum5 - &sum4;
            e[l] += &diff.abs();
            x[l]  = sum5;
        }
        t = &t + &h;
    }
    (x, e)
}
