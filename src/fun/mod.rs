// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//
//! This pub module defines the AD function objects
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// sub-modules
pub(crate) mod forward;
pub(crate) mod reverse;
//
use crate::IndexT;
use crate::float_core::FloatCore;
use crate::fun::forward::forward_sweep;
use crate::fun::reverse::reverse_sweep;
use crate::op::info::GlobalOpInfoVec;
use crate::tape::TapeRec;
use crate::taylor::Taylor;
//
#[cfg(doc)]
use crate::doc_generic_v;
// ---------------------------------------------------------------------------
// ADFun
/// A function object; i.e., a frozen operation sequence together with
/// its Taylor coefficient matrix.
///
/// * V : see [doc_generic_v]
///
/// An ADFun is created by [stop_recording](crate::stop_recording) and is
/// never changed structurally afterwards; [ADFun::forward] extends the
/// Taylor coefficients it stores and [ADFun::reverse] computes adjoints
/// from them.
pub struct ADFun<V> {
    //
    // rec
    /// the operation sequence for this function.
    pub(crate) rec            : TapeRec<V>,
    //
    // taylor
    /// Taylor coefficients for every variable in the operation sequence;
    /// row v column k is the order k coefficient of variable v.
    pub(crate) taylor         : Taylor<V>,
    //
    // ind_var
    /// variable indices for the independent (domain) variables.
    pub(crate) ind_var        : Vec<IndexT>,
    //
    // dep_var
    /// variable indices for the dependent (range) variables.
    pub(crate) dep_var        : Vec<IndexT>,
    //
    // n_order
    /// number of coefficient orders currently valid in taylor;
    /// zero before the first forward sweep.
    pub(crate) n_order        : usize,
    //
    // compare_change
    /// the comparison mismatch count left by the most recent forward sweep.
    pub(crate) compare_change : usize,
}
// ---------------------------------------------------------------------------
impl<V: Clone> ADFun<V> {
    //
    // from_recording
    /// Package a finished recording; used by stop_recording.
    pub(crate) fn from_recording(
        rec     : TapeRec<V>  ,
        ind_var : Vec<IndexT> ,
        dep_var : Vec<IndexT> ,
    ) -> Self {
        Self {
            rec            : rec,
            taylor         : Taylor::empty(),
            ind_var        : ind_var,
            dep_var        : dep_var,
            n_order        : 0,
            compare_change : 0,
        }
    }
    //
    // domain_len
    /// dimension of the domain space for this function.
    pub fn domain_len(&self) -> usize {
        self.ind_var.len()
    }
    //
    // range_len
    /// dimension of the range space for this function.
    pub fn range_len(&self) -> usize {
        self.dep_var.len()
    }
    //
    // order
    /// the highest order p for which [ADFun::forward] has been called
    /// since the last order zero sweep.
    pub fn order(&self) -> usize {
        assert!( self.n_order > 0,
            "f.order: no forward sweep has been run"
        );
        self.n_order - 1
    }
    //
    // compare_change
    /// Number of comparison records whose outcome, at the zero order
    /// values of the most recent forward sweep, differs from the outcome
    /// observed while recording. A non zero count means the tape's
    /// branch structure no longer matches the function it was recorded
    /// from; it is a diagnostic, not an error.
    pub fn compare_change(&self) -> usize {
        self.compare_change
    }
}
// ---------------------------------------------------------------------------
impl<V> ADFun<V>
where
    V : Clone + FloatCore + GlobalOpInfoVec ,
{
    //
    // forward
    /// Forward sweep; i.e., compute the order p Taylor coefficients for
    /// every variable given the order p coefficients xp for the
    /// independent variables.
    ///
    /// * Syntax :
    /// ```text
    ///     yp = f.forward(p, xp)
    /// ```
    ///
    /// * p :
    /// the coefficient order. The first call must have p equal zero,
    /// and in general p can be at most [ADFun::order] plus one.
    /// Calling with p equal zero starts over at a new argument point.
    ///
    /// * xp :
    /// the order p Taylor coefficients for the independent variables;
    /// its length must equal [ADFun::domain_len] .
    /// For order zero this is the argument value x;
    /// for order one it is a direction, so that yp is the directional
    /// derivative of the function along xp.
    ///
    /// * yp :
    /// the order p Taylor coefficients for the dependent variables.
    ///
    /// # Example
    /// ```
    /// use taylorad::{start_recording, stop_recording};
    /// let ax    = start_recording( vec![ 2f64 ] );
    /// let ay    = vec![ &(&ax[0] * &ax[0]) * &ax[0] ];
    /// let mut f = stop_recording(ay);
    ///
    /// let y     = f.forward(0, vec![ 2f64 ] );
    /// assert_eq!( y[0], 8f64 );             // x * x * x
    /// let dy    = f.forward(1, vec![ 1f64 ] );
    /// assert_eq!( dy[0], 12f64 );           // 3 * x * x
    /// let ddy   = f.forward(2, vec![ 0f64 ] );
    /// assert_eq!( ddy[0], 6f64 );           // (3 * 2 * x) / 2!
    /// ```
    pub fn forward(&mut self, p : usize, xp : Vec<V>) -> Vec<V> {
        assert_eq!( xp.len(), self.domain_len(),
            "f.forward: xp length does not match the domain dimension"
        );
        assert!( p <= self.n_order,
            "f.forward: p is greater than f.order() + 1"
        );
        //
        // taylor storage
        if self.taylor.n_row() == 0 {
            self.taylor = Taylor::new(
                self.rec.tot_num_var(), p + 1, V::nan()
            );
        } else if self.taylor.stride() <= p {
            let new_stride = 2 * self.taylor.stride();
            self.taylor.grow_stride( new_stride, V::nan() );
        }
        //
        // order p coefficients for the independent variables
        for i in 0 .. xp.len() {
            let row = self.taylor.row_mut( self.ind_var[i] as usize );
            row[p]  = xp[i].clone();
        }
        //
        // the sentinel variable at index zero is never an operand;
        // keep its row defined anyway
        self.taylor.row_mut(0)[p] = V::zero();
        //
        // sweep
        self.compare_change =
            forward_sweep::<V>(p == 0, p, &self.rec, &mut self.taylor);
        //
        // n_order
        self.n_order = p + 1;
        //
        // yp
        self.dep_var.iter().map(
            |&j| self.taylor.row( j as usize )[p].clone()
        ).collect()
    }
    //
    // reverse
    /// Reverse sweep; i.e., compute the partials, with respect to every
    /// Taylor coefficient of the independent variables, of the weighted
    /// sum of the order d dependent coefficients.
    ///
    /// * Syntax :
    /// ```text
    ///     partials = f.reverse(d, w)
    /// ```
    ///
    /// * d :
    /// the adjoint order; [ADFun::forward] must already have populated
    /// the coefficients of orders 0 ..= d .
    ///
    /// * w :
    /// the weights for the dependent variables;
    /// its length must equal [ADFun::range_len] .
    ///
    /// * partials :
    /// has length domain_len * (d + 1) ;
    /// element i * (d + 1) + k is the partial with respect to the
    /// order k coefficient of independent variable i.
    /// For d equal zero and w a unit vector, this is one row of the
    /// Jacobian at the point of the most recent zero order forward.
    ///
    /// # Example
    /// ```
    /// use taylorad::{start_recording, stop_recording};
    /// let ax    = start_recording( vec![ 3f64, 4f64 ] );
    /// let ay    = vec![ &ax[0] * &ax[1] ];
    /// let mut f = stop_recording(ay);
    ///
    /// f.forward(0, vec![ 3f64, 4f64 ] );
    /// let dx = f.reverse(0, vec![ 1f64 ] );
    /// assert_eq!( dx, vec![ 4f64, 3f64 ] );
    /// ```
    pub fn reverse(&self, d : usize, w : Vec<V>) -> Vec<V> {
        assert_eq!( w.len(), self.range_len(),
            "f.reverse: w length does not match the range dimension"
        );
        assert!( d < self.n_order,
            "f.reverse: d is greater than f.order()"
        );
        //
        // partial
        // same row layout as taylor with d + 1 columns
        let mut partial = Taylor::new(
            self.rec.tot_num_var(), d + 1, V::zero()
        );
        for j in 0 .. w.len() {
            let row = partial.row_mut( self.dep_var[j] as usize );
            row[d]  = w[j].clone();
        }
        //
        // sweep
        reverse_sweep::<V>(d, &self.rec, &self.taylor, &mut partial);
        //
        // partials
        let mut result = Vec::with_capacity( self.domain_len() * (d + 1) );
        for i in 0 .. self.domain_len() {
            let row = partial.row( self.ind_var[i] as usize );
            for k in 0 ..= d {
                result.push( row[k].clone() );
            }
        }
        result
    }
}
// ---------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use crate::{start_recording, stop_recording};
    //
    // Recording the same function twice gives the same operation sequence.
    #[test]
    fn re_recording_idempotent() {
        fn record() -> crate::ADFun<f64> {
            let ax = start_recording( vec![ 1.5f64, 2.5f64 ] );
            let a  = &ax[0] * &ax[1];
            let b  = &a + &( &ax[0] * &2.0f64 );
            let c  = crate::FloatCore::sin( &b );
            stop_recording( vec![ c ] )
        }
        let f = record();
        let g = record();
        assert_eq!( f.rec.op_all,  g.rec.op_all );
        assert_eq!( f.rec.ind_all, g.rec.ind_all );
        assert_eq!( f.rec.par_all, g.rec.par_all );
        assert_eq!( f.rec.tot_num_var(), g.rec.tot_num_var() );
        assert_eq!( f.dep_var, g.dep_var );
    }
    //
    // Equal parameter values share one parameter pool entry.
    #[test]
    fn parameter_pool_dedup() {
        let ax = start_recording( vec![ 1f64 ] );
        let a  = &ax[0] * &3.0f64;
        let b  = &a + &3.0f64;
        let c  = &b - &4.0f64;
        let f  = stop_recording( vec![ c ] );
        // 3.0 appears once, 4.0 once
        assert_eq!( f.rec.par_all.len(), 2 );
    }
}
