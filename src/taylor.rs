// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//
//! This pub(crate) module defines the rectangular coefficient arena.
//!
//! Link to [parent module](super)
//!
//! A [Taylor] arena stores one row per tape variable and one column per
//! Taylor coefficient order. The row stride can be larger than the number
//! of orders currently in use, so the order can be extended in place.
//! The same storage shape holds the adjoints during a reverse sweep.
// ---------------------------------------------------------------------------
//
// Taylor
/// Coefficient matrix addressed by (variable index, order).
pub struct Taylor<V> {
    //
    // n_row
    /// number of rows; one for each variable in the operation sequence.
    n_row  : usize,
    //
    // stride
    /// number of columns allocated for each row;
    /// orders 0 .. stride-1 can be stored without reallocation.
    stride : usize,
    //
    // data
    /// row major storage; the coefficient of order k for variable i
    /// is data\[ i * stride + k \] .
    data   : Vec<V>,
}
//
impl<V : Clone> Taylor<V> {
    //
    // Taylor::empty
    /// An arena with no rows and no columns;
    /// the state before the first forward sweep.
    pub(crate) fn empty() -> Self {
        Self { n_row : 0, stride : 0, data : Vec::new() }
    }
    //
    // Taylor::new
    /// An n_row by stride arena with every entry equal to fill.
    pub(crate) fn new(n_row : usize, stride : usize, fill : V) -> Self {
        Self {
            n_row    : n_row,
            stride   : stride,
            data     : vec![ fill; n_row * stride ],
        }
    }
    //
    /// number of rows
    pub(crate) fn n_row(&self) -> usize {
        self.n_row
    }
    //
    /// number of columns allocated for each row
    pub(crate) fn stride(&self) -> usize {
        self.stride
    }
    //
    // row
    /// The full row for one variable.
    pub(crate) fn row(&self, i : usize) -> &[V] {
        debug_assert!( i < self.n_row );
        &self.data[ i * self.stride .. (i + 1) * self.stride ]
    }
    //
    // row_mut
    pub(crate) fn row_mut(&mut self, i : usize) -> &mut [V] {
        debug_assert!( i < self.n_row );
        &mut self.data[ i * self.stride .. (i + 1) * self.stride ]
    }
    //
    // grow_stride
    /// Rebuild the arena with a larger stride.
    /// Entries for the previously allocated orders are preserved and
    /// the new columns are set to fill.
    pub(crate) fn grow_stride(&mut self, new_stride : usize, fill : V) {
        debug_assert!( self.stride < new_stride );
        let mut new_data = vec![ fill; self.n_row * new_stride ];
        for i in 0 .. self.n_row {
            for k in 0 .. self.stride {
                new_data[ i * new_stride + k ] =
                    self.data[ i * self.stride + k ].clone();
            }
        }
        self.stride = new_stride;
        self.data   = new_data;
    }
    //
    // split_row_mut
    /// Split the arena at the start of row i_var.
    ///
    /// The first return gives read or write access to the rows with index
    /// less than i_var (the operands during a sweep).
    /// The second return is the raw storage for rows i_var and above;
    /// the result row starts at its element zero and, for the operators
    /// that produce two variables, the companion row starts at
    /// element [Taylor::stride] .
    ///
    /// The operation sequence invariant, every operand index is less than
    /// the variable index that consumes it, is what makes this split
    /// sufficient for every kernel.
    pub(crate) fn split_row_mut(&mut self, i_var : usize)
    -> ( Rows<'_, V>, &mut [V] )
    {
        debug_assert!( i_var <= self.n_row );
        let (lower, upper) = self.data.split_at_mut( i_var * self.stride );
        ( Rows { stride : self.stride, data : lower }, upper )
    }
}
// ---------------------------------------------------------------------------
// Rows
/// View of the rows below a split point; see [Taylor::split_row_mut] .
pub struct Rows<'a, V> {
    stride : usize,
    data   : &'a mut [V],
}
//
impl<V> Rows<'_, V> {
    //
    // row
    pub(crate) fn row(&self, i : usize) -> &[V] {
        &self.data[ i * self.stride .. (i + 1) * self.stride ]
    }
    //
    // row_mut
    pub(crate) fn row_mut(&mut self, i : usize) -> &mut [V] {
        &mut self.data[ i * self.stride .. (i + 1) * self.stride ]
    }
}
// ---------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::Taylor;
    //
    #[test]
    fn grow_preserves_lower_orders() {
        let mut t : Taylor<f64> = Taylor::new(3, 2, 0.0);
        t.row_mut(1)[0] = 5.0;
        t.row_mut(1)[1] = 6.0;
        t.row_mut(2)[0] = 7.0;
        //
        t.grow_stride(4, f64::NAN);
        assert_eq!( t.stride(), 4 );
        assert_eq!( t.row(1)[0], 5.0 );
        assert_eq!( t.row(1)[1], 6.0 );
        assert_eq!( t.row(2)[0], 7.0 );
        assert!( t.row(2)[3].is_nan() );
    }
    //
    #[test]
    fn split_gives_operands_and_result() {
        let mut t : Taylor<f64> = Taylor::new(3, 2, 0.0);
        t.row_mut(0)[0] = 1.0;
        t.row_mut(1)[0] = 2.0;
        let (lower, upper) = t.split_row_mut(2);
        assert_eq!( lower.row(0)[0], 1.0 );
        assert_eq!( lower.row(1)[0], 2.0 );
        upper[0] = lower.row(0)[0] + lower.row(1)[0];
        assert_eq!( t.row(2)[0], 3.0 );
    }
}
