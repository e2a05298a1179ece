// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//
//! This pub(crate) module implements the tape operators.
//!
//! Link to [parent module](super)
//!
//! Each sub-module below id and info defines, for one family of operators,
//! the forward kernel (Taylor coefficients of the result from Taylor
//! coefficients of the operands), the reverse kernel (adjoint of the same
//! relation), and a set_op_info that installs them in the operator table.
// ---------------------------------------------------------------------------
// sub-modules
pub(crate) mod id;
pub(crate) mod info;
//
pub(crate) mod abs;
pub(crate) mod add;
pub(crate) mod binary;
pub(crate) mod asin_acos;
pub(crate) mod atan;
pub(crate) mod compare;
pub(crate) mod cond_exp;
pub(crate) mod discrete;
pub(crate) mod div;
pub(crate) mod exp;
pub(crate) mod load_store;
pub(crate) mod log;
pub(crate) mod misc;
pub(crate) mod mul;
pub(crate) mod sin_cos;
pub(crate) mod sqrt;
pub(crate) mod sub;
// ---------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use crate::op::id::NUMBER_OP;
    use crate::op::info::GlobalOpInfoVec;
    //
    // Every operator has a name and the names are distinct;
    // this would fail if two identifiers had the same value.
    #[test]
    fn op_names_distinct() {
        let op_info_vec = &*< f64 as GlobalOpInfoVec >::get();
        assert_eq!( op_info_vec.len(), NUMBER_OP as usize );
        for i in 0 .. op_info_vec.len() {
            assert_ne!( op_info_vec[i].name, "panic" );
            for j in i + 1 .. op_info_vec.len() {
                assert_ne!( op_info_vec[i].name, op_info_vec[j].name );
            }
        }
    }
    //
    // The operand counts accumulate the same way the recorder stores them.
    #[test]
    fn arity_table() {
        use crate::op::id::*;
        use crate::op::info::{num_ind, num_var};
        assert_eq!( num_ind(NON_OP),      0 );
        assert_eq!( num_ind(INV_OP),      0 );
        assert_eq!( num_ind(SIN_OP),      1 );
        assert_eq!( num_ind(ADD_VV_OP),   2 );
        assert_eq!( num_ind(CE_VVV_OP),   3 );
        assert_eq!( num_ind(ST_VV_OP),    3 );
        //
        assert_eq!( num_var(NON_OP),      1 );
        assert_eq!( num_var(SIN_OP),      2 );
        assert_eq!( num_var(ASIN_OP),     2 );
        assert_eq!( num_var(LT_F_VV_OP),  0 );
        assert_eq!( num_var(PRI_V_OP),    0 );
        assert_eq!( num_var(MUL_VV_OP),   1 );
    }
}
