// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Define operator identifiers as `pub(crate) u8` constants
//!
//! Link to [parent module](super)
//!
//! The suffix on an identifier tells which operands are parameters (p)
//! and which are variables (v); e.g. ADD_PV_OP is parameter + variable.
//! The comparison identifiers also carry the outcome that was observed
//! while recording; e.g. LT_F_VV_OP recorded variable < variable as false.
//
/// Sets all the operator identifier values
macro_rules! set_operator_ids {
    //
    // first match
    (   #[$doc:meta] $name:ident,
        $( #[$docs:meta] $names:ident, )*
    ) => {
        #[$doc]
        pub(crate) const $name : u8 = 0;
        set_operator_ids!(
            @ $name,
            $( #[$docs] $names, )*
        );
    };
    //
    // recursive match
    (
        @ $previous:ident,
        #[$doc:meta] $name:ident,
        $( #[$docs:meta] $names:ident, )*
    ) => {
        #[$doc]
        pub(crate) const $name : u8 = $previous + 1u8;
        set_operator_ids!(
            @ $name,
            $( #[$docs] $names, )*
        );
    };
    //
    // last recursive match
    (@ $index:expr,) => { }
}

// The identifiers are in alphabetical order so that the flavors of one
// operation are contiguous; some range patterns in mod.rs depend on this.
// See the test in mod.rs that checks every operator has a different name.
// This ensures that the number of operators is less than u8::MAX.
set_operator_ids!(
    /// absolute value of a variable
    ABS_OP,
    /// acos of a variable; companion variable is sqrt(1 - x * x)
    ACOS_OP,
    /// parameter + variable
    ADD_PV_OP,
    /// variable + parameter
    ADD_VP_OP,
    /// variable + variable
    ADD_VV_OP,
    /// asin of a variable; companion variable is sqrt(1 - x * x)
    ASIN_OP,
    /// atan of a variable; companion variable is 1 + x * x
    ATAN_OP,
    //
    // CE
    /// conditional: parameter flag, parameter true case, parameter false case
    CE_PPP_OP,
    /// conditional: parameter flag, parameter true case, variable false case
    CE_PPV_OP,
    /// conditional: parameter flag, variable true case, parameter false case
    CE_PVP_OP,
    /// conditional: parameter flag, variable true case, variable false case
    CE_PVV_OP,
    /// conditional: variable flag, parameter true case, parameter false case
    CE_VPP_OP,
    /// conditional: variable flag, parameter true case, variable false case
    CE_VPV_OP,
    /// conditional: variable flag, variable true case, parameter false case
    CE_VVP_OP,
    /// conditional: variable flag, variable true case, variable false case
    CE_VVV_OP,
    //
    /// cos of a variable; companion variable is sin(x)
    COS_OP,
    /// discrete function of a variable
    DIS_OP,
    /// parameter / variable
    DIV_PV_OP,
    /// variable / parameter
    DIV_VP_OP,
    /// variable / variable
    DIV_VV_OP,
    //
    // EQ
    /// recorded parameter == parameter as false
    EQ_F_PP_OP,
    /// recorded parameter == variable as false
    EQ_F_PV_OP,
    /// recorded variable == parameter as false
    EQ_F_VP_OP,
    /// recorded variable == variable as false
    EQ_F_VV_OP,
    /// recorded parameter == parameter as true
    EQ_T_PP_OP,
    /// recorded parameter == variable as true
    EQ_T_PV_OP,
    /// recorded variable == parameter as true
    EQ_T_VP_OP,
    /// recorded variable == variable as true
    EQ_T_VV_OP,
    //
    /// exponential of a variable
    EXP_OP,
    /// declares an independent variable
    INV_OP,
    /// load from a taped vector; index is a parameter
    LD_P_OP,
    /// load from a taped vector; index is a variable
    LD_V_OP,
    //
    // LE
    /// recorded parameter <= parameter as false
    LE_F_PP_OP,
    /// recorded parameter <= variable as false
    LE_F_PV_OP,
    /// recorded variable <= parameter as false
    LE_F_VP_OP,
    /// recorded variable <= variable as false
    LE_F_VV_OP,
    /// recorded parameter <= parameter as true
    LE_T_PP_OP,
    /// recorded parameter <= variable as true
    LE_T_PV_OP,
    /// recorded variable <= parameter as true
    LE_T_VP_OP,
    /// recorded variable <= variable as true
    LE_T_VV_OP,
    //
    /// logarithm of a variable
    LOG_OP,
    //
    // LT
    /// recorded parameter < parameter as false
    LT_F_PP_OP,
    /// recorded parameter < variable as false
    LT_F_PV_OP,
    /// recorded variable < parameter as false
    LT_F_VP_OP,
    /// recorded variable < variable as false
    LT_F_VV_OP,
    /// recorded parameter < parameter as true
    LT_T_PP_OP,
    /// recorded parameter < variable as true
    LT_T_PV_OP,
    /// recorded variable < parameter as true
    LT_T_VP_OP,
    /// recorded variable < variable as true
    LT_T_VV_OP,
    //
    /// parameter * variable
    MUL_PV_OP,
    /// variable * parameter
    MUL_VP_OP,
    /// variable * variable
    MUL_VV_OP,
    //
    /// sentinel at variable index zero
    NON_OP,
    /// materializes a parameter as a variable
    PAR_OP,
    /// trace a parameter during zero order forward
    PRI_P_OP,
    /// trace a variable during zero order forward
    PRI_V_OP,
    //
    /// sin of a variable; companion variable is cos(x)
    SIN_OP,
    /// square root of a variable
    SQRT_OP,
    //
    // ST
    /// store in a taped vector: parameter index, parameter value
    ST_PP_OP,
    /// store in a taped vector: parameter index, variable value
    ST_PV_OP,
    /// store in a taped vector: variable index, parameter value
    ST_VP_OP,
    /// store in a taped vector: variable index, variable value
    ST_VV_OP,
    //
    /// parameter - variable
    SUB_PV_OP,
    /// variable - parameter
    SUB_VP_OP,
    /// variable - variable
    SUB_VV_OP,
    //
    /// number of valid operator ids
    NUMBER_OP,
);
