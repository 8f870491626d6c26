use regfile_common::{AliasingKind, RegisterFile};

#[rustfmt::skip]
const GENERAL_NAMES: &[&str] = &[
    "zero", "ra", "sp", "gp", "tp",  "t0",  "t1", "t2",
    "s0",   "s1", "a0", "a1", "a2",  "a3",  "a4", "a5",
    "a6",   "a7", "s2", "s3", "s4",  "s5",  "s6", "s7",
    "s8",   "s9", "s10", "s11", "t3", "t4", "t5", "t6",
];

#[rustfmt::skip]
const FP_NAMES: &[&str] = &[
    "ft0", "ft1", "ft2",  "ft3",  "ft4", "ft5", "ft6",  "ft7",
    "fs0", "fs1", "fa0",  "fa1",  "fa2", "fa3", "fa4",  "fa5",
    "fa6", "fa7", "fs2",  "fs3",  "fs4", "fs5", "fs6",  "fs7",
    "fs8", "fs9", "fs10", "fs11", "ft8", "ft9", "ft10", "ft11",
];

/// Single precision values are NaN-boxed in the low half of the same `f`
/// register, so both widths share codes.
pub const REGISTERS: RegisterFile = RegisterFile {
    num_general_registers: 32,
    num_double_registers: 32,
    num_float_registers: None,
    aliasing_kind: AliasingKind::Overlap,

    #[rustfmt::skip]
    allocatable_general_codes: &[
        10, 11, 12, 13, 14, 15, 16, 17,
        9,  18, 19, 20, 21, 22, 23, 24, 25, 26, 27,
        7,  28, 29,
    ],
    #[rustfmt::skip]
    allocatable_double_codes: &[
        10, 11, 12, 13, 14, 15, 16, 17,
        0,  1,  2,  3,  4,  5,  6,  7,
        8,  9,  18, 19, 20, 21, 22, 23, 24, 25, 26, 27,
    ],

    general_names: GENERAL_NAMES,
    float_names: FP_NAMES,
    double_names: FP_NAMES,
};
