use regfile_common::{AliasingKind, RegisterFile};

#[rustfmt::skip]
const GENERAL_NAMES: &[&str] = &[
    "x0",  "x1",  "x2",  "x3",  "x4",  "x5",  "x6",  "x7",
    "x8",  "x9",  "x10", "x11", "x12", "x13", "x14", "x15",
    "x16", "x17", "x18", "x19", "x20", "x21", "x22", "x23",
    "x24", "x25", "x26", "x27", "x28", "fp",  "lr",  "sp",
];

#[rustfmt::skip]
const SINGLE_NAMES: &[&str] = &[
    "s0",  "s1",  "s2",  "s3",  "s4",  "s5",  "s6",  "s7",
    "s8",  "s9",  "s10", "s11", "s12", "s13", "s14", "s15",
    "s16", "s17", "s18", "s19", "s20", "s21", "s22", "s23",
    "s24", "s25", "s26", "s27", "s28", "s29", "s30", "s31",
];

#[rustfmt::skip]
const DOUBLE_NAMES: &[&str] = &[
    "d0",  "d1",  "d2",  "d3",  "d4",  "d5",  "d6",  "d7",
    "d8",  "d9",  "d10", "d11", "d12", "d13", "d14", "d15",
    "d16", "d17", "d18", "d19", "d20", "d21", "d22", "d23",
    "d24", "d25", "d26", "d27", "d28", "d29", "d30", "d31",
];

/// `x16`/`x17` are the intra-procedure-call scratch registers and `x18` is the
/// platform register. `d15`, `d30` and `d31` are scratch.
pub const REGISTERS: RegisterFile = RegisterFile {
    num_general_registers: 32,
    num_double_registers: 32,
    num_float_registers: None,
    aliasing_kind: AliasingKind::Overlap,

    #[rustfmt::skip]
    allocatable_general_codes: &[
        0,  1,  2,  3,  4,  5,  6,  7,  8,  9,  10, 11, 12, 13, 14, 15,
        19, 20, 21, 22, 23, 24, 25, 27,
    ],
    #[rustfmt::skip]
    allocatable_double_codes: &[
        0,  1,  2,  3,  4,  5,  6,  7,  8,  9,  10, 11, 12, 13, 14,
        16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29,
    ],

    general_names: GENERAL_NAMES,
    float_names: SINGLE_NAMES,
    double_names: DOUBLE_NAMES,
};
