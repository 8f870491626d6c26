use regfile_common::{AliasingKind, RegisterFile};

const GENERAL_NAMES: &[&str] = &["eax", "ecx", "edx", "ebx", "esp", "ebp", "esi", "edi"];

#[rustfmt::skip]
const STACK_NAMES: &[&str] = &[
    "stX_0", "stX_1", "stX_2", "stX_3", "stX_4", "stX_5", "stX_6", "stX_7",
];

/// x86 without SSE2, where floating point values live on the x87 register
/// stack.
pub const BASELINE_REGISTERS: RegisterFile = RegisterFile {
    num_general_registers: 8,
    num_double_registers: 8,
    num_float_registers: None,
    aliasing_kind: AliasingKind::Overlap,

    allocatable_general_codes: &[0, 1, 2, 3, 6, 7],
    allocatable_double_codes: &[0, 1, 2, 3, 4, 5, 6],

    general_names: GENERAL_NAMES,
    float_names: STACK_NAMES,
    double_names: STACK_NAMES,
};

/// The optimizing tier only models the top of the x87 stack.
pub const OPTIMIZING_REGISTERS: RegisterFile = RegisterFile {
    allocatable_double_codes: &[0],
    ..BASELINE_REGISTERS
};
