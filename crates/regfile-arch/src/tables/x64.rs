use regfile_common::{AliasingKind, RegisterFile};

#[rustfmt::skip]
const GENERAL_NAMES: &[&str] = &[
    "rax", "rcx", "rdx", "rbx", "rsp", "rbp", "rsi", "rdi",
    "r8",  "r9",  "r10", "r11", "r12", "r13", "r14", "r15",
];

#[rustfmt::skip]
const XMM_NAMES: &[&str] = &[
    "xmm0", "xmm1", "xmm2",  "xmm3",  "xmm4",  "xmm5",  "xmm6",  "xmm7",
    "xmm8", "xmm9", "xmm10", "xmm11", "xmm12", "xmm13", "xmm14", "xmm15",
];

/// `rsp` and `rbp` hold the stack and frame, `r10` is scratch and `r13` points
/// at the root table. `xmm0` and `xmm15` are scratch.
pub const REGISTERS: RegisterFile = RegisterFile {
    num_general_registers: 16,
    num_double_registers: 16,
    num_float_registers: None,
    aliasing_kind: AliasingKind::Overlap,

    allocatable_general_codes: &[0, 3, 2, 1, 6, 7, 8, 9, 11, 12, 14, 15],
    allocatable_double_codes: &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14],

    general_names: GENERAL_NAMES,
    float_names: XMM_NAMES,
    double_names: XMM_NAMES,
};
