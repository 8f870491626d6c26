use regfile_common::{AliasingKind, RegisterFile};

const GENERAL_NAMES: &[&str] = &["eax", "ecx", "edx", "ebx", "esp", "ebp", "esi", "edi"];

const XMM_NAMES: &[&str] = &["xmm0", "xmm1", "xmm2", "xmm3", "xmm4", "xmm5", "xmm6", "xmm7"];

/// SSE2 capable x86. `xmm0` is the scratch double register.
pub const REGISTERS: RegisterFile = RegisterFile {
    num_general_registers: 8,
    num_double_registers: 8,
    num_float_registers: None,
    aliasing_kind: AliasingKind::Overlap,

    allocatable_general_codes: &[0, 1, 2, 3, 6, 7],
    allocatable_double_codes: &[1, 2, 3, 4, 5, 6, 7],

    general_names: GENERAL_NAMES,
    float_names: XMM_NAMES,
    double_names: XMM_NAMES,
};
