use std::collections::HashSet;
use std::str::FromStr;

use regfile_common::{
    AliasingKind, RegisterConfiguration, Representation, MAX_FP_REGISTERS, MAX_GENERAL_REGISTERS,
};
use target_lexicon::Triple;

use super::{for_target, tables, ArchError, CompilerTier};

fn config(triple: &str, tier: CompilerTier) -> &'static RegisterConfiguration {
    for_target(&Triple::from_str(triple).unwrap(), tier).unwrap()
}

fn check_codes(codes: &[usize], count: usize) {
    let unique: HashSet<_> = codes.iter().collect();
    assert_eq!(codes.len(), unique.len(), "duplicate codes in {codes:?}");
    assert!(codes.iter().all(|code| *code < count), "{codes:?} out of range");
}

#[test]
fn tables_are_consistent() {
    let files = [
        tables::x64::REGISTERS,
        tables::ia32::REGISTERS,
        tables::x87::BASELINE_REGISTERS,
        tables::x87::OPTIMIZING_REGISTERS,
        tables::arm::REGISTERS,
        tables::arm64::REGISTERS,
        tables::riscv64::REGISTERS,
    ];

    for file in files {
        let config = RegisterConfiguration::new(&file);

        assert!(config.num_general_registers() <= MAX_GENERAL_REGISTERS);
        assert!(config.num_double_registers() <= MAX_FP_REGISTERS);

        assert_eq!(config.num_general_registers(), file.general_names.len());
        assert_eq!(config.num_double_registers(), file.double_names.len());
        assert_eq!(config.num_float_registers(), file.float_names.len());

        check_codes(config.allocatable_general_codes(), config.num_general_registers());
        check_codes(config.allocatable_double_codes(), config.num_double_registers());
        check_codes(config.allocatable_float_codes(), config.num_float_registers());

        for code in config.allocatable_float_codes() {
            assert!(!config.float_register_name(*code).is_empty());
        }
    }
}

#[test]
fn x64_overlaps_xmm() {
    let config = config("x86_64-unknown-linux-gnu", CompilerTier::Optimizing);

    assert_eq!(AliasingKind::Overlap, config.aliasing_kind());
    assert_eq!(12, config.num_allocatable_general_registers());
    assert_eq!("rbx", config.general_register_name(config.allocatable_general_code(1)));
    assert!(!config.is_allocatable_general(4));
    assert_eq!("xmm3", config.register_name(Representation::Float32, 3));
    assert!(config.are_aliases(Representation::Float64, 3, Representation::Float32, 3));
}

#[test]
fn arm_combines_singles() {
    let config = config("armv7-unknown-linux-gnueabihf", CompilerTier::Optimizing);

    assert_eq!(AliasingKind::Combine, config.aliasing_kind());
    assert_eq!(MAX_FP_REGISTERS, config.num_float_registers());
    assert_eq!(30, config.num_allocatable_double_registers());
    assert_eq!(28, config.num_allocatable_float_registers());
    assert_eq!("s27", config.float_register_name(config.allocatable_float_code(27)));

    let aliases = config.get_aliases(Representation::Float64, 3, Representation::Float32);
    let names: Vec<_> = aliases
        .iter()
        .map(|code| config.float_register_name(code))
        .collect();
    assert_eq!(vec!["s6", "s7"], names);
}

#[test]
fn x87_tiers_differ() {
    let baseline = config("i586-unknown-linux-gnu", CompilerTier::Baseline);
    let optimizing = config("i586-unknown-linux-gnu", CompilerTier::Optimizing);

    assert_eq!(7, baseline.num_allocatable_double_registers());
    assert_eq!(1, optimizing.num_allocatable_double_registers());
    assert_eq!("stX_0", optimizing.double_register_name(optimizing.allocatable_double_code(0)));
    assert_eq!(
        baseline.allocatable_general_codes(),
        optimizing.allocatable_general_codes()
    );
}

#[test]
fn sse_ignores_tier() {
    let baseline = config("i686-unknown-linux-gnu", CompilerTier::Baseline);
    let optimizing = config("i686-unknown-linux-gnu", CompilerTier::Optimizing);

    assert!(std::ptr::eq(baseline, optimizing));
    assert_eq!("xmm1", baseline.double_register_name(baseline.allocatable_double_code(0)));
}

#[test]
fn configurations_are_shared() {
    let a = config("aarch64-unknown-linux-gnu", CompilerTier::Optimizing);
    let b = config("aarch64-apple-darwin", CompilerTier::Optimizing);

    assert!(std::ptr::eq(a, b));
    assert_eq!(24, a.num_allocatable_general_registers());
}

#[test]
fn riscv_shares_fp_codes() {
    let config = config("riscv64gc-unknown-linux-gnu", CompilerTier::Optimizing);

    assert_eq!("fa0", config.register_name(Representation::Float64, 10));
    assert_eq!("a0", config.general_register_name(config.allocatable_general_code(0)));
    assert_eq!(config.allocatable_double_codes(), config.allocatable_float_codes());
}

#[test]
fn unsupported_target_is_rejected() {
    let triple = Triple::from_str("wasm32-unknown-unknown").unwrap();

    match for_target(&triple, CompilerTier::Baseline) {
        Err(ArchError::UnsupportedTarget(target)) => assert_eq!(triple, target),
        Ok(_) => panic!("wasm32 has no register configuration"),
    }
}
