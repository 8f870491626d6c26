use regfile_common::{AliasingKind, RegisterConfiguration, RegisterFile, Representation};

use super::{alias, show};

const GENERAL_NAMES: &[&str] = &["r0", "r1", "r2", "r3"];
const SINGLE_NAMES: &[&str] = &["s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7"];
const DOUBLE_NAMES: &[&str] = &["d0", "d1", "d2", "d3"];

fn vfp() -> RegisterConfiguration {
    RegisterConfiguration::new(&RegisterFile {
        num_general_registers: 4,
        num_double_registers: 4,
        num_float_registers: None,
        aliasing_kind: AliasingKind::Combine,
        allocatable_general_codes: &[0, 1, 2],
        allocatable_double_codes: &[0, 1, 3],
        general_names: GENERAL_NAMES,
        float_names: SINGLE_NAMES,
        double_names: DOUBLE_NAMES,
    })
}

#[test]
fn show_describes_every_class() {
    let expected = "aliasing: combine
general: 4 registers, 3 allocatable (mask 0x00000007)
  r0 r1 r2
f64: 4 registers, 3 allocatable (mask 0x0000000b)
  d0 d1 d3
f32: 8 registers, 6 allocatable
  s0 s1 s2 s3 s6 s7
";

    assert_eq!(expected, show(&vfp()));
}

#[test]
fn alias_names_both_halves() {
    let config = vfp();
    let text = alias(&config, Representation::Float64, 3, Representation::Float32).unwrap();

    assert_eq!("d3 -> s6 s7", text);
}

#[test]
fn alias_names_containing_double() {
    let config = vfp();
    let text = alias(&config, Representation::Float32, 5, Representation::Float64).unwrap();

    assert_eq!("s5 -> d2", text);
}

#[test]
fn alias_rejects_missing_register() {
    let config = vfp();

    assert!(alias(&config, Representation::Float64, 4, Representation::Float32).is_err());
}
