pub mod tables;

#[cfg(test)]
mod tests;

use std::error::Error;
use std::fmt::{self, Display};

use lazy_static::lazy_static;
use log::debug;
use regfile_common::RegisterConfiguration;
use target_lexicon::{Architecture, Triple, X86_32Architecture};

/// The compiler tier a register configuration is selected for.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum CompilerTier {
    Baseline,
    #[default]
    Optimizing,
}

#[derive(Debug)]
pub enum ArchError {
    UnsupportedTarget(Triple),
}

impl Error for ArchError {}
impl Display for ArchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedTarget(triple) => {
                write!(f, "the target '{triple}' has no register configuration")
            }
        }
    }
}

lazy_static! {
    static ref X64: RegisterConfiguration = RegisterConfiguration::new(&tables::x64::REGISTERS);
    static ref IA32: RegisterConfiguration = RegisterConfiguration::new(&tables::ia32::REGISTERS);
    static ref X87_BASELINE: RegisterConfiguration =
        RegisterConfiguration::new(&tables::x87::BASELINE_REGISTERS);
    static ref X87_OPTIMIZING: RegisterConfiguration =
        RegisterConfiguration::new(&tables::x87::OPTIMIZING_REGISTERS);
    static ref ARM: RegisterConfiguration = RegisterConfiguration::new(&tables::arm::REGISTERS);
    static ref ARM64: RegisterConfiguration = RegisterConfiguration::new(&tables::arm64::REGISTERS);
    static ref RISCV64: RegisterConfiguration =
        RegisterConfiguration::new(&tables::riscv64::REGISTERS);
}

/// Get the register configuration of the host.
pub fn arch_default(tier: CompilerTier) -> Result<&'static RegisterConfiguration, ArchError> {
    for_target(&Triple::host(), tier)
}

/// Get the register configuration for the given target and compiler tier. The
/// configuration is built on first use and shared afterwards.
pub fn for_target(
    target: &Triple,
    tier: CompilerTier,
) -> Result<&'static RegisterConfiguration, ArchError> {
    let config: &'static RegisterConfiguration = match target.architecture {
        Architecture::X86_64 => &*X64,

        Architecture::X86_32(X86_32Architecture::I386 | X86_32Architecture::I586) => match tier {
            CompilerTier::Baseline => &*X87_BASELINE,
            CompilerTier::Optimizing => &*X87_OPTIMIZING,
        },

        Architecture::X86_32(_) => &*IA32,
        Architecture::Arm(_) => &*ARM,
        Architecture::Aarch64(_) => &*ARM64,
        Architecture::Riscv64(_) => &*RISCV64,

        _ => return Err(ArchError::UnsupportedTarget(target.clone())),
    };

    debug!(
        "selected {} register configuration for '{target}' ({} general, {} double allocatable)",
        target.architecture,
        config.num_allocatable_general_registers(),
        config.num_allocatable_double_registers(),
    );

    Ok(config)
}
