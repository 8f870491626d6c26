//! Architecture independent descriptions of the registers available for
//! instruction selection and register allocation.
//!
//! A [`RegisterConfiguration`] is built once per target from a static
//! [`RegisterFile`] table and is read-only afterwards, so a single instance can
//! be shared freely between threads.
//!
//! Out-of-range indices and codes are contract violations and panic.

mod alias;
mod pretty;


pub use alias::{are_aliases, get_aliases, Aliases};
pub use pretty::Prettier;

use log::trace;

use crate::repr::Representation;

pub type RegisterCode = usize;

/// Architecture independent upper bound on the number of general registers.
pub const MAX_GENERAL_REGISTERS: usize = 32;

/// Architecture independent upper bound on the number of floating point
/// registers of any single width.
pub const MAX_FP_REGISTERS: usize = 32;

/// How floating point registers of different widths share storage.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AliasingKind {
    /// Every register aliases exactly one register of every other width, at
    /// the same code (e.g. the x86 `xmm` registers).
    Overlap,

    /// A register aliases two registers of the next smaller width, at twice its
    /// code (e.g. ARM VFP, where `d1` is `s2:s3`).
    Combine,
}

/// The static description of a register file, as written down per
/// architecture.
#[derive(Clone, Copy, Debug)]
pub struct RegisterFile {
    pub num_general_registers: usize,
    pub num_double_registers: usize,

    /// The number of single precision registers. When `None`, this is derived
    /// from the double registers and the aliasing kind.
    pub num_float_registers: Option<usize>,

    pub aliasing_kind: AliasingKind,

    pub allocatable_general_codes: &'static [RegisterCode],
    pub allocatable_double_codes: &'static [RegisterCode],

    pub general_names: &'static [&'static str],
    pub float_names: &'static [&'static str],
    pub double_names: &'static [&'static str],
}

/// The registers of a target, with the allocatable subsets precomputed as
/// bitmasks and the single precision view derived from the double registers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegisterConfiguration {
    num_general_registers: usize,
    num_float_registers: usize,
    num_double_registers: usize,
    num_allocatable_float_registers: usize,
    aliasing_kind: AliasingKind,

    allocatable_general_codes_mask: u32,
    allocatable_double_codes_mask: u32,

    allocatable_general_codes: &'static [RegisterCode],
    allocatable_double_codes: &'static [RegisterCode],
    allocatable_float_codes: [RegisterCode; MAX_FP_REGISTERS],

    general_names: &'static [&'static str],
    float_names: &'static [&'static str],
    double_names: &'static [&'static str],
}

impl RegisterConfiguration {
    /// Build the configuration for the given register file.
    ///
    /// # Panics
    ///
    /// Panics if an allocatable code does not fit in a 32 bit mask.
    pub fn new(file: &RegisterFile) -> Self {
        let allocatable_general_codes_mask = codes_mask(file.allocatable_general_codes);
        let allocatable_double_codes_mask = codes_mask(file.allocatable_double_codes);

        let mut allocatable_float_codes = [0; MAX_FP_REGISTERS];
        let mut num_allocatable_float_registers = 0;

        let num_float_registers = match file.aliasing_kind {
            AliasingKind::Overlap => {
                for (slot, code) in allocatable_float_codes
                    .iter_mut()
                    .zip(file.allocatable_double_codes)
                {
                    *slot = *code;
                    num_allocatable_float_registers += 1;
                }

                file.num_float_registers.unwrap_or(file.num_double_registers)
            }

            AliasingKind::Combine => {
                for code in file.allocatable_double_codes {
                    let base = code * 2;
                    if base >= MAX_FP_REGISTERS {
                        continue;
                    }

                    allocatable_float_codes[num_allocatable_float_registers] = base;
                    allocatable_float_codes[num_allocatable_float_registers + 1] = base + 1;
                    num_allocatable_float_registers += 2;
                }

                file.num_float_registers
                    .unwrap_or_else(|| (file.num_double_registers * 2).min(MAX_FP_REGISTERS))
            }
        };

        trace!(
            "derived {num_allocatable_float_registers} allocatable float registers ({:?} aliasing)",
            file.aliasing_kind
        );

        Self {
            num_general_registers: file.num_general_registers,
            num_float_registers,
            num_double_registers: file.num_double_registers,
            num_allocatable_float_registers,
            aliasing_kind: file.aliasing_kind,

            allocatable_general_codes_mask,
            allocatable_double_codes_mask,

            allocatable_general_codes: file.allocatable_general_codes,
            allocatable_double_codes: file.allocatable_double_codes,
            allocatable_float_codes,

            general_names: file.general_names,
            float_names: file.float_names,
            double_names: file.double_names,
        }
    }

    pub fn num_general_registers(&self) -> usize {
        self.num_general_registers
    }

    pub fn num_float_registers(&self) -> usize {
        self.num_float_registers
    }

    pub fn num_double_registers(&self) -> usize {
        self.num_double_registers
    }

    pub fn num_allocatable_general_registers(&self) -> usize {
        self.allocatable_general_codes.len()
    }

    pub fn num_allocatable_double_registers(&self) -> usize {
        self.allocatable_double_codes.len()
    }

    pub fn num_allocatable_float_registers(&self) -> usize {
        self.num_allocatable_float_registers
    }

    pub fn aliasing_kind(&self) -> AliasingKind {
        self.aliasing_kind
    }

    pub fn allocatable_general_codes_mask(&self) -> u32 {
        self.allocatable_general_codes_mask
    }

    pub fn allocatable_double_codes_mask(&self) -> u32 {
        self.allocatable_double_codes_mask
    }

    /// Get the code of the `index`th allocatable general register. Note that
    /// `index` is a position in the allocatable list, not a register code.
    pub fn allocatable_general_code(&self, index: usize) -> RegisterCode {
        self.allocatable_general_codes[index]
    }

    /// Get the code of the `index`th allocatable double register.
    pub fn allocatable_double_code(&self, index: usize) -> RegisterCode {
        self.allocatable_double_codes[index]
    }

    /// Get the code of the `index`th allocatable float register.
    pub fn allocatable_float_code(&self, index: usize) -> RegisterCode {
        self.allocatable_float_codes()[index]
    }

    pub fn allocatable_general_codes(&self) -> &[RegisterCode] {
        self.allocatable_general_codes
    }

    pub fn allocatable_double_codes(&self) -> &[RegisterCode] {
        self.allocatable_double_codes
    }

    pub fn allocatable_float_codes(&self) -> &[RegisterCode] {
        &self.allocatable_float_codes[..self.num_allocatable_float_registers]
    }

    pub fn is_allocatable_general(&self, code: RegisterCode) -> bool {
        code < 32 && self.allocatable_general_codes_mask & (1u32 << code) != 0
    }

    pub fn is_allocatable_double(&self, code: RegisterCode) -> bool {
        code < 32 && self.allocatable_double_codes_mask & (1u32 << code) != 0
    }

    pub fn is_allocatable_float(&self, code: RegisterCode) -> bool {
        self.allocatable_float_codes().contains(&code)
    }

    pub fn general_register_name(&self, code: RegisterCode) -> &'static str {
        self.general_names[code]
    }

    pub fn float_register_name(&self, code: RegisterCode) -> &'static str {
        self.float_names[code]
    }

    pub fn double_register_name(&self, code: RegisterCode) -> &'static str {
        self.double_names[code]
    }

    /// Get the name of the register with the given code and representation.
    pub fn register_name(&self, rep: Representation, code: RegisterCode) -> &'static str {
        match rep {
            Representation::General => self.general_register_name(code),
            Representation::Float32 => self.float_register_name(code),
            Representation::Float64 => self.double_register_name(code),
        }
    }

    /// Get the registers of representation `other_rep` which share storage
    /// with register `index` of representation `rep`.
    ///
    /// # Panics
    ///
    /// Panics if either representation is not a floating point one.
    pub fn get_aliases(
        &self,
        rep: Representation,
        index: RegisterCode,
        other_rep: Representation,
    ) -> Aliases {
        get_aliases(self.aliasing_kind, rep, index, other_rep)
    }

    /// Check whether two registers share storage.
    ///
    /// # Panics
    ///
    /// Panics if either representation is not a floating point one.
    pub fn are_aliases(
        &self,
        rep: Representation,
        index: RegisterCode,
        other_rep: Representation,
        other_index: RegisterCode,
    ) -> bool {
        are_aliases(self.aliasing_kind, rep, index, other_rep, other_index)
    }
}

fn codes_mask(codes: &[RegisterCode]) -> u32 {
    codes.iter().fold(0, |mask, code| {
        assert!(*code < 32, "register code {code} does not fit in the mask");
        mask | (1u32 << code)
    })
}
