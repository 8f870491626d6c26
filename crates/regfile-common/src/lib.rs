pub mod registers;
pub mod repr;

pub use registers::{
    are_aliases, get_aliases, AliasingKind, Aliases, Prettier, RegisterCode,
    RegisterConfiguration, RegisterFile, MAX_FP_REGISTERS, MAX_GENERAL_REGISTERS,
};
pub use repr::Representation;
