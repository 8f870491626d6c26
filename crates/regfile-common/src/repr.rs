use std::fmt::{self, Display};

/// The machine representation of a value living in a register.
///
/// Only the floating point representations take part in register aliasing;
/// general purpose registers never alias one another.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Representation {
    General,
    Float32,
    Float64,
}

impl Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::General => write!(f, "general"),
            Self::Float32 => write!(f, "f32"),
            Self::Float64 => write!(f, "f64"),
        }
    }
}
