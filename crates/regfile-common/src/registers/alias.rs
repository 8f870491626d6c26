use std::ops::Range;

use super::{AliasingKind, RegisterCode};
use crate::repr::Representation;

/// A contiguous run of aliased registers, `count` registers starting at
/// `base`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Aliases {
    pub count: usize,
    pub base: RegisterCode,
}

impl Aliases {
    pub fn contains(&self, index: RegisterCode) -> bool {
        self.iter().contains(&index)
    }

    pub fn iter(&self) -> Range<RegisterCode> {
        self.base..self.base + self.count
    }
}

/// Get the registers of representation `other_rep` which share storage with
/// register `index` of representation `rep`.
///
/// # Panics
///
/// Panics if either representation is not a floating point one. General
/// registers never alias.
pub fn get_aliases(
    kind: AliasingKind,
    rep: Representation,
    index: RegisterCode,
    other_rep: Representation,
) -> Aliases {
    use Representation::{Float32, Float64};

    match (kind, rep, other_rep) {
        (AliasingKind::Overlap, Float32 | Float64, Float32 | Float64) => Aliases {
            count: 1,
            base: index,
        },

        (AliasingKind::Combine, Float32, Float32) | (AliasingKind::Combine, Float64, Float64) => {
            Aliases {
                count: 1,
                base: index,
            }
        }

        (AliasingKind::Combine, Float64, Float32) => Aliases {
            count: 2,
            base: index * 2,
        },

        (AliasingKind::Combine, Float32, Float64) => Aliases {
            count: 1,
            base: index / 2,
        },

        (_, rep, other_rep) => unsupported(rep, other_rep),
    }
}

/// Check whether register `index` of representation `rep` shares storage with
/// register `other_index` of representation `other_rep`.
///
/// # Panics
///
/// Panics if either representation is not a floating point one.
pub fn are_aliases(
    kind: AliasingKind,
    rep: Representation,
    index: RegisterCode,
    other_rep: Representation,
    other_index: RegisterCode,
) -> bool {
    use Representation::{Float32, Float64};

    match (kind, rep, other_rep) {
        (AliasingKind::Overlap, Float32 | Float64, Float32 | Float64) => index == other_index,

        (AliasingKind::Combine, Float32, Float32) | (AliasingKind::Combine, Float64, Float64) => {
            index == other_index
        }

        (AliasingKind::Combine, Float64, Float32) => {
            other_index == index * 2 || other_index == index * 2 + 1
        }

        (AliasingKind::Combine, Float32, Float64) => other_index == index / 2,

        (_, rep, other_rep) => unsupported(rep, other_rep),
    }
}

fn unsupported(rep: Representation, other_rep: Representation) -> ! {
    panic!("registers of representation {rep} and {other_rep} cannot alias")
}
