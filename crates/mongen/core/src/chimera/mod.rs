//! Chimera assembly: three templates merged into one composite monster.
//!
//! Pipeline: the [`filter`] predicates classify candidate parts, the
//! [`select`] routines draw three depth-appropriate parts, and
//! [`assemble`] merges their attributes onto the target under fixed
//! precedence rules. [`info`] exposes the assembled roles afterwards.
//!
//! Callers must pre-filter parts through [`select`]; a zombified or invalid
//! part reaching the assembler is a contract violation, not a recoverable
//! condition.

mod assemble;
mod filter;
pub mod info;
mod select;

pub use assemble::{define_chimera, define_chimera_for_place};
pub use filter::{is_disqualified_part, is_valid_part};
pub use select::{part_for_place, select_parts};

use crate::error::{ErrorSeverity, GenError};
use crate::species::SpeciesId;

/// Errors raised by chimera assembly and introspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssemblyError {
    /// A part failed validity (zombified, placeholder, composite, or
    /// excluded from derivation). The caller's filtering is defective.
    #[error("invalid part {part:?} in slot {slot}")]
    InvalidPart { part: SpeciesId, slot: u8 },

    /// The repository has no template for this species.
    #[error("no template for species {0:?}")]
    UnknownTemplate(SpeciesId),

    /// Introspection asked for an auxiliary part that was never attached.
    /// A confirmed chimera always has all three parts.
    #[error("chimera part {0} missing")]
    MissingPart(u8),

    /// A chimera-only operation ran on a non-chimera.
    #[error("monster is not a chimera")]
    NotAChimera,

    /// Part numbers are 1-3.
    #[error("part number {0} out of range")]
    PartOutOfRange(u8),
}

impl GenError for AssemblyError {
    fn severity(&self) -> ErrorSeverity {
        use AssemblyError::*;
        match self {
            // Contract violations: a defect in the caller, never coerced
            InvalidPart { .. } | MissingPart(_) | NotAChimera => ErrorSeverity::Fatal,

            // Bad references rejected without retry
            UnknownTemplate(_) | PartOutOfRange(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use AssemblyError::*;
        match self {
            InvalidPart { .. } => "CHIMERA_INVALID_PART",
            UnknownTemplate(_) => "CHIMERA_UNKNOWN_TEMPLATE",
            MissingPart(_) => "CHIMERA_MISSING_PART",
            NotAChimera => "CHIMERA_NOT_A_CHIMERA",
            PartOutOfRange(_) => "CHIMERA_PART_OUT_OF_RANGE",
        }
    }
}
