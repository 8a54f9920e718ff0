//! Password validation sections
//!
//! Each section checks one rule. The validator runs them in order and
//! stops at the first rejection.

mod entropy;
mod length;
mod variety;

pub use entropy::{entropy_section, MIN_ENTROPY_SCORE};
pub use length::{length_section, MIN_LENGTH};
pub use variety::character_class_section;

use crate::verdict::RejectionReason;

/// Result type for section functions.
/// - `Some(reason)` - Section rejected the password
/// - `None` - Section passed
pub type SectionResult = Option<RejectionReason>;
