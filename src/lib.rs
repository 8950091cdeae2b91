// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

//! Validation of Taiwanese identification numbers: national IDs, resident
//! permits (ARC) in both the current and the legacy format, and company
//! business numbers (UBN).
//!
//! Only the shape and the check digit are verified. A valid result does not
//! mean the number was ever issued.

mod config;
mod error;
mod format;
mod observability;
mod secondary_validation;
mod weights;

// This is the public API of the crate
pub use config::TaiwanIdValidator;
pub use error::IdValidationError;
pub use format::{classify, IdFormat};
pub use observability::metrics::VALIDATIONS_METRIC;
pub use secondary_validation::{
    check, BusinessNumberChecksum, ModernIdCardChecksum, NationalIdChecksum,
    OldResidentPermitChecksum, ResidentPermitChecksum, TaiwanIdChecksum, Validator,
};
pub use weights::area_weight;

/// Validates a national ID, e.g. `A123456789`.
pub fn validate_national_id(id: &str) -> bool {
    NationalIdChecksum.is_valid_match(id)
}

/// Validates a resident permit number in the current (`A800000014`) or the
/// legacy (`AC01234567`) format.
pub fn validate_resident_permit_id(id: &str) -> bool {
    ResidentPermitChecksum.is_valid_match(id)
}

/// Validates a national ID or a resident permit number of either format.
pub fn validate_any(id: &str) -> bool {
    TaiwanIdChecksum.is_valid_match(id)
}

/// Validates an 8 digit business number, e.g. `04595257`.
pub fn validate_business_number(id: &str) -> bool {
    BusinessNumberChecksum.is_valid_match(id)
}
