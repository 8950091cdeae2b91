use crate::format::IdFormat;
use crate::secondary_validation::{validate_as, Validator};

/// Validates a national ID (letter, `1` or `2`, then 8 digits). Letter case is ignored.
pub struct NationalIdChecksum;

impl Validator for NationalIdChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        validate_as(regex_match, |format| format == IdFormat::NationalId)
    }
}
