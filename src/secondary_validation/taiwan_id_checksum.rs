use crate::format::IdFormat;
use crate::secondary_validation::{validate_as, Validator};

/// Validates any personal ID: a national ID or a resident permit of either format.
/// Business numbers are not accepted.
pub struct TaiwanIdChecksum;

impl Validator for TaiwanIdChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        validate_as(regex_match, |format| format.is_personal())
    }
}
