use crate::format::IdFormat;
use crate::secondary_validation::{validate_as, Validator};

/// Validates a resident permit (ARC) number, in either the current single
/// letter format or the older two letter format.
pub struct ResidentPermitChecksum;

impl Validator for ResidentPermitChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        validate_as(regex_match, |format| format.is_resident_permit())
    }
}
