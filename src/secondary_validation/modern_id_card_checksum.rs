use crate::error::IdValidationError;
use crate::secondary_validation::{area_weight_at, digit_at, personal_id_bytes, Validator};
use crate::weights::{split_weight, MODERN_ID_WEIGHTS};

/// Checksum shared by national IDs and new style resident permits: an area
/// letter followed by 9 digits, the last one being the check digit.
pub struct ModernIdCardChecksum;

impl ModernIdCardChecksum {
    pub(crate) fn weighted_sum(id: &str) -> Result<u32, IdValidationError> {
        let id = personal_id_bytes(id)?;

        let (tens, units) = split_weight(area_weight_at(id, 0)?);
        let mut sum = tens + units * 9;

        for (i, weight) in MODERN_ID_WEIGHTS.iter().enumerate() {
            sum += digit_at(id, i + 1)? * weight;
        }

        // The check digit has a weight of 1
        sum += digit_at(id, 9)?;
        Ok(sum)
    }
}

impl Validator for ModernIdCardChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        matches!(Self::weighted_sum(regex_match), Ok(sum) if sum % 10 == 0)
    }
}
