use crate::error::IdValidationError;
use crate::secondary_validation::{area_weight_at, digit_at, personal_id_bytes, Validator};
use crate::weights::{split_weight, OLD_RESIDENT_PERMIT_WEIGHTS};

/// Checksum of resident permits issued before the single letter format.
/// The second letter used to encode the holder's category and only its units
/// digit takes part in the sum.
pub struct OldResidentPermitChecksum;

impl OldResidentPermitChecksum {
    pub(crate) fn weighted_sum(id: &str) -> Result<u32, IdValidationError> {
        let id = personal_id_bytes(id)?;

        let (tens, units) = split_weight(area_weight_at(id, 0)?);
        let mut sum = tens + units * 9;

        let (_, category_units) = split_weight(area_weight_at(id, 1)?);
        sum += category_units * 8;

        for (i, weight) in OLD_RESIDENT_PERMIT_WEIGHTS.iter().enumerate() {
            sum += digit_at(id, i + 2)? * weight;
        }

        sum += digit_at(id, 9)?;
        Ok(sum)
    }
}

impl Validator for OldResidentPermitChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        matches!(Self::weighted_sum(regex_match), Ok(sum) if sum % 10 == 0)
    }
}
