use crate::error::IdValidationError;
use crate::format::IdFormat;
use crate::secondary_validation::{digit_at, validate_as, Validator};
use crate::weights::BUSINESS_NUMBER_WEIGHTS;

/// Checksum of the 8 digit Unified Business Number (UBN).
pub struct BusinessNumberChecksum;

const BUSINESS_NUMBER_LENGTH: usize = 8;

/// Index of the digit weighted by 4. A `7` there gives 28, whose digit sum
/// 10 may count as either 1 or 0.
const AMBIGUOUS_DIGIT_INDEX: usize = 6;

impl BusinessNumberChecksum {
    /// Returns both accumulators. They only differ when a `7` sits at the
    /// ambiguous position.
    pub(crate) fn weighted_sums(id: &str) -> Result<(u32, u32), IdValidationError> {
        if id.len() != BUSINESS_NUMBER_LENGTH || !id.is_ascii() {
            return Err(IdValidationError::InvalidFormat);
        }
        let id = id.as_bytes();

        let mut sum1 = 0;
        let mut sum2 = 0;

        for (i, weight) in BUSINESS_NUMBER_WEIGHTS.iter().enumerate() {
            let digit = digit_at(id, i)?;
            if i == AMBIGUOUS_DIGIT_INDEX && digit == 7 {
                sum1 += 1;
                sum2 += 0;
            } else {
                let product = digit * weight;
                sum1 += product / 10 + product % 10;
                sum2 += product / 10 + product % 10;
            }
        }

        Ok((sum1, sum2))
    }
}

impl Validator for BusinessNumberChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        validate_as(regex_match, |format| format == IdFormat::BusinessNumber)
    }
}
