mod business_number_checksum;
mod modern_id_card_checksum;
mod national_id_checksum;
mod old_resident_permit_checksum;
mod resident_permit_checksum;
mod taiwan_id_checksum;

pub use crate::secondary_validation::business_number_checksum::BusinessNumberChecksum;
pub use crate::secondary_validation::modern_id_card_checksum::ModernIdCardChecksum;
pub use crate::secondary_validation::national_id_checksum::NationalIdChecksum;
pub use crate::secondary_validation::old_resident_permit_checksum::OldResidentPermitChecksum;
pub use crate::secondary_validation::resident_permit_checksum::ResidentPermitChecksum;
pub use crate::secondary_validation::taiwan_id_checksum::TaiwanIdChecksum;

use crate::config::TaiwanIdValidator;
use crate::error::IdValidationError;
use crate::format::{classify_normalized, normalize, IdFormat};
use crate::observability::metrics::ValidationMetrics;
use crate::weights::area_weight;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

/// Length of a national ID or resident permit number
const PERSONAL_ID_LENGTH: usize = 10;

/// Classifies `id` and runs the checksum that belongs to its shape.
pub fn check(id: &str) -> Result<IdFormat, IdValidationError> {
    let (format, result) = classify_and_check(id);
    ValidationMetrics::record(format, result.is_ok());
    result
}

/// Runs `check` but only accepts the formats selected by `accepts_format`.
/// The counter reports the result the caller gets, not what `check` alone would say.
fn validate_as(id: &str, accepts_format: impl Fn(IdFormat) -> bool) -> bool {
    let (format, result) = classify_and_check(id);
    let valid = matches!(result, Ok(checked) if accepts_format(checked));
    ValidationMetrics::record(format, valid);
    valid
}

fn classify_and_check(id: &str) -> (IdFormat, Result<IdFormat, IdValidationError>) {
    let id = normalize(id);
    let format = classify_normalized(&id);
    (format, check_format(&id, format))
}

fn check_format(id: &str, format: IdFormat) -> Result<IdFormat, IdValidationError> {
    let valid = match format {
        IdFormat::NationalId | IdFormat::NewResidentPermit => {
            ModernIdCardChecksum::weighted_sum(id)? % 10 == 0
        }
        IdFormat::OldResidentPermit => OldResidentPermitChecksum::weighted_sum(id)? % 10 == 0,
        IdFormat::BusinessNumber => {
            let (sum1, sum2) = BusinessNumberChecksum::weighted_sums(id)?;
            sum1 % 5 == 0 || sum2 % 5 == 0
        }
        IdFormat::Invalid => return Err(IdValidationError::InvalidFormat),
    };
    if valid {
        Ok(format)
    } else {
        Err(IdValidationError::ChecksumMismatch(format))
    }
}

/// Returns the bytes of a 10 character personal ID, rejecting anything else.
fn personal_id_bytes(id: &str) -> Result<&[u8], IdValidationError> {
    if id.len() != PERSONAL_ID_LENGTH || !id.is_ascii() {
        return Err(IdValidationError::InvalidFormat);
    }
    Ok(id.as_bytes())
}

fn digit_at(id: &[u8], index: usize) -> Result<u32, IdValidationError> {
    id.get(index)
        .and_then(|byte| (*byte as char).to_digit(10))
        .ok_or(IdValidationError::InvalidDigit { position: index + 1 })
}

fn area_weight_at(id: &[u8], index: usize) -> Result<u32, IdValidationError> {
    let letter = id
        .get(index)
        .map(|byte| *byte as char)
        .ok_or(IdValidationError::InvalidFormat)?;
    area_weight(letter).ok_or(IdValidationError::UnknownAreaLetter(letter))
}

impl Validator for TaiwanIdValidator {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        match self {
            TaiwanIdValidator::TaiwanNationalIdChecksum => {
                NationalIdChecksum.is_valid_match(regex_match)
            }
            TaiwanIdValidator::TaiwanResidentPermitChecksum => {
                ResidentPermitChecksum.is_valid_match(regex_match)
            }
            TaiwanIdValidator::TaiwanIdChecksum => TaiwanIdChecksum.is_valid_match(regex_match),
            TaiwanIdValidator::TaiwanBusinessNumberChecksum => {
                BusinessNumberChecksum.is_valid_match(regex_match)
            }
        }
    }
}
