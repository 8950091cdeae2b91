use serde::{Deserialize, Serialize};

/// Selects one of the validators from configuration, e.g. `{"type": "TaiwanIdChecksum"}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum TaiwanIdValidator {
    TaiwanNationalIdChecksum,
    TaiwanResidentPermitChecksum,
    /// National ID or resident permit
    TaiwanIdChecksum,
    TaiwanBusinessNumberChecksum,
}
