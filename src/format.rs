use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use strum::{AsRefStr, Display, EnumIter, IntoStaticStr};

/// The shape of a candidate identifier. Each shape is handled by exactly one checksum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum IdFormat {
    /// Letter, `1` or `2`, then 8 digits
    NationalId,
    /// Letter, `8` or `9`, then 8 digits
    NewResidentPermit,
    /// Two letters, then 8 digits
    OldResidentPermit,
    /// Exactly 8 digits
    BusinessNumber,
    Invalid,
}

lazy_static! {
    // `[0-9]` rather than `\d`, which would also accept non-ASCII decimal digits
    static ref NATIONAL_ID_PATTERN: Regex = Regex::new(r"^[A-Z][12][0-9]{8}$").unwrap();
    static ref NEW_RESIDENT_PERMIT_PATTERN: Regex = Regex::new(r"^[A-Z][89][0-9]{8}$").unwrap();
    static ref OLD_RESIDENT_PERMIT_PATTERN: Regex = Regex::new(r"^[A-Z]{2}[0-9]{8}$").unwrap();
    static ref BUSINESS_NUMBER_PATTERN: Regex = Regex::new(r"^[0-9]{8}$").unwrap();
}

impl IdFormat {
    /// National IDs and resident permits, as opposed to business numbers.
    pub fn is_personal(&self) -> bool {
        matches!(
            self,
            IdFormat::NationalId | IdFormat::NewResidentPermit | IdFormat::OldResidentPermit
        )
    }

    pub fn is_resident_permit(&self) -> bool {
        matches!(self, IdFormat::NewResidentPermit | IdFormat::OldResidentPermit)
    }
}

/// Uppercases ASCII letters. Everything else, whitespace included, is kept as is.
pub fn normalize(id: &str) -> Cow<'_, str> {
    if id.bytes().any(|b| b.is_ascii_lowercase()) {
        Cow::Owned(id.to_ascii_uppercase())
    } else {
        Cow::Borrowed(id)
    }
}

/// Classifies a candidate by shape only. No checksum is computed.
pub fn classify(id: &str) -> IdFormat {
    classify_normalized(&normalize(id))
}

pub(crate) fn classify_normalized(id: &str) -> IdFormat {
    if NATIONAL_ID_PATTERN.is_match(id) {
        IdFormat::NationalId
    } else if NEW_RESIDENT_PERMIT_PATTERN.is_match(id) {
        IdFormat::NewResidentPermit
    } else if OLD_RESIDENT_PERMIT_PATTERN.is_match(id) {
        IdFormat::OldResidentPermit
    } else if BUSINESS_NUMBER_PATTERN.is_match(id) {
        IdFormat::BusinessNumber
    } else {
        IdFormat::Invalid
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn classifies_each_shape() {
        assert_eq!(classify("A123456789"), IdFormat::NationalId);
        assert_eq!(classify("Y244766850"), IdFormat::NationalId);
        assert_eq!(classify("A800000014"), IdFormat::NewResidentPermit);
        assert_eq!(classify("Z900000000"), IdFormat::NewResidentPermit);
        assert_eq!(classify("AC01234567"), IdFormat::OldResidentPermit);
        assert_eq!(classify("04595257"), IdFormat::BusinessNumber);
    }

    #[test]
    fn classification_ignores_letter_case() {
        assert_eq!(classify("a123456789"), IdFormat::NationalId);
        assert_eq!(classify("ac01234567"), IdFormat::OldResidentPermit);
        assert_eq!(classify("aC01234567"), IdFormat::OldResidentPermit);
    }

    #[test]
    fn rejects_other_shapes() {
        let invalid = vec![
            "",
            "1123456789",
            "A323456789",
            "A023456789",
            "A12345678",
            "A1234567890",
            "A123456781283130-",
            "@90y8fgtear0g8",
            "9y300tq943hr",
            "19237420123",
            "*^!(Y@#G!P@)",
            "ABC1234567",
            "0459525",
            "045952570",
            "0459525A",
            // whitespace is not trimmed
            " A123456789",
            "A123456789 ",
            "A123456789\n",
            "0459 5257",
            // non-ASCII digits and letters
            "A١٢٣٤٥٦٧٨٩",
            "Ａ123456789",
        ];
        for id in invalid {
            assert_eq!(classify(id), IdFormat::Invalid, "input {id:?}");
        }
    }

    #[test]
    fn normalize_only_touches_ascii_lowercase() {
        assert_eq!(normalize("a1b2"), "A1B2");
        assert_eq!(normalize(" x "), " X ");
        assert_eq!(normalize("ä"), "ä");
        assert!(matches!(normalize("A123"), Cow::Borrowed(_)));
    }

    #[test]
    fn personal_and_permit_formats() {
        let personal: Vec<IdFormat> = IdFormat::iter().filter(IdFormat::is_personal).collect();
        assert_eq!(
            personal,
            vec![
                IdFormat::NationalId,
                IdFormat::NewResidentPermit,
                IdFormat::OldResidentPermit
            ]
        );
        assert!(IdFormat::iter()
            .filter(IdFormat::is_resident_permit)
            .all(|format| format.is_personal()));
    }

    #[test]
    fn format_labels_are_snake_case() {
        assert_eq!(IdFormat::NationalId.as_ref(), "national_id");
        assert_eq!(IdFormat::OldResidentPermit.to_string(), "old_resident_permit");
    }
}
