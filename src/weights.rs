use lazy_static::lazy_static;
use std::collections::HashMap;

/// Digit weights for positions 2 to 9 of a national ID or new style resident permit.
pub const MODERN_ID_WEIGHTS: [u32; 8] = [8, 7, 6, 5, 4, 3, 2, 1];

/// Digit weights for positions 3 to 9 of an old style resident permit.
pub const OLD_RESIDENT_PERMIT_WEIGHTS: [u32; 7] = [7, 6, 5, 4, 3, 2, 1];

/// Digit weights for the 8 digits of a business number (UBN).
pub const BUSINESS_NUMBER_WEIGHTS: [u32; 8] = [1, 2, 1, 2, 1, 2, 4, 1];

lazy_static! {
    // The numbering follows the order in which area codes were assigned,
    // which is why I, O and W sit at the end.
    static ref AREA_WEIGHTS: HashMap<char, u32> = HashMap::from([
        ('A', 10),
        ('B', 11),
        ('C', 12),
        ('D', 13),
        ('E', 14),
        ('F', 15),
        ('G', 16),
        ('H', 17),
        ('J', 18),
        ('K', 19),
        ('L', 20),
        ('M', 21),
        ('N', 22),
        ('P', 23),
        ('Q', 24),
        ('R', 25),
        ('S', 26),
        ('T', 27),
        ('U', 28),
        ('V', 29),
        ('X', 30),
        ('Y', 31),
        ('W', 32),
        ('Z', 33),
        ('I', 34),
        ('O', 35),
    ]);
}

/// Returns the two-digit area weight of a leading letter, or `None` if the
/// letter has never been assigned. Lookup is case-insensitive.
pub fn area_weight(letter: char) -> Option<u32> {
    AREA_WEIGHTS.get(&letter.to_ascii_uppercase()).copied()
}

/// Splits an area weight into its tens and units digits.
#[inline]
pub(crate) fn split_weight(weight: u32) -> (u32, u32) {
    (weight / 10, weight % 10)
}
