//! Roman numeral parsing for the century conventions.

/// Parses a roman numeral between I and XXI (the centuries the extractors
/// accept). Subtractive pairs (IV, IX, XIV, XIX) are handled; anything
/// outside the supported range yields `None`.
pub(crate) fn parse_roman(value: &str) -> Option<u32> {
    let mut total: u32 = 0;
    let mut previous: u32 = 0;
    for c in value.chars() {
        let digit = match c.to_ascii_uppercase() {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            _ => return None,
        };
        total += digit;
        if previous < digit && previous > 0 {
            total -= 2 * previous;
        }
        previous = digit;
    }
    if (1..=21).contains(&total) {
        Some(total)
    } else {
        None
    }
}
