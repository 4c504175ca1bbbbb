//! Lenient quantity parsing.

/// Parses the leading integer of `text` as a non-negative quantity.
///
/// Leading whitespace and an optional sign are skipped, then the longest run
/// of ASCII digits is read (`"12abc"` is 12, `"3.7"` is 3). Text without a
/// leading digit and negative values yield 0. Overflow saturates.
pub fn parse_quantity(text: &str) -> u64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: u64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(u64::from(byte - b'0'));
    }

    if !seen_digit || negative {
        return 0;
    }
    value
}
