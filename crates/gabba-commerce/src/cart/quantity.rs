//! Lenient quantity parsing for free-text input.

/// Parse the leading integer of `input`.
///
/// Leading whitespace and a single `+`/`-` sign are accepted, then as many
/// ASCII digits as follow; anything after the digits is ignored. Returns
/// `None` when no digit is found or the value does not fit in an `i64`.
///
/// ```
/// use gabba_commerce::cart::parse_quantity;
///
/// assert_eq!(parse_quantity(" 3 units"), Some(3));
/// assert_eq!(parse_quantity("-2"), Some(-2));
/// assert_eq!(parse_quantity("abc"), None);
/// ```
pub fn parse_quantity(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
