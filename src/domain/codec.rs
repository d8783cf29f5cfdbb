//! Decimal codec for the unsigned identifiers TextMagic puts on the wire.

/// Separator used for list-valued query parameters (`ids`, `phone`).
pub const JOIN_SEPARATOR: char = ',';

// u64::MAX has 20 digits.
const MAX_DIGITS: usize = 20;

/// Render `n` as a plain decimal string (no sign, no separators, no leading zeros).
pub fn encode_u64(n: u64) -> String {
    let mut out = String::with_capacity(MAX_DIGITS);
    push_u64(&mut out, n);
    out
}

/// Parse a plain decimal string.
///
/// Returns `None` for the empty string or when any byte is outside `'0'..='9'`.
/// Values beyond `u64::MAX` wrap around.
pub fn decode_u64(s: &str) -> Option<u64> {
    if s.is_empty() {
        return None;
    }
    let mut value = 0u64;
    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return None;
        }
        value = value.wrapping_mul(10).wrapping_add(u64::from(byte - b'0'));
    }
    Some(value)
}

/// Join encoded numbers with `sep`. An empty slice yields an empty string.
pub fn join_u64(items: &[u64], sep: char) -> String {
    let mut out = String::with_capacity(items.len() * 11);
    for (idx, &item) in items.iter().enumerate() {
        if idx > 0 {
            out.push(sep);
        }
        push_u64(&mut out, item);
    }
    out
}

fn push_u64(out: &mut String, mut n: u64) {
    if n == 0 {
        out.push('0');
        return;
    }
    let mut digits = [0u8; MAX_DIGITS];
    let mut pos = MAX_DIGITS;
    while n > 0 {
        pos -= 1;
        digits[pos] = b'0' + (n % 10) as u8;
        n /= 10;
    }
    for &digit in &digits[pos..] {
        out.push(char::from(digit));
    }
}
