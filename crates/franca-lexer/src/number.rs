use crate::token::TokenKind;

/// Classifies the numeric literal starting at the beginning of `rest` and
/// returns its token kind plus the byte length of the matched lexeme.
///
/// Mirrors the original grammar's function-based try-order: hex-float,
/// hex-int, bin-int, octal-int, decimal-int/float. `rest` must start with
/// an ASCII digit.
pub(crate) fn scan_number(rest: &str) -> (TokenKind, usize) {
    let b = rest.as_bytes();
    let n = b.len();
    debug_assert!(!b.is_empty() && b[0].is_ascii_digit());

    if n >= 2 && b[0] == b'0' && (b[1] == b'x' || b[1] == b'X') {
        return scan_hex(b, n);
    }
    if n >= 2 && b[0] == b'0' && (b[1] == b'b' || b[1] == b'B') {
        let mut i = 2;
        while i < n && (b[i] == b'0' || b[i] == b'1') {
            i += 1;
        }
        return (TokenKind::IntConstBin, consume_int_suffix(b, i));
    }
    scan_decimal_or_octal_or_float(b, n)
}

fn scan_hex(b: &[u8], n: usize) -> (TokenKind, usize) {
    let mut i = 2;
    let digits_start = i;
    while i < n && b[i].is_ascii_hexdigit() {
        i += 1;
    }
    let digits_end = i;
    let mut has_dot = false;
    let mut j = i;
    if j < n && b[j] == b'.' {
        has_dot = true;
        j += 1;
        while j < n && b[j].is_ascii_hexdigit() {
            j += 1;
        }
    }
    if j < n && (b[j] == b'p' || b[j] == b'P') && (digits_end > digits_start || has_dot) {
        let mut k = j + 1;
        if k < n && (b[k] == b'+' || b[k] == b'-') {
            k += 1;
        }
        let exp_start = k;
        while k < n && b[k].is_ascii_digit() {
            k += 1;
        }
        if k > exp_start {
            if k < n && matches!(b[k], b'f' | b'F' | b'l' | b'L') {
                k += 1;
            }
            return (TokenKind::HexFloatConst, k);
        }
    }
    (TokenKind::IntConstHex, consume_int_suffix(b, digits_end))
}

fn scan_decimal_or_octal_or_float(b: &[u8], n: usize) -> (TokenKind, usize) {
    let mut i = 0;
    while i < n && b[i].is_ascii_digit() {
        i += 1;
    }
    let digit_end = i;

    let mut j = i;
    let mut is_float = false;
    if j < n && b[j] == b'.' {
        is_float = true;
        j += 1;
        while j < n && b[j].is_ascii_digit() {
            j += 1;
        }
    }
    if j < n && (b[j] == b'e' || b[j] == b'E') {
        let mut k = j + 1;
        if k < n && (b[k] == b'+' || b[k] == b'-') {
            k += 1;
        }
        let exp_start = k;
        while k < n && b[k].is_ascii_digit() {
            k += 1;
        }
        if k > exp_start {
            is_float = true;
            j = k;
        }
    }
    if is_float {
        if j < n && matches!(b[j], b'f' | b'F' | b'l' | b'L') {
            j += 1;
        }
        return (TokenKind::FloatConst, j);
    }

    if b[0] == b'0' {
        let mut k = 1;
        while k < digit_end && (b'0'..=b'7').contains(&b[k]) {
            k += 1;
        }
        return (TokenKind::IntConstOct, consume_int_suffix(b, k));
    }
    (TokenKind::IntConstDec, consume_int_suffix(b, digit_end))
}

/// Consumes a trailing run of integer-suffix letters (`u`, `U`, `l`, `L`).
/// The grammar's exact suffix combinations (`ull`, `LL`, ...) carry no
/// semantic weight downstream, so any run of those letters is accepted.
fn consume_int_suffix(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && matches!(b[i], b'u' | b'U' | b'l' | b'L') {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(s: &str) -> (TokenKind, &str) {
        let (kind, len) = scan_number(s);
        (kind, &s[..len])
    }

    #[test]
    fn decimal_int() {
        assert_eq!(classify("123 rest"), (TokenKind::IntConstDec, "123"));
        assert_eq!(classify("0"), (TokenKind::IntConstOct, "0"));
    }

    #[test]
    fn octal_int_stops_before_invalid_digit() {
        assert_eq!(classify("089"), (TokenKind::IntConstOct, "0"));
        assert_eq!(classify("017"), (TokenKind::IntConstOct, "017"));
    }

    #[test]
    fn hex_int() {
        assert_eq!(classify("0x1A,"), (TokenKind::IntConstHex, "0x1A"));
        assert_eq!(classify("0XFF"), (TokenKind::IntConstHex, "0XFF"));
    }

    #[test]
    fn bin_int() {
        assert_eq!(classify("0b1011)"), (TokenKind::IntConstBin, "0b1011"));
    }

    #[test]
    fn decimal_float_with_fraction_and_exponent() {
        assert_eq!(classify("3.14"), (TokenKind::FloatConst, "3.14"));
        assert_eq!(classify("1e10"), (TokenKind::FloatConst, "1e10"));
        assert_eq!(classify("2.5e-3f"), (TokenKind::FloatConst, "2.5e-3f"));
    }

    #[test]
    fn hex_float_requires_binary_exponent() {
        assert_eq!(classify("0x1.0p3"), (TokenKind::HexFloatConst, "0x1.0p3"));
        assert_eq!(classify("0x1p3"), (TokenKind::HexFloatConst, "0x1p3"));
        // no `p` exponent: falls back to a plain hex int, stopping before the dot
        assert_eq!(classify("0x1A"), (TokenKind::IntConstHex, "0x1A"));
    }

    #[test]
    fn integer_suffixes_are_consumed() {
        assert_eq!(classify("42ULL"), (TokenKind::IntConstDec, "42ULL"));
        assert_eq!(classify("0x1Au"), (TokenKind::IntConstHex, "0x1Au"));
    }
}
