use crate::char::DIGIT_HEX;
use crate::char::DIGIT_OCT;
use memchr::memchr;

fn hex_digit_value(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    }
}

/// Rewrites a string literal (quotes included) to the shortest spelling with the identical
/// runtime value, in place, and returns the still-valid prefix of the buffer. The quote character
/// is kept as is.
///
/// One pass, left to right. Escapes that must survive (`\\`, the active quote, `\n`, `\r`, `\u`,
/// and `\0` not followed by an octal digit) are skipped. Line continuations are deleted outright.
/// `\xHH` and legacy `\NNN` octal escapes decode to a raw byte, unless that byte is itself
/// structurally significant (NUL, backslash, the quote, LF, CR), in which case it is re-escaped
/// in its shortest form rather than emitted raw. `\t`/`\f`/`\v`/`\b` become their control bytes.
/// Every other escaped byte just loses its backslash. Surviving bytes are compacted leftward
/// over the gaps with a write cursor; nothing is ever inserted, so the result never grows.
///
/// Buffers shorter than 3 bytes cannot hold a quoted body and are returned unchanged.
pub fn minify_string(b: &mut [u8]) -> &[u8] {
    if b.len() < 3 {
        return b;
    }
    let quote = b[0];
    let len = b.len();
    let mut j = 0;
    let mut start = 0;
    let mut i = 1;
    // The scan stops two bytes short of the end so the closing quote is never consumed as part
    // of an escape.
    while i + 1 < len - 1 {
        match memchr(b'\\', &b[i..len - 2]) {
            Some(offset) => i += offset,
            None => break,
        };
        let c = b[i + 1];
        if c == b'0' && (i + 2 == len - 1 || b[i + 2] < b'0' || b'7' < b[i + 2])
            || c == b'\\'
            || c == quote
            || c == b'n'
            || c == b'r'
            || c == b'u'
        {
            // Keep the escape sequence. A raw NUL in place of `\0` could be reinterpreted as the
            // start of a longer octal sequence by whatever follows it.
            i += 2;
            continue;
        }
        let mut n = 1;
        if c == b'\n'
            || c == b'\r'
            || c == 0xE2
                && i + 3 < len - 1
                && b[i + 2] == 0x80
                && (b[i + 3] == 0xA8 || b[i + 3] == 0xA9)
        {
            // Line continuations (backslash + LF, CR, CRLF, U+2028, or U+2029) contribute
            // nothing to the value.
            if c == 0xE2 {
                n = 4;
            } else if c == b'\r' && i + 2 < len - 1 && b[i + 2] == b'\n' {
                n = 3;
            } else {
                n = 2;
            }
        } else if c == b'x' {
            if i + 3 < len - 1 && DIGIT_HEX.has(b[i + 2]) && DIGIT_HEX.has(b[i + 3]) {
                b[i + 3] = hex_digit_value(b[i + 2]) << 4 | hex_digit_value(b[i + 3]);
                n = 3;
                if b[i + 3] == 0
                    || b[i + 3] == b'\\'
                    || b[i + 3] == quote
                    || b[i + 3] == b'\n'
                    || b[i + 3] == b'\r'
                {
                    if b[i + 3] == 0 {
                        b[i + 3] = b'0';
                    } else if b[i + 3] == b'\n' {
                        b[i + 3] = b'n';
                    } else if b[i + 3] == b'\r' {
                        b[i + 3] = b'r';
                    }
                    n -= 1;
                    b[i + 2] = b'\\';
                }
            } else {
                i += 2;
                continue;
            }
        } else if DIGIT_OCT.has(c) {
            // Legacy octal escape; `\0` not followed by an octal digit was already kept above.
            // A third digit is only part of the escape while the accumulated value stays below
            // 32, keeping the result within one byte.
            let mut num = c - b'0';
            if i + 2 < len - 1 && DIGIT_OCT.has(b[i + 2]) {
                num = num * 8 + (b[i + 2] - b'0');
                n += 1;
                if num < 32 && i + 3 < len - 1 && DIGIT_OCT.has(b[i + 3]) {
                    num = num * 8 + (b[i + 3] - b'0');
                    n += 1;
                }
            }
            b[i + n] = num;
            if num == 0 || num == b'\\' || num == quote || num == b'\n' || num == b'\r' {
                if num == 0 {
                    b[i + n] = b'0';
                } else if num == b'\n' {
                    b[i + n] = b'n';
                } else if num == b'\r' {
                    b[i + n] = b'r';
                }
                n -= 1;
                b[i + n] = b'\\';
            }
        } else if c == b't' {
            b[i + 1] = b'\t';
        } else if c == b'f' {
            b[i + 1] = 0x0C;
        } else if c == b'v' {
            b[i + 1] = 0x0B;
        } else if c == b'b' {
            b[i + 1] = 0x08;
        }
        // The escape resolved to its last n - 1 bytes (or to nothing); shift the pending run of
        // untouched bytes left over the gap and restart the run past the escape.
        if start != 0 {
            b.copy_within(start..i, j);
            j += i - start;
        } else {
            j = i;
        }
        start = i + n;
        i += n;
    }
    if start != 0 {
        b.copy_within(start..len, j);
        let end = j + (len - start);
        return &b[..end];
    }
    b
}

// Decimal digit count of a non-negative value.
fn len_int(n: i64) -> usize {
    let mut len = 1;
    let mut n = n / 10;
    while n > 0 {
        len += 1;
        n /= 10;
    }
    len
}

fn radix_number<'a, F>(b: &'a mut [u8], base: i64, max_len: usize, format: F) -> &'a [u8]
where
    F: FnOnce(&'a mut [u8]) -> &'a [u8],
{
    // Digit counts beyond max_len could overflow an i64; leave such buffers untouched.
    if b.len() <= 2 || b.len() > max_len {
        return b;
    }
    let mut n: i64 = 0;
    for &c in &b[2..] {
        n = n * base + (c - b'0') as i64;
    }
    let (b, _) = b.split_at_mut(len_int(n));
    let mut rem = n;
    for digit in b.iter_mut().rev() {
        *digit = b'0' + (rem % 10) as u8;
        rem /= 10;
    }
    format(b)
}

/// Converts a `0b` binary literal of up to 63 digits to decimal in place, then hands the decimal
/// digits to the caller's shortest-number formatter. Buffers outside the digit bound are
/// returned unchanged.
pub fn binary_number<'a, F>(b: &'a mut [u8], format: F) -> &'a [u8]
where
    F: FnOnce(&'a mut [u8]) -> &'a [u8],
{
    radix_number(b, 2, 65, format)
}

/// Converts a `0o` octal literal of up to 21 digits to decimal in place, then hands the decimal
/// digits to the caller's shortest-number formatter. Buffers outside the digit bound are
/// returned unchanged.
pub fn octal_number<'a, F>(b: &'a mut [u8], format: F) -> &'a [u8]
where
    F: FnOnce(&'a mut [u8]) -> &'a [u8],
{
    radix_number(b, 8, 23, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_string(src: &str, expected: &str) {
        let mut b = src.as_bytes().to_vec();
        let out = minify_string(&mut b).to_vec();
        assert_eq!(out, expected.as_bytes(), "minifying {:?}", src);
        // Minifying is idempotent: a second pass finds nothing left to shrink.
        let mut again = out.clone();
        assert_eq!(minify_string(&mut again), out.as_slice(), "re-minifying {:?}", src);
    }

    #[test]
    fn test_minify_string_keeps_required_escapes() {
        check_string(r#""a\\b""#, r#""a\\b""#);
        check_string(r#""a\"b""#, r#""a\"b""#);
        check_string(r#""a\nb""#, r#""a\nb""#);
        check_string(r#""a\rb""#, r#""a\rb""#);
        check_string(r#""a\u0041b""#, r#""a\u0041b""#);
        check_string(r#""a\0b""#, r#""a\0b""#);
        check_string(r#""a\0""#, r#""a\0""#);
    }

    #[test]
    fn test_minify_string_simple_escapes() {
        check_string(r#""a\tb""#, "\"a\tb\"");
        check_string(r#""a\fb""#, "\"a\u{c}b\"");
        check_string(r#""a\vb""#, "\"a\u{b}b\"");
        check_string(r#""a\bb""#, "\"a\u{8}b\"");
        // An unnecessary backslash is simply dropped.
        check_string(r#""a\qb""#, r#""aqb""#);
        check_string(r#"'a\"b'"#, r#"'a"b'"#);
    }

    #[test]
    fn test_minify_string_hex_escapes() {
        check_string(r#""\x41""#, r#""A""#);
        check_string(r#""a\x42c""#, r#""aBc""#);
        // Decoded bytes that would corrupt the literal are re-escaped, not emitted raw.
        check_string(r#""\x00""#, r#""\0""#);
        check_string("'\\x00'", "'\\0'");
        check_string(r#""\x0a""#, r#""\n""#);
        check_string(r#""\x0d""#, r#""\r""#);
        check_string(r#""\x5c""#, r#""\\""#);
        check_string(r#""\x22""#, r#""\"""#);
        // Same byte with the other quote is harmless and decodes raw.
        check_string(r#"'\x22'"#, r#"'"'"#);
        // Incomplete or malformed hex escapes stay as they are.
        check_string(r#""\x4""#, r#""\x4""#);
        check_string(r#""\xgg""#, r#""\xgg""#);
    }

    #[test]
    fn test_minify_string_octal_escapes() {
        check_string(r#""\101""#, r#""A""#);
        check_string(r#""\7""#, "\"\u{7}\"");
        check_string(r#""\40""#, "\" \"");
        // The third digit only extends the escape while the accumulated value is below 32.
        check_string(r#""\401""#, "\" 1\"");
        check_string(r#""\012""#, r#""\n""#);
        check_string(r#""\134""#, r#""\\""#);
        check_string(r#""\042""#, r#""\"""#);
        // `\0` followed by an octal digit is a longer octal escape, not a kept NUL escape.
        check_string(r#""\00""#, r#""\0""#);
        check_string(r#""\001""#, "\"\u{1}\"");
    }

    #[test]
    fn test_minify_string_line_continuations() {
        check_string("\"line\\\ncontinued\"", "\"linecontinued\"");
        check_string("\"line\\\rcontinued\"", "\"linecontinued\"");
        check_string("\"line\\\r\ncontinued\"", "\"linecontinued\"");
        check_string("\"line\\\u{2028}continued\"", "\"linecontinued\"");
        check_string("\"line\\\u{2029}continued\"", "\"linecontinued\"");
    }

    #[test]
    fn test_minify_string_multiple_escapes() {
        check_string(r#""\x41\x42\x43""#, r#""ABC""#);
        check_string(r#""a\tb\x21c\40d""#, "\"a\tb!c d\"");
        check_string(r#""\\x41""#, r#""\\x41""#);
    }

    #[test]
    fn test_minify_string_degenerate_buffers() {
        check_string("", "");
        check_string("\"\"", "\"\"");
        check_string("\"a\"", "\"a\"");
        // The shortest buffer that still contains a whole escape.
        check_string(r#""\t""#, "\"\t\"");
        check_string(r#""ab\t""#, "\"ab\t\"");
    }

    #[test]
    fn test_binary_number() {
        let mut b = b"0b1010".to_vec();
        assert_eq!(binary_number(&mut b, |d| &*d), b"10");
        let mut b = b"0b0".to_vec();
        assert_eq!(binary_number(&mut b, |d| &*d), b"0");
        let mut b = b"0b11111111".to_vec();
        assert_eq!(binary_number(&mut b, |d| &*d), b"255");
    }

    #[test]
    fn test_octal_number() {
        let mut b = b"0o17".to_vec();
        assert_eq!(octal_number(&mut b, |d| &*d), b"15");
        let mut b = b"0o777".to_vec();
        assert_eq!(octal_number(&mut b, |d| &*d), b"511");
        let mut b = b"0o0".to_vec();
        assert_eq!(octal_number(&mut b, |d| &*d), b"0");
    }

    #[test]
    fn test_radix_number_bounds() {
        // 64 binary digits could overflow an i64; the buffer must come back untouched.
        let src: Vec<u8> = b"0b".iter().chain([b'1'; 64].iter()).copied().collect();
        let mut b = src.clone();
        assert_eq!(binary_number(&mut b, |d| &*d), src.as_slice());
        let src: Vec<u8> = b"0o".iter().chain([b'7'; 22].iter()).copied().collect();
        let mut b = src.clone();
        assert_eq!(octal_number(&mut b, |d| &*d), src.as_slice());
        let mut b = b"0b".to_vec();
        assert_eq!(binary_number(&mut b, |d| &*d), b"0b");
    }

    #[test]
    fn test_radix_number_formatter_receives_decimal_digits() {
        let mut b = b"0b1111101000".to_vec();
        let out = binary_number(&mut b, |d| {
            assert_eq!(&*d, b"1000");
            // A real formatter may shrink further, e.g. towards `1e3`.
            &d[..1]
        });
        assert_eq!(out, b"1");
    }
}
