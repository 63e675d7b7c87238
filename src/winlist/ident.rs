use crate::error::Error;
use crate::window::Window;
use crate::Result;

/// Render a window id the way a user sees it: `0x`-prefixed lowercase
/// hexadecimal, no padding.
#[inline]
pub fn format_ident(window: Window) -> String {
    format!("{:#x}", window)
}

/// Parse a window id as produced by `format_ident`. The `0x` prefix is
/// optional; the remainder must be plain hexadecimal digits that fit the
/// 32-bit id width.
pub fn parse_ident(input: &str) -> Result<Window> {
    let digits = input.strip_prefix("0x").unwrap_or(input);

    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(Error::Ident {
            input: input.to_owned(),
        });
    }

    u32::from_str_radix(digits, 16).map_err(|_| Error::Ident {
        input: input.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_prefixed_lowercase_hex() {
        assert_eq!(format_ident(0x123), "0x123");
        assert_eq!(format_ident(0x1c00006), "0x1c00006");
        assert_eq!(format_ident(0xABCDEF), "0xabcdef");
        assert_eq!(format_ident(0), "0x0");
    }

    #[test]
    fn round_trips_formatted_idents() {
        for &window in &[0x0, 0x1, 0x123, 0x1c00006, 0xdeadbeef, u32::MAX] {
            assert_eq!(parse_ident(&format_ident(window)).unwrap(), window);
        }
    }

    #[test]
    fn parses_without_prefix() {
        assert_eq!(parse_ident("123").unwrap(), 0x123);
        assert_eq!(parse_ident("DEADBEEF").unwrap(), 0xdeadbeef);
    }

    #[test]
    fn rejects_non_hexadecimal_input() {
        assert!(matches!(parse_ident("0xzz"), Err(Error::Ident { .. })));
        assert!(matches!(parse_ident("hello"), Err(Error::Ident { .. })));
        assert!(matches!(parse_ident("0x12 34"), Err(Error::Ident { .. })));
        assert!(matches!(parse_ident("+ff"), Err(Error::Ident { .. })));
        assert!(matches!(parse_ident("-1"), Err(Error::Ident { .. })));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(parse_ident(""), Err(Error::Ident { .. })));
        assert!(matches!(parse_ident("0x"), Err(Error::Ident { .. })));
    }

    #[test]
    fn rejects_uppercase_prefix() {
        // Only the literal "0x" counts as a prefix; "0X12" has no valid digits.
        assert!(matches!(parse_ident("0X12"), Err(Error::Ident { .. })));
    }

    #[test]
    fn rejects_ids_wider_than_32_bits() {
        assert!(matches!(parse_ident("0x1ffffffff"), Err(Error::Ident { .. })));
        assert!(matches!(parse_ident("ffffffffff"), Err(Error::Ident { .. })));
    }
}
