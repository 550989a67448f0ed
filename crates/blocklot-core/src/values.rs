/// Return the leading integer of `s`, if any.
///
/// Leading whitespace is skipped and an optional sign is accepted; anything
/// after the first run of ASCII digits is ignored. So `"12"`, `" 12"` and
/// `"12B"` all yield a match while `""`, `"-"` and `"B12"` do not.
pub fn leading_integer(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let sign_len = s.len() - unsigned.len();
    let digits = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    Some(&s[..sign_len + digits])
}

/// Whether `s` starts with an integer.
pub fn starts_with_integer(s: &str) -> bool {
    leading_integer(s).is_some()
}

/// Parse a page number: a leading integer that is strictly positive.
pub fn parse_page_number(s: &str) -> Option<u32> {
    let digits = leading_integer(s)?;
    let digits = digits.strip_prefix('+').unwrap_or(digits);
    match digits.parse::<u32>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("301"), Some("301"));
        assert_eq!(leading_integer("  42 "), Some("42"));
        assert_eq!(leading_integer("12B"), Some("12"));
        assert_eq!(leading_integer("-7"), Some("-7"));
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer("St"), None);
        assert_eq!(leading_integer("B12"), None);
    }

    #[test]
    fn test_starts_with_integer() {
        assert!(starts_with_integer("5"));
        assert!(!starts_with_integer("NYCHA"));
    }

    #[test]
    fn test_parse_page_number() {
        assert_eq!(parse_page_number("12"), Some(12));
        assert_eq!(parse_page_number("+3"), Some(3));
        assert_eq!(parse_page_number("0"), None);
        assert_eq!(parse_page_number("-4"), None);
        assert_eq!(parse_page_number("Page"), None);
        assert_eq!(parse_page_number("99999999999"), None);
    }
}
