//! String utilities for the domain layer.

/// Number of characters (Unicode scalar values) in `s`.
///
/// Post limits on X and the summary limit are counted in characters, not
/// bytes, so every length check in this crate goes through here.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Truncate a string to at most `max_chars` characters, ending with `...`
/// when anything was cut.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    if char_len(s) <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_chars("日本語テスト", 6), "日本語テスト");
        assert_eq!(truncate_chars("日本語テスト文字列", 7), "日本語テ...");
    }

    #[test]
    fn test_truncate_emoji() {
        assert_eq!(truncate_chars("🚀🎉👋🌍", 4), "🚀🎉👋🌍");
        assert_eq!(truncate_chars("🚀🎉👋🌍", 3), "...");
    }

    #[test]
    fn test_char_len() {
        assert_eq!(char_len("abc"), 3);
        assert_eq!(char_len("新機能"), 3);
        assert_eq!(char_len(""), 0);
    }
}
