//! Shared utility functions

use unicode_width::UnicodeWidthChar;

/// Truncate a string to at most `max_cols` terminal columns, appending an
/// ellipsis when anything was cut. Wide characters (CJK, some symbols)
/// count as two columns, so the result never overflows its cell.
pub fn truncate_to_width(s: &str, max_cols: usize) -> String {
    let mut width = 0;
    for (i, ch) in s.char_indices() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_cols {
            let mut out = s[..i].to_string();
            // Drop one more column to make room for the ellipsis
            while width + 1 > max_cols {
                let Some(last) = out.pop() else { break };
                width -= last.width().unwrap_or(0);
            }
            out.push('…');
            return out;
        }
        width += w;
    }
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_string_unchanged() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn test_ascii_truncation_adds_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn test_wide_characters_count_double() {
        // Each CJK character is two columns
        assert_eq!(truncate_to_width("日本語", 6), "日本語");
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(truncate_to_width("", 5), "");
    }
}
