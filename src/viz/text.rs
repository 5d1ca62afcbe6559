//! Text measurement and wrapping for surfaces that cannot measure text themselves.

/// Heuristic: estimate the width of `text` at `font_px` (no backend measures for us).
pub fn estimate_text_width(text: &str, font_px: f64) -> f64 {
    text.chars().count() as f64 * font_px * 0.45
}

/// Line advance used for wrapped blocks.
pub fn line_height(font_px: f64) -> f64 {
    (font_px * 1.25).round()
}

/// Wrap text to fit within `max_w`, breaking on whitespace.
///
/// A single word wider than `max_w` gets a line of its own rather than being split.
pub fn wrap_text_to_width(text: &str, font_px: f64, max_w: f64) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut cur = String::new();
    for word in text.split_whitespace() {
        if cur.is_empty() {
            cur.push_str(word);
            continue;
        }
        let candidate = format!("{cur} {word}");
        if estimate_text_width(&candidate, font_px) <= max_w {
            cur = candidate;
        } else {
            lines.push(std::mem::replace(&mut cur, word.to_string()));
        }
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        // 9 px per char at 20 px
        let lines = wrap_text_to_width("aaaa bbbb cccc", 20.0, 95.0);
        assert_eq!(lines, vec!["aaaa bbbb", "cccc"]);
    }

    #[test]
    fn long_word_gets_own_line() {
        let lines = wrap_text_to_width("a verylongword b", 20.0, 50.0);
        assert_eq!(lines, vec!["a", "verylongword", "b"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap_text_to_width("   ", 12.0, 100.0).is_empty());
    }
}
