//! Shared rendering utilities.
//!
//! Components write ANSI-styled text into a `String` frame buffer instead of
//! straight to stdout, so a whole frame can be inspected or printed at once.
//! All widths are measured in characters, never bytes.
//!
//! # Example
//!
//! ```rust
//! use jobboard_landing::ui::helpers::{position_cursor, push_highlighted};
//! use jobboard_landing::ui::Theme;
//!
//! let theme = Theme::default();
//! let mut out = String::new();
//! position_cursor(&mut out, 5, 1);
//! push_highlighted(&mut out, "Senior Engineer", &[(7, 10)], &theme, &theme.colors.text_normal);
//! assert!(out.starts_with("\u{1b}[5;1H"));
//! assert!(out.contains("Eng"));
//! ```

use crate::ui::theme::Theme;
use std::borrow::Cow;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Number of terminal cells `text` occupies, assuming one per character.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` characters, ending in `…` when shortened.
#[must_use]
pub fn truncate(text: &str, width: usize) -> Cow<'_, str> {
    if text_width(text) <= width {
        return Cow::Borrowed(text);
    }
    if width == 0 {
        return Cow::Borrowed("");
    }

    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    Cow::Owned(cut)
}

/// Appends spaces so a line that already used `used` cells fills `cols`.
pub fn pad_line(out: &mut String, used: usize, cols: usize) {
    out.push_str(&" ".repeat(cols.saturating_sub(used)));
}

/// Writes `text` with character ranges highlighted as search matches.
///
/// After each highlighted span the colour is restored to `base_fg`. Ranges
/// are `(start, end)` character indices, sorted and non-overlapping; parts
/// falling beyond the end of `text` (e.g. after truncation) are ignored.
pub fn push_highlighted(out: &mut String, text: &str, ranges: &[(usize, usize)], theme: &Theme, base_fg: &str) {
    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());
        if start == end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(base_fg));

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}

/// Writes `text` centred on `row`, padded to the full width.
pub fn push_centered(out: &mut String, row: usize, text: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = text_width(&text);
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(out, row, 1);
    out.push_str(&" ".repeat(padding));
    out.push_str(&text);
    pad_line(out, padding + len, cols);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(theme: &Theme, text: &str, ranges: &[(usize, usize)]) -> String {
        let mut out = String::new();
        push_highlighted(&mut out, text, ranges, theme, "#ffffff");
        out
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate("Café Lyon", 20), "Café Lyon");
        assert_eq!(truncate("Café Lyon", 5), "Café…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn highlight_wraps_only_matched_span() {
        let theme = Theme::default();
        let out = plain(&theme, "Data Analyst", &[(5, 12)]);
        let highlight = Theme::bg(&theme.colors.match_highlight_bg);

        let (before, after) = out.split_once(&highlight).unwrap();
        assert!(before.starts_with("Data "));
        assert!(after.starts_with("Analyst"));
    }

    #[test]
    fn ranges_past_the_text_are_ignored() {
        let theme = Theme::default();
        assert_eq!(plain(&theme, "Dev", &[(5, 9)]), "Dev");

        let clipped = plain(&theme, "Dev", &[(1, 9)]);
        assert!(clipped.starts_with('D'));
        assert!(clipped.contains("ev"));
    }

    #[test]
    fn centered_text_fills_the_row() {
        let mut out = String::new();
        push_centered(&mut out, 2, "Hi", 10);
        assert_eq!(out, "\u{1b}[2;1H    Hi    ");
    }
}
