//! Footer renderer.

use crate::ui::helpers::{pad_line, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the copyright notice, with footer links right-aligned when present.
///
/// Returns the next free row.
pub fn render_footer(out: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let links = footer.links.join("  ");
    let copyright = truncate(&footer.copyright, cols);
    let used = text_width(&copyright) + 1;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push(' ');
    out.push_str(&copyright);

    let links_len = text_width(&links);
    if links.is_empty() || used + links_len + 3 > cols {
        pad_line(out, used, cols);
    } else {
        pad_line(out, used, cols - links_len - 1);
        out.push_str(&links);
        out.push(' ');
    }

    out.push_str(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_are_dropped_when_they_do_not_fit() {
        let theme = Theme::default();
        let footer = FooterInfo {
            copyright: "(c) 2026 JobBoard".to_string(),
            links: vec!["About".to_string(), "Privacy".to_string()],
        };

        let mut wide = String::new();
        render_footer(&mut wide, 1, &footer, &theme, 80);
        assert!(wide.contains("About  Privacy"));

        let mut narrow = String::new();
        render_footer(&mut narrow, 1, &footer, &theme, 24);
        assert!(!narrow.contains("About"));
        assert!(narrow.contains("JobBoard"));
    }
}
