//! Announcement feed renderer.

use crate::ui::helpers::{pad_line, position_cursor, push_highlighted, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FeedItem;

const DATE_WIDTH: usize = 14;
const CATEGORY_WIDTH: usize = 9;

/// Renders one line per announcement from `row`, stopping before `bottom`.
///
/// ```text
///  Jan 15, 2026  [Event]  Announcement Title 1  Join us for our annual...
/// ```
///
/// Returns the next free row.
pub fn render_feed(out: &mut String, row: usize, bottom: usize, items: &[FeedItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;

    for item in items {
        if current_row >= bottom {
            break;
        }

        position_cursor(out, current_row, 1);
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&format!(" {:<DATE_WIDTH$}", item.date));
        out.push_str(&Theme::fg(&theme.colors.brand_fg));
        let tag = format!("[{}]", item.category);
        out.push_str(&format!("{tag:<CATEGORY_WIDTH$}"));
        let mut used = 1 + DATE_WIDTH + text_width(&tag).max(CATEGORY_WIDTH);

        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        let title = truncate(&item.title, cols.saturating_sub(used + 1));
        push_highlighted(out, &title, &item.highlight_ranges, theme, &theme.colors.text_normal);
        out.push_str(Theme::reset());
        used += text_width(&title);

        let room = cols.saturating_sub(used + 2);
        if room > 3 {
            let summary = truncate(&item.summary, room);
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            out.push_str("  ");
            out.push_str(&summary);
            used += 2 + text_width(&summary);
        }

        pad_line(out, used, cols);
        out.push_str(Theme::reset());
        current_row += 1;
    }

    current_row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_is_cut_to_the_width() {
        let theme = Theme::default();
        let items = vec![FeedItem {
            title: "Office move".to_string(),
            category: "Update".to_string(),
            date: "Jan 15, 2026".to_string(),
            summary: "We are moving to a bigger office downtown next month".to_string(),
            highlight_ranges: vec![],
        }];

        let mut out = String::new();
        let next = render_feed(&mut out, 3, 10, &items, &theme, 60);
        assert_eq!(next, 4);
        assert!(out.contains("[Update]"));
        assert!(out.contains("Office move"));
        assert!(out.contains('…'));
        assert!(!out.contains("next month"));
    }
}
