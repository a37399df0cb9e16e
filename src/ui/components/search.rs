//! Search box and category tab renderers.

use crate::ui::helpers::{pad_line, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, TabsInfo};

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders a 3-line bordered search box at `row`.
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Keyword: design▏ │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// A focused box shows a caret after the query. Returns `row + 3`.
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(out, row, 1);
    out.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    let caret = if search.is_focused { "▏" } else { "" };
    let text = format!(" {}: {}{caret}", search.label, search.query);
    let text = truncate(&text, inner_width);

    position_cursor(out, row + 1, 1);
    out.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    out.push_str(&border);
    out.push('│');
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&text);
    out.push_str(&" ".repeat(inner_width.saturating_sub(text_width(&text))));
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    row + 3
}

/// Renders the category tabs on one row, the selected tab highlighted.
///
/// Tabs that do not fit the width are left out. Returns `row + 1`.
pub fn render_tabs(out: &mut String, row: usize, tabs: &TabsInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    let mut used = SEARCH_BOX_MARGIN;

    for (label, is_selected) in &tabs.options {
        let width = text_width(label) + 2;
        if used + width > cols {
            break;
        }

        if *is_selected {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.nav_active_fg));
            out.push_str(&Theme::bg(&theme.colors.nav_active_bg));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_dim));
        }
        out.push_str(&format!(" {label} "));
        out.push_str(Theme::reset());
        used += width;

        if used < cols {
            out.push(' ');
            used += 1;
        }
    }

    pad_line(out, used, cols);
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_search_shows_caret() {
        let theme = Theme::default();
        let mut search = SearchBarInfo {
            label: "Keyword".to_string(),
            query: "rust".to_string(),
            is_focused: false,
        };

        let mut out = String::new();
        assert_eq!(render_search_bar(&mut out, 4, &search, &theme, 60), 7);
        assert!(out.contains(" Keyword: rust"));
        assert!(!out.contains('▏'));

        search.is_focused = true;
        let mut out = String::new();
        render_search_bar(&mut out, 4, &search, &theme, 60);
        assert!(out.contains(" Keyword: rust▏"));
    }

    #[test]
    fn tabs_that_overflow_are_skipped() {
        let theme = Theme::default();
        let tabs = TabsInfo {
            options: vec![
                ("All".to_string(), true),
                ("Full-time".to_string(), false),
                ("Contract".to_string(), false),
            ],
        };

        let mut out = String::new();
        render_tabs(&mut out, 1, &tabs, &theme, 30);
        assert!(out.contains(" All "));
        assert!(out.contains(" Full-time "));
        assert!(!out.contains("Contract"));
    }
}
