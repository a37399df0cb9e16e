//! Navigation bar and mobile drawer renderer.
//!
//! Wide terminals get a single bar with the brand on the left and every
//! entry inline. Below [`DRAWER_BREAKPOINT`] columns the entries collapse
//! behind a `≡` button and, while the drawer is open, are listed one per row
//! beneath the bar.

use crate::ui::helpers::{pad_line, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{NavEntry, SidebarInfo};

/// Narrowest width that still shows the entries inline.
pub const DRAWER_BREAKPOINT: usize = 60;

/// Renders the navigation and returns the next free row.
pub fn render_sidebar(out: &mut String, row: usize, sidebar: &SidebarInfo, theme: &Theme, cols: usize) -> usize {
    let brand = truncate(&sidebar.title, cols.saturating_sub(4));

    position_cursor(out, row, 1);
    out.push(' ');
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.brand_fg));
    out.push_str(&brand);
    out.push_str(Theme::reset());
    let mut used = 1 + text_width(&brand);

    if cols < DRAWER_BREAKPOINT {
        let button = if sidebar.drawer_open { "×" } else { "≡" };
        pad_line(out, used, cols.saturating_sub(2));
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(button);
        out.push_str(Theme::reset());
        out.push(' ');

        if !sidebar.drawer_open {
            return row + 1;
        }

        let mut current_row = row + 1;
        for entry in &sidebar.items {
            position_cursor(out, current_row, 1);
            let label = truncate(&entry.label, cols.saturating_sub(4));
            push_entry(out, entry, &format!("  {label}"), theme);
            pad_line(out, 2 + text_width(&label), cols);
            current_row += 1;
        }
        return current_row;
    }

    // Entries are right-aligned with two spaces between them.
    let entries_width: usize = sidebar.items.iter().map(|entry| text_width(&entry.label) + 4).sum();
    pad_line(out, used, cols.saturating_sub(entries_width));
    used = used.max(cols.saturating_sub(entries_width));

    for entry in &sidebar.items {
        push_entry(out, entry, &format!(" {} ", entry.label), theme);
        out.push_str("  ");
        used += text_width(&entry.label) + 4;
    }
    pad_line(out, used, cols);

    row + 1
}

fn push_entry(out: &mut String, entry: &NavEntry, text: &str, theme: &Theme) {
    if entry.is_active {
        out.push_str(&Theme::fg(&theme.colors.nav_active_fg));
        out.push_str(&Theme::bg(&theme.colors.nav_active_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        if entry.is_route {
            out.push_str(Theme::underline());
        }
    }
    out.push_str(text);
    out.push_str(Theme::reset());
}
