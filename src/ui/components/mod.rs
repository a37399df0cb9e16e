//! Composable UI component renderers.
//!
//! Each component writes one part of the frame into the shared buffer,
//! starting at a given row, and returns the next free row.
//!
//! # Components
//!
//! - [`sidebar`]: Brand, navigation entries, and the mobile drawer
//! - [`header`]: Page title
//! - [`search`]: Search box and category tabs
//! - [`table`]: Job grid
//! - [`feed`]: Announcement list
//! - [`contact`]: Contact form and status banner
//! - [`empty`]: Message shown in place of an empty list
//! - [`footer`]: Copyright and links
//!
//! # Layout
//!
//! ```text
//! [Navigation / drawer]
//! [Header]
//! [Border]
//! [Page body]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```

mod contact;
mod empty;
mod feed;
mod footer;
mod header;
mod search;
mod sidebar;
mod table;

pub use sidebar::DRAWER_BREAKPOINT;

use crate::ui::helpers::{pad_line, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PageBody, UIViewModel};

use contact::render_contact;
use empty::render_empty_state;
use feed::render_feed;
use footer::render_footer;
use header::render_header;
use search::{render_search_bar, render_tabs};
use sidebar::render_sidebar;
use table::{render_job_rows, render_table_headers};

/// Renders a horizontal border line at `row`. Returns `row + 1`.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders a bold section label such as "Latest Updates". Returns `row + 1`.
fn render_subheading(out: &mut String, row: usize, text: &str, theme: &Theme, cols: usize) -> usize {
    let text = truncate(text, cols.saturating_sub(1));
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.brand_fg));
    out.push(' ');
    out.push_str(&text);
    pad_line(out, 1 + text_width(&text), cols);
    out.push_str(Theme::reset());
    row + 1
}

/// Renders a complete frame for `vm` into `out`.
pub fn render_page(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.max(4);
    let bottom = footer_row - 1;

    let mut current_row = render_sidebar(out, 1, &vm.sidebar, theme, cols);
    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);

    match &vm.body {
        PageBody::Home { search, jobs, updates } => {
            current_row = render_search_bar(out, current_row, search, theme, cols);
            current_row = render_table_headers(out, current_row, theme, cols);

            // keep room for the updates preview under the grid
            let grid_bottom = bottom.saturating_sub(updates.len() + 2).max(current_row);
            current_row = match &vm.empty_state {
                Some(empty) => render_empty_state(out, current_row, empty, theme, cols),
                None => render_job_rows(out, current_row, grid_bottom, jobs, theme, cols),
            };

            if !updates.is_empty() && current_row + 1 < bottom {
                current_row = render_subheading(out, current_row + 1, "Latest Updates", theme, cols);
                render_feed(out, current_row, bottom, updates, theme, cols);
            }
        }
        PageBody::Jobs { search, tabs, jobs } => {
            current_row = render_search_bar(out, current_row, search, theme, cols);
            current_row = render_tabs(out, current_row, tabs, theme, cols);
            current_row = render_table_headers(out, current_row, theme, cols);
            match &vm.empty_state {
                Some(empty) => render_empty_state(out, current_row, empty, theme, cols),
                None => render_job_rows(out, current_row, bottom, jobs, theme, cols),
            };
        }
        PageBody::Announcements { search, tabs, items } => {
            current_row = render_search_bar(out, current_row, search, theme, cols);
            current_row = render_tabs(out, current_row, tabs, theme, cols);
            match &vm.empty_state {
                Some(empty) => render_empty_state(out, current_row, empty, theme, cols),
                None => render_feed(out, current_row, bottom, items, theme, cols),
            };
        }
        PageBody::Contact(view) => {
            render_contact(out, current_row + 1, bottom, view, theme, cols);
        }
    }

    render_border(out, bottom, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}
