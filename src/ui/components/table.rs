//! Job grid renderer.
//!
//! Each job card is drawn as one table row. Wide terminals show every
//! column; narrower ones keep only title, company, and posted date.

use crate::ui::helpers::{pad_line, position_cursor, push_highlighted, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::JobCard;

/// Narrowest width that shows every column.
const FULL_LAYOUT_COLS: usize = 100;

const TITLE_WIDTH: usize = 30;
const COMPANY_WIDTH: usize = 16;
const LOCATION_WIDTH: usize = 16;
const TYPE_WIDTH: usize = 11;
const SALARY_WIDTH: usize = 15;

/// Renders the column headings at `row`. Returns `row + 1`.
pub fn render_table_headers(out: &mut String, row: usize, theme: &Theme, cols: usize) -> usize {
    let headings = if cols >= FULL_LAYOUT_COLS {
        format!(
            " {:<TITLE_WIDTH$}{:<COMPANY_WIDTH$}{:<LOCATION_WIDTH$}{:<TYPE_WIDTH$}{:<SALARY_WIDTH$}{}",
            "TITLE", "COMPANY", "LOCATION", "TYPE", "SALARY", "POSTED"
        )
    } else {
        format!(" {:<TITLE_WIDTH$}{:<COMPANY_WIDTH$}{}", "TITLE", "COMPANY", "POSTED")
    };
    let headings = truncate(&headings, cols);

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&headings);
    pad_line(out, text_width(&headings), cols);
    out.push_str(Theme::reset());
    row + 1
}

/// Renders job cards from `row`, stopping before `bottom`.
///
/// Returns the next free row.
pub fn render_job_rows(
    out: &mut String,
    row: usize,
    bottom: usize,
    jobs: &[JobCard],
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for job in jobs {
        if current_row >= bottom {
            break;
        }
        current_row = render_job_row(out, current_row, job, theme, cols);
    }
    current_row
}

fn render_job_row(out: &mut String, row: usize, job: &JobCard, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    if job.is_hovered {
        out.push_str(&Theme::bg(&theme.colors.card_hover_bg));
    }
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push(' ');

    let title = truncate(&job.title, TITLE_WIDTH - 2);
    push_highlighted(out, &title, &job.highlight_ranges, theme, &theme.colors.text_normal);
    if job.is_hovered {
        // highlight spans reset the hover background
        out.push_str(&Theme::bg(&theme.colors.card_hover_bg));
    }
    out.push_str(&" ".repeat(TITLE_WIDTH - text_width(&title)));
    let mut used = 1 + TITLE_WIDTH;

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    used += push_cell(out, &job.company, COMPANY_WIDTH);

    if cols >= FULL_LAYOUT_COLS {
        used += push_cell(out, &job.location, LOCATION_WIDTH);
        out.push_str(&Theme::fg(&theme.colors.brand_fg));
        used += push_cell(out, &job.job_type, TYPE_WIDTH);
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        used += push_cell(out, &job.salary, SALARY_WIDTH);
    }

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    let posted = truncate(&job.posted, cols.saturating_sub(used));
    out.push_str(&posted);
    used += text_width(&posted);

    pad_line(out, used, cols);
    out.push_str(Theme::reset());
    row + 1
}

/// Writes `text` left-aligned in a `width` cell. Returns `width`.
fn push_cell(out: &mut String, text: &str, width: usize) -> usize {
    let text = truncate(text, width.saturating_sub(2));
    out.push_str(&text);
    out.push_str(&" ".repeat(width - text_width(&text)));
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, is_hovered: bool) -> JobCard {
        JobCard {
            title: title.to_string(),
            company: "TechCorp".to_string(),
            location: "Remote".to_string(),
            job_type: "Contract".to_string(),
            salary: "$80k - $100k".to_string(),
            posted: "2 days ago".to_string(),
            is_hovered,
            highlight_ranges: vec![],
        }
    }

    #[test]
    fn rows_stop_at_bottom() {
        let theme = Theme::default();
        let jobs = vec![card("A", false), card("B", false), card("C", false)];

        let mut out = String::new();
        let next = render_job_rows(&mut out, 5, 7, &jobs, &theme, 120);
        assert_eq!(next, 7);
        assert!(!out.contains("\u{1b}[7;1H"));
    }

    #[test]
    fn narrow_layout_drops_salary() {
        let theme = Theme::default();
        let jobs = vec![card("Senior Developer", false)];

        let mut wide = String::new();
        render_job_rows(&mut wide, 1, 10, &jobs, &theme, 120);
        assert!(wide.contains("$80k - $100k"));

        let mut narrow = String::new();
        render_job_rows(&mut narrow, 1, 10, &jobs, &theme, 70);
        assert!(!narrow.contains("$80k"));
        assert!(narrow.contains("2 days ago"));
    }

    #[test]
    fn hovered_card_gets_background() {
        let theme = Theme::default();
        let hover = Theme::bg(&theme.colors.card_hover_bg);

        let mut out = String::new();
        render_job_rows(&mut out, 1, 10, &[card("Lead Designer", true)], &theme, 120);
        assert!(out.contains(&hover));

        let mut out = String::new();
        render_job_rows(&mut out, 1, 10, &[card("Lead Designer", false)], &theme, 120);
        assert!(!out.contains(&hover));
    }
}
