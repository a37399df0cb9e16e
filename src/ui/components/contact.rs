//! Contact form renderer.

use crate::ui::helpers::{pad_line, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ContactView;

const LABEL_WIDTH: usize = 10;

/// Renders the form fields, the submit control, and any status banner.
///
/// ```text
///   Name      │ Ada
/// ▸ Email     │ ada@example.com▏
///   Subject   │
///   Message   │
///
///   [ Send Message ]
///   Thanks! Your message was sent (ref MSG-0001).
/// ```
///
/// Rows at or past `bottom` are skipped. Returns the next free row.
pub fn render_contact(out: &mut String, row: usize, bottom: usize, view: &ContactView, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;

    for field in &view.fields {
        if current_row >= bottom {
            return current_row;
        }

        position_cursor(out, current_row, 1);
        let marker = if field.is_focused { "▸ " } else { "  " };
        out.push_str(&Theme::fg(&theme.colors.brand_fg));
        out.push_str(marker);
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&format!("{:<LABEL_WIDTH$}", field.label));
        out.push_str(&Theme::fg(&theme.colors.border));
        out.push_str("│ ");

        let caret = if field.is_focused { "▏" } else { "" };
        let value = format!("{}{caret}", field.value.replace('\n', " "));
        let value = truncate(&value, cols.saturating_sub(LABEL_WIDTH + 4));
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(&value);
        pad_line(out, LABEL_WIDTH + 4 + text_width(&value), cols);
        out.push_str(Theme::reset());

        current_row += 1;
    }

    current_row += 1;
    if current_row >= bottom {
        return current_row;
    }

    let button = if view.submitting { "[ Sending... ]" } else { "[ Send Message ]" };
    position_cursor(out, current_row, 1);
    out.push_str("  ");
    if view.submitting {
        out.push_str(Theme::dim());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    } else {
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.nav_active_fg));
        out.push_str(&Theme::bg(&theme.colors.nav_active_bg));
    }
    out.push_str(button);
    out.push_str(Theme::reset());
    pad_line(out, 2 + text_width(button), cols);
    current_row += 1;

    if let Some(status) = &view.status {
        if current_row < bottom {
            let color = if status.is_error {
                &theme.colors.error_fg
            } else {
                &theme.colors.success_fg
            };
            let message = truncate(&status.message, cols.saturating_sub(2));

            position_cursor(out, current_row, 1);
            out.push_str(&Theme::fg(color));
            out.push_str("  ");
            out.push_str(&message);
            pad_line(out, 2 + text_width(&message), cols);
            out.push_str(Theme::reset());
            current_row += 1;
        }
    }

    current_row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::{FormFieldView, StatusBanner};

    fn view(submitting: bool, status: Option<StatusBanner>) -> ContactView {
        ContactView {
            fields: ["Name", "Email"]
                .into_iter()
                .map(|label| FormFieldView {
                    label: label.to_string(),
                    value: String::new(),
                    is_focused: label == "Email",
                })
                .collect(),
            status,
            submitting,
        }
    }

    #[test]
    fn focused_field_is_marked() {
        let theme = Theme::default();
        let mut out = String::new();
        let next = render_contact(&mut out, 1, 20, &view(false, None), &theme, 80);

        // 2 fields, blank row, button
        assert_eq!(next, 5);
        assert!(out.contains("▸ "));
        assert!(out.contains("[ Send Message ]"));
    }

    #[test]
    fn error_banner_uses_error_colour() {
        let theme = Theme::default();
        let status = StatusBanner {
            message: "Email: is required".to_string(),
            is_error: true,
        };

        let mut out = String::new();
        render_contact(&mut out, 1, 20, &view(false, Some(status)), &theme, 80);
        let banner = format!("{}  Email: is required", Theme::fg(&theme.colors.error_fg));
        assert!(out.contains(&banner));
    }

    #[test]
    fn pending_submission_disables_button() {
        let theme = Theme::default();
        let mut out = String::new();
        render_contact(&mut out, 1, 20, &view(true, None), &theme, 80);
        assert!(out.contains("[ Sending... ]"));
        assert!(!out.contains("[ Send Message ]"));
    }
}
