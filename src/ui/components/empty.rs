//! Empty state renderer.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centred two-line message at `row`, in place of an empty list.
///
/// ```text
/// [blank]
///            No jobs match your search
///       Try a different keyword or job type
/// ```
///
/// Returns the next free row.
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    push_centered(out, row + 1, &empty.message, cols);
    out.push_str(Theme::reset());

    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, row + 2, &empty.subtitle, cols);
    out.push_str(Theme::reset());

    row + 3
}
