use crate::cli::ui::style::UiStyle;
use crate::form::{Field, FormState};

pub const HEADER: &str = "Enter your dive details";
pub const FOOTER_HINT: &str =
    "(Press Enter to submit, Tab to switch fields, ←/→ to change pages, Esc to quit)";

/// Renders the current page as one block of `\n` separated lines.
pub fn render(state: &FormState, style: &UiStyle) -> String {
    let mut lines = vec![style.apply_header_style(HEADER), String::new()];

    lines.extend(state.page_fields().iter().map(|field| field_view(field, style)));

    lines.push(String::new());
    lines.push(page_indicator(state));

    if let Some(remaining) = state.gas_preview() {
        lines.push(String::new());
        lines.push(style.apply_result_style(&format!("Gas remaining: {remaining}")));
    }

    if let Some(err) = state.error() {
        lines.push(String::new());
        lines.push(style.apply_error_style(&format!("Error: {err}")));
    }

    lines.push(String::new());
    lines.push(FOOTER_HINT.to_string());
    lines.join("\n")
}

/// One-based page position, e.g. `Page 2 of 3`.
pub fn page_indicator(state: &FormState) -> String {
    format!(
        "Page {} of {}",
        state.current_page() + 1,
        state.catalog().page_count()
    )
}

pub fn field_view(field: &Field, style: &UiStyle) -> String {
    let marker = if field.is_focused() {
        style.apply_highlight_style(&style.focus_marker)
    } else {
        style.blur_marker.clone()
    };
    let body = if field.is_empty() {
        style.apply_placeholder_style(field.descriptor.placeholder)
    } else {
        field.visible_value().to_string()
    };
    format!("{marker}{body}")
}
