//! Styling helpers for the integrations pane

use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthChar;

use crate::theme::{palette, styles};

/// Layout constants for the custom editor table
pub const NAME_WIDTH: u16 = 22;
pub const TERMINAL_WIDTH: u16 = 10;
pub const COLUMN_GAP: u16 = 2;

/// Most options a dropdown shows before scrolling
pub const DROPDOWN_MAX_ROWS: u16 = 8;
pub const DROPDOWN_MIN_WIDTH: u16 = 16;

/// Marks the cell being typed into
pub const EDIT_CURSOR: char = '▏';

/// Section labels ("External editor", "Shell", ...)
pub fn label_style() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .add_modifier(Modifier::BOLD)
}

/// Table column headers
pub fn column_header_style() -> Style {
    Style::default()
        .fg(palette::ACCENT_DIM)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// A control's value, highlighted when focused
pub fn control_style(focused: bool) -> Style {
    if focused {
        styles::focused_selected()
    } else {
        styles::text_primary()
    }
}

/// Style for a cell being edited
pub fn editing_style() -> Style {
    Style::default()
        .fg(palette::STATUS_YELLOW)
        .bg(palette::BORDER_DIM)
}

/// Style for the install suggestion link
pub fn link_style(focused: bool) -> Style {
    if focused {
        styles::focused_selected().add_modifier(Modifier::UNDERLINED)
    } else {
        styles::accent().add_modifier(Modifier::UNDERLINED)
    }
}

pub fn checkbox_style(checked: bool, focused: bool) -> Style {
    if focused {
        styles::focused_selected()
    } else if checked {
        styles::status_green()
    } else {
        styles::text_muted()
    }
}

/// Truncate `s` to at most `max_width` terminal columns, marking the cut with
/// an ellipsis
pub fn truncate_str(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
