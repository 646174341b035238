//! Integrations pane widget - full-screen preferences UI
//!
//! Draws a [`PaneView`]:
//! - External editor dropdown, or the install suggestion when none exist
//! - Custom editor table with an Add button
//! - Shell dropdown
//!
//! An open dropdown is drawn last, over whatever sits below its control.

mod styles;


use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use iprefs_app::state::CustomEditorField;
use iprefs_app::view::{
    CustomEditorRowView, CustomEditorTableView, EditorSection, PaneView, SelectView,
    ADD_BUTTON_LABEL,
};

use crate::theme::{palette, styles as theme};

use styles::{
    checkbox_style, column_header_style, control_style, editing_style, label_style, link_style,
    truncate_str, COLUMN_GAP, DROPDOWN_MAX_ROWS, DROPDOWN_MIN_WIDTH, EDIT_CURSOR, NAME_WIDTH,
    TERMINAL_WIDTH,
};

/// Where an open dropdown hangs from
struct DropdownAnchor<'a> {
    x: u16,
    y: u16,
    select: &'a SelectView,
}

/// Full-screen integrations pane
pub struct IntegrationsPane<'a> {
    view: &'a PaneView,
}

impl<'a> IntegrationsPane<'a> {
    pub fn new(view: &'a PaneView) -> Self {
        Self { view }
    }
}

impl Widget for IntegrationsPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the background with a solid color
        let bg_style = Style::default().bg(palette::DEEPEST_BG);
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                buf[(x, y)].set_style(bg_style).set_char(' ');
            }
        }

        let chunks = Layout::vertical([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Controls
            Constraint::Length(3), // Hints + status
        ])
        .split(area);

        self.render_header(chunks[0], buf);
        let anchor = self.render_content(chunks[1], buf);
        self.render_footer(chunks[2], buf);

        if let Some(anchor) = anchor {
            render_dropdown(&anchor, area, buf);
        }
    }
}

impl<'a> IntegrationsPane<'a> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let block = theme::glass_block(false).style(Style::default().bg(palette::SURFACE));
        let inner = block.inner(area);
        block.render(area, buf);

        let title = Line::from(Span::styled(self.view.title, theme::text_bright_bold()));
        put_line(buf, inner, inner.x + 1, inner.y, &title);
    }

    /// Draws every control and returns the open dropdown, if any
    fn render_content(&self, area: Rect, buf: &mut Buffer) -> Option<DropdownAnchor<'a>> {
        let block = theme::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let viewport = Viewport {
            bounds: inner,
            scroll: scroll_offset(focused_row(self.view), inner.height),
        };
        let x = inner.x + 1;
        let mut anchor = None;

        let mut row = match &self.view.editor {
            EditorSection::Select(select) => {
                render_select(select, &viewport, x, 0, buf, &mut anchor)
            }
            EditorSection::NoEditorsFound {
                label,
                link_text,
                focused,
                ..
            } => {
                viewport.put(buf, x, 0, &Line::styled(*label, label_style()));
                let line = Line::from(vec![
                    Span::styled("No editors found. ", theme::text_secondary()),
                    Span::styled(link_text.as_str(), link_style(*focused)),
                ]);
                viewport.put(buf, x + 2, 1, &line);
                2
            }
        };

        row = render_table(&self.view.custom_editors, &viewport, x, row.saturating_add(1), buf);

        render_select(&self.view.shell, &viewport, x, row.saturating_add(1), buf, &mut anchor);

        anchor
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL ^ Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_inactive())
            .style(Style::default().bg(palette::DEEPEST_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let hints = Line::from(Span::styled(self.view.hints, theme::keybinding()));
        put_line(buf, inner, inner.x + 1, inner.y, &hints);

        if let Some(error) = &self.view.error {
            let status = Line::from(vec![
                Span::styled("Error: ", theme::status_red()),
                Span::styled(error.as_str(), theme::text_secondary()),
            ]);
            put_line(buf, inner, inner.x + 1, inner.y + 1, &status);
        }
    }
}

/// Label on one line, closed dropdown on the next. Returns the next free row.
fn render_select<'a>(
    select: &'a SelectView,
    viewport: &Viewport,
    x: u16,
    row: u16,
    buf: &mut Buffer,
    anchor: &mut Option<DropdownAnchor<'a>>,
) -> u16 {
    viewport.put(buf, x, row, &Line::styled(select.label, label_style()));

    let value = if select.value.is_empty() {
        Span::styled(" (none) ▾ ", control_style(select.focused).patch(theme::text_muted()))
    } else {
        Span::styled(format!(" {} ▾ ", select.value), control_style(select.focused))
    };
    viewport.put(buf, x + 2, row.saturating_add(1), &Line::from(value));

    if select.open.is_some() {
        if let Some(value_y) = viewport.screen_y(row.saturating_add(1)) {
            *anchor = Some(DropdownAnchor {
                x: x + 2,
                y: value_y + 1,
                select,
            });
        }
    }

    row.saturating_add(2)
}

/// Label, column headers, one row per editor, then the Add button.
/// Returns the next free row.
fn render_table(
    table: &CustomEditorTableView,
    viewport: &Viewport,
    x: u16,
    row: u16,
    buf: &mut Buffer,
) -> u16 {
    let width = viewport.bounds.right().saturating_sub(x + 1);
    let path_x = x + NAME_WIDTH + COLUMN_GAP;
    let terminal_x = x + width.saturating_sub(TERMINAL_WIDTH);
    let path_width = terminal_x.saturating_sub(path_x + COLUMN_GAP);

    viewport.put(buf, x, row, &Line::styled(table.label, label_style()));

    let [name_col, path_col, terminal_col] = table.columns;
    let header = row.saturating_add(1);
    let header_style = column_header_style();
    viewport.put(buf, x, header, &Line::styled(name_col, header_style));
    viewport.put(buf, path_x, header, &Line::styled(path_col, header_style));
    viewport.put(buf, terminal_x, header, &Line::styled(terminal_col, header_style));

    let mut editor_row = header.saturating_add(1);
    for editor in &table.rows {
        if viewport.is_visible(editor_row) {
            let name = text_cell(editor, CustomEditorField::Name, NAME_WIDTH);
            viewport.put(buf, x, editor_row, &Line::from(name));

            let path = text_cell(editor, CustomEditorField::Path, path_width);
            viewport.put(buf, path_x, editor_row, &Line::from(path));

            let focused = editor.focused_field == Some(CustomEditorField::Terminal);
            let checkbox = if editor.uses_shell { "[x]" } else { "[ ]" };
            let checkbox = Span::styled(checkbox, checkbox_style(editor.uses_shell, focused));
            viewport.put(buf, terminal_x + 2, editor_row, &Line::from(checkbox));
        }

        editor_row = editor_row.saturating_add(1);
    }

    let add = Span::styled(format!("[ {} ]", ADD_BUTTON_LABEL), control_style(table.add_focused));
    viewport.put(buf, x, editor_row, &Line::from(add));

    editor_row.saturating_add(1)
}

/// A name or path cell, showing the edit buffer and cursor while typing
fn text_cell(row: &CustomEditorRowView, field: CustomEditorField, width: u16) -> Span<'static> {
    let focused = row.focused_field == Some(field);
    let editing = focused && row.editing.is_some();
    let text = row.cell_text(field);

    if editing {
        // Keep the cursor visible by showing the tail of long input
        let budget = usize::from(width).saturating_sub(1);
        let shown: String = if text.width() > budget {
            let chars: Vec<char> = text.chars().collect();
            let mut start = chars.len();
            let mut used = 0;
            while start > 0 {
                let w = unicode_width::UnicodeWidthChar::width(chars[start - 1]).unwrap_or(0);
                if used + w > budget {
                    break;
                }
                used += w;
                start -= 1;
            }
            chars[start..].iter().collect()
        } else {
            text.to_string()
        };
        Span::styled(format!("{shown}{EDIT_CURSOR}"), editing_style())
    } else {
        Span::styled(truncate_str(text, usize::from(width)), control_style(focused))
    }
}

fn render_dropdown(anchor: &DropdownAnchor<'_>, area: Rect, buf: &mut Buffer) {
    let select = anchor.select;
    let Some(highlighted) = select.open else {
        return;
    };
    if select.options.is_empty() {
        return;
    }

    let visible = u16::try_from(select.options.len())
        .unwrap_or(u16::MAX)
        .min(DROPDOWN_MAX_ROWS);
    let height = (visible + 2).min(area.height);
    let widest = select.options.iter().map(|o| o.width()).max().unwrap_or(0);
    let width = u16::try_from(widest + 6)
        .unwrap_or(u16::MAX)
        .max(DROPDOWN_MIN_WIDTH)
        .min(area.right().saturating_sub(anchor.x));
    // Flip upward rather than run off the bottom
    let y = if anchor.y.saturating_add(height) > area.bottom() {
        anchor.y.saturating_sub(height + 1).max(area.y)
    } else {
        anchor.y
    };
    let rect = Rect::new(anchor.x, y, width, height).intersection(area);
    if rect.is_empty() {
        return;
    }

    Clear.render(rect, buf);
    let block = theme::popup_block();
    let inner = block.inner(rect);
    block.render(rect, buf);
    if inner.is_empty() {
        return;
    }

    // Scroll so the highlight stays in view
    let offset = highlighted.saturating_sub(usize::from(inner.height) - 1);
    for (i, option) in select
        .options
        .iter()
        .enumerate()
        .skip(offset)
        .take(usize::from(inner.height))
    {
        let marker = if Some(i) == select.selected { "• " } else { "  " };
        let style = if i == highlighted {
            theme::focused_selected()
        } else {
            theme::text_primary()
        };
        let text = truncate_str(option, usize::from(inner.width.saturating_sub(3)));
        let line = Line::from(Span::styled(format!("{marker}{text}"), style));
        let row_y = inner.y + (i - offset) as u16;
        put_line(buf, inner, inner.x + 1, row_y, &line);
    }
}

/// The controls block, scrolled by whole rows
///
/// Controls are laid out in content rows counted from the top of the
/// block. Rows above `scroll` or past the bottom are not drawn.
struct Viewport {
    bounds: Rect,
    scroll: u16,
}

impl Viewport {
    /// Screen row of a content row, if it is on screen
    fn screen_y(&self, row: u16) -> Option<u16> {
        let y = self.bounds.y.checked_add(row.checked_sub(self.scroll)?)?;
        (y < self.bounds.bottom()).then_some(y)
    }

    fn is_visible(&self, row: u16) -> bool {
        self.screen_y(row).is_some()
    }

    fn put(&self, buf: &mut Buffer, x: u16, row: u16, line: &Line<'_>) {
        if let Some(y) = self.screen_y(row) {
            put_line(buf, self.bounds, x, y, line);
        }
    }
}

/// Content row holding the focused control, matching `render_content`'s layout
fn focused_row(view: &PaneView) -> Option<u16> {
    let editor_focused = match &view.editor {
        EditorSection::Select(select) => select.focused,
        EditorSection::NoEditorsFound { focused, .. } => *focused,
    };
    if editor_focused {
        return Some(1);
    }

    // Editor section (2), gap, table label, column headers
    let first_editor_row: u16 = 5;
    let table = &view.custom_editors;
    let row_of = |index: usize| {
        first_editor_row.saturating_add(u16::try_from(index).unwrap_or(u16::MAX))
    };

    if let Some(index) = table.rows.iter().position(|r| r.focused_field.is_some()) {
        return Some(row_of(index));
    }
    let add_row = row_of(table.rows.len());
    if table.add_focused {
        return Some(add_row);
    }
    // Gap, shell label, shell value
    view.shell.focused.then_some(add_row.saturating_add(3))
}

/// Rows to scroll so `focused` sits inside a block `height` rows tall
fn scroll_offset(focused: Option<u16>, height: u16) -> u16 {
    match focused {
        Some(row) if height > 0 && row >= height => row + 1 - height,
        _ => 0,
    }
}

/// Draw `line` at (`x`, `y`), clipped to `bounds`
fn put_line(buf: &mut Buffer, bounds: Rect, x: u16, y: u16, line: &Line<'_>) {
    if y < bounds.y || y >= bounds.bottom() || x >= bounds.right() {
        return;
    }
    buf.set_line(x, y, line, bounds.right() - x);
}
