//! Shared rendering building blocks: the centered popup dialog and the
//! product form body.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::form::ProductForm;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER, STORE_BLUE, TEXT_MUTED};

/// A centered dialog over whatever the screen was showing.
///
/// Sized to its content unless a fixed width is given; the screen behind
/// it stays rendered, so dialogs never lose the user's place.
pub struct PopupDialog<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    width: Option<u16>,
    border_color: ratatui::style::Color,
}

impl<'a> PopupDialog<'a> {
    pub fn new(title: &'a str, lines: Vec<Line<'a>>) -> Self {
        Self {
            title,
            lines,
            width: None,
            border_color: POPUP_BORDER,
        }
    }

    pub fn fixed_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn border_color(mut self, color: ratatui::style::Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn render(self, frame: &mut Frame<'_>, area: Rect) {
        let content_width = self.lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let width = self.width.unwrap_or_else(|| content_width.saturating_add(4));
        let height = self.lines.len().saturating_add(2) as u16;
        let dialog_area = centered_rect_by_size(area, width, height);

        frame.render_widget(Clear, dialog_area);
        let block = Block::default()
            .title(Span::styled(
                self.title,
                Style::default().fg(STORE_BLUE).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color));
        let widget = Paragraph::new(self.lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(widget, dialog_area);
    }
}

/// Render the five form fields with the focused one marked.
///
/// Shared by the add and edit screens; everything around the form (the
/// heading, notices, dialogs) belongs to the screen itself.
pub fn render_form(frame: &mut Frame<'_>, form: &ProductForm, area: Rect) {
    let mut lines = Vec::new();

    for (index, field) in form.fields.iter().enumerate() {
        let focused = index == form.focused;
        let marker = if focused { "▸ " } else { "  " };
        let label_style = if focused {
            Style::default().fg(STORE_BLUE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_MUTED)
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", field.label),
            label_style,
        )));

        let mut value_spans = vec![Span::raw("    ")];
        if field.value.is_empty() {
            value_spans.push(Span::styled(
                field.placeholder,
                Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM),
            ));
        } else {
            value_spans.push(Span::styled(
                field.value.clone(),
                Style::default().fg(HEADER_TEXT),
            ));
        }
        if focused {
            value_spans.push(Span::styled("█", Style::default().fg(STORE_BLUE)));
        }

        let mut value_line = Line::from(value_spans);
        if focused {
            value_line = value_line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(value_line);
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
