//! Rendering for the landing screen.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::theme::{STORE_BLUE, TEXT_MUTED};

pub fn render_home(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to the Fake Store App!",
            Style::default().fg(STORE_BLUE).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            "Browse, add, edit, and delete catalog products.",
            Style::default().fg(TEXT_MUTED),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to see the products.",
            Style::default().fg(TEXT_MUTED),
        ))
        .centered(),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
