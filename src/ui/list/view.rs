//! Rendering for the products list screen.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::list::state::ProductListState;
use crate::ui::remote::Remote;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, STATUS_ERROR, STORE_BLUE, TEXT_MUTED};

const MAX_TITLE_WIDTH: usize = 48;

pub fn render_list(frame: &mut Frame<'_>, state: &ProductListState, area: Rect, spinner: char) {
    let lines = match &state.remote {
        Remote::Loading => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("  {spinner} "), Style::default().fg(STORE_BLUE)),
                Span::styled("Loading...", Style::default().fg(TEXT_MUTED)),
            ]),
        ],
        Remote::Failed { message } => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {message}"),
                Style::default().fg(STATUS_ERROR),
            )),
        ],
        Remote::Ready(products) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    "  Our Products",
                    Style::default().fg(STORE_BLUE).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];

            if products.is_empty() {
                lines.push(Line::from(Span::styled(
                    "  No products to show.",
                    Style::default().fg(TEXT_MUTED),
                )));
                return draw_lines(frame, lines, area);
            }

            let title_width = products
                .iter()
                .map(|product| product.title.chars().count().min(MAX_TITLE_WIDTH))
                .max()
                .unwrap_or(0);

            // The heading takes two rows; the rest scrolls with the cursor.
            let visible = area.height.saturating_sub(2).max(1) as usize;
            let offset = state.selected.saturating_sub(visible.saturating_sub(1));

            for (idx, product) in products.iter().enumerate().skip(offset).take(visible) {
                let is_selected = idx == state.selected;
                let marker = if is_selected { "▸ " } else { "  " };

                let mut line = Line::from(vec![
                    Span::styled(marker, Style::default().fg(STORE_BLUE)),
                    Span::styled(
                        format!(
                            "{:<width$}",
                            clipped(&product.title, MAX_TITLE_WIDTH),
                            width = title_width
                        ),
                        Style::default().fg(HEADER_TEXT),
                    ),
                    Span::raw("  "),
                    Span::styled(product.price.display(), Style::default().fg(TEXT_MUTED)),
                ]);
                if is_selected {
                    line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
                }
                lines.push(line);
            }

            lines
        }
    };

    draw_lines(frame, lines, area);
}

fn draw_lines(frame: &mut Frame<'_>, lines: Vec<Line<'_>>, area: Rect) {
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn clipped(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
