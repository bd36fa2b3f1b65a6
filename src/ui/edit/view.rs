//! Rendering for the edit-product screen.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::components::{render_form, PopupDialog};
use crate::ui::edit::state::EditFormState;
use crate::ui::remote::Remote;
use crate::ui::theme::{STATUS_ERROR, STATUS_OK, STORE_BLUE, TEXT_MUTED};

const DIALOG_WIDTH: u16 = 48;

pub fn render_edit(frame: &mut Frame<'_>, state: &EditFormState, area: Rect, spinner: char) {
    let form = match &state.remote {
        Remote::Loading => {
            let lines = vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(format!("  {spinner} "), Style::default().fg(STORE_BLUE)),
                    Span::styled("Loading details...", Style::default().fg(TEXT_MUTED)),
                ]),
            ];
            frame.render_widget(Paragraph::new(lines), area);
            return;
        }
        Remote::Failed { message } => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {message}"),
                    Style::default().fg(STATUS_ERROR),
                )),
            ];
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
            return;
        }
        Remote::Ready(form) => form,
    };

    let heading = Rect {
        height: area.height.min(2),
        ..area
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "  Edit Product",
            Style::default().fg(STORE_BLUE).add_modifier(Modifier::BOLD),
        ))),
        heading,
    );

    let form_area = Rect {
        y: area.y + heading.height,
        height: area.height.saturating_sub(heading.height),
        ..area
    };
    render_form(frame, form, form_area);

    let status_y = form_area.y + (form.fields.len() as u16 * 3);
    if status_y < area.y + area.height {
        let status_area = Rect {
            y: status_y,
            height: 1,
            ..area
        };
        if state.in_flight {
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(format!("  {spinner} "), Style::default().fg(STORE_BLUE)),
                    Span::styled("Submitting...", Style::default().fg(TEXT_MUTED)),
                ])),
                status_area,
            );
        } else if let Some(notice) = &state.notice {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!("  {notice}"),
                    Style::default().fg(STATUS_ERROR),
                ))),
                status_area,
            );
        }
    }

    if let Some(id) = state.updated {
        let lines = vec![
            Line::from(""),
            Line::from(format!(" Product ID #{id} was successfully updated! ")),
            Line::from(""),
            Line::from(Span::styled(
                " Enter: Back to Products",
                Style::default().fg(TEXT_MUTED),
            )),
        ];
        PopupDialog::new("Update Successful", lines)
            .fixed_width(DIALOG_WIDTH)
            .border_color(STATUS_OK)
            .render(frame, frame.area());
    }
}
