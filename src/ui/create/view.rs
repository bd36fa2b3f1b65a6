//! Rendering for the add-product screen.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::components::{render_form, PopupDialog};
use crate::ui::create::state::CreateFormState;
use crate::ui::theme::{STATUS_ERROR, STATUS_OK, STORE_BLUE, TEXT_MUTED};

const DIALOG_WIDTH: u16 = 48;

pub fn render_create(frame: &mut Frame<'_>, state: &CreateFormState, area: Rect, spinner: char) {
    let heading = Rect {
        height: area.height.min(2),
        ..area
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "  Add Product",
            Style::default().fg(STORE_BLUE).add_modifier(Modifier::BOLD),
        ))),
        heading,
    );

    let form_area = Rect {
        y: area.y + heading.height,
        height: area.height.saturating_sub(heading.height),
        ..area
    };
    render_form(frame, &state.form, form_area);

    let status_y = form_area.y + (state.form.fields.len() as u16 * 3);
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

    if let Some(product) = &state.submitted {
        let lines = vec![
            Line::from(""),
            Line::from(format!(" Product {} was successfully added! ", product.title)),
            Line::from(""),
            Line::from(Span::styled(
                " Enter: Back to Products",
                Style::default().fg(TEXT_MUTED),
            )),
        ];
        PopupDialog::new("Addition Successful", lines)
            .fixed_width(DIALOG_WIDTH)
            .border_color(STATUS_OK)
            .render(frame, frame.area());
    }
}
