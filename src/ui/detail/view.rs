//! Rendering for the product detail screen.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::components::PopupDialog;
use crate::ui::detail::state::{DeleteFlow, ProductDetailState};
use crate::ui::remote::Remote;
use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR, STATUS_OK, STORE_BLUE, TEXT_MUTED};

const DIALOG_WIDTH: u16 = 48;

pub fn render_detail(frame: &mut Frame<'_>, state: &ProductDetailState, area: Rect, spinner: char) {
    let lines = match &state.remote {
        Remote::Loading => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("  {spinner} "), Style::default().fg(STORE_BLUE)),
                Span::styled("Loading details...", Style::default().fg(TEXT_MUTED)),
            ]),
        ],
        Remote::Failed { message } => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {message}"),
                Style::default().fg(STATUS_ERROR),
            )),
        ],
        Remote::Ready(product) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("  {}", product.title),
                    Style::default().fg(STORE_BLUE).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}", product.description),
                    Style::default().fg(HEADER_TEXT),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}", product.price.display()),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("  {}", product.display_category()),
                    Style::default().fg(TEXT_MUTED),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}", product.image),
                    Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM),
                )),
            ];

            if let Some(notice) = &state.notice {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("  {notice}"),
                    Style::default().fg(STATUS_ERROR),
                )));
            }

            lines
        }
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);

    render_dialogs(frame, state, spinner);
}

fn render_dialogs(frame: &mut Frame<'_>, state: &ProductDetailState, spinner: char) {
    match state.delete {
        DeleteFlow::Idle => {}
        DeleteFlow::ConfirmPending { in_flight } => {
            let mut lines = vec![
                Line::from(""),
                Line::from(" Are you sure you want to delete this product? "),
                Line::from(""),
            ];
            if in_flight {
                lines.push(Line::from(vec![
                    Span::styled(format!(" {spinner} "), Style::default().fg(STORE_BLUE)),
                    Span::styled("Deleting...", Style::default().fg(TEXT_MUTED)),
                ]));
            } else {
                lines.push(Line::from(vec![
                    Span::styled(" Y", Style::default().fg(STATUS_OK)),
                    Span::raw(": Yes   "),
                    Span::styled("N", Style::default().fg(STATUS_ERROR)),
                    Span::raw(": No"),
                ]));
            }
            PopupDialog::new("Confirm Deletion", lines)
                .fixed_width(DIALOG_WIDTH)
                .border_color(STATUS_ERROR)
                .render(frame, frame.area());
            return;
        }
        DeleteFlow::Deleted { id } => {
            let lines = vec![
                Line::from(""),
                Line::from(format!(" Product ID #{id} was successfully deleted! ")),
                Line::from(""),
                Line::from(Span::styled(
                    " Enter: Back to Products",
                    Style::default().fg(TEXT_MUTED),
                )),
            ];
            PopupDialog::new("Delete Successful", lines)
                .fixed_width(DIALOG_WIDTH)
                .border_color(STATUS_OK)
                .render(frame, frame.area());
            return;
        }
    }

    if state.teaser {
        let lines = vec![
            Line::from(""),
            Line::from(" Just a tease :D "),
            Line::from(""),
            Line::from(Span::styled(
                " Esc: Close",
                Style::default().fg(TEXT_MUTED),
            )),
        ];
        PopupDialog::new("Add to Cart", lines)
            .fixed_width(DIALOG_WIDTH)
            .render(frame, frame.area());
    }
}
