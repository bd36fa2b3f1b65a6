use crate::ui::app::Screen;
use crate::ui::detail::DeleteFlow;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const BACK_HINTS: &str = " Esc: Back │ Ctrl+Q: Quit";
const FORM_HINTS: &str =
    " Type to edit │ Tab/↓: Next field │ Shift+Tab/↑: Prev │ Enter: Submit │ Esc: Back │ Ctrl+Q: Quit";
const DIALOG_HINTS: &str = " Enter: Back to Products";

/// The footer hint line for the current screen state. Dialogs replace the
/// screen's own hints, because they own the keyboard.
pub fn hints_for(screen: &Screen) -> &'static str {
    match screen {
        Screen::Home => " Enter: Products │ Ctrl+Q: Quit",

        Screen::List(state) => {
            if state.remote.ready().is_some() {
                " ↑/↓: Select │ Enter: Details │ e: Edit │ a: Add │ Esc: Back │ Ctrl+Q: Quit"
            } else {
                BACK_HINTS
            }
        }

        Screen::Detail(state) => {
            if state.teaser {
                return " Esc: Close │ Ctrl+Q: Quit";
            }
            match state.delete {
                DeleteFlow::ConfirmPending { .. } => " y: Yes │ n: No",
                DeleteFlow::Deleted { .. } => DIALOG_HINTS,
                DeleteFlow::Idle => {
                    if state.remote.ready().is_some() {
                        " c: Add to Cart │ d: Delete │ Esc: Back │ Ctrl+Q: Quit"
                    } else {
                        BACK_HINTS
                    }
                }
            }
        }

        Screen::Create(state) => {
            if state.dialog_open() {
                DIALOG_HINTS
            } else {
                FORM_HINTS
            }
        }

        Screen::Edit(state) => {
            if state.dialog_open() {
                DIALOG_HINTS
            } else if state.remote.ready().is_some() {
                FORM_HINTS
            } else {
                BACK_HINTS
            }
        }
    }
}

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, hints: &str, error: Option<&str>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        // A send failure takes over the hint space until the next send.
        let (left, left_style) = match error {
            Some(error) => (format!(" {error}"), Style::default().fg(STATUS_ERROR)),
            None => (hints.to_string(), text_style),
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let left_width = left.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(left_width)
            .saturating_sub(version_width);

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::{Price, Product};
    use crate::ui::detail::ProductDetailState;
    use crate::ui::list::ProductListState;
    use crate::ui::remote::Remote;

    #[test]
    fn loading_screens_only_offer_back_and_quit() {
        let screen = Screen::List(ProductListState::default());
        assert_eq!(hints_for(&screen), BACK_HINTS);
    }

    #[test]
    fn dialogs_take_over_the_hints() {
        let mut state = ProductDetailState::for_product(7);
        state.remote = Remote::Ready(Product {
            id: 7,
            title: "Lamp".to_string(),
            description: String::new(),
            category: "home".to_string(),
            price: Price::Number(55.0),
            image: String::new(),
        });
        state.delete = DeleteFlow::Deleted { id: 7 };
        assert_eq!(hints_for(&Screen::Detail(state)), DIALOG_HINTS);
    }
}
