use crate::ui::router::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STORE_BLUE, TEXT_MUTED};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// The nav bar: brand plus the three top-level destinations, with the
    /// one the current route lives under highlighted.
    pub fn widget(&self, route: Route) -> Paragraph<'static> {
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let brand_style = Style::default().fg(STORE_BLUE).add_modifier(Modifier::BOLD);

        let entries = [
            ("Home", matches!(route, Route::Home)),
            (
                "Products",
                matches!(
                    route,
                    Route::Products | Route::ProductDetail(_) | Route::EditProduct(_)
                ),
            ),
            ("Add Product", matches!(route, Route::AddProduct)),
        ];

        let mut spans = vec![
            Span::styled("  Stockroom", brand_style),
            Span::styled("  │  ", separator_style),
        ];
        for (index, (label, active)) in entries.into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("   ", separator_style));
            }
            let style = if active {
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_MUTED)
            };
            spans.push(Span::styled(label, style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
