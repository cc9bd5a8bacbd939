use crate::todo::TodoState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, SEPARATOR, TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &TodoState) -> Paragraph<'static> {
        let remaining = state.active_count();
        let noun = if remaining == 1 { "item" } else { "items" };

        let line = Line::from(vec![
            Span::styled("  tuido", Style::default().fg(ACCENT)),
            Span::styled("  │  ", Style::default().fg(SEPARATOR)),
            Span::styled(
                format!("{remaining} {noun} left"),
                Style::default().fg(TEXT),
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
