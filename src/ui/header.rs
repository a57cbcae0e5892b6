use crate::ui::app::Page;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PRIMARY};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Page tabs.
pub struct Header {
    active: Page,
}

impl Header {
    pub fn new(active: Page) -> Self {
        Self { active }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let active_style = Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::styled("  ", text_style)];
        for (index, page) in Page::ALL.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("  │  ", separator_style));
            }
            let style = if *page == self.active {
                active_style
            } else {
                text_style
            };
            spans.push(Span::styled(page.title(), style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
