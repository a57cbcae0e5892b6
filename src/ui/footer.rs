use crate::ui::app::Page;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints and version, or a validation message when a submit was
/// blocked.
pub struct Footer<'a> {
    page: Page,
    notice: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(page: Page) -> Self {
        Self { page, notice: None }
    }

    pub fn with_notice(mut self, notice: Option<&'a str>) -> Self {
        self.notice = notice;
        self
    }

    fn hints(&self) -> &'static str {
        match self.page {
            Page::WebDev => " Tab: Next page │ Ctrl+Q: Quit",
            Page::Contact => {
                " Tab: Next page │ ↑/↓: Field │ Enter: Send │ Ctrl+S: Send │ Ctrl+Q: Quit"
            }
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let (text, text_style) = match self.notice {
            Some(notice) => (
                format!(" {}", notice),
                Style::default().fg(STATUS_ERROR),
            ),
            None => (
                self.hints().to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let text_width = text.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(text_width)
            .saturating_sub(version_width);

        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(text, text_style),
            Span::styled(" ".repeat(padding), dim),
            Span::styled(version, dim),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
