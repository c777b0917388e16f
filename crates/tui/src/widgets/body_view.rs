//! Scrollable view of the active step's body.
//!
//! Supports line-wise and page-wise scrolling and shows a scrollbar when the
//! body is taller than the viewport.

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

/// Widget for displaying a step body with scrolling support.
#[derive(Debug, Default)]
pub struct BodyView {
    /// Current scroll offset (number of lines scrolled from the top).
    pub scroll_offset: usize,
}

impl BodyView {
    pub fn new() -> Self {
        Self { scroll_offset: 0 }
    }

    /// Render `text` inside a bordered block titled `title`.
    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str, text: &str) {
        let block = Block::default().borders(Borders::ALL).title(title.to_string());

        let paragraph = Paragraph::new(text.to_string())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((u16::try_from(self.scroll_offset).unwrap_or(u16::MAX), 0));

        frame.render_widget(paragraph, area);

        let total_lines = text.lines().count();
        let visible_lines = area.height.saturating_sub(2) as usize; // borders

        if total_lines > visible_lines {
            let mut scrollbar_state = ScrollbarState::default()
                .content_length(total_lines)
                .viewport_content_length(visible_lines)
                .position(self.scroll_offset);

            let scrollbar = Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line, never past `max`.
    pub fn scroll_down(&mut self, max: usize) {
        self.scroll_offset = (self.scroll_offset + 1).min(max);
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(page_size);
    }

    pub fn page_down(&mut self, page_size: usize, max: usize) {
        self.scroll_offset = (self.scroll_offset + page_size).min(max);
    }

    /// Reset scroll to the top. Called whenever the active step changes.
    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }
}
