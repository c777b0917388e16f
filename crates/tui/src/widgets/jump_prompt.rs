//! Jump prompt: type part of a step id or title, pick a match, jump to it.
//!
//! The prompt is opened with `/`. While open it consumes every key; Enter
//! records the selected step id as the submission and closes the prompt.

use adv_protocol::StepDef;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::event::EventStatus;

/// A step offered by the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub id: String,
    pub title: String,
}

/// Jump prompt state.
#[derive(Debug, Clone, Default)]
pub struct JumpPrompt {
    /// Whether the prompt is open.
    active: bool,
    /// Current query text
    input: String,
    /// Current cursor position (in chars)
    cursor_pos: usize,
    /// Selected index in the suggestion list
    selected_index: usize,
    /// Step id chosen with Enter, waiting to be taken by the app.
    submitted: Option<String>,
}

impl JumpPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn open(&mut self) {
        self.clear();
        self.active = true;
    }

    pub fn close(&mut self) {
        self.clear();
        self.active = false;
    }

    /// Take the step id chosen with Enter, if any.
    pub fn take_submitted(&mut self) -> Option<String> {
        self.submitted.take()
    }

    /// Steps whose id or title contains the query, case-insensitively, in
    /// sequence order. An empty query offers every step.
    pub fn suggestions(&self, steps: &[StepDef]) -> Vec<Suggestion> {
        let query = self.input.trim().to_lowercase();
        steps
            .iter()
            .filter(|step| {
                query.is_empty()
                    || step.id.to_lowercase().contains(&query)
                    || step.title.to_lowercase().contains(&query)
            })
            .map(|step| Suggestion {
                id: step.id.clone(),
                title: step.display_title().to_string(),
            })
            .collect()
    }

    pub fn selected_suggestion(&self, steps: &[StepDef]) -> Option<Suggestion> {
        self.suggestions(steps).into_iter().nth(self.selected_index)
    }

    /// Handle a key while the prompt is open.
    ///
    /// Returns `NotConsumed` when the prompt is closed so the key can reach
    /// the next handler.
    pub fn handle_key_event(&mut self, key_event: KeyEvent, steps: &[StepDef]) -> EventStatus {
        if !self.active {
            return EventStatus::NotConsumed;
        }
        if key_event.kind != KeyEventKind::Press {
            return EventStatus::Consumed;
        }

        match key_event.code {
            KeyCode::Esc => self.close(),
            KeyCode::Enter => {
                let chosen = self.selected_suggestion(steps).map(|s| s.id);
                self.close();
                self.submitted = chosen;
            }
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(steps),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Backspace => self.delete_char(steps),
            KeyCode::Char(c) => self.insert_char(c, steps),
            _ => {}
        }

        EventStatus::Consumed
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map_or(self.input.len(), |(i, _)| i)
    }

    fn insert_char(&mut self, c: char, steps: &[StepDef]) {
        let at = self.byte_index();
        self.input.insert(at, c);
        self.cursor_pos += 1;
        self.clamp_selection(steps);
    }

    fn delete_char(&mut self, steps: &[StepDef]) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let at = self.byte_index();
            self.input.remove(at);
            self.clamp_selection(steps);
        }
    }

    fn clear(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
        self.selected_index = 0;
    }

    fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.input.chars().count() {
            self.cursor_pos += 1;
        }
    }

    fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn move_selection_down(&mut self, steps: &[StepDef]) {
        if self.selected_index + 1 < self.suggestions(steps).len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self, steps: &[StepDef]) {
        let count = self.suggestions(steps).len();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }

    /// Render the input line.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Jump to step (Enter to jump, Esc to cancel)");

        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);

        Paragraph::new(format!("/ {}", self.input))
            .style(Style::default().fg(Color::Yellow))
            .render(inner, buf);
    }

    /// Render the suggestion list.
    pub fn render_popup(&self, area: Rect, buf: &mut Buffer, steps: &[StepDef]) {
        let suggestions = self.suggestions(steps);
        if suggestions.is_empty() {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Matches")
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);

        let lines: Vec<Line> = suggestions
            .iter()
            .enumerate()
            .map(|(i, suggestion)| {
                let style = if i == self.selected_index {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::styled(format!("{:<16}", suggestion.id), style),
                    Span::styled(suggestion.title.clone(), style),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps() -> Vec<StepDef> {
        vec![
            StepDef::new("freeze", "Freeze the main branch"),
            StepDef::new("changelog", "Write the changelog"),
            StepDef::new("tag", "Tag the release"),
            StepDef::new("publish", "Publish"),
        ]
    }

    fn type_text(prompt: &mut JumpPrompt, text: &str, steps: &[StepDef]) {
        for c in text.chars() {
            prompt.handle_key_event(KeyEvent::from(KeyCode::Char(c)), steps);
        }
    }

    #[test]
    fn test_closed_prompt_passes_keys_through() {
        let mut prompt = JumpPrompt::new();
        let status = prompt.handle_key_event(KeyEvent::from(KeyCode::Char('x')), &steps());
        assert_eq!(status, EventStatus::NotConsumed);
        assert_eq!(prompt.input(), "");
    }

    #[test]
    fn test_suggestions_match_id_or_title() {
        let steps = steps();
        let mut prompt = JumpPrompt::new();
        prompt.open();

        assert_eq!(prompt.suggestions(&steps).len(), 4);

        type_text(&mut prompt, "THE", &steps);
        let ids: Vec<String> = prompt.suggestions(&steps).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["freeze", "changelog", "tag"]);
    }

    #[test]
    fn test_enter_submits_selected_match() {
        let steps = steps();
        let mut prompt = JumpPrompt::new();
        prompt.open();

        type_text(&mut prompt, "the", &steps);
        prompt.handle_key_event(KeyEvent::from(KeyCode::Down), &steps);
        let status = prompt.handle_key_event(KeyEvent::from(KeyCode::Enter), &steps);

        assert_eq!(status, EventStatus::Consumed);
        assert!(!prompt.is_active());
        assert_eq!(prompt.take_submitted().as_deref(), Some("changelog"));
        assert_eq!(prompt.take_submitted(), None);
    }

    #[test]
    fn test_enter_without_match_submits_nothing() {
        let steps = steps();
        let mut prompt = JumpPrompt::new();
        prompt.open();

        type_text(&mut prompt, "zzz", &steps);
        prompt.handle_key_event(KeyEvent::from(KeyCode::Enter), &steps);

        assert!(!prompt.is_active());
        assert_eq!(prompt.take_submitted(), None);
    }

    #[test]
    fn test_escape_cancels() {
        let steps = steps();
        let mut prompt = JumpPrompt::new();
        prompt.open();
        type_text(&mut prompt, "tag", &steps);

        prompt.handle_key_event(KeyEvent::from(KeyCode::Esc), &steps);
        assert!(!prompt.is_active());
        assert_eq!(prompt.input(), "");
        assert_eq!(prompt.take_submitted(), None);
    }

    #[test]
    fn test_backspace_and_selection_clamp() {
        let steps = steps();
        let mut prompt = JumpPrompt::new();
        prompt.open();

        // Select the last of four suggestions, then narrow the list.
        for _ in 0..3 {
            prompt.handle_key_event(KeyEvent::from(KeyCode::Down), &steps);
        }
        type_text(&mut prompt, "pub", &steps);
        assert_eq!(
            prompt.selected_suggestion(&steps).map(|s| s.id).as_deref(),
            Some("publish")
        );

        prompt.handle_key_event(KeyEvent::from(KeyCode::Backspace), &steps);
        assert_eq!(prompt.input(), "pu");
    }
}
