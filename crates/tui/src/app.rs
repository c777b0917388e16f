//! TUI application state and event loop.
//!
//! [`App`] drives one sequence: the advancer renders a [`StepCard`] after
//! every move, keys are resolved against that card, and the loop redraws
//! whenever the frame scheduler says so.

use adv_core::advancer::Advancer;
use adv_core::sequencer::DefSequencer;
use adv_protocol::{GlobalConfig, SequenceDef, StepDef};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use tokio_stream::StreamExt;
use tracing::{debug, info};

use crate::event_handler::{self, KeyOutcome};
use crate::tui::{Tui, TuiEvent};
use crate::widgets::{render_step_card, BodyView, JumpPrompt, StepCard, StepCardRenderer};

type StepAdvancer = Advancer<StepDef, fn(&StepDef) -> String, StepCardRenderer>;

/// Rows the body loses to the breadcrumb, key hints and its own borders.
const BODY_CHROME_ROWS: u16 = 8;

pub struct App {
    advancer: StepAdvancer,
    jump: JumpPrompt,
    body: BodyView,
    /// Visible body rows as of the last draw; used as the page size.
    body_height: usize,
    pub should_exit: bool,
}

impl App {
    /// Create the app for `sequence` and render its initial step.
    pub fn new(sequence: &SequenceDef, config: &GlobalConfig) -> Self {
        let sequencer = DefSequencer::from_definition(sequence, config);
        let mut advancer = Advancer::new(sequencer, StepCardRenderer::new(sequence.name.clone()));
        advancer.mount();

        Self {
            advancer,
            jump: JumpPrompt::new(),
            body: BodyView::new(),
            body_height: 0,
            should_exit: false,
        }
    }

    /// The card from the most recent render.
    pub fn card(&self) -> Option<&StepCard> {
        self.advancer.output()
    }

    /// Main event loop.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut tui_events = tui.event_stream();
        let frames = tui.frame_requester();
        frames.schedule_frame();

        while !self.should_exit {
            let Some(event) = tui_events.next().await else {
                break;
            };
            match event {
                TuiEvent::Key(key_event) => {
                    self.handle_key_event(key_event);
                    frames.schedule_frame();
                }
                TuiEvent::Draw => tui.draw(|frame| self.render(frame))?,
            }
        }

        info!(renders = self.advancer.render_count(), "step viewer closed");
        Ok(())
    }

    /// Handle a key: the jump prompt sees it first, then the card bindings.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        if self
            .jump
            .handle_key_event(key_event, self.advancer.sequencer().steps())
            .is_consumed()
        {
            if let Some(id) = self.jump.take_submitted() {
                debug!(step = %id, "jumping to step");
                self.advancer.activate_matching(|step| step.id == id);
                self.body.scroll_to_top();
            }
            return;
        }

        let Some(card) = self.advancer.output() else {
            return;
        };

        match event_handler::handle_keyboard_event(key_event, card) {
            KeyOutcome::Quit => self.should_exit = true,
            KeyOutcome::Dispatch(action) => {
                self.advancer.dispatch(&action);
                self.body.scroll_to_top();
            }
            KeyOutcome::OpenJump => self.jump.open(),
            KeyOutcome::ScrollUp => self.body.scroll_up(),
            KeyOutcome::ScrollDown => {
                let max = self.max_scroll();
                self.body.scroll_down(max);
            }
            KeyOutcome::PageUp => self.body.page_up(self.page_size()),
            KeyOutcome::PageDown => {
                let max = self.max_scroll();
                self.body.page_down(self.page_size(), max);
            }
            KeyOutcome::Ignored => {}
        }
    }

    fn max_scroll(&self) -> usize {
        let lines = self
            .advancer
            .get_state()
            .active_step
            .as_ref()
            .map_or(0, |step| step.body.lines().count());
        lines.saturating_sub(self.body_height)
    }

    fn page_size(&self) -> usize {
        self.body_height.max(1)
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.body_height = area.height.saturating_sub(BODY_CHROME_ROWS) as usize;

        let Some(card) = self.advancer.output() else {
            return;
        };
        render_step_card(frame, area, card, &self.body);

        if self.jump.is_active() {
            self.render_jump_prompt(frame, area);
        }
    }

    fn render_jump_prompt(&self, frame: &mut Frame, area: Rect) {
        let steps = self.advancer.sequencer().steps();
        let popup_height = popup_height(steps.len(), area.height);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(popup_height),
                Constraint::Length(3),
            ])
            .split(area);

        let buf = frame.buffer_mut();
        self.jump.render_popup(chunks[1], buf, steps);
        self.jump.render(chunks[2], buf);
    }
}

/// Rows for the suggestion popup: one per step plus borders, leaving room
/// for the prompt and some of the card.
fn popup_height(step_count: usize, area_height: u16) -> u16 {
    u16::try_from(step_count)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(area_height.saturating_sub(6))
}
