//! Keyboard handling for the step viewer.
//!
//! Keys are mapped to a [`KeyOutcome`]; navigation keys resolve to the action
//! carried by the matching binding on the current [`StepCard`], so the card
//! that was rendered is also what decides where a key leads.

use adv_core::sequencer::StepAction;
use adv_protocol::StepDef;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::widgets::StepCard;

/// What the app should do in response to a key.
#[derive(Debug, Clone)]
pub enum KeyOutcome {
    Quit,
    /// Apply a navigation action to the advancer.
    Dispatch(StepAction<StepDef>),
    OpenJump,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Ignored,
}

/// Handle a keyboard event from the user.
///
/// Only key presses count; repeats and releases are ignored.
pub fn handle_keyboard_event(key_event: KeyEvent, card: &StepCard) -> KeyOutcome {
    if key_event.kind != KeyEventKind::Press {
        return KeyOutcome::Ignored;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return KeyOutcome::Quit;
    }

    if let Some(binding) = card.binding_for(&key_event) {
        return KeyOutcome::Dispatch(binding.action.clone());
    }

    match key_event.code {
        KeyCode::Char('q') => KeyOutcome::Quit,
        KeyCode::Char('/') => KeyOutcome::OpenJump,
        KeyCode::Up | KeyCode::Char('k') => KeyOutcome::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => KeyOutcome::ScrollDown,
        KeyCode::PageUp => KeyOutcome::PageUp,
        KeyCode::PageDown => KeyOutcome::PageDown,
        _ => KeyOutcome::Ignored,
    }
}
