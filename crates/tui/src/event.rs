//! Event handling types for the TUI.
//!
//! Widgets that sit in front of the step card, such as the jump prompt,
//! report through [`EventStatus`] whether they kept a key.

/// Status of an event after being handled by a widget.
///
/// Returned from `handle_key_event` methods so the app can pass unconsumed
/// keys to the next handler in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// The widget handled the key; stop here.
    Consumed,
    /// The widget ignored the key; pass it on.
    NotConsumed,
}

impl EventStatus {
    pub fn is_consumed(self) -> bool {
        self == EventStatus::Consumed
    }
}
