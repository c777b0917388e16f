//! TUI widgets module.
//!
//! This module contains the widgets the step viewer is built from.

pub mod body_view;
pub mod jump_prompt;
pub mod step_card;

pub use body_view::BodyView;
pub use jump_prompt::JumpPrompt;
pub use step_card::{render_step_card, StepCard, StepCardRenderer};
