//! # adv-core
//!
//! Step sequencing for advancer.
//!
//! This crate provides:
//! - The step sequencer: a previous/active/next window over a fixed sequence
//! - Render injection: a caller-supplied renderer invoked after every move
//! - Configuration loading from the `.advancer/` directory
//! - Project initialization from embedded templates
//!
//! ## Modules
//!
//! - [`sequencer`]: `StepSequencer`, its state, selectors and transitions
//! - [`advancer`]: `Advancer`, the sequencer plus a `StepRenderer`
//! - [`config`]: Configuration loading and management
//! - [`init`]: `.advancer/` scaffolding

pub mod advancer;
pub mod config;
pub mod init;
pub mod sequencer;
