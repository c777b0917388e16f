//! `advancer init`: scaffold a `.advancer/` directory.
//!
//! The templates are embedded in the binary at build time. A full init
//! writes `config.toml`, a YAML sequence (`onboarding`) and a Markdown
//! directory sequence (`release-checklist`); a minimal init skips the latter.
//!
//! ```no_run
//! use adv_core::init::{generate_advancer_structure, InitOptions};
//!
//! # async fn example() -> Result<(), adv_core::init::InitError> {
//! let adv_dir = generate_advancer_structure(InitOptions {
//!     minimal: true,
//!     ..InitOptions::default()
//! })
//! .await?;
//! println!("created {}", adv_dir.display());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod templates;

pub use error::{InitError, InitResult};
pub use generator::{generate_advancer_structure, InitOptions};
pub use templates::{get_template, list_templates};
