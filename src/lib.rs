//! `decorated_text` - strings with terminal escape-sequence decoration
//!
//! [`DecoratedText`] wraps a string that may carry ANSI color/style codes and
//! answers the questions layout code needs: is there decoration, how many
//! visible characters are there, and what should be printed for a given
//! [`OutputRendering`] mode.
//!
//! Automatic rendering is resolved against a [`RenderingPreference`] passed in
//! by the caller, typically a [`RenderingConfig`] detected from the
//! environment.
//!
//! ```
//! use decorated_text::{DecoratedText, OutputRendering, RenderingConfig};
//!
//! let text = DecoratedText::new("\x1b[1mready\x1b[0m");
//! let config = RenderingConfig::new(OutputRendering::PlainText);
//! assert_eq!(text.render_in(OutputRendering::Automatic, Some(&config)), "ready");
//! assert_eq!(text.render(), "\x1b[1mready\x1b[0m");
//! ```

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow rendering::RenderingPreference etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Most public queries already carry #[must_use]
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer

pub mod ansi;
pub mod config;
pub mod decorated;
pub mod error;
pub mod event;
pub mod rendering;
pub mod unicode;

// Re-export core types at crate root
pub use config::RenderingConfig;
pub use decorated::DecoratedText;
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use rendering::{OutputRendering, RenderingPreference};

// Re-export width helpers
pub use unicode::{WidthMethod, set_width_method};
