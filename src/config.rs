//! Rendering preference detection from the environment.

use crate::event::{LogLevel, emit_log};
use crate::rendering::{OutputRendering, RenderingPreference};
use std::env;

/// Environment variable that selects a rendering mode explicitly.
pub const RENDERING_ENV: &str = "DECORATED_TEXT_RENDERING";

/// User rendering preferences.
///
/// Pass a reference to this wherever a [`RenderingPreference`] is accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderingConfig {
    /// Configured output rendering mode.
    pub output_rendering: OutputRendering,
}

impl RenderingConfig {
    /// Create a config with an explicit mode.
    #[must_use]
    pub const fn new(output_rendering: OutputRendering) -> Self {
        Self { output_rendering }
    }

    /// Detect preferences from the process environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Detect preferences using `lookup` to read variables.
    ///
    /// Precedence: an explicit, valid `DECORATED_TEXT_RENDERING`, then a
    /// non-empty `NO_COLOR`, then `TERM=dumb`. Anything else leaves the mode
    /// at `Automatic`.
    #[must_use]
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(RENDERING_ENV) {
            match value.parse::<OutputRendering>() {
                Ok(mode) => {
                    emit_log(
                        LogLevel::Debug,
                        &format!("output rendering set to {mode} by {RENDERING_ENV}"),
                    );
                    return Self::new(mode);
                }
                Err(err) => emit_log(LogLevel::Warn, &format!("ignoring {RENDERING_ENV}: {err}")),
            }
        }

        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            emit_log(LogLevel::Debug, "NO_COLOR set, using plaintext rendering");
            return Self::new(OutputRendering::PlainText);
        }

        if lookup("TERM").is_some_and(|term| term == "dumb") {
            emit_log(LogLevel::Debug, "TERM=dumb, using plaintext rendering");
            return Self::new(OutputRendering::PlainText);
        }

        Self::default()
    }
}

impl RenderingPreference for RenderingConfig {
    fn output_rendering(&self) -> Option<OutputRendering> {
        Some(self.output_rendering)
    }
}
