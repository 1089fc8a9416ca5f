//! Output rendering modes and preference resolution.
//!
//! A caller asks for a mode when rendering. [`OutputRendering::Automatic`]
//! defers to a [`RenderingPreference`] supplied by the caller; there is no
//! hidden global or thread-local lookup.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// How decorated text should be rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputRendering {
    /// Decide from the caller's preference, falling back to [`Self::Ansi`].
    #[default]
    Automatic,
    /// Keep escape sequences.
    Ansi,
    /// Remove escape sequences.
    PlainText,
}

impl OutputRendering {
    /// All modes, in declaration order.
    pub const ALL: [Self; 3] = [Self::Automatic, Self::Ansi, Self::PlainText];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Automatic => "automatic",
            Self::Ansi => "ansi",
            Self::PlainText => "plaintext",
        }
    }

    /// Resolve this mode to a concrete one (`Ansi` or `PlainText`).
    ///
    /// Fixed modes are returned unchanged. `Automatic` becomes `PlainText`
    /// only when the preference exists and reports `PlainText`; a missing
    /// provider, a provider with no value, or any other value yields `Ansi`.
    #[must_use]
    pub fn resolve(self, preference: Option<&dyn RenderingPreference>) -> Self {
        match self {
            Self::Automatic => {
                match preference.and_then(|provider| provider.output_rendering()) {
                    Some(Self::PlainText) => Self::PlainText,
                    _ => Self::Ansi,
                }
            }
            fixed => fixed,
        }
    }
}

impl fmt::Display for OutputRendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputRendering {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "automatic" | "auto" | "host" => Ok(Self::Automatic),
            "ansi" => Ok(Self::Ansi),
            "plaintext" | "plain" => Ok(Self::PlainText),
            _ => Err(Error::InvalidRendering(trimmed.to_string())),
        }
    }
}

/// Source of the user's configured rendering preference.
///
/// Returning `None` means "no preference available" and is not an error.
pub trait RenderingPreference {
    /// The configured mode, if any.
    fn output_rendering(&self) -> Option<OutputRendering>;
}

impl RenderingPreference for OutputRendering {
    fn output_rendering(&self) -> Option<OutputRendering> {
        Some(*self)
    }
}

impl<T: RenderingPreference> RenderingPreference for Option<T> {
    fn output_rendering(&self) -> Option<OutputRendering> {
        self.as_ref().and_then(T::output_rendering)
    }
}

impl<T: RenderingPreference + ?Sized> RenderingPreference for &T {
    fn output_rendering(&self) -> Option<OutputRendering> {
        (**self).output_rendering()
    }
}
