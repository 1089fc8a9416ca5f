//! Text with optional terminal decoration.

use crate::ansi;
use crate::rendering::{OutputRendering, RenderingPreference};
use crate::unicode;
use std::borrow::Cow;
use std::fmt;

/// An immutable string that may contain ANSI escape sequences.
///
/// The plaintext projection (the string with every well-formed escape
/// sequence removed) is computed once, at construction. Length and render
/// queries never rescan the input.
///
/// # Example
///
/// ```
/// use decorated_text::{DecoratedText, OutputRendering};
///
/// let text = DecoratedText::new("\x1b[31mhello\x1b[0m");
/// assert!(text.is_decorated());
/// assert_eq!(text.content_length(), 5);
/// assert_eq!(text.render_with(OutputRendering::PlainText), "hello");
/// assert_eq!(text.render_with(OutputRendering::Ansi), "\x1b[31mhello\x1b[0m");
/// ```
#[derive(Clone, Debug)]
pub struct DecoratedText {
    raw: String,
    is_decorated: bool,
    /// `None` when stripping removed nothing, i.e. plaintext equals `raw`.
    plain: Option<Box<str>>,
    content_length: usize,
}

impl DecoratedText {
    /// Wrap a string. Never fails; empty and malformed input are accepted.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let raw = text.into();
        let is_decorated = ansi::contains_escape(&raw);
        let plain = if is_decorated {
            match ansi::strip_escapes(&raw) {
                Cow::Owned(stripped) => Some(stripped.into_boxed_str()),
                Cow::Borrowed(_) => None,
            }
        } else {
            None
        };
        let content_length = plain.as_deref().unwrap_or(&raw).chars().count();

        Self {
            raw,
            is_decorated,
            plain,
            content_length,
        }
    }

    /// True if the original string contains an `ESC` character.
    ///
    /// This is presence of the introducer, not of a well-formed sequence: a
    /// lone `ESC` still counts as decorated.
    #[inline]
    #[must_use]
    pub const fn is_decorated(&self) -> bool {
        self.is_decorated
    }

    /// Number of `char`s in the plaintext projection.
    ///
    /// Wide and combining characters count as one each; use
    /// [`display_width`](Self::display_width) for terminal columns.
    #[inline]
    #[must_use]
    pub const fn content_length(&self) -> usize {
        self.content_length
    }

    /// Terminal column width of the plaintext projection.
    #[must_use]
    pub fn display_width(&self) -> usize {
        unicode::display_width(self.plain_text())
    }

    /// The original string, exactly as supplied.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The string with every well-formed escape sequence removed.
    #[inline]
    #[must_use]
    pub fn plain_text(&self) -> &str {
        self.plain.as_deref().unwrap_or(&self.raw)
    }

    /// Consume the value, returning the original string.
    #[must_use]
    pub fn into_raw(self) -> String {
        self.raw
    }

    /// Returns the original decorated string; `length` is ignored.
    ///
    /// Kept for callers that rely on the pass-through behavior. Use
    /// [`decorated_prefix`](Self::decorated_prefix) for a real truncation.
    #[must_use]
    pub fn substring(&self, length: usize) -> &str {
        let _ = length;
        &self.raw
    }

    /// The first `length` visible characters, with decoration kept.
    ///
    /// Escape sequences are copied verbatim and do not count toward
    /// `length`. Sequences directly after the cut (typically a reset) are
    /// kept as well, so truncated colored text does not bleed into what
    /// follows.
    #[must_use]
    pub fn decorated_prefix(&self, length: usize) -> String {
        if length >= self.content_length {
            return self.raw.clone();
        }
        if !self.is_decorated {
            return self.raw.chars().take(length).collect();
        }

        let offsets = ansi::visible_offsets(&self.raw);
        let Some(&cut) = offsets.get(length) else {
            return self.raw.clone();
        };
        let mut out = String::with_capacity(self.raw.len());
        out.push_str(&self.raw[..cut]);

        let mid_run = length > 0
            && offsets
                .get(length - 1)
                .is_some_and(|&prev| self.char_end(prev) == cut);
        if mid_run {
            // Drop the rest of the run, keep the escapes that follow it.
            let mut end = cut;
            let mut next = self.raw.len();
            for &offset in &offsets[length..] {
                if offset != end {
                    next = offset;
                    break;
                }
                end = self.char_end(offset);
            }
            out.push_str(&self.raw[end..next]);
        }
        out
    }

    fn char_end(&self, offset: usize) -> usize {
        offset + self.raw[offset..].chars().next().map_or(0, char::len_utf8)
    }

    /// Render in automatic mode with no preference available.
    ///
    /// Undecorated text is returned as is without consulting the mode.
    #[must_use]
    pub fn render(&self) -> &str {
        if !self.is_decorated {
            return &self.raw;
        }
        self.render_in(OutputRendering::Automatic, None)
    }

    /// Render in `mode` with no preference available.
    #[must_use]
    pub fn render_with(&self, mode: OutputRendering) -> &str {
        self.render_in(mode, None)
    }

    /// Render in `mode`, resolving `Automatic` against `preference`.
    ///
    /// | decorated | mode      | preference | output |
    /// |-----------|-----------|------------|--------|
    /// | no        | any       | -          | plain (same as raw) |
    /// | yes       | Ansi      | -          | raw    |
    /// | yes       | PlainText | -          | plain  |
    /// | yes       | Automatic | PlainText  | plain  |
    /// | yes       | Automatic | otherwise  | raw    |
    #[must_use]
    pub fn render_in(
        &self,
        mode: OutputRendering,
        preference: Option<&dyn RenderingPreference>,
    ) -> &str {
        if !self.is_decorated {
            return self.plain_text();
        }
        match mode.resolve(preference) {
            OutputRendering::PlainText => self.plain_text(),
            OutputRendering::Ansi | OutputRendering::Automatic => &self.raw,
        }
    }
}

impl fmt::Display for DecoratedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}

impl PartialEq for DecoratedText {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for DecoratedText {}

impl std::hash::Hash for DecoratedText {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl Default for DecoratedText {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl AsRef<str> for DecoratedText {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl From<String> for DecoratedText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for DecoratedText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
