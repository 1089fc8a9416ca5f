//! Display width of plaintext in terminal columns.

use std::sync::atomic::{AtomicU8, Ordering};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

const WIDTH_METHOD_WCWIDTH: u8 = 0;
const WIDTH_METHOD_UNICODE: u8 = 1;

static WIDTH_METHOD: AtomicU8 = AtomicU8::new(WIDTH_METHOD_WCWIDTH);

/// Set the global width method used by [`display_width`].
pub fn set_width_method(method: WidthMethod) {
    let value = match method {
        WidthMethod::WcWidth => WIDTH_METHOD_WCWIDTH,
        WidthMethod::Unicode => WIDTH_METHOD_UNICODE,
    };
    WIDTH_METHOD.store(value, Ordering::Relaxed);
}

/// Get the global width method.
#[must_use]
pub fn width_method() -> WidthMethod {
    match WIDTH_METHOD.load(Ordering::Relaxed) {
        WIDTH_METHOD_UNICODE => WidthMethod::Unicode,
        _ => WidthMethod::WcWidth,
    }
}

/// Column width of one character.
///
/// Control characters (including a stray `ESC` left behind by a malformed
/// sequence) occupy no columns.
#[inline]
#[must_use]
pub fn display_width_char_with_method(c: char, method: WidthMethod) -> usize {
    if c.is_ascii() {
        return usize::from(!c.is_ascii_control());
    }
    let width = match method {
        WidthMethod::WcWidth => UnicodeWidthChar::width(c),
        WidthMethod::Unicode => UnicodeWidthChar::width_cjk(c),
    };
    width.unwrap_or(0)
}

/// Column width of one character (global method).
#[inline]
#[must_use]
pub fn display_width_char(c: char) -> usize {
    display_width_char_with_method(c, width_method())
}

/// Column width of a string using a specific method.
///
/// The string is assumed to be plaintext; escape sequences are not skipped.
/// Runs between control characters are measured as whole strings so emoji
/// ZWJ and variation-selector sequences take their rendered width.
#[must_use]
pub fn display_width_with_method(s: &str, method: WidthMethod) -> usize {
    if s.is_ascii() {
        return s.bytes().filter(|b| !b.is_ascii_control()).count();
    }
    s.split(char::is_control)
        .map(|run| match method {
            WidthMethod::WcWidth => UnicodeWidthStr::width(run),
            WidthMethod::Unicode => UnicodeWidthStr::width_cjk(run),
        })
        .sum()
}

/// Column width of a string (global method).
#[must_use]
pub fn display_width(s: &str) -> usize {
    display_width_with_method(s, width_method())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width_char('a'), 1);
    }

    #[test]
    fn test_controls_are_zero_width() {
        assert_eq!(display_width("a\x1bb"), 2);
        assert_eq!(display_width_char('\t'), 0);
        assert_eq!(display_width_char('\u{9b}'), 0);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(display_width_with_method("漢字", WidthMethod::WcWidth), 4);
        assert_eq!(display_width_char_with_method('漢', WidthMethod::WcWidth), 2);
    }

    #[test]
    fn test_emoji_sequences_use_string_width() {
        let family = "\u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f467}";
        assert_eq!(display_width_with_method(family, WidthMethod::WcWidth), 2);
        assert_eq!(
            display_width_with_method(&format!("\x1b{family}\x1b"), WidthMethod::WcWidth),
            2
        );
    }

    #[test]
    fn test_combining_is_zero_width() {
        assert_eq!(display_width_with_method("e\u{0301}", WidthMethod::WcWidth), 1);
    }

    #[test]
    fn test_width_methods() {
        // Circled digit one (U+2460) is East Asian ambiguous.
        let ch = '①';
        assert_eq!(display_width_char_with_method(ch, WidthMethod::WcWidth), 1);
        assert_eq!(display_width_char_with_method(ch, WidthMethod::Unicode), 2);
    }
}
