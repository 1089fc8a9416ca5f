//! Escape sequence recognition.
//!
//! Recognizes the two families that terminals and stripping tools agree on:
//!
//! - Fe escapes: `ESC` followed by one byte in `@`..=`Z` or `\`..=`_`.
//! - CSI sequences: `ESC [`, any run of parameter bytes (`0x30..=0x3F`), any
//!   run of intermediate bytes (`0x20..=0x2F`), then one final byte
//!   (`0x40..=0x7E`).
//!
//! Anything else starting with `ESC` is malformed and is treated as ordinary
//! text. Every byte the grammar accepts is ASCII, so sequence boundaries are
//! always `char` boundaries.

use std::borrow::Cow;

/// The escape introducer (`0x1B`).
pub const ESC: u8 = 0x1b;

/// The escape introducer as a `char`.
pub const ESC_CHAR: char = '\x1b';

#[inline]
const fn is_fe_final(b: u8) -> bool {
    matches!(b, 0x40..=0x5A | 0x5C..=0x5F)
}

#[inline]
const fn is_csi_parameter(b: u8) -> bool {
    matches!(b, 0x30..=0x3F)
}

#[inline]
const fn is_csi_intermediate(b: u8) -> bool {
    matches!(b, 0x20..=0x2F)
}

#[inline]
const fn is_csi_final(b: u8) -> bool {
    matches!(b, 0x40..=0x7E)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    /// Saw `ESC`.
    Escape,
    /// Inside `ESC [`, still accepting parameter bytes.
    CsiParameter,
    /// Inside `ESC [`, parameters closed, accepting intermediate bytes.
    CsiIntermediate,
}

/// Length in bytes of the well-formed escape sequence starting at `start`.
///
/// Returns `None` if `bytes[start]` is not `ESC`, or if the bytes after it do
/// not complete a sequence (including input that ends mid-sequence).
#[must_use]
pub fn escape_len(bytes: &[u8], start: usize) -> Option<usize> {
    if bytes.get(start) != Some(&ESC) {
        return None;
    }

    let mut state = ScanState::Escape;
    let mut i = start + 1;
    while let Some(&b) = bytes.get(i) {
        i += 1;
        state = match state {
            ScanState::Escape if b == b'[' => ScanState::CsiParameter,
            ScanState::Escape if is_fe_final(b) => return Some(i - start),
            ScanState::Escape => return None,
            ScanState::CsiParameter if is_csi_parameter(b) => ScanState::CsiParameter,
            ScanState::CsiParameter | ScanState::CsiIntermediate if is_csi_intermediate(b) => {
                ScanState::CsiIntermediate
            }
            ScanState::CsiParameter | ScanState::CsiIntermediate if is_csi_final(b) => {
                return Some(i - start);
            }
            ScanState::CsiParameter | ScanState::CsiIntermediate => return None,
        };
    }
    None
}

/// Check whether a string contains the escape introducer at all.
#[inline]
#[must_use]
pub fn contains_escape(text: &str) -> bool {
    text.as_bytes().contains(&ESC)
}

/// A run of a decorated string: either visible text or one escape sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Visible text. May contain malformed escape fragments.
    Text(&'a str),
    /// One complete, well-formed escape sequence.
    Escape(&'a str),
}

impl<'a> Segment<'a> {
    /// The underlying slice.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        match *self {
            Self::Text(s) | Self::Escape(s) => s,
        }
    }

    /// True for [`Segment::Escape`].
    #[must_use]
    pub const fn is_escape(&self) -> bool {
        matches!(self, Self::Escape(_))
    }
}

/// Iterator splitting a string into [`Segment`]s, left to right.
///
/// Concatenating every yielded slice reproduces the input exactly. This is a
/// single lexical pass: a malformed fragment that only becomes a sequence
/// once a neighbouring escape is removed is yielded as text. Use
/// [`strip_escapes`] for the plaintext projection.
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        let start = self.pos;
        if start >= bytes.len() {
            return None;
        }

        if let Some(len) = escape_len(bytes, start) {
            self.pos = start + len;
            return Some(Segment::Escape(&self.text[start..self.pos]));
        }

        // The byte at `start` is text (or a malformed ESC); run until the next
        // ESC that opens a well-formed sequence.
        let mut end = bytes.len();
        let mut i = start + 1;
        while let Some(offset) = bytes[i..].iter().position(|&b| b == ESC) {
            let at = i + offset;
            if escape_len(bytes, at).is_some() {
                end = at;
                break;
            }
            i = at + 1;
        }

        self.pos = end;
        Some(Segment::Text(&self.text[start..end]))
    }
}

/// Split a string into text runs and escape sequences.
#[must_use]
pub fn segments(text: &str) -> Segments<'_> {
    Segments { text, pos: 0 }
}

/// Byte offsets in `text` of the characters that survive stripping.
///
/// Removing a sequence can join a malformed fragment before it with the text
/// after it, e.g. `ESC[` + `ESC[0m` + `a` leaves `ESC[a`. Sequences formed
/// that way are removed as well, so the surviving characters never contain a
/// well-formed sequence.
#[must_use]
pub fn visible_offsets(text: &str) -> Vec<usize> {
    project(text).1
}

/// Plaintext and per-char source offsets in one left-to-right pass.
///
/// Kept characters go on a stack. When a pushed character completes a
/// sequence that opens at the most recent kept `ESC`, the stack is cut back
/// to that `ESC`. A sequence cannot contain `ESC` past its first byte, so
/// only the most recent one can still be open.
fn project(text: &str) -> (String, Vec<usize>) {
    let mut plain = String::with_capacity(text.len());
    // (offset in `plain`, offset in `text`) per kept char
    let mut kept: Vec<(usize, usize)> = Vec::new();
    let mut escapes: Vec<usize> = Vec::new();

    for (offset, c) in text.char_indices() {
        let at = plain.len();
        plain.push(c);
        kept.push((at, offset));

        if c == ESC_CHAR {
            escapes.push(at);
            continue;
        }
        // Only a final byte can complete a sequence.
        if !matches!(c, '@'..='~') {
            continue;
        }
        if let Some(&open) = escapes.last() {
            if escape_len(plain.as_bytes(), open).is_some() {
                plain.truncate(open);
                escapes.pop();
                while kept.last().is_some_and(|&(at, _)| at >= open) {
                    kept.pop();
                }
            }
        }
    }

    let offsets = kept.into_iter().map(|(_, offset)| offset).collect();
    (plain, offsets)
}

/// Remove every well-formed escape sequence from `text`.
///
/// The result contains no well-formed sequence, including ones that only
/// appear once an inner sequence is removed, so stripping it again is a
/// no-op. Borrows the input when nothing was removed, which includes strings
/// whose only escape bytes are malformed.
#[must_use]
pub fn strip_escapes(text: &str) -> Cow<'_, str> {
    if !contains_escape(text) {
        return Cow::Borrowed(text);
    }

    let (plain, _) = project(text);
    if plain.len() == text.len() {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(plain)
    }
}
