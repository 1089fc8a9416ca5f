//! ANSI escape sequence recognition and stripping.

mod scanner;
pub mod sequences;

pub use scanner::{
    ESC, ESC_CHAR, Segment, Segments, contains_escape, escape_len, segments, strip_escapes,
    visible_offsets,
};

use std::io::{self, Write};

/// Write a u8 as decimal digits to a writer without formatting overhead.
#[inline]
fn write_u8_decimal(w: &mut impl Write, n: u8) -> io::Result<()> {
    if n >= 100 {
        w.write_all(&[b'0' + n / 100, b'0' + (n / 10) % 10, b'0' + n % 10])
    } else if n >= 10 {
        w.write_all(&[b'0' + n / 10, b'0' + n % 10])
    } else {
        w.write_all(&[b'0' + n])
    }
}

/// Write an SGR sequence with the given parameters (`ESC [ p1 ; p2 ... m`).
///
/// An empty parameter list writes `ESC [ m`, which terminals treat as reset.
pub fn write_sgr(w: &mut impl Write, params: &[u8]) -> io::Result<()> {
    w.write_all(b"\x1b[")?;
    for (i, &param) in params.iter().enumerate() {
        if i > 0 {
            w.write_all(b";")?;
        }
        write_u8_decimal(w, param)?;
    }
    w.write_all(b"m")
}

/// Build an SGR sequence with the given parameters.
#[must_use]
pub fn sgr(params: &[u8]) -> String {
    let mut buf = Vec::with_capacity(2 + params.len() * 4);
    // Writing into a Vec cannot fail and only ASCII is produced.
    let _ = write_sgr(&mut buf, params);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Wrap `text` in an SGR sequence followed by [`sequences::RESET`].
#[must_use]
pub fn paint(text: &str, params: &[u8]) -> String {
    let mut out = sgr(params);
    out.push_str(text);
    out.push_str(sequences::RESET);
    out
}
