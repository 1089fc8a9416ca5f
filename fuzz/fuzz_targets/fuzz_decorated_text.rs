//! Fuzz target for escape stripping and decorated prefixes.
//!
//! Construction and rendering must never panic, and the projection
//! invariants must hold for any UTF-8 input.

#![no_main]

use decorated_text::ansi::{segments, strip_escapes};
use decorated_text::{DecoratedText, OutputRendering};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let text = DecoratedText::new(data);

    let plain = text.plain_text();
    assert!(plain.len() <= data.len());
    assert_eq!(strip_escapes(plain).as_ref(), plain);
    assert_eq!(text.render_with(OutputRendering::Ansi), data);

    let joined: String = segments(data).map(|seg| seg.as_str()).collect();
    assert_eq!(joined, data);

    // Cut at a handful of lengths, including past the end.
    for n in [0, 1, text.content_length() / 2, text.content_length() + 1] {
        let prefix = DecoratedText::new(text.decorated_prefix(n));
        assert_eq!(prefix.content_length(), n.min(text.content_length()));
        assert!(plain.starts_with(prefix.plain_text()));
    }
});
