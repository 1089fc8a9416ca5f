//! Cross-check against a terminal emulator.
//!
//! Feeds decorated strings to `vt100` and verifies that what the emulated
//! screen shows is exactly the plaintext projection, and that the styling
//! survives when rendering in ANSI mode.

use decorated_text::ansi::{paint, sequences};
use decorated_text::{DecoratedText, LogLevel, OutputRendering, RenderingConfig, set_log_callback};
use std::sync::Once;
use tracing::{debug, info, warn};

fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
        set_log_callback(|level, msg| match level {
            LogLevel::Debug => debug!(target: "decorated_text", "{msg}"),
            LogLevel::Info => info!(target: "decorated_text", "{msg}"),
            LogLevel::Warn | LogLevel::Error => warn!(target: "decorated_text", "{msg}"),
        });
    });
}

fn screen_text(bytes: &str) -> String {
    let mut parser = vt100::Parser::new(4, 80, 0);
    parser.process(bytes.as_bytes());
    parser.screen().contents().trim_end().to_string()
}

fn sgr_samples() -> Vec<String> {
    vec![
        "hello".to_string(),
        "\x1b[31mhello\x1b[0m".to_string(),
        format!("{}bold{} and {}green{}", sequences::BOLD, sequences::RESET, sequences::fg::GREEN, sequences::RESET),
        paint("warning", &[1, 33]),
        format!("{}{}inverse{}", sequences::INVERSE, sequences::bg::BLUE, sequences::RESET),
        "\x1b[38;2;10;20;30mtruecolor\x1b[39m tail".to_string(),
        "\x1b[38;5;208morange\x1b[m".to_string(),
    ]
}

#[test]
fn screen_matches_plaintext_projection() {
    setup_test_logging();
    for sample in sgr_samples() {
        let text = DecoratedText::new(sample.as_str());
        info!(raw = ?sample, plain = text.plain_text(), "checking sample");
        assert_eq!(screen_text(text.raw()), text.plain_text(), "sample {sample:?}");
        assert_eq!(
            screen_text(text.render_with(OutputRendering::PlainText)),
            text.plain_text()
        );
    }
}

#[test]
fn content_length_matches_cursor_column() {
    setup_test_logging();
    for sample in sgr_samples() {
        let text = DecoratedText::new(sample.as_str());
        let mut parser = vt100::Parser::new(4, 80, 0);
        parser.process(text.raw().as_bytes());
        let (_, col) = parser.screen().cursor_position();
        debug!(col, len = text.content_length(), "cursor after sample");
        assert_eq!(usize::from(col), text.content_length(), "sample {sample:?}");
    }
}

#[test]
fn ansi_rendering_keeps_styling() {
    setup_test_logging();
    let text = DecoratedText::new("\x1b[1;31mhi\x1b[0m!");
    let mut parser = vt100::Parser::new(4, 80, 0);
    parser.process(text.render_with(OutputRendering::Ansi).as_bytes());
    let screen = parser.screen();

    let first = screen.cell(0, 0).expect("cell 0,0");
    assert_eq!(first.contents(), "h");
    assert!(first.bold());
    assert_eq!(first.fgcolor(), vt100::Color::Idx(1));

    let bang = screen.cell(0, 2).expect("cell 0,2");
    assert_eq!(bang.contents(), "!");
    assert!(!bang.bold());
    assert_eq!(bang.fgcolor(), vt100::Color::Default);
}

#[test]
fn plaintext_rendering_drops_styling() {
    setup_test_logging();
    let text = DecoratedText::new("\x1b[1;31mhi\x1b[0m");
    let mut parser = vt100::Parser::new(4, 80, 0);
    parser.process(text.render_with(OutputRendering::PlainText).as_bytes());

    let first = parser.screen().cell(0, 0).expect("cell 0,0");
    assert_eq!(first.contents(), "h");
    assert!(!first.bold());
    assert_eq!(first.fgcolor(), vt100::Color::Default);
}

#[test]
fn detected_plaintext_config_drives_automatic_mode() {
    setup_test_logging();
    let config = RenderingConfig::from_vars(|name| (name == "NO_COLOR").then(|| "1".to_string()));
    let text = DecoratedText::new("\x1b[32mok\x1b[0m");
    let rendered = text.render_in(OutputRendering::Automatic, Some(&config));
    assert_eq!(rendered, "ok");
    assert_eq!(screen_text(rendered), "ok");
}
