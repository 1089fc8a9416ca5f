//! `decorate` - render decorated text from stdin
//!
//! Reads lines from stdin and writes each one back rendered in the requested
//! output mode.
//!
//! # Usage
//!
//! ```bash
//! ls --color=always | cargo run --bin decorate -- --mode plain
//! git log --color=always --oneline | cargo run --bin decorate -- --width 40
//! cargo run --bin decorate -- --lengths < colored.txt
//! ```

use decorated_text::{
    DecoratedText, LogLevel, OutputRendering, RenderingConfig, RenderingPreference,
    set_log_callback,
};
use std::ffi::OsString;
use std::io::{self, BufRead, Write};

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "decorate - render decorated text from stdin

USAGE:
    decorate [OPTIONS] < input

OPTIONS:
    -h, --help              Print this help message and exit
    -m, --mode <MODE>       Output rendering: auto, ansi, plain (default: auto)
    -w, --width <N>         Truncate each line to N visible characters
    -l, --lengths           Prefix each line with its visible length
    -v, --verbose           Log configuration decisions to stderr

ENVIRONMENT:
    DECORATED_TEXT_RENDERING   Preferred mode for --mode auto
    NO_COLOR                   Non-empty value selects plain text for --mode auto
    TERM                       'dumb' selects plain text for --mode auto
";

/// Command-line configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub mode: OutputRendering,
    pub width: Option<usize>,
    pub lengths: bool,
    pub verbose: bool,
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "-m" | "--mode" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => return ParseResult::Error("--mode requires a value".to_string()),
                    };
                    match value.parse::<OutputRendering>() {
                        Ok(mode) => config.mode = mode,
                        Err(err) => return ParseResult::Error(err.to_string()),
                    }
                }

                "-w" | "--width" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => return ParseResult::Error("--width requires a value".to_string()),
                    };
                    match value.parse::<usize>() {
                        Ok(n) => config.width = Some(n),
                        Err(_) => {
                            return ParseResult::Error(format!(
                                "Invalid --width value: {value} (must be a non-negative integer)"
                            ));
                        }
                    }
                }

                "-l" | "--lengths" => config.lengths = true,
                "-v" | "--verbose" => config.verbose = true,

                other => return ParseResult::Error(format!("Unknown option: {other}")),
            }
        }

        ParseResult::Config(config)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render every line of `input` into `output`.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// ending the stream.
fn run<R, W>(
    config: &Config,
    preference: &dyn RenderingPreference,
    mut input: R,
    mut output: W,
) -> decorated_text::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        let mut text = DecoratedText::new(String::from_utf8_lossy(&buf));
        if let Some(width) = config.width {
            text = DecoratedText::new(text.decorated_prefix(width));
        }

        if config.lengths {
            write!(output, "{:>4} ", text.content_length())?;
        }
        writeln!(output, "{}", text.render_in(config.mode, Some(preference)))?;
    }
    output.flush()?;
    Ok(())
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() {
    let config = match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => config,
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            return;
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(2);
        }
    };

    if config.verbose {
        set_log_callback(|level, msg| {
            let tag = match level {
                LogLevel::Debug => "debug",
                LogLevel::Info => "info",
                LogLevel::Warn => "warn",
                LogLevel::Error => "error",
            };
            eprintln!("[{tag}] {msg}");
        });
    }

    let preference = RenderingConfig::detect();
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(err) = run(&config, &preference, stdin.lock(), stdout.lock()) {
        if let decorated_text::Error::Io(io_err) = &err {
            if io_err.kind() == io::ErrorKind::BrokenPipe {
                return;
            }
        }
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<OsString> {
        strs.iter().map(|s| OsString::from(*s)).collect()
    }

    fn parse(strs: &[&str]) -> Config {
        match Config::from_args(args(strs)) {
            ParseResult::Config(c) => c,
            _ => panic!("Expected Config"),
        }
    }

    fn render(config: &Config, preference: OutputRendering, input: &str) -> String {
        let mut out = Vec::new();
        run(config, &preference, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = parse(&["decorate"]);
        assert_eq!(config.mode, OutputRendering::Automatic);
        assert_eq!(config.width, None);
        assert!(!config.lengths);
    }

    #[test]
    fn test_help_flag() {
        assert!(matches!(
            Config::from_args(args(&["decorate", "--help"])),
            ParseResult::Help
        ));
    }

    #[test]
    fn test_mode_flag() {
        assert_eq!(parse(&["decorate", "--mode", "plain"]).mode, OutputRendering::PlainText);
        assert_eq!(parse(&["decorate", "-m", "ansi"]).mode, OutputRendering::Ansi);
    }

    #[test]
    fn test_invalid_mode() {
        assert!(matches!(
            Config::from_args(args(&["decorate", "--mode", "loud"])),
            ParseResult::Error(_)
        ));
        assert!(matches!(
            Config::from_args(args(&["decorate", "--mode"])),
            ParseResult::Error(_)
        ));
    }

    #[test]
    fn test_width_flag() {
        assert_eq!(parse(&["decorate", "--width", "12"]).width, Some(12));
        assert!(matches!(
            Config::from_args(args(&["decorate", "--width", "-3"])),
            ParseResult::Error(_)
        ));
    }

    #[test]
    fn test_unknown_option_error() {
        assert!(matches!(
            Config::from_args(args(&["decorate", "--unknown"])),
            ParseResult::Error(_)
        ));
    }

    #[test]
    fn test_run_plain_mode() {
        let config = parse(&["decorate", "--mode", "plain"]);
        let out = render(&config, OutputRendering::Ansi, "\x1b[31mred\x1b[0m\nplain\n");
        assert_eq!(out, "red\nplain\n");
    }

    #[test]
    fn test_run_auto_follows_preference() {
        let config = parse(&["decorate"]);
        let input = "\x1b[32mok\x1b[0m";
        assert_eq!(render(&config, OutputRendering::PlainText, input), "ok\n");
        assert_eq!(render(&config, OutputRendering::Ansi, input), format!("{input}\n"));
    }

    #[test]
    fn test_run_survives_invalid_utf8() {
        let config = parse(&["decorate", "--mode", "plain"]);
        let mut out = Vec::new();
        let input: &[u8] = b"\xff\x1b[31mx\x1b[0m\nok\n";
        run(&config, &OutputRendering::Ansi, input, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\u{fffd}x\nok\n");
    }

    #[test]
    fn test_run_last_line_without_newline() {
        let config = parse(&["decorate", "--mode", "plain"]);
        let out = render(&config, OutputRendering::Ansi, "a\r\n\x1b[1mb\x1b[0m");
        assert_eq!(out, "a\nb\n");
    }

    #[test]
    fn test_run_width_and_lengths() {
        let config = parse(&["decorate", "--mode", "ansi", "--width", "2", "--lengths"]);
        let out = render(&config, OutputRendering::Automatic, "\x1b[1mbold\x1b[0m\n");
        assert_eq!(out, "   2 \x1b[1mbo\x1b[0m\n");
    }
}
