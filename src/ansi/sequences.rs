//! Common SGR (Select Graphic Rendition) sequences.
//!
//! These are the decorations most often found in formatted output. Every
//! constant here is a well-formed CSI sequence and is removed by
//! [`strip_escapes`](super::strip_escapes).

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";

/// Bold / increased intensity.
pub const BOLD: &str = "\x1b[1m";

/// Dim / decreased intensity.
pub const DIM: &str = "\x1b[2m";

/// Italic.
pub const ITALIC: &str = "\x1b[3m";

/// Underline.
pub const UNDERLINE: &str = "\x1b[4m";

/// Reverse video.
pub const INVERSE: &str = "\x1b[7m";

/// Basic foreground colors (30-37).
pub mod fg {
    pub const BLACK: &str = "\x1b[30m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[37m";
    /// Reset foreground to default.
    pub const DEFAULT: &str = "\x1b[39m";
}

/// Basic background colors (40-47).
pub mod bg {
    pub const BLACK: &str = "\x1b[40m";
    pub const RED: &str = "\x1b[41m";
    pub const GREEN: &str = "\x1b[42m";
    pub const BLUE: &str = "\x1b[44m";
    /// Reset background to default.
    pub const DEFAULT: &str = "\x1b[49m";
}
