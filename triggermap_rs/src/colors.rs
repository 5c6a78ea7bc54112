//! Terminal color utilities for CLI output.
//!
//! Status lines printed after a run (`[OK]`, `[INFO]`, `[WARN]`, `[ERROR]`)
//! go through [`Painter`] so `--color never` and non-TTY output stay plain.

use std::io::IsTerminal;

// ============================================================================
// ANSI Color Codes
// ============================================================================

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const BRIGHT_CYAN: &str = "\x1b[96m";
pub const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Determines if colors should be used based on ColorMode and terminal detection.
pub fn is_enabled(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Colorizer that can be passed around to format functions.
#[derive(Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            enabled: is_enabled(mode),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// File paths - CYAN
    pub fn path(&self, s: &str) -> String {
        self.wrap(s, CYAN)
    }

    /// Numbers, counts - BRIGHT_CYAN
    pub fn number(&self, n: impl std::fmt::Display) -> String {
        self.wrap(&n.to_string(), BRIGHT_CYAN)
    }

    /// [OK] prefix
    pub fn status_ok(&self, msg: &str) -> String {
        format!("{} {}", self.wrap("[OK]", GREEN), msg)
    }

    /// [WARN] prefix
    pub fn status_warn(&self, msg: &str) -> String {
        format!("{} {}", self.wrap("[WARN]", YELLOW), msg)
    }

    /// [ERROR] prefix
    pub fn status_error(&self, msg: &str) -> String {
        format!("{} {}", self.wrap("[ERROR]", RED), msg)
    }

    /// [INFO] prefix
    pub fn status_info(&self, msg: &str) -> String {
        format!("{} {}", self.wrap("[INFO]", BLUE), msg)
    }

    pub fn wrap(&self, s: &str, code: &str) -> String {
        if self.enabled {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_painter_disabled() {
        let p = Painter::new(ColorMode::Never);
        assert!(!p.enabled());
        assert_eq!(p.path("app.R"), "app.R");
        assert_eq!(p.status_ok("done"), "[OK] done");
        assert_eq!(p.status_error("boom"), "[ERROR] boom");
    }

    #[test]
    fn test_painter_enabled() {
        let p = Painter::new(ColorMode::Always);
        assert!(p.enabled());
        assert_eq!(p.number(7), format!("{BRIGHT_CYAN}7{RESET}"));
        assert_eq!(p.status_warn("x"), format!("{YELLOW}[WARN]{RESET} x"));
        assert_eq!(p.status_info("y"), format!("{BLUE}[INFO]{RESET} y"));
    }
}
