//! TUI theming support.
//!
//! [`Theme`] holds the palette used by the game screen. Light and dark
//! palettes are provided, plus a best-effort detection of light terminals.

use ratatui::style::Color;

use crate::cli::ThemeArg;

/// Colors used by the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Title, borders and the digest.
    pub primary: Color,
    /// Key hints and the guess field.
    pub secondary: Color,
    /// Error feedback and the error dialog.
    pub danger: Color,
    /// Success feedback.
    pub success: Color,
    /// Secondary text and disabled widgets.
    pub dim: Color,
    /// Main text.
    pub normal: Color,
}

impl Theme {
    /// High-contrast dark palette (default).
    pub fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Yellow,
            danger: Color::Red,
            success: Color::Green,
            dim: Color::DarkGray,
            normal: Color::White,
        }
    }

    /// High-contrast light palette.
    pub fn light() -> Self {
        Self {
            primary: Color::Blue,
            secondary: Color::Magenta,
            danger: Color::Red,
            success: Color::Green,
            dim: Color::Gray,
            normal: Color::Black,
        }
    }

    /// Pick a palette from the terminal environment, dark if unsure.
    pub fn auto() -> Self {
        if is_light_terminal() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Resolve the configured theme choice.
    pub fn from_arg(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Auto => Self::auto(),
            ThemeArg::Light => Self::light(),
            ThemeArg::Dark => Self::dark(),
        }
    }

    /// Check if this is a light theme.
    pub fn is_light(&self) -> bool {
        self.normal == Color::Black
    }
}

/// `COLORFGBG` is "fg;bg" on rxvt, xterm and konsole; bg 7 and 9-15 are light.
fn is_light_terminal() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| value.rsplit(';').next().map(str::to_owned))
        .and_then(|bg| bg.parse::<u32>().ok())
        .is_some_and(|bg| bg >= 7 && bg != 8)
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
