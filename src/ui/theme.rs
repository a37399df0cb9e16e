//! Theme management and ANSI escape sequence generation.
//!
//! Colours for the terminal preview renderer, either built in or loaded from a
//! TOML file, plus helpers turning hex colours into 24-bit ANSI sequences.
//!
//! # Built-in Themes
//!
//! - `landing-dark`: Dark navy with teal accents (default)
//! - `landing-light`: Light grey with blue accents
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! brand_fg = "#5eead4"
//! header_fg = "#e2e8f0"
//! nav_active_fg = "#0f172a"
//! nav_active_bg = "#5eead4"
//! text_normal = "#e2e8f0"
//! text_dim = "#64748b"
//! border = "#334155"
//! search_bar_border = "#5eead4"
//! match_highlight_fg = "#0f172a"
//! match_highlight_bg = "#facc15"
//! card_hover_bg = "#1e293b"
//! empty_state_fg = "#38bdf8"
//! success_fg = "#4ade80"
//! error_fg = "#f87171"
//! ```
//!
//! # Example
//!
//! ```rust
//! use jobboard_landing::ui::Theme;
//!
//! let theme = Theme::from_name("landing-light").unwrap();
//! let styled = format!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert!(styled.starts_with("\u{1b}[1m"));
//! assert_eq!(theme.name, "landing-light");
//! ```

use crate::domain::{LandingError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "landing-dark";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#e2e8f0"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Site name in the navigation bar.
    pub brand_fg: String,
    /// Page heading color.
    pub header_fg: String,
    /// Optional page heading background.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Highlighted navigation entry.
    pub nav_active_fg: String,
    pub nav_active_bg: String,

    pub text_normal: String,
    /// Secondary text (footer, dates, company names).
    pub text_dim: String,
    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Background of the job card under the pointer.
    pub card_hover_bg: String,

    pub empty_state_fg: String,
    pub success_fg: String,
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "landing-dark" => include_str!("../../themes/landing-dark.toml"),
            "landing-light" => include_str!("../../themes/landing-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::Theme`] if the file cannot be read or is not a
    /// complete theme definition.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| LandingError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| LandingError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Monochrome palette used only if the built-in default fails to parse.
    fn monochrome() -> Self {
        let white = || "#ffffff".to_string();
        let black = || "#000000".to_string();
        Self {
            name: "monochrome".to_string(),
            colors: ThemeColors {
                brand_fg: white(),
                header_fg: white(),
                header_bg: None,
                nav_active_fg: black(),
                nav_active_bg: white(),
                text_normal: white(),
                text_dim: "#808080".to_string(),
                border: "#808080".to_string(),
                search_bar_border: white(),
                match_highlight_fg: black(),
                match_highlight_bg: white(),
                card_hover_bg: "#303030".to_string(),
                empty_state_fg: white(),
                success_fg: white(),
                error_fg: white(),
            },
        }
    }

    /// Converts a hex color to an RGB tuple, falling back to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for `hex`.
    ///
    /// ```rust
    /// use jobboard_landing::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#0a0b0c"), "\u{1b}[38;2;10;11;12m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn underline() -> &'static str {
        "\u{001b}[4m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(|| {
            tracing::error!(theme = DEFAULT_THEME, "built-in theme failed to parse");
            Self::monochrome()
        })
    }
}
