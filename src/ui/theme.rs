//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents. Two are compiled in; a user file can replace
//! them through `VITRINE_THEME_FILE`.
//!
//! # Built-in Themes
//!
//! - `vitrine-dark`: dark background, coral accents (default)
//! - `vitrine-light`: light background, magenta accents
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e6e1f5"
//! header_bg = "#2b2140"          # optional
//! text_normal = "#e6e1f5"
//! text_dim = "#7d7890"
//! border = "#3f3852"
//! search_bar_border = "#ff5a5f"
//! placeholder_fg = "#7d7890"
//! match_highlight_fg = "#1b1626"
//! match_highlight_bg = "#ffd166"
//! card_index_fg = "#ff5a5f"
//! page_current_fg = "#1b1626"
//! page_current_bg = "#ff5a5f"
//! page_disabled_fg = "#4d475e"
//! detail_border = "#ff5a5f"
//! link_fg = "#5ec8f2"
//! status_fg = "#5ec8f2"
//! error_fg = "#ff6b6b"
//! ```

use crate::domain::error::{Result, VitrineError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "vitrine-dark";

const BUILTIN_DARK: &str = include_str!("../../themes/vitrine-dark.toml");
const BUILTIN_LIGHT: &str = include_str!("../../themes/vitrine-light.toml");

/// Color scheme for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for each UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Footer hints and secondary text.
    pub text_dim: String,
    pub border: String,

    pub search_bar_border: String,
    pub placeholder_fg: String,
    /// Query match inside card names.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// The `[N]` selector in front of each card.
    pub card_index_fg: String,

    pub page_current_fg: String,
    pub page_current_bg: String,
    /// Previous/next markers that cannot be used.
    pub page_disabled_fg: String,

    pub detail_border: String,
    pub link_fg: String,

    /// Loading and empty messages.
    pub status_fg: String,
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for unknown names.
    ///
    /// # Example
    ///
    /// ```
    /// use vitrine::ui::Theme;
    ///
    /// let theme = Theme::from_name("vitrine-light").unwrap();
    /// assert_eq!(theme.name, "vitrine-light");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "vitrine-dark" => BUILTIN_DARK,
            "vitrine-light" => BUILTIN_LIGHT,
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Theme`] if the file cannot be read or is not a
    /// complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| VitrineError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| VitrineError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Resolves the configured theme.
    ///
    /// A readable `file` wins over `name`. Unknown names and unreadable files
    /// are logged and fall back to the default theme.
    #[must_use]
    pub fn resolve(name: &str, file: Option<&Path>) -> Self {
        if let Some(path) = file {
            match Self::from_file(path) {
                Ok(theme) => return theme,
                Err(e) => tracing::warn!(error = %e, "custom theme ignored"),
            }
        }

        Self::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme = name, "unknown theme, using {DEFAULT_THEME}");
            Self::default()
        })
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Accepts `#rrggbb` and the `#rgb` shorthand (catalog colors use both).
    /// Anything else yields white.
    #[must_use]
    pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        const WHITE: (u8, u8, u8) = (255, 255, 255);

        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return WHITE;
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        let parsed = match hex.len() {
            6 => channel(&hex[0..2]).zip(channel(&hex[2..4])).zip(channel(&hex[4..6])),
            3 => {
                let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
                short(0).zip(short(1)).zip(short(2))
            }
            _ => None,
        };

        parsed.map_or(WHITE, |((r, g), b)| (r, g, b))
    }

    /// ANSI 24-bit foreground escape for `hex`.
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
    /// Returns `vitrine-dark`.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in theme does not parse, which the unit tests
    /// rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in vitrine-dark theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        for name in ["vitrine-dark", "vitrine-light"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert_eq!(Theme::default().name, DEFAULT_THEME);
        assert!(Theme::from_name("vitrine-light").unwrap().colors.header_bg.is_none());
    }

    #[test]
    fn hex_colors_convert_to_rgb() {
        assert_eq!(Theme::hex_to_rgb("#4A154B"), (0x4a, 0x15, 0x4b));
        assert_eq!(Theme::hex_to_rgb("0079bf"), (0x00, 0x79, 0xbf));
        assert_eq!(Theme::hex_to_rgb("#fff"), (255, 255, 255));
        assert_eq!(Theme::hex_to_rgb("#f80"), (0xff, 0x88, 0x00));
    }

    #[test]
    fn invalid_hex_falls_back_to_white() {
        for bad in ["", "#12", "#zzzzzz", "#12345", "red", "#éé"] {
            assert_eq!(Theme::hex_to_rgb(bad), (255, 255, 255), "{bad}");
        }
    }

    #[test]
    fn escapes_carry_rgb_values() {
        assert_eq!(Theme::fg("#010203"), "\u{1b}[38;2;1;2;3m");
        assert_eq!(Theme::bg("#010203"), "\u{1b}[48;2;1;2;3m");
    }

    #[test]
    fn custom_file_overrides_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mine.toml");
        let custom = BUILTIN_LIGHT.replace("vitrine-light", "mine");
        std::fs::write(&path, custom).unwrap();

        let theme = Theme::resolve("vitrine-dark", Some(&path));
        assert_eq!(theme.name, "mine");
    }

    #[test]
    fn broken_file_and_unknown_name_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = \"broken\"").unwrap();

        assert!(matches!(Theme::from_file(&path), Err(VitrineError::Theme(_))));
        assert_eq!(Theme::resolve("vitrine-light", Some(&path)).name, "vitrine-light");
        assert_eq!(Theme::resolve("nope", None).name, DEFAULT_THEME);
    }
}
