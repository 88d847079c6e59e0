//! HUD theme configuration
//!
//! Widget style defaults can be loaded from a JSON theme file instead of
//! hard-coding them per widget. The built-in defaults always work; a user
//! override file under the platform config directory takes precedence when
//! present.
//!
//! Color fields are channel arrays (`[r, g, b]` or `[r, g, b, a]`) and
//! alignment/anchor fields are the same names the widgets accept in code;
//! malformed values fail the whole load with a parse error.
//!
//! # Example theme file
//!
//! ```json
//! {
//!     "font_family": "roboto",
//!     "bar": { "fill_color": [0, 190, 0], "border_width": 2 },
//!     "button": { "fill_color": [25, 25, 112], "out_width": 3 },
//!     "text_box": { "h_align": "center", "fill_color": [0, 0, 0, 0] }
//! }
//! ```

use crate::fonts::{HEADING_FAMILY, TEXT_FAMILY};
use crate::ui::{BarStyle, ButtonStyle, TextBoxStyle};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

const THEME_DIR: &str = "game-hud";
const THEME_FILE: &str = "theme.json";

/// Errors that can occur while loading a theme file
#[derive(Debug, Clone)]
pub enum ThemeError {
    /// Reading the file failed
    Io(String),

    /// The file is not valid theme JSON
    Parse(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ThemeError::Io(e) => write!(f, "failed to read theme file: {}", e),
            ThemeError::Parse(e) => write!(f, "failed to parse theme file: {}", e),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<ThemeError> for String {
    fn from(error: ThemeError) -> Self {
        error.to_string()
    }
}

/// Style defaults for every widget kind plus the font families.
///
/// Missing fields fall back to the built-in defaults, so a theme file only
/// needs to state what it changes.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Family used for body text
    pub font_family: String,

    /// Family used for headings
    pub heading_family: String,

    /// Bar styling
    pub bar: BarStyle,

    /// Button styling
    pub button: ButtonStyle,

    /// Text box styling
    pub text_box: TextBoxStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            font_family: TEXT_FAMILY.to_string(),
            heading_family: HEADING_FAMILY.to_string(),
            bar: BarStyle::default(),
            button: ButtonStyle::default(),
            text_box: TextBoxStyle::default(),
        }
    }
}

impl Theme {
    /// Loads a theme from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Theme, ThemeError> {
        let data =
            std::fs::read_to_string(path).map_err(|e| ThemeError::Io(e.to_string()))?;
        Theme::from_json(&data)
    }

    /// Parses a theme from a JSON string.
    pub fn from_json(data: &str) -> Result<Theme, ThemeError> {
        serde_json::from_str(data).map_err(|e| ThemeError::Parse(e.to_string()))
    }

    /// Loads the user's theme override, falling back to built-in defaults.
    ///
    /// Looks for `<config_dir>/game-hud/theme.json`. A missing file is
    /// normal; an unreadable or malformed one is logged and ignored.
    pub fn load_default() -> Theme {
        let Some(path) = Theme::user_theme_path() else {
            return Theme::default();
        };
        if !path.exists() {
            log::info!("no user theme at {}, using built-in defaults", path.display());
            return Theme::default();
        }
        match Theme::load(&path) {
            Ok(theme) => {
                log::info!("loaded user theme from {}", path.display());
                theme
            }
            Err(e) => {
                log::warn!("ignoring user theme {}: {}", path.display(), e);
                Theme::default()
            }
        }
    }

    /// Where [`load_default`](Theme::load_default) looks for the override.
    pub fn user_theme_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(THEME_DIR).join(THEME_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Rgba;
    use crate::ui::{HAlign, VAlign};

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.font_family, "roboto");
        assert_eq!(theme.heading_family, "impact");
        assert_eq!(theme.bar.border_width, 1);
        assert_eq!(theme.button.out_width, 3);
    }

    #[test]
    fn test_partial_theme_keeps_defaults() {
        let theme = Theme::from_json(r#"{ "bar": { "border_width": 4 } }"#).unwrap();
        assert_eq!(theme.bar.border_width, 4);
        assert_eq!(theme.bar.fill_color, crate::colors::WHITE);
        assert_eq!(theme.font_family, "roboto");
    }

    #[test]
    fn test_full_theme_round_trip() {
        let theme = Theme::from_json(
            r#"{
                "font_family": "dejavu sans",
                "bar": { "fill_color": [0, 190, 0], "border_color": [10, 20, 30, 40] },
                "button": { "out_width": 5 },
                "text_box": { "h_align": "right", "v_align": "bottom" }
            }"#,
        )
        .unwrap();
        assert_eq!(theme.font_family, "dejavu sans");
        assert_eq!(theme.bar.fill_color, Rgba::rgb(0, 190, 0));
        assert_eq!(theme.bar.border_color, Rgba::rgba(10, 20, 30, 40));
        assert_eq!(theme.button.out_width, 5);
        assert_eq!(theme.text_box.h_align, HAlign::Right);
        assert_eq!(theme.text_box.v_align, VAlign::Bottom);
    }

    #[test]
    fn test_malformed_color_fails_parse() {
        let result = Theme::from_json(r#"{ "bar": { "fill_color": [1, 2] } }"#);
        assert!(matches!(result, Err(ThemeError::Parse(_))));

        let result = Theme::from_json(r#"{ "bar": { "fill_color": [1, 2, 300] } }"#);
        assert!(matches!(result, Err(ThemeError::Parse(_))));
    }

    #[test]
    fn test_unknown_alignment_fails_parse() {
        let result = Theme::from_json(r#"{ "text_box": { "h_align": "middle" } }"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("middle"));
    }
}
