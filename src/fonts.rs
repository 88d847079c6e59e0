//! System font registry
//!
//! This module provides an explicit registry over the fonts installed on the
//! host platform. Families are matched by normalized name (lowercase,
//! alphanumerics only) against discovered font files, and rasterization
//! handles are cached per (family, size, bold) combination.
//!
//! The registry is constructed once at startup and injected into widget
//! render calls; there is no ambient global font state.
//!
//! # Example
//!
//! ```no_run
//! # fn demo() -> Result<(), String> {
//! let ttf = sdl2::ttf::init().map_err(|e| e.to_string())?;
//! let mut fonts = game_hud::fonts::FontRegistry::new(&ttf)?;
//!
//! let label_font = fonts.txt_size(30, game_hud::fonts::TEXT_FAMILY)?;
//! let (w, h) = label_font.size_of("PLAY").map_err(|e| e.to_string())?;
//! # let _ = (w, h);
//! # Ok(())
//! # }
//! ```

use sdl2::ttf::{Font, FontStyle, Sdl2TtfContext};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default family for body text.
pub const TEXT_FAMILY: &str = "roboto";

/// Default family for headings.
pub const HEADING_FAMILY: &str = "impact";

// Preset sizes warmed into the cache at construction.
const TEXT_PRESET_SIZES: [u16; 5] = [20, 30, 40, 50, 60];
const HEADING_PRESET_SIZES: [u16; 4] = [60, 80, 100, 120];

// Families tried for the fallback face, most neutral first.
const FALLBACK_FAMILIES: [&str; 5] = [
    "dejavusans",
    "liberationsans",
    "arial",
    "freesans",
    "notosans",
];

const MAX_SCAN_DEPTH: usize = 4;

/// Errors from font discovery and loading
#[derive(Debug, Clone)]
pub enum FontError {
    /// No usable font files were found on the host platform
    NoFontsFound,

    /// SDL2_ttf failed to load a font file
    Load(String),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FontError::NoFontsFound => {
                write!(f, "no .ttf/.otf files found in platform font directories")
            }
            FontError::Load(e) => write!(f, "failed to load font: {}", e),
        }
    }
}

impl std::error::Error for FontError {}

impl From<FontError> for String {
    fn from(error: FontError) -> Self {
        error.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FontKey {
    family: String,
    size: u16,
    bold: bool,
}

/// Registry of platform fonts with a per-(family, size, bold) handle cache.
///
/// Lives as long as the SDL2_ttf context it borrows. Lookups for families
/// that are not installed fall back to a discovered sans-serif face (or any
/// face) with a logged warning, mirroring how system font matching degrades
/// rather than fails.
pub struct FontRegistry<'ttf> {
    ttf: &'ttf Sdl2TtfContext,
    sources: HashMap<String, PathBuf>,
    fallback: String,
    cache: HashMap<FontKey, Font<'ttf, 'static>>,
}

impl<'ttf> FontRegistry<'ttf> {
    /// Discovers platform fonts and warms the preset text/heading sizes.
    ///
    /// # Errors
    ///
    /// - `FontError::NoFontsFound` if no font files exist in any platform
    ///   font directory
    /// - `FontError::Load` if warming a preset size fails
    pub fn new(ttf: &'ttf Sdl2TtfContext) -> Result<Self, FontError> {
        let mut sources = HashMap::new();
        for dir in platform_font_dirs() {
            scan_font_dir(&dir, 0, &mut sources);
        }
        if sources.is_empty() {
            return Err(FontError::NoFontsFound);
        }

        let fallback = FALLBACK_FAMILIES
            .iter()
            .find_map(|family| best_match(sources.keys().map(String::as_str), family))
            .unwrap_or_else(|| {
                // no known sans face installed, take any discovered one
                sources.keys().map(String::as_str).min().unwrap_or("")
            })
            .to_string();

        let mut registry = FontRegistry {
            ttf,
            sources,
            fallback,
            cache: HashMap::new(),
        };
        for size in TEXT_PRESET_SIZES {
            registry.txt_size(size, TEXT_FAMILY)?;
        }
        for size in HEADING_PRESET_SIZES {
            registry.head_size(size, HEADING_FAMILY, false)?;
        }
        Ok(registry)
    }

    /// Looks up a body-text font at the given point size.
    pub fn txt_size(
        &mut self,
        size: u16,
        family: &str,
    ) -> Result<&Font<'ttf, 'static>, FontError> {
        self.font(family, size, false)
    }

    /// Looks up a heading font at the given point size, optionally bold.
    pub fn head_size(
        &mut self,
        size: u16,
        family: &str,
        bold: bool,
    ) -> Result<&Font<'ttf, 'static>, FontError> {
        self.font(family, size, bold)
    }

    /// Normalized names of every discovered family.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    fn font(
        &mut self,
        family: &str,
        size: u16,
        bold: bool,
    ) -> Result<&Font<'ttf, 'static>, FontError> {
        let size = size.max(1);
        let resolved = self.resolve_family(family);
        let path = self
            .sources
            .get(&resolved)
            .cloned()
            .ok_or(FontError::NoFontsFound)?;
        let ttf = self.ttf;

        let key = FontKey {
            family: resolved,
            size,
            bold,
        };
        match self.cache.entry(key) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(slot) => {
                let mut font = ttf.load_font(&path, size).map_err(FontError::Load)?;
                if bold {
                    font.set_style(FontStyle::BOLD);
                }
                Ok(slot.insert(font))
            }
        }
    }

    fn resolve_family(&self, family: &str) -> String {
        let want = normalize_family(family);
        if let Some(found) = best_match(self.sources.keys().map(String::as_str), &want) {
            return found.to_string();
        }
        log::warn!(
            "font family '{}' not installed, falling back to '{}'",
            family,
            self.fallback
        );
        self.fallback.clone()
    }
}

/// Normalizes a family name the way system font matching does: lowercase,
/// alphanumeric characters only.
pub fn normalize_family(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

// Exact normalized match first, then a family whose name extends the query
// ("roboto" finds "robotoregular"), preferring the shortest such name so
// regular weights win over bold/italic variants.
fn best_match<'a>(families: impl Iterator<Item = &'a str>, want: &str) -> Option<&'a str> {
    let want = normalize_family(want);
    if want.is_empty() {
        return None;
    }
    let mut prefix: Option<&str> = None;
    for family in families {
        if family == want {
            return Some(family);
        }
        if family.starts_with(&want)
            && prefix.is_none_or(|best| family.len() < best.len())
        {
            prefix = Some(family);
        }
    }
    prefix
}

fn platform_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(dir) = dirs::font_dir() {
        dirs.push(dir);
    }
    if cfg!(target_os = "linux") {
        dirs.push(PathBuf::from("/usr/share/fonts"));
        dirs.push(PathBuf::from("/usr/local/share/fonts"));
        if let Some(home) = dirs::home_dir() {
            dirs.push(home.join(".fonts"));
            dirs.push(home.join(".local/share/fonts"));
        }
    } else if cfg!(target_os = "macos") {
        dirs.push(PathBuf::from("/System/Library/Fonts"));
        dirs.push(PathBuf::from("/Library/Fonts"));
    } else if cfg!(target_os = "windows") {
        dirs.push(PathBuf::from("C:\\Windows\\Fonts"));
    }
    dirs
}

fn scan_font_dir(dir: &Path, depth: usize, sources: &mut HashMap<String, PathBuf>) {
    if depth > MAX_SCAN_DEPTH {
        return;
    }
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan_font_dir(&path, depth + 1, sources);
            continue;
        }
        let is_font = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ttf") || ext.eq_ignore_ascii_case("otf"));
        if !is_font {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let family = normalize_family(stem);
        if !family.is_empty() {
            sources.entry(family).or_insert(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_family() {
        assert_eq!(normalize_family("DejaVu Sans"), "dejavusans");
        assert_eq!(normalize_family("Liberation-Serif_2"), "liberationserif2");
        assert_eq!(normalize_family("!!"), "");
    }

    #[test]
    fn test_best_match_exact() {
        let families = ["robotobold", "roboto", "impact"];
        assert_eq!(best_match(families.into_iter(), "Roboto"), Some("roboto"));
    }

    #[test]
    fn test_best_match_prefers_shortest_prefix() {
        let families = ["dejavusansbolditalic", "dejavusansbold", "dejavuserif"];
        assert_eq!(
            best_match(families.into_iter(), "dejavusans"),
            Some("dejavusansbold")
        );
    }

    #[test]
    fn test_best_match_misses() {
        let families = ["impact", "arial"];
        assert_eq!(best_match(families.into_iter(), "comicsans"), None);
        assert_eq!(best_match(families.into_iter(), ""), None);
    }

    #[test]
    fn test_scan_ignores_non_font_files() {
        let dir = std::env::temp_dir().join("game_hud_font_scan_test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("NotAFont.txt"), b"x").unwrap();
        std::fs::write(dir.join("Fake Face.TTF"), b"x").unwrap();

        let mut sources = HashMap::new();
        scan_font_dir(&dir, 0, &mut sources);
        assert_eq!(sources.len(), 1);
        assert!(sources.contains_key("fakeface"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
