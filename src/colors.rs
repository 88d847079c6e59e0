//! Color value type and effect functions
//!
//! This module provides a standalone RGBA color value plus the pure color
//! transforms the HUD widgets derive their hover/press/contrast looks from.
//! Colors convert to and from `sdl2::pixels::Color` at the canvas boundary
//! only; everything in between operates on plain channel bytes.
//!
//! # Example
//!
//! ```rust
//! use game_hud::colors::{self, Rgba};
//!
//! let base = Rgba::rgb(40, 120, 200);
//! let hover = colors::contrast_dark_light(base);
//! let pressed = colors::dark(base);
//! assert_eq!(pressed, Rgba::rgb(20, 60, 100));
//! ```

use sdl2::pixels::Color as SdlColor;
use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;
use std::fmt;

/// A 4-channel color value (red, green, blue, alpha), each channel 0-255.
///
/// `Rgba` is a plain value type with value equality; it has no identity and
/// no relationship to the drawing library beyond boundary conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

// Named palette shared by the game's HUD screens.
pub const CLEAR: Rgba = Rgba::rgba(0, 0, 0, 0);
pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
pub const GREY: Rgba = Rgba::rgb(160, 160, 160);
pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
pub const BROWN: Rgba = Rgba::rgb(165, 42, 42);
pub const RED: Rgba = Rgba::rgb(255, 0, 0);
pub const ORANGE: Rgba = Rgba::rgb(255, 165, 0);
pub const YELLOW: Rgba = Rgba::rgb(255, 255, 0);
pub const GREEN: Rgba = Rgba::rgb(0, 255, 0);
pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);
pub const PURPLE: Rgba = Rgba::rgb(128, 0, 128);
pub const CYAN: Rgba = Rgba::rgb(0, 255, 255);
pub const MAGENTA: Rgba = Rgba::rgb(255, 0, 255);
pub const PINK: Rgba = Rgba::rgb(255, 192, 203);
pub const GRASS: Rgba = Rgba::rgb(0, 190, 0);
pub const CREAM: Rgba = Rgba::rgb(255, 253, 208);
pub const MIDNIGHT: Rgba = Rgba::rgb(25, 25, 112);

impl Rgba {
    /// Creates an opaque color (alpha 255).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }

    /// Creates a color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Builds a color from a dynamic channel list (3 or 4 entries, 0-255).
    ///
    /// This is the validation path for colors arriving as data (theme files,
    /// debug consoles) rather than as typed literals.
    ///
    /// # Errors
    ///
    /// - `ColorError::WrongArity` if the slice is not 3 or 4 entries long
    /// - `ColorError::ChannelOutOfRange` if any entry falls outside 0-255
    pub fn from_slice(channels: &[i64]) -> Result<Rgba, ColorError> {
        if channels.len() != 3 && channels.len() != 4 {
            return Err(ColorError::WrongArity(channels.len()));
        }
        for &ch in channels {
            if !(0..=255).contains(&ch) {
                return Err(ColorError::ChannelOutOfRange(ch));
            }
        }
        Ok(Rgba {
            r: channels[0] as u8,
            g: channels[1] as u8,
            b: channels[2] as u8,
            a: channels.get(3).copied().unwrap_or(255) as u8,
        })
    }

    /// Returns the channels normalized to 0.0-1.0.
    pub fn normalized(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Perceptual brightness estimate in 0.0-1.0.
    ///
    /// Uses the fixed Rec. 709 weights over the normalized RGB channels:
    /// `0.2126*r + 0.7152*g + 0.0722*b`.
    pub fn luminance(&self) -> f32 {
        let [r, g, b, _] = self.normalized();
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    fn map_rgb(self, f: impl Fn(u8) -> u8) -> Rgba {
        Rgba {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
            a: self.a,
        }
    }

    fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    fn from_channels(ch: [u8; 4]) -> Rgba {
        Rgba {
            r: ch[0],
            g: ch[1],
            b: ch[2],
            a: ch[3],
        }
    }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgba::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Rgba::rgba(r, g, b, a)
    }
}

impl From<[u8; 3]> for Rgba {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgba::rgb(r, g, b)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Rgba::rgba(r, g, b, a)
    }
}

impl From<Rgba> for SdlColor {
    fn from(c: Rgba) -> Self {
        SdlColor::RGBA(c.r, c.g, c.b, c.a)
    }
}

impl From<SdlColor> for Rgba {
    fn from(c: SdlColor) -> Self {
        Rgba::rgba(c.r, c.g, c.b, c.a)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let channels = Vec::<i64>::deserialize(deserializer)?;
        Rgba::from_slice(&channels).map_err(D::Error::custom)
    }
}

/// Errors from color construction and the percentage-taking effects
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    /// lighten/darken percentage outside (0.0, 1.0]
    PercentOutOfRange(f32),

    /// Channel list was not 3 or 4 entries long
    WrongArity(usize),

    /// Channel value outside 0-255
    ChannelOutOfRange(i64),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ColorError::PercentOutOfRange(p) => {
                write!(f, "norm_percent must be in (0.0, 1.0], given: {}", p)
            }
            ColorError::WrongArity(n) => {
                write!(f, "color needs 3 or 4 channels, given: {}", n)
            }
            ColorError::ChannelOutOfRange(v) => {
                write!(f, "color channel must be in 0-255, given: {}", v)
            }
        }
    }
}

impl std::error::Error for ColorError {}

impl From<ColorError> for String {
    fn from(error: ColorError) -> Self {
        error.to_string()
    }
}

/// Free-function form of [`Rgba::luminance`] for tuple inputs.
pub fn get_luminance(color: impl Into<Rgba>) -> f32 {
    color.into().luminance()
}

/// Moves each RGB channel toward 255.
///
/// Each channel becomes `(255 - channel) * norm_percent` (truncated). Note
/// that this replaces the channel rather than adding to it, so lightening an
/// already bright color can reduce it.
///
/// # Errors
///
/// `norm_percent` outside (0.0, 1.0] is logged and rejected.
pub fn lighten(color: impl Into<Rgba>, norm_percent: f32) -> Result<Rgba, ColorError> {
    let c = color.into();
    check_percent("lighten", norm_percent)?;
    Ok(c.map_rgb(|ch| ((255.0 - ch as f32) * norm_percent) as u8))
}

/// Moves each RGB channel toward 0.
///
/// Each channel becomes `channel * norm_percent` (truncated).
///
/// # Errors
///
/// `norm_percent` outside (0.0, 1.0] is logged and rejected.
pub fn darken(color: impl Into<Rgba>, norm_percent: f32) -> Result<Rgba, ColorError> {
    let c = color.into();
    check_percent("darken", norm_percent)?;
    Ok(c.map_rgb(|ch| (ch as f32 * norm_percent) as u8))
}

/// Darkens bright colors and lightens dark ones.
///
/// Picks [`darken`] when luminance exceeds 0.5, [`lighten`] otherwise.
pub fn contrast_lighten_darken(
    color: impl Into<Rgba>,
    norm_percent: f32,
) -> Result<Rgba, ColorError> {
    let c = color.into();
    if c.luminance() > 0.5 {
        darken(c, norm_percent)
    } else {
        lighten(c, norm_percent)
    }
}

fn check_percent(what: &str, norm_percent: f32) -> Result<(), ColorError> {
    if norm_percent > 0.0 && norm_percent <= 1.0 {
        Ok(())
    } else {
        log::warn!(
            "{}() requires a norm_percent in (0.0, 1.0]. Given value: {}",
            what,
            norm_percent
        );
        Err(ColorError::PercentOutOfRange(norm_percent))
    }
}

/// Halves each RGB channel.
pub fn dark(color: impl Into<Rgba>) -> Rgba {
    color.into().map_rgb(|ch| ch / 2)
}

/// Moves each RGB channel halfway toward 255.
pub fn light(color: impl Into<Rgba>) -> Rgba {
    color.into().map_rgb(|ch| ch + (255 - ch) / 2)
}

/// Returns the color with its alpha channel replaced.
pub fn alpha(color: impl Into<Rgba>, alpha: u8) -> Rgba {
    let c = color.into();
    Rgba { a: alpha, ..c }
}

/// Scales RGB channels by 1.5 for dark colors, 0.5 for bright ones.
///
/// The hover transform: dark colors pop brighter, bright colors dim, both
/// clamped to the 0-255 channel range.
pub fn contrast_dark_light(color: impl Into<Rgba>) -> Rgba {
    let c = color.into();
    let n = if c.luminance() < 0.5 { 1.5 } else { 0.5 };
    c.map_rgb(|ch| (ch as f32 * n).clamp(0.0, 255.0) as u8)
}

/// Shifts each RGB channel by -85 with wraparound.
pub fn contrast_color(color: impl Into<Rgba>) -> Rgba {
    color.into().map_rgb(|ch| ch.wrapping_sub(85))
}

/// Scales RGB channels so the brightest channel reaches 255.
///
/// An all-black input has no brightest channel to scale and is returned
/// unchanged.
pub fn max_bright(color: impl Into<Rgba>) -> Rgba {
    let c = color.into();
    let max_c = c.r.max(c.g).max(c.b);
    if max_c == 0 {
        return c;
    }
    let factor = 255.0 / max_c as f32;
    c.map_rgb(|ch| (ch as f32 * factor).min(255.0) as u8)
}

/// Interpolates `from` toward `to`.
///
/// With `luminance_only` set, every channel of `from` (alpha included) is
/// scaled by the average luminance of both colors; otherwise every channel
/// moves halfway toward `to` (truncating toward zero).
pub fn step_to(from: impl Into<Rgba>, to: impl Into<Rgba>, luminance_only: bool) -> Rgba {
    let fc = from.into();
    let tc = to.into();
    let mut out = fc.channels();
    if luminance_only {
        let avg = (fc.luminance() + tc.luminance()) / 2.0;
        for ch in &mut out {
            *ch = (*ch as f32 * avg) as u8;
        }
    } else {
        let tch = tc.channels();
        for (ch, t) in out.iter_mut().zip(tch) {
            let step = ((t as f32 - *ch as f32) / 2.0) as i16;
            *ch = (*ch as i16 + step) as u8;
        }
    }
    Rgba::from_channels(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darken_channel_formula() {
        let c = Rgba::rgb(200, 101, 3);
        let d = darken(c, 0.5).unwrap();
        assert_eq!(d, Rgba::rgb(100, 50, 1));
        assert_eq!(d.a, 255);
    }

    #[test]
    fn test_lighten_replaces_channels() {
        // lighten assigns (255 - ch) * p rather than adding it
        let c = Rgba::rgb(155, 0, 255);
        let l = lighten(c, 0.5).unwrap();
        assert_eq!(l, Rgba::rgb(50, 127, 0));
    }

    #[test]
    fn test_lighten_rejects_bad_percent() {
        assert_eq!(
            lighten(WHITE, 0.0),
            Err(ColorError::PercentOutOfRange(0.0))
        );
        assert_eq!(
            darken(WHITE, 1.5),
            Err(ColorError::PercentOutOfRange(1.5))
        );
        assert!(lighten(WHITE, 1.0).is_ok());
    }

    #[test]
    fn test_contrast_lighten_darken_threshold() {
        // white (luminance 1.0) darkens, black (0.0) lightens
        assert_eq!(
            contrast_lighten_darken(WHITE, 0.5).unwrap(),
            Rgba::rgb(127, 127, 127)
        );
        assert_eq!(
            contrast_lighten_darken(BLACK, 0.5).unwrap(),
            Rgba::rgb(127, 127, 127)
        );
        // pure green sits above the threshold (0.7152)
        assert_eq!(
            contrast_lighten_darken(GREEN, 0.5).unwrap(),
            darken(GREEN, 0.5).unwrap()
        );
        // pure red sits below it (0.2126)
        assert_eq!(
            contrast_lighten_darken(RED, 0.5).unwrap(),
            lighten(RED, 0.5).unwrap()
        );
    }

    #[test]
    fn test_dark_and_light() {
        assert_eq!(dark((100, 201, 7)), Rgba::rgb(50, 100, 3));
        assert_eq!(light((0, 255, 100)), Rgba::rgb(127, 255, 177));
    }

    #[test]
    fn test_alpha_replaces_only_alpha() {
        assert_eq!(alpha(RED, 40), Rgba::rgba(255, 0, 0, 40));
    }

    #[test]
    fn test_contrast_dark_light() {
        // dark color scales up by 1.5
        assert_eq!(contrast_dark_light((40, 60, 80)), Rgba::rgb(60, 90, 120));
        // bright color scales down by 0.5, clamped path stays in range
        assert_eq!(contrast_dark_light(WHITE), Rgba::rgb(127, 127, 127));
    }

    #[test]
    fn test_contrast_color_wraps() {
        assert_eq!(contrast_color((85, 84, 200)), Rgba::rgb(0, 255, 115));
    }

    #[test]
    fn test_max_bright() {
        assert_eq!(max_bright((51, 102, 0)), Rgba::rgb(127, 255, 0));
        // all-black has nothing to scale
        assert_eq!(max_bright(BLACK), BLACK);
    }

    #[test]
    fn test_step_to_halfway() {
        let stepped = step_to((0, 0, 0, 255), (255, 255, 255, 255), false);
        assert_eq!(stepped, Rgba::rgba(127, 127, 127, 255));
    }

    #[test]
    fn test_step_to_truncates_toward_zero() {
        // downward steps truncate toward zero as well: 255 + (-255/2) = 128
        let stepped = step_to(WHITE, BLACK, false);
        assert_eq!(stepped, Rgba::rgb(128, 128, 128));
    }

    #[test]
    fn test_step_to_luminance_only_scales_alpha_too() {
        let stepped = step_to((100, 100, 100, 200), WHITE, true);
        // avg luminance of grey 100 (0.392) and white (1.0) is ~0.696
        assert_eq!(stepped.r, stepped.g);
        assert_eq!(stepped.g, stepped.b);
        assert!(stepped.r >= 69 && stepped.r <= 70);
        assert!(stepped.a < 200);
    }

    #[test]
    fn test_from_slice_validation() {
        assert_eq!(
            Rgba::from_slice(&[1, 2, 3]).unwrap(),
            Rgba::rgb(1, 2, 3)
        );
        assert_eq!(
            Rgba::from_slice(&[1, 2, 3, 4]).unwrap(),
            Rgba::rgba(1, 2, 3, 4)
        );
        assert_eq!(
            Rgba::from_slice(&[1, 2]),
            Err(ColorError::WrongArity(2))
        );
        assert_eq!(
            Rgba::from_slice(&[1, 2, 300]),
            Err(ColorError::ChannelOutOfRange(300))
        );
        assert_eq!(
            Rgba::from_slice(&[-1, 2, 3]),
            Err(ColorError::ChannelOutOfRange(-1))
        );
    }

    #[test]
    fn test_luminance_weights() {
        assert!((WHITE.luminance() - 1.0).abs() < 1e-6);
        assert!((BLACK.luminance() - 0.0).abs() < 1e-6);
        assert!((GREEN.luminance() - 0.7152).abs() < 1e-6);
    }

    #[test]
    fn test_sdl_boundary_conversion() {
        let c: SdlColor = Rgba::rgba(1, 2, 3, 4).into();
        assert_eq!(Rgba::from(c), Rgba::rgba(1, 2, 3, 4));
    }
}
