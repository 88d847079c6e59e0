//! HUD Widgets
//!
//! This module provides the screen-space widgets the game composes its HUD
//! from. Each widget is constructed once, then every frame receives
//! `update(dt)` (plus pointer state for [`Button`]) followed by a render call
//! against the SDL2 canvas. Widgets share no state with each other; the font
//! registry is passed into render calls that draw text.
//!
//! # Available Components
//!
//! - [`Camera`] - clamped viewport over a larger world texture
//! - [`Bar`] - progress/health bar with anchored, directional fill
//! - [`Button`] - clickable rectangle with hover/press visual state
//! - [`TextBox`] - static aligned text with auto-fit sizing
//!
//! # Example Usage
//!
//! ```no_run
//! # fn demo(canvas: &mut sdl2::render::Canvas<sdl2::video::Window>,
//! #         fonts: &mut game_hud::fonts::FontRegistry,
//! #         mouse: &sdl2::mouse::MouseState) -> Result<(), String> {
//! use game_hud::ui::{Bar, BarAnchor, Button, FillDirection};
//! use glam::Vec2;
//!
//! let mut health = Bar::new(
//!     Vec2::new(20.0, 20.0),
//!     Vec2::new(200.0, 24.0),
//!     100.0,
//!     100.0,
//!     BarAnchor::Left,
//!     FillDirection::Horizontal,
//! );
//! let mut play = Button::new("PLAY", Vec2::new(220.0, 140.0), 200, 60);
//!
//! // each frame
//! health.set_curr_value(72.0);
//! play.update(0.016, mouse);
//! health.render(canvas)?;
//! play.render(canvas, fonts)?;
//! # Ok(())
//! # }
//! ```

pub mod bar;
pub mod button;
pub mod camera;
pub mod text_box;

pub use bar::{Bar, BarAnchor, BarStyle, FillDirection};
pub use button::{Button, ButtonStyle};
pub use camera::Camera;
pub use text_box::{HAlign, TextBox, TextBoxStyle, VAlign};

use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::fmt;

/// A named lookup (anchor, fill direction, alignment) received a name that
/// is not in its table. Raised at construction/parse time, never mid-frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNameError {
    /// Which lookup rejected the name
    pub kind: &'static str,

    /// The accepted names
    pub expected: &'static str,

    /// The rejected input
    pub given: String,
}

impl UnknownNameError {
    pub(crate) fn new(kind: &'static str, expected: &'static str, given: &str) -> Self {
        UnknownNameError {
            kind,
            expected,
            given: given.to_string(),
        }
    }
}

impl fmt::Display for UnknownNameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} must be one of [{}]. Given value: {}",
            self.kind, self.expected, self.given
        )
    }
}

impl std::error::Error for UnknownNameError {}

impl From<UnknownNameError> for String {
    fn from(error: UnknownNameError) -> Self {
        error.to_string()
    }
}

/// Draws a rectangle outline of the given thickness as concentric 1px rects,
/// insetting until the rectangle degenerates.
pub(crate) fn draw_border(
    canvas: &mut Canvas<Window>,
    rect: Rect,
    thickness: u32,
) -> Result<(), String> {
    for i in 0..thickness as i32 {
        let w = rect.width() as i32 - 2 * i;
        let h = rect.height() as i32 - 2 * i;
        if w <= 0 || h <= 0 {
            break;
        }
        canvas.draw_rect(Rect::new(rect.x() + i, rect.y() + i, w as u32, h as u32))?;
    }
    Ok(())
}

/// Auto text-fit correction shared by Button and TextBox.
///
/// Given the rendered text dimensions and the box dimensions, returns the
/// corrected font size if the larger of the width/height ratios has left the
/// `[ratio/2, ratio]` band, or `None` if the current size already fits.
pub(crate) fn fit_txt_size(
    txt_size: f32,
    ratio: f32,
    txt_w: u32,
    txt_h: u32,
    box_w: u32,
    box_h: u32,
) -> Option<f32> {
    if box_w == 0 || box_h == 0 {
        return None;
    }
    let w = txt_w as f32 / box_w as f32;
    let h = txt_h as f32 / box_h as f32;
    let m = w.max(h);
    if m <= 0.0 {
        return None;
    }
    if m > ratio || m < ratio / 2.0 {
        Some((txt_size * (ratio / m)).max(1.0))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_txt_size_within_band() {
        // 60/100 = 0.6 == ratio, still inside the band
        assert_eq!(fit_txt_size(30.0, 0.6, 60, 20, 100, 100), None);
        // 30/100 = 0.3 == ratio/2, inside
        assert_eq!(fit_txt_size(30.0, 0.6, 30, 10, 100, 100), None);
    }

    #[test]
    fn test_fit_txt_size_shrinks_oversized_text() {
        // 120/100 = 1.2 > 0.6, correct by 0.6/1.2
        assert_eq!(fit_txt_size(30.0, 0.6, 120, 20, 100, 100), Some(15.0));
    }

    #[test]
    fn test_fit_txt_size_grows_undersized_text() {
        // 20/100 = 0.2 < 0.3, correct by 0.6/0.2
        assert_eq!(fit_txt_size(10.0, 0.6, 20, 10, 100, 100), Some(30.0));
    }

    #[test]
    fn test_fit_txt_size_never_below_one() {
        assert_eq!(fit_txt_size(1.0, 0.6, 500, 500, 100, 100), Some(1.0));
    }

    #[test]
    fn test_fit_txt_size_degenerate_box() {
        assert_eq!(fit_txt_size(30.0, 0.6, 10, 10, 0, 100), None);
        assert_eq!(fit_txt_size(30.0, 0.6, 0, 0, 100, 100), None);
    }

    #[test]
    fn test_unknown_name_error_message() {
        let err = UnknownNameError::new("h_align", "left, center, right", "middle");
        assert_eq!(
            err.to_string(),
            "h_align must be one of [left, center, right]. Given value: middle"
        );
    }
}
