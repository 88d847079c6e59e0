//! Progress bar component
//!
//! A bar is a fixed-size rectangle whose filled sub-rectangle is computed
//! from the ratio of a current value to a maximum. The fill grows from a
//! named anchor point along a fill direction (horizontal, vertical, or both),
//! optionally in "split" mode where it grows outward from the center instead
//! of from an edge.
//!
//! Fullness is the signed ratio `curr / max` clamped to [-1, 1]; negative
//! values are meaningful in split mode, where they fill from the center
//! toward the opposite edge.
//!
//! # Example
//!
//! ```rust
//! use game_hud::ui::{Bar, BarAnchor, FillDirection};
//! use glam::Vec2;
//!
//! let mut health = Bar::new(
//!     Vec2::new(20.0, 20.0),
//!     Vec2::new(200.0, 40.0),
//!     100.0,
//!     100.0,
//!     BarAnchor::Left,
//!     FillDirection::Horizontal,
//! );
//!
//! health.set_curr_value(50.0);
//! let (pos, size) = health.fill_rect();
//! assert_eq!(size, Vec2::new(100.0, 40.0));
//! assert_eq!(pos, Vec2::new(20.0, 20.0));
//! ```

use super::{draw_border, UnknownNameError};
use crate::colors::{self, Rgba};
use glam::Vec2;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;
use std::str::FromStr;

/// Named reference point a bar's fill grows from, as a normalized offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarAnchor {
    Left,
    Right,
    Top,
    Bot,
    Center,
}

impl BarAnchor {
    const NAMES: &'static str = "left, right, top, bot, center";

    /// The anchor's normalized offset inside the bar rectangle.
    pub fn offset(self) -> Vec2 {
        match self {
            BarAnchor::Left => Vec2::new(0.0, 0.0),
            BarAnchor::Right => Vec2::new(1.0, 0.0),
            BarAnchor::Top => Vec2::new(0.0, 0.0),
            BarAnchor::Bot => Vec2::new(0.0, 1.0),
            BarAnchor::Center => Vec2::new(0.5, 0.5),
        }
    }
}

impl FromStr for BarAnchor {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(BarAnchor::Left),
            "right" => Ok(BarAnchor::Right),
            "top" => Ok(BarAnchor::Top),
            "bot" => Ok(BarAnchor::Bot),
            "center" => Ok(BarAnchor::Center),
            _ => Err(UnknownNameError::new("anchor_pos", Self::NAMES, s)),
        }
    }
}

impl<'de> Deserialize<'de> for BarAnchor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(D::Error::custom)
    }
}

/// Axis (or axes) a bar's fill grows along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillDirection {
    Vertical,
    Horizontal,
    /// Both axes scale with fullness.
    Scale,
}

impl FillDirection {
    const NAMES: &'static str = "vertical, horizontal, scale";

    /// The direction's axis mask.
    pub fn axis(self) -> Vec2 {
        match self {
            FillDirection::Vertical => Vec2::new(0.0, 1.0),
            FillDirection::Horizontal => Vec2::new(1.0, 0.0),
            FillDirection::Scale => Vec2::new(1.0, 1.0),
        }
    }
}

impl FromStr for FillDirection {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(FillDirection::Vertical),
            "horizontal" => Ok(FillDirection::Horizontal),
            "scale" => Ok(FillDirection::Scale),
            _ => Err(UnknownNameError::new("fill_direction", Self::NAMES, s)),
        }
    }
}

impl<'de> Deserialize<'de> for FillDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(D::Error::custom)
    }
}

/// Configuration for bar appearance
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BarStyle {
    /// Frame color
    pub border_color: Rgba,

    /// Frame thickness in pixels
    pub border_width: u32,

    /// Fill color
    pub fill_color: Rgba,
}

impl Default for BarStyle {
    fn default() -> Self {
        BarStyle {
            border_color: colors::WHITE,
            border_width: 1,
            fill_color: colors::WHITE,
        }
    }
}

/// A progress bar with anchored, directional fill.
pub struct Bar {
    /// Top-left corner of the bar rectangle.
    pub pos: Vec2,

    /// Bar dimensions in pixels.
    pub size: Vec2,

    /// Value corresponding to a full bar.
    pub max_value: f32,

    curr_value: f32,
    anchor: BarAnchor,
    fill_direction: FillDirection,
    split: bool,

    /// Visual styling.
    pub style: BarStyle,
}

impl Bar {
    /// Creates a bar with default styling and edge-anchored fill.
    pub fn new(
        pos: Vec2,
        size: Vec2,
        max_value: f32,
        start_value: f32,
        anchor: BarAnchor,
        fill_direction: FillDirection,
    ) -> Self {
        Bar {
            pos,
            size,
            max_value,
            curr_value: start_value,
            anchor,
            fill_direction,
            split: false,
            style: BarStyle::default(),
        }
    }

    /// Creates a bar with custom styling.
    pub fn with_style(
        pos: Vec2,
        size: Vec2,
        max_value: f32,
        start_value: f32,
        anchor: BarAnchor,
        fill_direction: FillDirection,
        style: BarStyle,
    ) -> Self {
        Bar {
            style,
            ..Bar::new(pos, size, max_value, start_value, anchor, fill_direction)
        }
    }

    /// Switches between split (bidirectional from center) and edge-anchored
    /// fill.
    pub fn set_split(&mut self, split: bool) {
        self.split = split;
    }

    pub fn split(&self) -> bool {
        self.split
    }

    pub fn anchor(&self) -> BarAnchor {
        self.anchor
    }

    pub fn fill_direction(&self) -> FillDirection {
        self.fill_direction
    }

    pub fn curr_value(&self) -> f32 {
        self.curr_value
    }

    /// Sets the current value, clamping its magnitude to `max_value`.
    pub fn set_curr_value(&mut self, value: f32) {
        if value.abs() > self.max_value {
            self.curr_value = value.signum() * self.max_value;
        } else {
            self.curr_value = value;
        }
    }

    /// Signed fill ratio `curr / max`, clamped to [-1, 1].
    ///
    /// A zero `max_value` yields 0.0.
    pub fn fullness(&self) -> f32 {
        if self.max_value == 0.0 {
            return 0.0;
        }
        (self.curr_value / self.max_value).clamp(-1.0, 1.0)
    }

    /// The active fill sub-rectangle as (top-left, size) in pixels.
    pub fn fill_rect(&self) -> (Vec2, Vec2) {
        if self.split {
            self.fill_rect_split()
        } else {
            self.fill_rect_default()
        }
    }

    /// Edge-anchored fill: the filled region grows from the anchor along the
    /// fill axis in proportion to fullness; the other axis stays fully sized.
    ///
    /// The un-filled portion is cut from the side opposite the anchor, so a
    /// right-anchored horizontal bar empties leftward.
    pub fn fill_rect_default(&self) -> (Vec2, Vec2) {
        let anchor = self.anchor.offset();
        let dir = self.fill_direction.axis();
        let fullness = self.fullness();

        let pos_c = anchor * dir * (1.0 - fullness);
        let size_c = -dir * (1.0 - fullness);

        let pos = self.pos + self.rel_to_abs(pos_c);
        let size = self.size + self.rel_to_abs(size_c);
        (pos, size)
    }

    /// Split fill: fullness is halved sign-preservingly (sign flipped for
    /// vertical fill) and grows outward from the bar's center; negative
    /// fullness fills from the center toward the opposite edge.
    pub fn fill_rect_split(&self) -> (Vec2, Vec2) {
        let dir = self.fill_direction.axis();
        let half = if self.fill_direction == FillDirection::Vertical {
            -0.5
        } else {
            0.5
        };
        let fullness = self.fullness() * half;

        let anchor_pos = Vec2::splat(0.5) * dir;
        let size_c = -dir * (1.0 - fullness.abs());
        let pos_c = if fullness < 0.0 {
            anchor_pos * fullness * 2.0
        } else {
            Vec2::ZERO
        };

        let size = self.size + self.rel_to_abs(size_c);
        let pos = self.pos + self.rel_to_abs(anchor_pos + pos_c);
        (pos, size)
    }

    /// Draws the bordered frame and the active fill rectangle.
    ///
    /// The frame extends 2px beyond the bar on every side; the fill is
    /// skipped when either of its dimensions rounds below one pixel.
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let edge = Vec2::splat(2.0);
        let frame_pos = self.pos - edge;
        let frame = Rect::new(
            frame_pos.x as i32,
            frame_pos.y as i32,
            (self.size.x + 2.0 * edge.x) as u32,
            (self.size.y + 2.0 * edge.y) as u32,
        );
        canvas.set_draw_color(self.style.border_color);
        draw_border(canvas, frame, self.style.border_width)?;

        let (fill_pos, fill_size) = self.fill_rect();
        if fill_size.x >= 1.0 && fill_size.y >= 1.0 {
            canvas.set_draw_color(self.style.fill_color);
            canvas.fill_rect(Rect::new(
                fill_pos.x as i32,
                fill_pos.y as i32,
                fill_size.x as u32,
                fill_size.y as u32,
            ))?;
        }
        Ok(())
    }

    // normalized bar-space -> pixel offsets
    fn rel_to_abs(&self, v: Vec2) -> Vec2 {
        v * self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(anchor: BarAnchor, dir: FillDirection) -> Bar {
        Bar::new(
            Vec2::new(100.0, 50.0),
            Vec2::new(200.0, 40.0),
            100.0,
            0.0,
            anchor,
            dir,
        )
    }

    #[test]
    fn test_fullness_clamps_to_unit_range() {
        let mut b = bar(BarAnchor::Left, FillDirection::Horizontal);
        b.max_value = 10.0;
        b.curr_value = 35.0;
        assert_eq!(b.fullness(), 1.0);
        b.curr_value = -35.0;
        assert_eq!(b.fullness(), -1.0);
        b.curr_value = 5.0;
        assert_eq!(b.fullness(), 0.5);
    }

    #[test]
    fn test_fullness_zero_max() {
        let mut b = bar(BarAnchor::Left, FillDirection::Horizontal);
        b.max_value = 0.0;
        b.curr_value = 3.0;
        assert_eq!(b.fullness(), 0.0);
    }

    #[test]
    fn test_set_curr_value_clamps_magnitude() {
        let mut b = bar(BarAnchor::Left, FillDirection::Horizontal);
        b.set_curr_value(250.0);
        assert_eq!(b.curr_value(), 100.0);
        b.set_curr_value(-250.0);
        assert_eq!(b.curr_value(), -100.0);
        b.set_curr_value(42.0);
        assert_eq!(b.curr_value(), 42.0);
    }

    #[test]
    fn test_full_horizontal_left_bar_fills_whole_rect() {
        let mut b = bar(BarAnchor::Left, FillDirection::Horizontal);
        b.set_curr_value(100.0);
        let (pos, size) = b.fill_rect();
        assert_eq!(pos, Vec2::new(100.0, 50.0));
        assert_eq!(size, Vec2::new(200.0, 40.0));
    }

    #[test]
    fn test_empty_horizontal_left_bar_is_zero_width_at_anchor() {
        let b = bar(BarAnchor::Left, FillDirection::Horizontal);
        let (pos, size) = b.fill_rect();
        assert_eq!(pos, Vec2::new(100.0, 50.0));
        assert_eq!(size, Vec2::new(0.0, 40.0));
    }

    #[test]
    fn test_half_horizontal_right_bar_cuts_from_left() {
        let mut b = bar(BarAnchor::Right, FillDirection::Horizontal);
        b.set_curr_value(50.0);
        let (pos, size) = b.fill_rect();
        // the empty half is removed at the side opposite the anchor
        assert_eq!(pos, Vec2::new(200.0, 50.0));
        assert_eq!(size, Vec2::new(100.0, 40.0));
    }

    #[test]
    fn test_vertical_bot_bar_keeps_full_width() {
        let mut b = bar(BarAnchor::Bot, FillDirection::Vertical);
        b.set_curr_value(25.0);
        let (pos, size) = b.fill_rect();
        assert_eq!(size, Vec2::new(200.0, 10.0));
        assert_eq!(pos, Vec2::new(100.0, 50.0 + 30.0));
    }

    #[test]
    fn test_scale_center_shrinks_both_axes() {
        let mut b = bar(BarAnchor::Center, FillDirection::Scale);
        b.set_curr_value(50.0);
        let (pos, size) = b.fill_rect();
        assert_eq!(size, Vec2::new(100.0, 20.0));
        assert_eq!(pos, Vec2::new(100.0 + 50.0, 50.0 + 10.0));
    }

    #[test]
    fn test_split_horizontal_positive_fills_right_of_center() {
        let mut b = bar(BarAnchor::Left, FillDirection::Horizontal);
        b.set_split(true);
        b.set_curr_value(100.0);
        let (pos, size) = b.fill_rect();
        assert_eq!(pos, Vec2::new(200.0, 50.0));
        assert_eq!(size, Vec2::new(100.0, 40.0));
    }

    #[test]
    fn test_split_horizontal_negative_fills_left_of_center() {
        let mut b = bar(BarAnchor::Left, FillDirection::Horizontal);
        b.set_split(true);
        b.set_curr_value(-100.0);
        let (pos, size) = b.fill_rect();
        assert_eq!(pos, Vec2::new(100.0, 50.0));
        assert_eq!(size, Vec2::new(100.0, 40.0));
    }

    #[test]
    fn test_split_vertical_flips_sign() {
        let mut b = bar(BarAnchor::Top, FillDirection::Vertical);
        b.set_split(true);
        b.set_curr_value(100.0);
        // vertical split negates fullness, so a positive value fills upward
        // from the center
        let (pos, size) = b.fill_rect();
        assert_eq!(size, Vec2::new(200.0, 20.0));
        assert_eq!(pos, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_anchor_names_parse() {
        assert_eq!("left".parse::<BarAnchor>(), Ok(BarAnchor::Left));
        assert_eq!("bot".parse::<BarAnchor>(), Ok(BarAnchor::Bot));
        let err = "bottom".parse::<BarAnchor>().unwrap_err();
        assert_eq!(err.kind, "anchor_pos");
        assert_eq!(err.given, "bottom");
    }

    #[test]
    fn test_fill_direction_names_parse() {
        assert_eq!(
            "scale".parse::<FillDirection>(),
            Ok(FillDirection::Scale)
        );
        assert!("diagonal".parse::<FillDirection>().is_err());
    }

    #[test]
    fn test_bar_style_from_json() {
        let style: BarStyle = serde_json::from_str(
            r#"{ "border_color": [10, 20, 30], "border_width": 2, "fill_color": [200, 0, 0, 128] }"#,
        )
        .unwrap();
        assert_eq!(style.border_color, Rgba::rgb(10, 20, 30));
        assert_eq!(style.border_width, 2);
        assert_eq!(style.fill_color, Rgba::rgba(200, 0, 0, 128));
    }
}
