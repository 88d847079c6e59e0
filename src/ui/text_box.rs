//! Static text box component
//!
//! A text box is a bordered, filled rectangle with aligned, auto-fit text
//! and no interaction. Like [`Button`](super::Button), its text, position,
//! size and colors are [`Binding`]s; a producer that formats non-string
//! values (scores, timers) into a `String` gives the box live content.
//!
//! # Example
//!
//! ```no_run
//! # fn demo(canvas: &mut sdl2::render::Canvas<sdl2::video::Window>,
//! #         fonts: &mut game_hud::fonts::FontRegistry) -> Result<(), String> {
//! use game_hud::binding::Binding;
//! use game_hud::ui::{HAlign, TextBox, VAlign};
//! use glam::Vec2;
//!
//! let score = std::rc::Rc::new(std::cell::Cell::new(0u32));
//! let tap = score.clone();
//! let mut box_ = TextBox::new(
//!     Binding::bind(move || format!("SCORE {}", tap.get())),
//!     Vec2::new(8.0, 8.0),
//!     160,
//!     32,
//! );
//! box_.set_align(HAlign::Right, VAlign::Center);
//!
//! // each frame
//! box_.update(0.016);
//! box_.render(canvas, fonts)?;
//! # Ok(())
//! # }
//! ```

use super::{draw_border, fit_txt_size, UnknownNameError};
use crate::binding::Binding;
use crate::colors::{self, Rgba};
use crate::fonts::{FontRegistry, TEXT_FAMILY};
use glam::Vec2;
use sdl2::pixels::Color as SdlColor;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;
use std::str::FromStr;

/// Horizontal text alignment inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

impl HAlign {
    const NAMES: &'static str = "left, center, right";

    /// Interpolation factor over the horizontal slack between box and text.
    pub fn factor(self) -> f32 {
        match self {
            HAlign::Left => 0.0,
            HAlign::Center => 0.5,
            HAlign::Right => 1.0,
        }
    }
}

impl FromStr for HAlign {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(HAlign::Left),
            "center" => Ok(HAlign::Center),
            "right" => Ok(HAlign::Right),
            _ => Err(UnknownNameError::new("h_align", Self::NAMES, s)),
        }
    }
}

impl<'de> Deserialize<'de> for HAlign {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(D::Error::custom)
    }
}

/// Vertical text alignment inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

impl VAlign {
    const NAMES: &'static str = "top, center, bottom";

    /// Interpolation factor over the vertical slack between box and text.
    pub fn factor(self) -> f32 {
        match self {
            VAlign::Top => 0.0,
            VAlign::Center => 0.5,
            VAlign::Bottom => 1.0,
        }
    }
}

impl FromStr for VAlign {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(VAlign::Top),
            "center" => Ok(VAlign::Center),
            "bottom" => Ok(VAlign::Bottom),
            _ => Err(UnknownNameError::new("v_align", Self::NAMES, s)),
        }
    }
}

impl<'de> Deserialize<'de> for VAlign {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(D::Error::custom)
    }
}

/// Configuration for text box appearance
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TextBoxStyle {
    /// Text color
    pub txt_color: Binding<Rgba>,

    /// Fill color
    pub fill_color: Binding<Rgba>,

    /// Outline color
    pub out_color: Binding<Rgba>,

    /// Outline thickness in pixels
    pub out_width: u32,

    /// Target ratio of text size to box size
    pub txt_size_ratio: f32,

    /// Correct the font size when the text leaves the target band?
    pub auto_txt_resize: bool,

    /// Font family for the content
    pub font_family: String,

    /// Horizontal alignment of the text in the box
    pub h_align: HAlign,

    /// Vertical alignment of the text in the box
    pub v_align: VAlign,
}

impl Default for TextBoxStyle {
    fn default() -> Self {
        TextBoxStyle {
            txt_color: colors::WHITE.into(),
            fill_color: colors::CLEAR.into(),
            out_color: colors::GREY.into(),
            out_width: 3,
            txt_size_ratio: 0.6,
            auto_txt_resize: true,
            font_family: TEXT_FAMILY.to_string(),
            h_align: HAlign::Left,
            v_align: VAlign::Center,
        }
    }
}

/// A static-content rectangle with aligned, auto-fit text.
pub struct TextBox {
    txt: Binding<String>,
    pos: Binding<Vec2>,
    width: Binding<u32>,
    height: Binding<u32>,

    /// Visual styling.
    pub style: TextBoxStyle,

    txt_size: f32,
}

impl TextBox {
    /// Creates a text box with default styling (left/center aligned).
    ///
    /// The initial font size is half the box height.
    pub fn new(
        txt: impl Into<Binding<String>>,
        pos: impl Into<Binding<Vec2>>,
        width: impl Into<Binding<u32>>,
        height: impl Into<Binding<u32>>,
    ) -> Self {
        let height = height.into();
        let txt_size = height.resolve() as f32 / 2.0;
        TextBox {
            txt: txt.into(),
            pos: pos.into(),
            width: width.into(),
            height,
            style: TextBoxStyle::default(),
            txt_size,
        }
    }

    /// Creates a text box with custom styling.
    pub fn with_style(
        txt: impl Into<Binding<String>>,
        pos: impl Into<Binding<Vec2>>,
        width: impl Into<Binding<u32>>,
        height: impl Into<Binding<u32>>,
        style: TextBoxStyle,
    ) -> Self {
        let mut text_box = TextBox::new(txt, pos, width, height);
        text_box.style = style;
        text_box
    }

    pub fn txt(&self) -> String {
        self.txt.resolve()
    }

    pub fn set_txt(&mut self, txt: impl Into<Binding<String>>) {
        self.txt = txt.into();
    }

    pub fn pos(&self) -> Vec2 {
        self.pos.resolve()
    }

    pub fn set_pos(&mut self, pos: impl Into<Binding<Vec2>>) {
        self.pos = pos.into();
    }

    pub fn width(&self) -> u32 {
        self.width.resolve()
    }

    pub fn height(&self) -> u32 {
        self.height.resolve()
    }

    /// Sets both alignments.
    pub fn set_align(&mut self, h_align: HAlign, v_align: VAlign) {
        self.style.h_align = h_align;
        self.style.v_align = v_align;
    }

    /// Frame hook for API parity with the interactive widgets; a text box
    /// has no per-frame state.
    pub fn update(&mut self, _dt: f32) {}

    /// Strict-interior containment test; boundary pixels are outside.
    pub fn contains(&self, p: Vec2) -> bool {
        let pos = self.pos.resolve();
        let w = self.width.resolve() as f32;
        let h = self.height.resolve() as f32;
        p.x > pos.x && p.x < pos.x + w && p.y > pos.y && p.y < pos.y + h
    }

    /// Draws the box: fill, outline, then aligned content.
    pub fn render(
        &mut self,
        canvas: &mut Canvas<Window>,
        fonts: &mut FontRegistry,
    ) -> Result<(), String> {
        let fill_color = self.style.fill_color.resolve();
        let out_color = self.style.out_color.resolve();
        let txt_color = self.style.txt_color.resolve();

        let pos = self.pos.resolve();
        let width = self.width.resolve().max(1);
        let height = self.height.resolve().max(1);
        let rect = Rect::new(pos.x as i32, pos.y as i32, width, height);

        canvas.set_draw_color(fill_color);
        canvas.fill_rect(rect)?;
        canvas.set_draw_color(out_color);
        draw_border(canvas, rect, self.style.out_width)?;

        let text = self.txt.resolve();
        if text.is_empty() {
            return Ok(());
        }

        let family = self.style.font_family.clone();
        let font = fonts.txt_size(self.txt_size as u16, &family)?;
        let (mut txt_w, mut txt_h) = font.size_of(&text).map_err(|e| e.to_string())?;
        if self.style.auto_txt_resize {
            if let Some(resized) = fit_txt_size(
                self.txt_size,
                self.style.txt_size_ratio,
                txt_w,
                txt_h,
                width,
                height,
            ) {
                self.txt_size = resized;
                let font = fonts.txt_size(self.txt_size as u16, &family)?;
                (txt_w, txt_h) = font.size_of(&text).map_err(|e| e.to_string())?;
            }
        }

        let font = fonts.txt_size(self.txt_size as u16, &family)?;
        let rendered = font
            .render(&text)
            .blended(SdlColor::from(txt_color))
            .map_err(|e| e.to_string())?;
        let creator = canvas.texture_creator();
        let texture = creator
            .create_texture_from_surface(&rendered)
            .map_err(|e| e.to_string())?;

        // alignment factors interpolate over the slack between box and text
        let slack_x = width as f32 - txt_w as f32;
        let slack_y = height as f32 - txt_h as f32;
        let dst = Rect::new(
            rect.x() + (self.style.h_align.factor() * slack_x) as i32,
            rect.y() + (self.style.v_align.factor() * slack_y) as i32,
            txt_w,
            txt_h,
        );
        canvas.copy(&texture, None, dst)
    }
}
