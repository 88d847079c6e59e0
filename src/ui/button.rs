//! Clickable button component
//!
//! A button is a bordered, filled rectangle with centered auto-fit text and
//! hover/press visual states derived from its base colors each frame. Text,
//! position, size and colors are [`Binding`]s, so any of them can be a live
//! producer instead of a stored value.
//!
//! Pointer state is polled once per frame through [`Button::update`]; the
//! optional `on_hover` callback fires every hovered frame and `on_click`
//! fires on the press edge.
//!
//! # Example
//!
//! ```no_run
//! # fn demo(canvas: &mut sdl2::render::Canvas<sdl2::video::Window>,
//! #         fonts: &mut game_hud::fonts::FontRegistry,
//! #         mouse: &sdl2::mouse::MouseState) -> Result<(), String> {
//! use game_hud::ui::Button;
//! use glam::Vec2;
//!
//! let mut play = Button::new("PLAY", Vec2::new(220.0, 140.0), 200, 60)
//!     .on_click(|| println!("starting"));
//!
//! // each frame
//! play.update(0.016, mouse);
//! play.render(canvas, fonts)?;
//! # Ok(())
//! # }
//! ```

use super::{draw_border, fit_txt_size};
use crate::binding::Binding;
use crate::colors::{self, Rgba};
use crate::fonts::{FontRegistry, TEXT_FAMILY};
use glam::Vec2;
use sdl2::mouse::MouseState;
use sdl2::pixels::Color as SdlColor;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use serde::Deserialize;

/// Configuration for button appearance
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    /// Text color
    pub txt_color: Binding<Rgba>,

    /// Fill color
    pub fill_color: Binding<Rgba>,

    /// Outline color
    pub out_color: Binding<Rgba>,

    /// Outline thickness in pixels
    pub out_width: u32,

    /// Target ratio of text size to box size; auto-fit keeps the rendered
    /// text within [ratio/2, ratio] of the box dimensions
    pub txt_size_ratio: f32,

    /// Correct the font size when the text leaves the target band?
    pub auto_txt_resize: bool,

    /// Font family for the label
    pub font_family: String,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            txt_color: colors::WHITE.into(),
            fill_color: colors::MIDNIGHT.into(),
            out_color: colors::GREY.into(),
            out_width: 3,
            txt_size_ratio: 0.6,
            auto_txt_resize: true,
            font_family: TEXT_FAMILY.to_string(),
        }
    }
}

/// A clickable rectangle with hover/press visual state and auto-fit text.
///
/// # Visual state derivation
///
/// Hovering applies [`colors::contrast_dark_light`] to all three colors;
/// pressing additionally darkens the fill and steps the outline and text
/// colors (luminance-weighted) toward the darkened fill. Base colors are
/// never mutated; the derived look is recomputed every render.
pub struct Button {
    txt: Binding<String>,
    pos: Binding<Vec2>,
    width: Binding<u32>,
    height: Binding<u32>,

    /// Visual styling.
    pub style: ButtonStyle,

    on_click: Option<Box<dyn FnMut()>>,
    on_hover: Option<Box<dyn FnMut()>>,

    txt_size: f32,
    hovering: bool,
    pressed: bool,
}

impl Button {
    /// Creates a button with default styling.
    ///
    /// The initial font size is half the button height.
    pub fn new(
        txt: impl Into<Binding<String>>,
        pos: impl Into<Binding<Vec2>>,
        width: impl Into<Binding<u32>>,
        height: impl Into<Binding<u32>>,
    ) -> Self {
        let height = height.into();
        let txt_size = height.resolve() as f32 / 2.0;
        Button {
            txt: txt.into(),
            pos: pos.into(),
            width: width.into(),
            height,
            style: ButtonStyle::default(),
            on_click: None,
            on_hover: None,
            txt_size,
            hovering: false,
            pressed: false,
        }
    }

    /// Creates a button with custom styling.
    pub fn with_style(
        txt: impl Into<Binding<String>>,
        pos: impl Into<Binding<Vec2>>,
        width: impl Into<Binding<u32>>,
        height: impl Into<Binding<u32>>,
        style: ButtonStyle,
    ) -> Self {
        let mut button = Button::new(txt, pos, width, height);
        button.style = style;
        button
    }

    /// Sets the callback fired on the press edge.
    pub fn on_click(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    /// Sets the callback fired every frame the pointer hovers the button.
    pub fn on_hover(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_hover = Some(Box::new(callback));
        self
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

    pub fn set_width(&mut self, width: impl Into<Binding<u32>>) {
        self.width = width.into();
    }

    pub fn height(&self) -> u32 {
        self.height.resolve()
    }

    pub fn set_height(&mut self, height: impl Into<Binding<u32>>) {
        self.height = height.into();
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Polls pointer state for this frame.
    pub fn update(&mut self, _dt: f32, mouse: &MouseState) {
        self.update_pointer(
            Vec2::new(mouse.x() as f32, mouse.y() as f32),
            mouse.left(),
        );
    }

    // State machine: idle -> hovering on pointer entry, hovering -> pressed
    // on primary press, back on release or exit.
    fn update_pointer(&mut self, pointer: Vec2, primary_down: bool) {
        if self.contains(pointer) {
            self.hovering = true;
            if let Some(callback) = self.on_hover.as_mut() {
                callback();
            }
            if primary_down {
                if !self.pressed {
                    self.pressed = true;
                    if let Some(callback) = self.on_click.as_mut() {
                        callback();
                    }
                }
            } else {
                self.pressed = false;
            }
        } else {
            self.hovering = false;
            self.pressed = false;
        }
    }

    /// Strict-interior containment test; boundary pixels are outside.
    pub fn contains(&self, p: Vec2) -> bool {
        let pos = self.pos.resolve();
        let w = self.width.resolve() as f32;
        let h = self.height.resolve() as f32;
        p.x > pos.x && p.x < pos.x + w && p.y > pos.y && p.y < pos.y + h
    }

    /// Draws the button: fill, outline, then centered label.
    pub fn render(
        &mut self,
        canvas: &mut Canvas<Window>,
        fonts: &mut FontRegistry,
    ) -> Result<(), String> {
        let mut fill_color = self.style.fill_color.resolve();
        let mut out_color = self.style.out_color.resolve();
        let mut txt_color = self.style.txt_color.resolve();
        if self.hovering {
            fill_color = colors::contrast_dark_light(fill_color);
            out_color = colors::contrast_dark_light(out_color);
            txt_color = colors::contrast_dark_light(txt_color);
        }
        if self.pressed {
            fill_color = colors::dark(fill_color);
            out_color = colors::step_to(out_color, fill_color, true);
            txt_color = colors::step_to(txt_color, fill_color, true);
        }

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
                // one correction per frame, then re-measure once
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
        let dst = Rect::new(
            rect.x() + (width as i32 - txt_w as i32) / 2,
            rect.y() + (height as i32 - txt_h as i32) / 2,
            txt_w,
            txt_h,
        );
        canvas.copy(&texture, None, dst)
    }
}
