//! HUD widget kit for 2D games
//!
//! This crate provides the small set of heads-up-display widgets a 2D game
//! composes its screens from - a clamped camera viewport, progress bars,
//! buttons and text boxes - plus the color-manipulation helpers their
//! hover/press/contrast looks are derived from.
//!
//! # Architecture
//!
//! - Widgets are fixed-shape, single-purpose draw calls issued once per
//!   frame: construct once, then `update(dt)` followed by `render(...)`
//!   against the SDL2 canvas. There is no layout engine and no animation
//!   system.
//! - Widget attributes are [`binding::Binding`]s - a stored value or a
//!   zero-argument producer re-read every frame - so HUD elements track game
//!   state without wiring.
//! - The [`fonts::FontRegistry`] is explicit and injected into render calls;
//!   nothing in the crate holds ambient global state.
//! - [`colors::Rgba`] is a standalone value type; SDL2's color representation
//!   appears only at the canvas boundary.
//! - Style defaults can come from a JSON [`theme::Theme`] file with a user
//!   override under the platform config directory.
//!
//! # Example
//!
//! ```no_run
//! # fn demo(canvas: &mut sdl2::render::Canvas<sdl2::video::Window>,
//! #         mouse: sdl2::mouse::MouseState) -> Result<(), String> {
//! use game_hud::fonts::FontRegistry;
//! use game_hud::ui::{Bar, BarAnchor, Button, FillDirection};
//! use glam::Vec2;
//!
//! let ttf = sdl2::ttf::init().map_err(|e| e.to_string())?;
//! let mut fonts = FontRegistry::new(&ttf)?;
//!
//! let mut health = Bar::new(
//!     Vec2::new(20.0, 20.0),
//!     Vec2::new(200.0, 24.0),
//!     100.0,
//!     100.0,
//!     BarAnchor::Left,
//!     FillDirection::Horizontal,
//! );
//! let mut quit = Button::new("QUIT", Vec2::new(220.0, 150.0), 200, 60)
//!     .on_click(|| println!("bye"));
//!
//! // each frame
//! health.set_curr_value(64.0);
//! quit.update(0.016, &mouse);
//! health.render(canvas)?;
//! quit.render(canvas, &mut fonts)?;
//! # Ok(())
//! # }
//! ```

pub mod binding;
pub mod colors;
pub mod fonts;
pub mod theme;
pub mod ui;

pub use binding::Binding;
pub use colors::Rgba;
pub use fonts::FontRegistry;
pub use theme::Theme;
pub use ui::{
    Bar, BarAnchor, BarStyle, Button, ButtonStyle, Camera, FillDirection, HAlign, TextBox,
    TextBoxStyle, UnknownNameError, VAlign,
};
