//! Camera viewport component
//!
//! A camera is a rectangular viewport over a larger world texture. Its
//! position is addressed by center point, it never leaves the bounds of the
//! backing texture, and rendering copies the viewed sub-rectangle centered
//! onto the output canvas.
//!
//! # Example
//!
//! ```no_run
//! # fn demo(canvas: &mut sdl2::render::Canvas<sdl2::video::Window>,
//! #         world: &sdl2::render::Texture) -> Result<(), String> {
//! use game_hud::ui::Camera;
//! use glam::Vec2;
//!
//! let mut camera = Camera::new(0, 0, 640, 360, 2048, 2048);
//!
//! // each frame: follow the player, then draw the visible slice
//! camera.center_on(Vec2::new(900.0, 512.0));
//! camera.render(canvas, world)?;
//! # Ok(())
//! # }
//! ```

use glam::Vec2;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// A clamped viewport over a larger backing texture.
///
/// The backing texture's pixel bounds are fixed at construction; the camera
/// stores them instead of borrowing the texture, which is passed into
/// [`render`](Camera::render) each frame like every other SDL resource.
#[derive(Debug, Clone)]
pub struct Camera {
    view: Rect,
    bounds: Rect,
}

impl Camera {
    /// Creates a viewport at (`left`, `top`) sized `width` x `height` over a
    /// backing texture of `surface_width` x `surface_height` pixels.
    pub fn new(
        left: i32,
        top: i32,
        width: u32,
        height: u32,
        surface_width: u32,
        surface_height: u32,
    ) -> Self {
        Camera {
            view: Rect::new(left, top, width, height),
            bounds: Rect::new(0, 0, surface_width, surface_height),
        }
    }

    /// The viewport's center point.
    pub fn pos(&self) -> Vec2 {
        Vec2::new(
            self.view.x() as f32 + self.view.width() as f32 / 2.0,
            self.view.y() as f32 + self.view.height() as f32 / 2.0,
        )
    }

    /// Repositions the viewport's top-left from a desired center point.
    ///
    /// Does not clamp; use [`center_on`](Camera::center_on) to keep the
    /// viewport inside the backing bounds.
    pub fn set_pos(&mut self, pos: Vec2) {
        self.view
            .set_x((pos.x - self.view.width() as f32 / 2.0) as i32);
        self.view
            .set_y((pos.y - self.view.height() as f32 / 2.0) as i32);
    }

    /// Centers the viewport on a point, clamped inside the backing bounds.
    ///
    /// A viewport larger than the backing texture is centered on it along
    /// the oversized axis.
    pub fn center_on(&mut self, center: Vec2) {
        self.set_pos(center);
        self.view = clamp_rect(self.view, self.bounds);
    }

    /// The current source rectangle into the backing texture.
    pub fn view(&self) -> Rect {
        self.view
    }

    /// Copies the viewed slice of `world` onto the canvas, centered in the
    /// canvas output size.
    pub fn render(&self, canvas: &mut Canvas<Window>, world: &Texture) -> Result<(), String> {
        let (out_w, out_h) = canvas.output_size()?;
        let x = ((out_w as f32 - self.view.width() as f32) * 0.5) as i32;
        let y = ((out_h as f32 - self.view.height() as f32) * 0.5) as i32;
        let dst = Rect::new(x, y, self.view.width(), self.view.height());
        canvas.copy(world, self.view, dst)
    }
}

// Slide the rect inside the bounds; center it on any axis where the rect
// is the larger one.
fn clamp_rect(rect: Rect, bounds: Rect) -> Rect {
    let x = if rect.width() >= bounds.width() {
        bounds.x() + (bounds.width() as i32 - rect.width() as i32) / 2
    } else {
        rect.x().clamp(
            bounds.x(),
            bounds.x() + (bounds.width() - rect.width()) as i32,
        )
    };
    let y = if rect.height() >= bounds.height() {
        bounds.y() + (bounds.height() as i32 - rect.height() as i32) / 2
    } else {
        rect.y().clamp(
            bounds.y(),
            bounds.y() + (bounds.height() - rect.height()) as i32,
        )
    };
    Rect::new(x, y, rect.width(), rect.height())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_is_view_center() {
        let camera = Camera::new(10, 20, 100, 60, 1000, 1000);
        assert_eq!(camera.pos(), Vec2::new(60.0, 50.0));
    }

    #[test]
    fn test_set_pos_moves_top_left() {
        let mut camera = Camera::new(0, 0, 100, 60, 1000, 1000);
        camera.set_pos(Vec2::new(500.0, 300.0));
        assert_eq!(camera.view(), Rect::new(450, 270, 100, 60));
    }

    #[test]
    fn test_center_on_interior_point() {
        let mut camera = Camera::new(0, 0, 100, 60, 1000, 1000);
        camera.center_on(Vec2::new(500.0, 300.0));
        assert_eq!(camera.pos(), Vec2::new(500.0, 300.0));
    }

    #[test]
    fn test_center_on_clamps_to_bounds() {
        let mut camera = Camera::new(0, 0, 50, 40, 200, 100);

        camera.center_on(Vec2::new(10.0, 10.0));
        assert_eq!(camera.view(), Rect::new(0, 0, 50, 40));
        assert_eq!(camera.pos(), Vec2::new(25.0, 20.0));

        camera.center_on(Vec2::new(190.0, 95.0));
        assert_eq!(camera.view(), Rect::new(150, 60, 50, 40));
    }

    #[test]
    fn test_oversized_viewport_is_centered() {
        let mut camera = Camera::new(0, 0, 300, 150, 200, 100);
        camera.center_on(Vec2::new(0.0, 0.0));
        assert_eq!(camera.view(), Rect::new(-50, -25, 300, 150));
    }
}
