// renderer/mod.rs
// Drawing and camera seams used by the scene, plus the per-frame input record.
// Windowing and textures live outside this crate; anything that can draw a
// line and a circle in world coordinates can back a scene.

pub mod camera;
pub mod input;
pub mod recorder;

pub use camera::{Camera, ViewCamera};
pub use input::{ActiveKey, InputSnapshot};
pub use recorder::{DrawCommand, DrawRecorder};

use ultraviolet::Vec2;

pub trait Renderer {
    /// Draw a spring or preview line. `highlighted` marks real springs;
    /// preview lines to candidate balls are drawn unhighlighted.
    fn draw_line(&mut self, start: Vec2, end: Vec2, highlighted: bool);

    fn draw_circle(&mut self, center: Vec2, radius: f32);

    /// Viewport size in pixels.
    fn viewport_size(&self) -> (u32, u32);
}

#[cfg(test)]
mod tests;
