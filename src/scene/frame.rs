use ultraviolet::Vec2;

use crate::query::QueryBuffer;

/// Scratch state threaded through one frame: written by gameplay
/// interpretation, read back by the next render pass. Owned by the frame
/// driver, never by the scene.
#[derive(Clone, Debug)]
pub struct FrameContext {
    pub queries: QueryBuffer,
    /// Cursor in world space as of the last interpretation.
    pub mouse_world: Vec2,
    /// World-space cursor movement since the previous frame.
    pub mouse_delta: Vec2,
    pub panning: bool,
}

impl FrameContext {
    pub fn new(max_connections: usize) -> Self {
        Self {
            queries: QueryBuffer::new(max_connections),
            mouse_world: Vec2::zero(),
            mouse_delta: Vec2::zero(),
            panning: false,
        }
    }
}

/// What happened during one `Scene::update`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub steps: usize,
    pub quit: bool,
    pub restarted: bool,
}
