use ultraviolet::Vec2;

use crate::config;

pub trait Camera {
    /// Screen pixel coordinates (origin top-left, y down) to world space.
    fn view_to_world(&self, screen_x: f32, screen_y: f32) -> Vec2;

    /// Queue a pan by `delta` world units.
    fn pan(&mut self, delta: Vec2);

    /// Apply queued movement. Called once per frame.
    fn update(&mut self);
}

/// Orthographic camera centred on `pos`, `scale` world units per half
/// viewport height. Pans are eased in over a few updates.
#[derive(Clone, Debug)]
pub struct ViewCamera {
    pub pos: Vec2,
    pub scale: f32,
    pub smoothing: f32,
    width: u32,
    height: u32,
    pending: Vec2,
}

impl ViewCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pos: Vec2::zero(),
            scale: config::CAMERA_SCALE,
            smoothing: config::CAMERA_SMOOTHING,
            width,
            height,
            pending: Vec2::zero(),
        }
    }

    /// Scroll steps double/halve the scale around the cursor.
    pub fn zoom(&mut self, scroll: f32, screen_x: f32, screen_y: f32) {
        let steps = 5.0;
        let zoom = (-scroll / steps).exp2();
        let target = self.view_to_world(screen_x, screen_y) - self.pos;
        self.pos += target * (1.0 - zoom);
        self.scale *= zoom;
    }

    /// Inverse of [`Camera::view_to_world`].
    pub fn world_to_view(&self, world: Vec2) -> (f32, f32) {
        let height = self.height.max(1) as f32;
        let local = (world - self.pos) / self.scale;
        let sx = (local.x + self.width as f32 / height) * height / 2.0;
        let sy = (1.0 - local.y) * height / 2.0;
        (sx, sy)
    }

    /// Pan still waiting to be applied.
    pub fn pending(&self) -> Vec2 {
        self.pending
    }
}

impl Camera for ViewCamera {
    fn view_to_world(&self, screen_x: f32, screen_y: f32) -> Vec2 {
        let height = self.height.max(1) as f32;
        let mut mouse = Vec2::new(screen_x, screen_y);
        mouse *= 2.0 / height;
        mouse.y -= 1.0;
        mouse.y *= -1.0;
        mouse.x -= self.width as f32 / height;
        mouse * self.scale + self.pos
    }

    fn pan(&mut self, delta: Vec2) {
        self.pending += delta;
    }

    fn update(&mut self) {
        let step = self.pending * self.smoothing.clamp(0.0, 1.0);
        self.pos += step;
        self.pending -= step;
        if self.pending.mag_sq() < 1.0e-10 {
            self.pos += self.pending;
            self.pending = Vec2::zero();
        }
    }
}
