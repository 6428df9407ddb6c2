use serde::{Deserialize, Serialize};

/// Key or button driving a gameplay action this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActiveKey {
    #[default]
    None,
    Delete,
    Teleport,
    MoonMode,
    DefaultMode,
    NoGravMode,
}

/// Immutable view of the input devices for one frame, produced by the
/// platform layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub mouse_x: f32,
    pub mouse_y: f32,
    pub mouse_delta_x: f32,
    pub mouse_delta_y: f32,
    pub left_down: bool,
    pub right_down: bool,
    pub active_key: ActiveKey,
    pub quit_requested: bool,
    pub restart_requested: bool,
}

impl InputSnapshot {
    /// Cursor at the given screen position with nothing pressed.
    pub fn at(mouse_x: f32, mouse_y: f32) -> Self {
        Self {
            mouse_x,
            mouse_y,
            ..Default::default()
        }
    }

    pub fn with_key(mut self, key: ActiveKey) -> Self {
        self.active_key = key;
        self
    }

    pub fn with_left(mut self) -> Self {
        self.left_down = true;
        self
    }

    /// Right button held while the cursor moved by `(dx, dy)` pixels.
    pub fn with_drag(mut self, dx: f32, dy: f32) -> Self {
        self.right_down = true;
        self.mouse_delta_x = dx;
        self.mouse_delta_y = dy;
        self
    }

    pub fn has_action(&self) -> bool {
        self.left_down || self.active_key != ActiveKey::None
    }
}
