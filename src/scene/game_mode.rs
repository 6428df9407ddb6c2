use serde::{Deserialize, Serialize};

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeKind {
    Default,
    Moon,
    NoGravity,
}

/// Physics tunables shared by every ball in a scene. Only replaced as a
/// whole, through one of the presets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameMode {
    pub kind: ModeKind,
    pub gravity: f32,
    /// Bounce coefficient, negative so impacts invert the normal velocity.
    pub restitution: f32,
    /// Mass given to newly created balls.
    pub mass: f32,
}

impl GameMode {
    pub fn standard() -> Self {
        Self {
            kind: ModeKind::Default,
            gravity: config::DEFAULT_GRAVITY,
            restitution: config::DEFAULT_RESTITUTION,
            mass: config::DEFAULT_MASS,
        }
    }

    pub fn moon() -> Self {
        Self {
            kind: ModeKind::Moon,
            gravity: config::MOON_GRAVITY,
            restitution: config::MOON_RESTITUTION,
            mass: config::MOON_MASS,
        }
    }

    pub fn no_gravity() -> Self {
        Self {
            kind: ModeKind::NoGravity,
            gravity: config::NOGRAV_GRAVITY,
            restitution: config::NOGRAV_RESTITUTION,
            mass: config::NOGRAV_MASS,
        }
    }

    pub fn preset(kind: ModeKind) -> Self {
        match kind {
            ModeKind::Default => Self::standard(),
            ModeKind::Moon => Self::moon(),
            ModeKind::NoGravity => Self::no_gravity(),
        }
    }

    pub fn is_default(&self) -> bool {
        self.kind == ModeKind::Default
    }

    pub fn is_moon(&self) -> bool {
        self.kind == ModeKind::Moon
    }

    pub fn is_no_grav(&self) -> bool {
        self.kind == ModeKind::NoGravity
    }
}

impl Default for GameMode {
    fn default() -> Self {
        Self::standard()
    }
}
