// simulation/mod.rs
// Re-exports and module declarations for simulation submodules

pub mod forces;
pub mod integrator;
pub use integrator::*;

use crate::config::SceneConfig;
use crate::scene::GameMode;

/// Parameters read by one fixed step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepParams {
    pub gravity: f32,
    /// Negative: flips and attenuates the normal velocity on impact.
    pub restitution: f32,
    pub floor_y: f32,
    pub wall_half_width: Option<f32>,
    /// Spring constant per unit mass.
    pub spring_stiffness: f32,
}

impl StepParams {
    pub fn new(config: &SceneConfig, mode: &GameMode) -> Self {
        Self {
            gravity: mode.gravity,
            restitution: mode.restitution,
            floor_y: config.floor_y,
            wall_half_width: config.wall_half_width,
            spring_stiffness: config.spring_stiffness,
        }
    }
}

#[cfg(test)]
mod tests;
