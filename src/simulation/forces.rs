//! Force calculation for the spring network.
//!
//! Each ball feels gravity, a Hookean pull from every spring it holds and a
//! velocity-proportional friction. Forces are turned into accelerations here
//! so the integrator only has to scale by the timestep.

use ultraviolet::Vec2;

use crate::ball::{Ball, BallStore};
use crate::config;
use crate::profile_scope;

use super::StepParams;

/// Hookean force on `ball` from the spring towards `other_pos`.
///
/// Positive when stretched (pulls towards the other end), negative when
/// compressed. Coincident endpoints have no defined direction and yield zero.
pub fn spring_force(ball_pos: Vec2, other_pos: Vec2, rest_length: f32, stiffness: f32) -> Vec2 {
    let delta = other_pos - ball_pos;
    let length = delta.mag();
    if length < config::SPRING_MIN_LENGTH {
        return Vec2::zero();
    }
    delta / length * (stiffness * (length - rest_length))
}

/// Total force acting on one ball given the current positions of its
/// neighbours.
pub fn net_force(ball: &Ball, store: &BallStore, params: &StepParams) -> Vec2 {
    let stiffness = params.spring_stiffness * ball.mass;
    let mut force = Vec2::new(0.0, params.gravity * ball.mass);
    for spring in ball.springs() {
        // Springs always resolve while the graph is valid.
        if let Ok(other) = store.get(spring.other) {
            force += spring_force(ball.pos, other.pos, spring.rest_length, stiffness);
        }
    }
    force - ball.vel * ball.friction
}

/// Fill `out` with the acceleration of every ball, in container order.
pub fn accelerations(store: &BallStore, params: &StepParams, out: &mut Vec<Vec2>) {
    profile_scope!("forces_accelerations");
    out.clear();
    out.extend(store.balls().iter().map(|ball| {
        if ball.mass > 0.0 {
            net_force(ball, store, params) / ball.mass
        } else {
            Vec2::zero()
        }
    }));
}
