// simulation/integrator.rs
// Fixed-step integrator: accumulates frame time and runs the two-pass
// velocity/position update at a constant timestep

use ultraviolet::Vec2;

use super::{forces, StepParams};
use crate::ball::{Ball, BallStore};
use crate::profile_scope;

pub struct Integrator {
    pub time_step: f32,
    pub max_frame_time: f32,
    accumulator: f32,
    steps: u64,
    accelerations: Vec<Vec2>,
}

impl Integrator {
    pub fn new(time_step: f32, max_frame_time: f32) -> Self {
        Self {
            time_step,
            max_frame_time,
            accumulator: 0.0,
            steps: 0,
            accelerations: Vec::new(),
        }
    }

    /// Time carried over to the next frame.
    pub fn remainder(&self) -> f32 {
        self.accumulator
    }

    /// Total fixed steps run since creation or the last reset.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.steps = 0;
    }

    /// Feed `elapsed` seconds of real time and run as many fixed steps as fit.
    /// Returns the number of steps taken.
    pub fn advance(&mut self, store: &mut BallStore, params: &StepParams, elapsed: f32) -> usize {
        if !(self.time_step > 0.0) {
            return 0;
        }
        // The limit may be negative or NaN, where clamp would panic.
        self.accumulator += elapsed.max(0.0).min(self.max_frame_time.max(0.0));
        let mut taken = 0;
        while self.accumulator >= self.time_step {
            self.step(store, params);
            self.accumulator -= self.time_step;
            taken += 1;
        }
        taken
    }

    /// One fixed step. Every velocity is updated from the current positions
    /// before any position moves.
    pub fn step(&mut self, store: &mut BallStore, params: &StepParams) {
        profile_scope!("fixed_step");
        let dt = self.time_step;
        forces::accelerations(store, params, &mut self.accelerations);

        let balls = store.balls_mut();
        for (ball, acc) in balls.iter_mut().zip(&self.accelerations) {
            ball.vel += *acc * dt;
        }
        for ball in balls.iter_mut() {
            ball.pos += ball.vel * dt;
            collide_bounds(ball, params);
        }
        self.steps += 1;
    }
}

/// Clamp a ball to the floor (and the optional side walls), reflecting the
/// normal velocity through the negative restitution coefficient.
pub fn collide_bounds(ball: &mut Ball, params: &StepParams) {
    if ball.pos.y < params.floor_y {
        ball.pos.y = params.floor_y;
        ball.vel.y *= params.restitution;
    }

    if let Some(half_width) = params.wall_half_width {
        if ball.pos.x < -half_width {
            ball.pos.x = -half_width;
            ball.vel.x *= params.restitution;
        } else if ball.pos.x > half_width {
            ball.pos.x = half_width;
            ball.vel.x *= params.restitution;
        }
    }
}
