// Integrator and force tests

use super::forces::spring_force;
use super::{Integrator, StepParams};
use crate::ball::BallStore;
use ultraviolet::Vec2;

fn default_params() -> StepParams {
    StepParams {
        gravity: -9.81,
        restitution: -0.8,
        floor_y: 0.0,
        wall_half_width: None,
        spring_stiffness: 100.0,
    }
}

#[cfg(test)]
mod forces {
    use super::*;

    #[test]
    fn stretched_spring_pulls_towards_other_end() {
        let f = spring_force(Vec2::zero(), Vec2::new(2.0, 0.0), 1.5, 10.0);
        assert!((f.x - 5.0).abs() < 1e-6);
        assert_eq!(f.y, 0.0);
    }

    #[test]
    fn compressed_spring_pushes_away() {
        let f = spring_force(Vec2::zero(), Vec2::new(0.0, 1.0), 1.5, 10.0);
        assert!((f.y + 5.0).abs() < 1e-6);
    }

    #[test]
    fn coincident_endpoints_produce_no_force() {
        let p = Vec2::new(1.0, 1.0);
        assert_eq!(spring_force(p, p, 1.5, 10.0), Vec2::zero());
    }

    #[test]
    fn spring_at_rest_length_keeps_pair_still_without_gravity() {
        let mut store = BallStore::with_capacity(2).unwrap();
        let a = store.insert(Vec2::new(0.0, 1.0), 0.5, 0.05).unwrap();
        let b = store.insert(Vec2::new(1.5, 1.0), 0.5, 0.05).unwrap();
        store.connect(a, b, 1.5).unwrap();

        let params = StepParams { gravity: 0.0, ..default_params() };
        let mut integrator = Integrator::new(0.01, 0.25);
        for _ in 0..50 {
            integrator.step(&mut store, &params);
        }
        assert!((store.get(a).unwrap().pos - Vec2::new(0.0, 1.0)).mag() < 1e-5);
        assert!((store.get(b).unwrap().pos - Vec2::new(1.5, 1.0)).mag() < 1e-5);
    }
}

#[cfg(test)]
mod integration {
    use super::*;

    #[test]
    fn ball_resting_on_floor_stays_on_floor() {
        let mut store = BallStore::with_capacity(1).unwrap();
        let id = store.insert(Vec2::new(0.0, 0.0), 0.5, 0.05).unwrap();
        let mut integrator = Integrator::new(0.01, 0.25);

        integrator.step(&mut store, &default_params());

        assert_eq!(store.get(id).unwrap().pos.y, 0.0);
    }

    #[test]
    fn falling_ball_descends_then_bounces() {
        let mut store = BallStore::with_capacity(1).unwrap();
        let id = store.insert(Vec2::new(0.0, 5.0), 0.5, 0.05).unwrap();
        let params = default_params();
        let mut integrator = Integrator::new(0.01, 0.25);

        let mut last_y = store.get(id).unwrap().pos.y;
        let mut contact_step = None;
        for step in 0..300 {
            integrator.step(&mut store, &params);
            let ball = store.get(id).unwrap();
            if ball.pos.y <= params.floor_y {
                assert_eq!(ball.pos.y, params.floor_y);
                assert!(ball.vel.y > 0.0, "velocity should flip upwards on contact");
                contact_step = Some(step);
                break;
            }
            assert!(ball.pos.y < last_y, "ball should descend before contact");
            assert!(ball.vel.y < 0.0);
            last_y = ball.pos.y;
        }

        // sqrt(2 * 5 / 9.81) is about one second, i.e. ~100 steps.
        let contact_step = contact_step.expect("ball never reached the floor");
        assert!(contact_step >= 95, "contact too early: {}", contact_step);
    }

    #[test]
    fn bounce_is_attenuated_by_restitution() {
        let mut store = BallStore::with_capacity(1).unwrap();
        let id = store.insert(Vec2::new(0.0, 0.001), 0.5, 0.0).unwrap();
        store.get_mut(id).unwrap().vel = Vec2::new(0.0, -2.0);
        let mut integrator = Integrator::new(0.01, 0.25);

        integrator.step(&mut store, &default_params());

        let vy = store.get(id).unwrap().vel.y;
        let impact = -2.0 - 9.81 * 0.01;
        assert!((vy - impact * -0.8).abs() < 1e-5);
    }

    #[test]
    fn walls_reflect_horizontal_velocity() {
        let mut store = BallStore::with_capacity(1).unwrap();
        let id = store.insert(Vec2::new(0.99, 1.0), 0.5, 0.0).unwrap();
        store.get_mut(id).unwrap().vel = Vec2::new(5.0, 0.0);
        let params = StepParams { gravity: 0.0, wall_half_width: Some(1.0), ..default_params() };
        let mut integrator = Integrator::new(0.01, 0.25);

        integrator.step(&mut store, &params);

        let ball = store.get(id).unwrap();
        assert_eq!(ball.pos.x, 1.0);
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn accumulator_carries_remainder() {
        let mut store = BallStore::with_capacity(1).unwrap();
        store.insert(Vec2::new(0.0, 3.0), 0.5, 0.05).unwrap();
        let mut integrator = Integrator::new(0.01, 0.25);

        let taken = integrator.advance(&mut store, &default_params(), 0.035);
        assert_eq!(taken, 3);
        assert!((integrator.remainder() - 0.005).abs() < 1e-4);

        let taken = integrator.advance(&mut store, &default_params(), 0.006);
        assert_eq!(taken, 1);
        assert_eq!(integrator.steps(), 4);
    }

    #[test]
    fn long_frames_are_clamped() {
        let mut store = BallStore::with_capacity(1).unwrap();
        let mut integrator = Integrator::new(0.01, 0.25);
        let taken = integrator.advance(&mut store, &default_params(), 10.0);
        assert!(taken <= 25);
    }

    #[test]
    fn invalid_frame_limit_runs_no_steps() {
        let mut store = BallStore::with_capacity(1).unwrap();
        for limit in [-1.0, f32::NAN] {
            let mut integrator = Integrator::new(0.01, limit);
            assert_eq!(integrator.advance(&mut store, &default_params(), 0.1), 0);
            assert_eq!(integrator.remainder(), 0.0);
        }
        let mut integrator = Integrator::new(f32::NAN, 0.25);
        assert_eq!(integrator.advance(&mut store, &default_params(), 0.1), 0);
    }
}
