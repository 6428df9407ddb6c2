// app/mod.rs
// Headless frame driver: feeds scripted input to a Scene at a fixed frame
// rate and records what was drawn instead of opening a window

use crate::scene::Scene;

pub mod script;
pub mod simulation_loop;

pub use script::{Action, Cue, Script, Target};

#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    pub seconds: f32,
    pub fps: u32,
    /// Log a scene summary every this many frames; 0 disables it.
    pub summary_every: u64,
    pub width: u32,
    pub height: u32,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            seconds: 5.0,
            fps: 60,
            summary_every: 60,
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub steps: u64,
    pub restarts: u32,
    /// Balls reset after their state went non-finite.
    pub resets: usize,
    pub quit: bool,
    /// Lines drawn on the last frame.
    pub lines_drawn: usize,
    pub balls: usize,
    pub springs: usize,
    pub kinetic_energy: f32,
}

pub fn run(scene: &mut Scene, script: &Script, options: &RunOptions) -> RunSummary {
    ftlog::info!(
        "running {:.1}s at {} fps with {} scripted cues",
        options.seconds,
        options.fps,
        script.cues().len()
    );
    let summary = simulation_loop::run_frame_loop(scene, script, options);
    ftlog::info!(
        "done after {} frames ({} steps): {} balls, {} springs, ke={:.4}",
        summary.frames,
        summary.steps,
        summary.balls,
        summary.springs,
        summary.kinetic_energy
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{ActiveKey, Camera, ViewCamera};
    use crate::scene::ModeKind;
    use ultraviolet::Vec2;

    fn options(seconds: f32) -> RunOptions {
        RunOptions {
            seconds,
            fps: 60,
            summary_every: 0,
            ..Default::default()
        }
    }

    #[test]
    fn demo_script_exercises_every_interaction() {
        let mut scene = Scene::starter().unwrap();
        let summary = run(&mut scene, &Script::demo(60), &options(5.0));

        assert_eq!(summary.frames, 300);
        assert!(!summary.quit);
        // Two placements, one deletion.
        assert_eq!(summary.balls, 6);
        assert_eq!(summary.balls, scene.ball_count());
        assert!(scene.store().validate().is_ok());
        assert!(scene.game_mode().is_default());
        assert_eq!(summary.resets, 0);
        assert!(summary.lines_drawn >= summary.springs);
    }

    #[test]
    fn quit_cue_stops_the_loop() {
        let mut scene = Scene::starter().unwrap();
        let script = Script::new(vec![Cue {
            start: 10,
            frames: 1,
            target: Target::World(Vec2::zero()),
            action: Action::Quit,
        }]);
        let summary = run(&mut scene, &script, &options(2.0));
        assert!(summary.quit);
        assert_eq!(summary.frames, 11);
    }

    #[test]
    fn restart_cue_rebuilds_scene() {
        let mut scene = Scene::starter().unwrap();
        let script = Script::new(vec![
            Cue {
                start: 0,
                frames: 1,
                target: Target::Ball(0),
                action: Action::Delete,
            },
            Cue {
                start: 5,
                frames: 1,
                target: Target::World(Vec2::zero()),
                action: Action::Restart,
            },
        ]);
        let summary = run(&mut scene, &script, &options(0.5));
        assert_eq!(summary.restarts, 1);
        assert_eq!(summary.balls, 5);
        assert_eq!(summary.springs, 6);
    }

    #[test]
    fn ball_targets_follow_the_ball_and_camera() {
        let scene = Scene::starter().unwrap();
        let mut camera = ViewCamera::new(800, 600);
        camera.pos = Vec2::new(1.0, 2.0);
        let script = Script::new(vec![Cue {
            start: 0,
            frames: 1,
            target: Target::Ball(4),
            action: Action::Mode(ModeKind::Moon),
        }]);

        let input = script.input(0, &scene, &camera);
        assert_eq!(input.active_key, ActiveKey::MoonMode);
        let world = camera.view_to_world(input.mouse_x, input.mouse_y);
        assert!((world - scene.balls()[4].pos).mag() < 1e-4);

        // After the cue the cursor rests there with nothing pressed.
        let idle = script.input(1, &scene, &camera);
        assert!(!idle.has_action());
        assert_eq!((idle.mouse_x, idle.mouse_y), (input.mouse_x, input.mouse_y));
    }

    #[test]
    fn sanitize_resets_non_finite_balls() {
        let mut scene = Scene::starter().unwrap();
        let id = scene.balls()[1].id();
        scene.ball_mut(id).unwrap().vel = Vec2::new(f32::NAN, 0.0);
        assert_eq!(simulation_loop::sanitize(&mut scene), 1);
        assert_eq!(scene.ball(id).unwrap().vel, Vec2::zero());
        assert_eq!(simulation_loop::sanitize(&mut scene), 0);
    }
}
