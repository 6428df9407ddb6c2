use crate::profile_scope;
use crate::renderer::{DrawRecorder, ViewCamera};
use crate::scene::Scene;

use super::script::Script;
use super::{RunOptions, RunSummary};

/// Reset any ball whose state went non-finite. Returns how many were reset.
pub fn sanitize(scene: &mut Scene) -> usize {
    let ids: Vec<_> = scene
        .balls()
        .iter()
        .filter(|b| {
            !b.pos.x.is_finite() || !b.pos.y.is_finite() || !b.vel.x.is_finite() || !b.vel.y.is_finite()
        })
        .map(|b| b.id())
        .collect();
    let rest_y = scene.config.floor_y + 1.0;
    for &id in &ids {
        if let Ok(ball) = scene.ball_mut(id) {
            if !ball.pos.x.is_finite() || !ball.pos.y.is_finite() {
                ball.pos = ultraviolet::Vec2::new(0.0, rest_y);
            }
            ball.vel = ultraviolet::Vec2::zero();
        }
    }
    if !ids.is_empty() {
        ftlog::error!("found {} balls with invalid position/velocity, reset them", ids.len());
    }
    ids.len()
}

pub fn run_frame_loop(scene: &mut Scene, script: &Script, options: &RunOptions) -> RunSummary {
    let fps = options.fps.max(1);
    let elapsed = 1.0 / fps as f32;
    let total_frames = (options.seconds.max(0.0) * fps as f32).round() as u64;

    let mut camera = ViewCamera::new(options.width, options.height);
    let mut recorder = DrawRecorder::new(options.width, options.height);
    let mut frame = scene.frame_context();
    let mut summary = RunSummary::default();

    for index in 0..total_frames {
        let input = script.input(index, scene, &camera);
        recorder.clear();
        let report = {
            profile_scope!("frame");
            scene.update(&input, elapsed, &mut camera, &mut recorder, &mut frame)
        };
        summary.frames += 1;
        summary.steps += report.steps as u64;
        summary.restarts += report.restarted as u32;
        summary.resets += sanitize(scene);
        summary.lines_drawn = recorder.lines(true) + recorder.lines(false);

        if options.summary_every > 0 && (index + 1) % options.summary_every == 0 {
            ftlog::info!(
                "frame {:>6} t={:>7.2}s balls={} springs={} ke={:.4} mode={:?} camera=({:.2}, {:.2})",
                index + 1,
                (index + 1) as f32 * elapsed,
                scene.ball_count(),
                scene.edge_count(),
                scene.kinetic_energy(),
                scene.game_mode().kind,
                camera.pos.x,
                camera.pos.y
            );
            #[cfg(feature = "profiling")]
            crate::PROFILER.lock().print_and_clear(index + 1);
        }

        if report.quit {
            ftlog::info!("quit requested at frame {}", index + 1);
            summary.quit = true;
            break;
        }
    }

    summary.balls = scene.ball_count();
    summary.springs = scene.edge_count();
    summary.kinetic_energy = scene.kinetic_energy();
    summary
}
