// scene/mod.rs
// The Scene owns the balls, the game mode and the fixed-step integrator, and
// drives one frame: physics, camera, render, then gameplay interpretation

mod frame;
mod game_mode;
mod gameplay;
mod render;

pub use frame::{FrameContext, FrameReport};
pub use game_mode::{GameMode, ModeKind};
pub use gameplay::Interaction;

use ultraviolet::Vec2;

use crate::ball::{Ball, BallId, BallStore};
use crate::config::SceneConfig;
use crate::error::{GraphError, QueryError};
use crate::init_config::InitConfig;
use crate::query::{self, BallQuery, QueryBuffer};
use crate::renderer::{Camera, InputSnapshot, Renderer};
use crate::simulation::{Integrator, StepParams};

pub struct Scene {
    pub config: SceneConfig,
    balls: BallStore,
    mode: GameMode,
    integrator: Integrator,
    interaction: Interaction,
    /// Frames the left button has been held without placing a ball.
    placement_frames: u32,
    layout: InitConfig,
}

impl Scene {
    /// An empty scene in the default game mode.
    pub fn new(config: SceneConfig) -> Result<Self, GraphError> {
        let integrator = Integrator::new(config.time_step, config.max_frame_time);
        let balls = BallStore::with_capacity(config.initial_ball_capacity)?;
        let layout = InitConfig {
            scene: config.clone(),
            ..Default::default()
        };
        Ok(Self {
            config,
            balls,
            mode: GameMode::default(),
            integrator,
            interaction: Interaction::Idle,
            placement_frames: 0,
            layout,
        })
    }

    /// Build a scene from a layout. The layout is kept so `reset` can
    /// rebuild it.
    pub fn from_init(layout: InitConfig) -> Result<Self, GraphError> {
        let mut scene = Self::new(layout.scene.clone())?;
        scene.layout = layout;
        scene.populate()?;
        ftlog::info!(
            "scene ready: {} balls, {} springs",
            scene.ball_count(),
            scene.edge_count()
        );
        Ok(scene)
    }

    /// The built-in five-ball layout.
    pub fn starter() -> Result<Self, GraphError> {
        Self::from_init(InitConfig::starter())
    }

    fn populate(&mut self) -> Result<(), GraphError> {
        let layout = self.layout.clone();
        let ids = layout
            .balls
            .iter()
            .map(|b| self.create_ball(b.position()))
            .collect::<Result<Vec<_>, _>>()?;
        for spring in &layout.springs {
            let count = ids.len();
            let a = *ids
                .get(spring.a)
                .ok_or(GraphError::IndexOutOfBounds { index: spring.a, count })?;
            let b = *ids
                .get(spring.b)
                .ok_or(GraphError::IndexOutOfBounds { index: spring.b, count })?;
            self.connect(a, b, spring.length)?;
        }
        for random in &layout.random {
            for pos in random.positions() {
                self.create_ball(pos)?;
            }
        }
        Ok(())
    }

    /// Drop every ball and rebuild the starting layout in the default mode.
    pub fn reset(&mut self) -> Result<(), GraphError> {
        self.balls.clear();
        self.mode = GameMode::default();
        self.integrator.reset();
        self.interaction = Interaction::Idle;
        self.placement_frames = 0;
        self.populate()?;
        ftlog::info!("scene restarted with {} balls", self.ball_count());
        Ok(())
    }

    /// A frame context sized for this scene's queries.
    pub fn frame_context(&self) -> FrameContext {
        FrameContext::new(self.config.max_connections)
    }

    // ----- graph -----

    /// Create a resting ball with the current mode's mass.
    pub fn create_ball(&mut self, pos: Vec2) -> Result<BallId, GraphError> {
        let id = self.balls.insert(pos, self.mode.mass, self.config.ball_friction)?;
        ftlog::debug!("created ball {} at ({:.3}, {:.3})", id, pos.x, pos.y);
        Ok(id)
    }

    pub fn remove_ball(&mut self, id: BallId) -> Result<(), GraphError> {
        self.balls.remove(id)?;
        if self.interaction == Interaction::MovePending(id) {
            self.interaction = Interaction::Idle;
        }
        ftlog::debug!("removed ball {}", id);
        Ok(())
    }

    pub fn connect(&mut self, a: BallId, b: BallId, rest_length: f32) -> Result<(), GraphError> {
        self.balls.connect(a, b, rest_length)
    }

    pub fn disconnect(&mut self, a: BallId, b: BallId) -> Result<bool, GraphError> {
        self.balls.disconnect(a, b)
    }

    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    pub fn balls(&self) -> &[Ball] {
        self.balls.balls()
    }

    pub fn store(&self) -> &BallStore {
        &self.balls
    }

    pub fn ball(&self, id: BallId) -> Result<&Ball, GraphError> {
        self.balls.get(id)
    }

    pub fn ball_mut(&mut self, id: BallId) -> Result<&mut Ball, GraphError> {
        self.balls.get_mut(id)
    }

    pub fn edges(&self) -> impl Iterator<Item = (BallId, BallId, f32)> + '_ {
        self.balls.edges()
    }

    pub fn edge_count(&self) -> usize {
        self.balls.edge_count()
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.balls
            .balls()
            .iter()
            .map(|b| 0.5 * b.mass * b.vel.mag_sq())
            .sum()
    }

    // ----- mode -----

    pub fn game_mode(&self) -> &GameMode {
        &self.mode
    }

    /// Replace the mode wholesale with a preset.
    pub fn set_mode(&mut self, kind: ModeKind) {
        if self.mode.kind != kind {
            ftlog::info!("game mode {:?} -> {:?}", self.mode.kind, kind);
        }
        self.mode = GameMode::preset(kind);
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    // ----- physics -----

    pub fn step_params(&self) -> StepParams {
        StepParams::new(&self.config, &self.mode)
    }

    /// Run exactly one fixed step.
    pub fn fixed_update(&mut self) {
        let params = self.step_params();
        self.integrator.step(&mut self.balls, &params);
    }

    /// Accumulate `elapsed` seconds and run the fixed steps that fit.
    pub fn advance(&mut self, elapsed: f32) -> usize {
        let params = self.step_params();
        self.integrator.advance(&mut self.balls, &params, elapsed)
    }

    pub fn integrator(&self) -> &Integrator {
        &self.integrator
    }

    // ----- queries -----

    pub fn nearest_ball(&self, position: Vec2) -> BallQuery {
        query::nearest_ball(&self.balls, position)
    }

    /// Nearest `k` balls within the scene's connection distance. See
    /// [`query::nearest_balls`] for the valid-count rules.
    pub fn nearest_balls(
        &self,
        position: Vec2,
        k: usize,
        buffer: &mut QueryBuffer,
    ) -> Result<usize, QueryError> {
        query::nearest_balls(&self.balls, position, k, self.config.max_distance, buffer)
    }

    // ----- frame -----

    /// One frame: physics, camera, render, then gameplay.
    ///
    /// Rendering runs before this frame's input is interpreted, so preview
    /// lines come from the queries the previous frame left in `frame`.
    pub fn update<C: Camera, R: Renderer>(
        &mut self,
        input: &InputSnapshot,
        elapsed: f32,
        camera: &mut C,
        renderer: &mut R,
        frame: &mut FrameContext,
    ) -> FrameReport {
        let mut report = FrameReport {
            quit: input.quit_requested,
            ..Default::default()
        };
        if input.restart_requested {
            match self.reset() {
                Ok(()) => {
                    frame.queries.clear();
                    report.restarted = true;
                }
                Err(e) => ftlog::error!("restart failed: {}", e),
            }
        }

        report.steps = self.advance(elapsed);
        camera.update();
        self.render(renderer, frame, input);
        self.update_game(input, camera, frame);
        report
    }
}
