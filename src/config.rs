// Centralized configuration for scene and physics parameters

use serde::{Deserialize, Serialize};

// ====================
// Integration
// ====================
/// Fixed physics timestep in seconds.
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 100.0;
/// Longest frame delta fed to the accumulator (seconds).
pub const MAX_FRAME_TIME: f32 = 0.25;
/// Smallest accepted timestep; bounds the catch-up steps per frame.
pub const MIN_TIME_STEP: f32 = 1.0e-4;

// ====================
// Ball/Spring Parameters
// ====================
/// Maximum number of springs a single ball can hold.
pub const MAX_SPRINGS: usize = 10;
/// Starting capacity of the ball container; doubles on overflow.
pub const INITIAL_BALL_CAPACITY: usize = 1 << 10;
/// Spring constant per unit of ball mass (k = stiffness * mass).
pub const SPRING_STIFFNESS: f32 = 100.0;
/// Velocity-proportional damping coefficient for new balls.
pub const BALL_FRICTION: f32 = 0.05;
/// Radius used when drawing a ball (world units).
pub const BALL_RADIUS: f32 = 0.25;
/// Lengths below this are treated as coincident points by the spring force.
pub const SPRING_MIN_LENGTH: f32 = 1.0e-6;

// ====================
// Gameplay
// ====================
/// Number of nearest balls a new ball tries to attach to.
pub const MAX_CONNECTIONS: usize = 3;
/// Query cutoff: only balls strictly closer than this are valid.
pub const MAX_CONNECTION_DISTANCE: f32 = 2.3;
/// Rest length given to springs created by clicking.
pub const LINK_REST_LENGTH: f32 = 2.3;
/// Cursor radius for picking a ball to delete or teleport.
pub const PICK_RADIUS: f32 = 0.2;
/// Frames the left button must stay held before a ball is placed.
pub const PLACEMENT_DEBOUNCE_FRAMES: u32 = 3;

// ====================
// World
// ====================
/// Height of the ground line.
pub const FLOOR_Y: f32 = 0.0;

// ====================
// Game Modes
// ====================
pub const DEFAULT_GRAVITY: f32 = -9.81;
pub const DEFAULT_RESTITUTION: f32 = -0.8;
pub const DEFAULT_MASS: f32 = 0.5;

pub const MOON_GRAVITY: f32 = -1.62;
pub const MOON_RESTITUTION: f32 = -0.9;
pub const MOON_MASS: f32 = 0.5;

pub const NOGRAV_GRAVITY: f32 = 0.0;
pub const NOGRAV_RESTITUTION: f32 = -1.0;
pub const NOGRAV_MASS: f32 = 0.5;

// ====================
// Camera
// ====================
/// World units covered by half the viewport height at zoom 1.
pub const CAMERA_SCALE: f32 = 5.0;
/// Fraction of the queued pan applied per `Camera::update`.
pub const CAMERA_SMOOTHING: f32 = 0.5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub time_step: f32,
    pub max_frame_time: f32,
    /// Size of the per-frame query buffer
    pub max_connections: usize,
    pub max_distance: f32,
    pub link_rest_length: f32,
    pub pick_radius: f32,
    pub floor_y: f32,
    /// Side walls at +/- this x, disabled when absent
    pub wall_half_width: Option<f32>,
    pub spring_stiffness: f32,
    pub ball_friction: f32,
    pub ball_radius: f32,
    pub placement_debounce_frames: u32,
    pub initial_ball_capacity: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            max_frame_time: MAX_FRAME_TIME,
            max_connections: MAX_CONNECTIONS,
            max_distance: MAX_CONNECTION_DISTANCE,
            link_rest_length: LINK_REST_LENGTH,
            pick_radius: PICK_RADIUS,
            floor_y: FLOOR_Y,
            wall_half_width: None,
            spring_stiffness: SPRING_STIFFNESS,
            ball_friction: BALL_FRICTION,
            ball_radius: BALL_RADIUS,
            placement_debounce_frames: PLACEMENT_DEBOUNCE_FRAMES,
            initial_ball_capacity: INITIAL_BALL_CAPACITY,
        }
    }
}

impl SceneConfig {
    /// Reject values the integrator and query engine cannot run with.
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if !(self.time_step.is_finite() && self.time_step >= MIN_TIME_STEP) {
            let msg = format!("time_step must be at least {}, got {}", MIN_TIME_STEP, self.time_step);
            return Err(msg.into());
        }
        if !(self.max_frame_time.is_finite() && self.max_frame_time >= 0.0) {
            let msg = format!("max_frame_time must be finite and >= 0, got {}", self.max_frame_time);
            return Err(msg.into());
        }
        let finite = [
            ("max_distance", self.max_distance),
            ("link_rest_length", self.link_rest_length),
            ("pick_radius", self.pick_radius),
            ("floor_y", self.floor_y),
            ("spring_stiffness", self.spring_stiffness),
            ("ball_friction", self.ball_friction),
            ("ball_radius", self.ball_radius),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{} must be finite, got {}", name, value).into());
        }
        if let Some(half_width) = self.wall_half_width {
            if !(half_width.is_finite() && half_width > 0.0) {
                return Err(format!("wall_half_width must be positive, got {}", half_width).into());
            }
        }
        Ok(())
    }
}
