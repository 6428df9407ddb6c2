pub mod app;
pub mod ball;
pub mod config;
pub mod error;
pub mod init_config;
pub mod math;
pub mod profiler;
pub mod query;
pub mod renderer;
pub mod scene;
pub mod simulation;

pub use ball::{Ball, BallId, BallStore, Spring};
pub use config::SceneConfig;
pub use error::{GraphError, QueryError};
pub use init_config::InitConfig;
pub use math::Vec2;
pub use query::{BallQuery, QueryBuffer};
pub use scene::{FrameContext, FrameReport, GameMode, Interaction, ModeKind, Scene};

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
