// init_config.rs
// Handles loading and parsing the initial scene layout from a TOML file

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use ultraviolet::Vec2;

use crate::config::SceneConfig;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct InitConfig {
    /// Scene tunables; keys left out keep their defaults.
    #[serde(default)]
    pub scene: SceneConfig,
    #[serde(default)]
    pub balls: Vec<BallConfig>,
    /// Springs between entries of `balls`, by position in that list.
    #[serde(default)]
    pub springs: Vec<SpringConfig>,
    #[serde(default)]
    pub random: Vec<RandomConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct BallConfig {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SpringConfig {
    pub a: usize,
    pub b: usize,
    pub length: f32,
}

/// Unconnected balls scattered uniformly over a rectangle.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RandomConfig {
    pub count: usize,
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
    /// Fixed seed for reproducible layouts
    pub seed: Option<u64>,
}

impl InitConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: InitConfig = toml::from_str(content)?;
        config.scene.validate()?;
        Ok(config)
    }

    /// Three balls in a triangle joined to a two-ball tail: five balls, six
    /// springs of rest length 1.5.
    pub fn starter() -> Self {
        let balls = [
            (-0.75, 0.0),
            (0.75, 0.0),
            (0.0, 1.299),
            (2.77, 1.299),
            (3.77, 2.299),
        ]
        .into_iter()
        .map(|(x, y)| BallConfig { x, y })
        .collect();
        let springs = [(0, 1), (0, 2), (1, 2), (3, 2), (4, 2), (3, 4)]
            .into_iter()
            .map(|(a, b)| SpringConfig { a, b, length: 1.5 })
            .collect();
        Self {
            scene: SceneConfig::default(),
            balls,
            springs,
            random: Vec::new(),
        }
    }
}

impl BallConfig {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl RandomConfig {
    pub fn positions(&self) -> Vec<Vec2> {
        let mut rng = match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        (0..self.count)
            .map(|_| {
                let x = self.x_min + rng.f32() * (self.x_max - self.x_min);
                let y = self.y_min + rng.f32() * (self.y_max - self.y_min);
                Vec2::new(x, y)
            })
            .collect()
    }
}
