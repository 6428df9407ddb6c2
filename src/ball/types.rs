// ball/types.rs
// Contains the BallId handle, the Spring edge record and the Ball point mass

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use ultraviolet::Vec2;

use crate::config::MAX_SPRINGS;

/// Generational handle to a ball.
///
/// The slot stays stable across swap-removals of other balls; the generation
/// changes when the ball itself is removed, so an old handle is detected
/// instead of silently aliasing whichever ball reuses the slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct BallId {
    pub(crate) slot: u32,
    pub(crate) generation: u32,
}

impl fmt::Display for BallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.slot, self.generation)
    }
}

/// One half of an elastic connection, stored in the holder's spring list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub other: BallId,
    pub rest_length: f32,
    /// Set while drawing so the mirror half is skipped; not physics state.
    pub rendered: bool,
}

impl Spring {
    pub fn new(other: BallId, rest_length: f32) -> Self {
        Self {
            other,
            rest_length,
            rendered: false,
        }
    }
}

pub type SpringList = SmallVec<[Spring; MAX_SPRINGS]>;

#[derive(Clone, Debug)]
pub struct Ball {
    pub(crate) id: BallId,
    pub pos: Vec2,
    pub vel: Vec2,
    pub mass: f32,
    pub friction: f32,
    pub(crate) springs: SpringList,
}

impl Ball {
    pub(crate) fn new(id: BallId, pos: Vec2, mass: f32, friction: f32) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::zero(),
            mass,
            friction,
            springs: SmallVec::new(),
        }
    }

    pub fn id(&self) -> BallId {
        self.id
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    pub fn has_free_spring(&self) -> bool {
        self.springs.len() < MAX_SPRINGS
    }

    pub fn spring_to(&self, other: BallId) -> Option<&Spring> {
        self.springs.iter().find(|s| s.other == other)
    }

    pub fn is_connected_to(&self, other: BallId) -> bool {
        self.spring_to(other).is_some()
    }

    /// Drop the spring pointing at `other`, returning whether one existed.
    pub(crate) fn remove_spring_to(&mut self, other: BallId) -> bool {
        match self.springs.iter().position(|s| s.other == other) {
            Some(i) => {
                self.springs.remove(i);
                true
            }
            None => false,
        }
    }
}
