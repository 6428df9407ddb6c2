//! Error types for graph mutation and spatial queries.

use std::fmt;

use crate::ball::BallId;

/// Errors raised while mutating the ball/spring graph.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The handle refers to a ball that has been removed.
    StaleHandle(BallId),
    /// A ball cannot be connected to itself.
    SelfConnection(BallId),
    /// The pair already shares a spring.
    AlreadyConnected { a: BallId, b: BallId },
    /// The ball's spring list is at capacity.
    SpringsFull { ball: BallId },
    /// Growing the ball container failed.
    Allocation { requested: usize },
    /// Positional index is out of bounds.
    IndexOutOfBounds { index: usize, count: usize },
    /// A spring from `a` to `b` has no matching mirror.
    Asymmetric { a: BallId, b: BallId },
    /// A spring held by `holder` points at a ball that no longer exists.
    DanglingSpring { holder: BallId },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::StaleHandle(id) => write!(f, "ball handle {} is stale", id),
            GraphError::SelfConnection(id) => write!(f, "cannot connect ball {} to itself", id),
            GraphError::AlreadyConnected { a, b } => {
                write!(f, "balls {} and {} are already connected", a, b)
            }
            GraphError::SpringsFull { ball } => write!(f, "ball {} has no free spring slot", ball),
            GraphError::Allocation { requested } => {
                write!(f, "could not grow ball storage to {} slots", requested)
            }
            GraphError::IndexOutOfBounds { index, count } => {
                write!(f, "ball index {} out of bounds (count: {})", index, count)
            }
            GraphError::Asymmetric { a, b } => {
                write!(f, "spring {} -> {} has no mirror with the same length", a, b)
            }
            GraphError::DanglingSpring { holder } => {
                write!(f, "ball {} holds a spring to a removed ball", holder)
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Errors raised by nearest-neighbour queries.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// The scene has no balls.
    NoBalls,
    /// Fewer than `requested` results passed the distance cutoff.
    Incomplete { requested: usize, valid: usize },
    /// The query asked for more results than the buffer holds.
    ExceedsBuffer { requested: usize, capacity: usize },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::NoBalls => write!(f, "no balls to query"),
            QueryError::Incomplete { requested, valid } => {
                write!(f, "only {} of {} nearest balls are within reach", valid, requested)
            }
            QueryError::ExceedsBuffer { requested, capacity } => {
                write!(f, "query for {} balls exceeds buffer capacity {}", requested, capacity)
            }
        }
    }
}

impl std::error::Error for QueryError {}
