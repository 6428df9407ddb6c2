// ball/mod.rs
// Re-exports for the ball/spring graph

mod graph;
mod types;

pub use graph::*;
pub use types::*;

#[cfg(test)]
#[path = "tests/connect.rs"]
mod connect;

#[cfg(test)]
#[path = "tests/removal.rs"]
mod removal;
