// ball/graph.rs
// Growable ball storage with a slot table for stable handles, plus the
// connect/disconnect/swap-remove maintenance of the spring graph

use ultraviolet::Vec2;

use super::types::{Ball, BallId, Spring};
use crate::error::GraphError;

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    /// Position of the ball in the dense container, `None` when free.
    index: Option<usize>,
}

/// Dense, positionally indexed ball container.
///
/// Iteration order is the container order; removal swaps the last ball into
/// the hole. Springs hold [`BallId`]s, so the swap only has to repoint one
/// slot and no edge is rebuilt.
#[derive(Clone, Debug, Default)]
pub struct BallStore {
    balls: Vec<Ball>,
    slots: Vec<Slot>,
    free_slots: Vec<u32>,
}

impl BallStore {
    /// An empty store with room for `capacity` balls. An impossible capacity
    /// is reported instead of aborting.
    pub fn with_capacity(capacity: usize) -> Result<Self, GraphError> {
        let mut store = Self::default();
        store.ensure_capacity(capacity)?;
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.balls.capacity()
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// Mutable access for the integrator and the render pass. Spring lists
    /// are crate-private, so callers cannot break edge symmetry through this.
    pub(crate) fn balls_mut(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    pub fn id_at(&self, index: usize) -> Option<BallId> {
        self.balls.get(index).map(|b| b.id)
    }

    pub fn index_of(&self, id: BallId) -> Result<usize, GraphError> {
        match self.slots.get(id.slot as usize) {
            Some(Slot { generation, index: Some(index) }) if *generation == id.generation => {
                Ok(*index)
            }
            _ => Err(GraphError::StaleHandle(id)),
        }
    }

    pub fn get(&self, id: BallId) -> Result<&Ball, GraphError> {
        let index = self.index_of(id)?;
        Ok(&self.balls[index])
    }

    pub fn get_mut(&mut self, id: BallId) -> Result<&mut Ball, GraphError> {
        let index = self.index_of(id)?;
        Ok(&mut self.balls[index])
    }

    /// Make room for `additional` more balls, doubling the capacity until it
    /// fits. Fails instead of aborting when the allocator refuses.
    pub fn ensure_capacity(&mut self, additional: usize) -> Result<(), GraphError> {
        let needed = self
            .balls
            .len()
            .checked_add(additional)
            .ok_or(GraphError::Allocation { requested: usize::MAX })?;
        let capacity = self.balls.capacity();
        if needed <= capacity {
            return Ok(());
        }

        let mut new_capacity = capacity.max(1);
        while new_capacity < needed {
            new_capacity = new_capacity
                .checked_mul(2)
                .ok_or(GraphError::Allocation { requested: usize::MAX })?;
        }
        self.balls
            .try_reserve_exact(new_capacity - self.balls.len())
            .map_err(|_| GraphError::Allocation { requested: new_capacity })?;
        ftlog::debug!("ball storage grown from {} to {}", capacity, self.balls.capacity());
        Ok(())
    }

    /// Append a resting ball and return its handle.
    pub fn insert(&mut self, pos: Vec2, mass: f32, friction: f32) -> Result<BallId, GraphError> {
        self.ensure_capacity(1)?;
        let index = self.balls.len();
        let id = match self.free_slots.pop() {
            Some(slot) => {
                let entry = &mut self.slots[slot as usize];
                entry.index = Some(index);
                BallId { slot, generation: entry.generation }
            }
            None => {
                let slot = self.slots.len() as u32;
                self.slots.push(Slot { generation: 0, index: Some(index) });
                BallId { slot, generation: 0 }
            }
        };
        self.balls.push(Ball::new(id, pos, mass, friction));
        Ok(id)
    }

    /// Link `a` and `b` with a spring of the given rest length, mirrored on
    /// both sides. Nothing changes when an error is returned.
    pub fn connect(&mut self, a: BallId, b: BallId, rest_length: f32) -> Result<(), GraphError> {
        if a == b {
            return Err(GraphError::SelfConnection(a));
        }
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        if self.balls[ia].is_connected_to(b) {
            return Err(GraphError::AlreadyConnected { a, b });
        }
        if !self.balls[ia].has_free_spring() {
            return Err(GraphError::SpringsFull { ball: a });
        }
        if !self.balls[ib].has_free_spring() {
            return Err(GraphError::SpringsFull { ball: b });
        }

        self.balls[ia].springs.push(Spring::new(b, rest_length));
        self.balls[ib].springs.push(Spring::new(a, rest_length));
        Ok(())
    }

    /// Remove the spring between `a` and `b` from both lists. Returns
    /// `Ok(false)` when they were not connected.
    pub fn disconnect(&mut self, a: BallId, b: BallId) -> Result<bool, GraphError> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        let removed_a = self.balls[ia].remove_spring_to(b);
        let removed_b = self.balls[ib].remove_spring_to(a);
        debug_assert_eq!(removed_a, removed_b, "spring {} <-> {} was one-sided", a, b);
        Ok(removed_a || removed_b)
    }

    /// Detach every spring of `id`, then swap-remove it.
    ///
    /// The last ball moves into the freed position; its handle and every
    /// spring referring to it stay valid. The removed handle becomes stale.
    pub fn remove(&mut self, id: BallId) -> Result<Ball, GraphError> {
        let index = self.index_of(id)?;

        let springs = std::mem::take(&mut self.balls[index].springs);
        for spring in &springs {
            let mirrored = match self.index_of(spring.other) {
                Ok(neighbour) => self.balls[neighbour].remove_spring_to(id),
                Err(_) => false,
            };
            debug_assert!(mirrored, "neighbour {} lost its mirror of {}", spring.other, id);
        }

        let removed = self.balls.swap_remove(index);
        if let Some(moved) = self.balls.get(index) {
            self.slots[moved.id.slot as usize].index = Some(index);
        }
        self.release_slot(id);

        debug_assert!(self.validate().is_ok(), "graph invalid after removing {}", id);
        Ok(removed)
    }

    /// Remove every ball. All outstanding handles become stale.
    pub fn clear(&mut self) {
        let ids: Vec<BallId> = self.balls.iter().map(|b| b.id).collect();
        self.balls.clear();
        for id in ids {
            self.release_slot(id);
        }
    }

    fn release_slot(&mut self, id: BallId) {
        let slot = &mut self.slots[id.slot as usize];
        slot.index = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_slots.push(id.slot);
    }

    /// Each undirected edge once, as `(a, b, rest_length)` with `a` earlier
    /// in container order.
    pub fn edges(&self) -> impl Iterator<Item = (BallId, BallId, f32)> + '_ {
        self.balls.iter().enumerate().flat_map(move |(i, ball)| {
            ball.springs.iter().filter_map(move |spring| match self.index_of(spring.other) {
                Ok(j) if j > i => Some((ball.id, spring.other, spring.rest_length)),
                _ => None,
            })
        })
    }

    pub fn edge_count(&self) -> usize {
        self.balls.iter().map(|b| b.springs.len()).sum::<usize>() / 2
    }

    /// Check the structural invariants: slots point at their balls, every
    /// spring resolves to a live ball, and every edge is mirrored with the
    /// same rest length.
    pub fn validate(&self) -> Result<(), GraphError> {
        for (i, ball) in self.balls.iter().enumerate() {
            if self.index_of(ball.id)? != i {
                return Err(GraphError::StaleHandle(ball.id));
            }
            for spring in &ball.springs {
                let j = self
                    .index_of(spring.other)
                    .map_err(|_| GraphError::DanglingSpring { holder: ball.id })?;
                match self.balls[j].spring_to(ball.id) {
                    Some(mirror) if mirror.rest_length == spring.rest_length => {}
                    _ => {
                        return Err(GraphError::Asymmetric { a: ball.id, b: spring.other });
                    }
                }
            }
        }
        Ok(())
    }
}
