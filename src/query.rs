//! Brute-force nearest-ball queries.
//!
//! Ball counts stay small, so every query scans the whole container. Results
//! are written into a [`QueryBuffer`] owned by the frame driver and are only
//! meaningful for the frame that produced them: handles in the buffer may go
//! stale as soon as the graph is mutated.

use ultraviolet::Vec2;

use crate::ball::{BallId, BallStore};
use crate::error::QueryError;
use crate::math::distance;
use crate::profile_scope;

/// One query result. `ball` is `None` for an empty result.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BallQuery {
    pub ball: Option<BallId>,
    pub distance: f32,
}

/// Fixed-capacity scratch space for nearest-K results.
#[derive(Clone, Debug)]
pub struct QueryBuffer {
    entries: Vec<BallQuery>,
    capacity: usize,
    candidates: Vec<(usize, f32)>,
}

impl QueryBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            candidates: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of leading results within the distance cutoff.
    pub fn valid_count(&self) -> usize {
        self.entries.len()
    }

    /// The valid prefix, nearest first.
    pub fn valid(&self) -> &[BallQuery] {
        &self.entries
    }

    pub fn nearest(&self) -> Option<&BallQuery> {
        self.entries.first()
    }
}

/// The closest ball to `position`, or an empty result when there are none.
pub fn nearest_ball(store: &BallStore, position: Vec2) -> BallQuery {
    store
        .balls()
        .iter()
        .map(|ball| BallQuery {
            ball: Some(ball.id()),
            distance: distance(ball.pos, position),
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
        .unwrap_or_default()
}

/// Find up to `k` balls nearest to `position` and keep the ones strictly
/// closer than `max_distance`.
///
/// Balls are ordered by distance (ties keep container order). Counting walks
/// the first `k` from the front and stops at the first one outside the cutoff,
/// so the valid count is always a contiguous prefix. On
/// [`QueryError::Incomplete`] the buffer still holds that prefix.
pub fn nearest_balls(
    store: &BallStore,
    position: Vec2,
    k: usize,
    max_distance: f32,
    buffer: &mut QueryBuffer,
) -> Result<usize, QueryError> {
    profile_scope!("nearest_balls");
    buffer.clear();
    if k > buffer.capacity {
        return Err(QueryError::ExceedsBuffer { requested: k, capacity: buffer.capacity });
    }
    if store.is_empty() {
        return Err(QueryError::NoBalls);
    }

    let candidates = &mut buffer.candidates;
    candidates.clear();
    candidates.extend(
        store
            .balls()
            .iter()
            .enumerate()
            .map(|(i, ball)| (i, distance(ball.pos, position))),
    );
    candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

    for &(index, dist) in candidates.iter().take(k) {
        if dist >= max_distance {
            break;
        }
        buffer.entries.push(BallQuery {
            ball: store.id_at(index),
            distance: dist,
        });
    }

    let valid = buffer.entries.len();
    if valid < k {
        return Err(QueryError::Incomplete { requested: k, valid });
    }
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_at(points: &[(f32, f32)]) -> (BallStore, Vec<BallId>) {
        let mut store = BallStore::with_capacity(points.len()).unwrap();
        let ids = points
            .iter()
            .map(|&(x, y)| store.insert(Vec2::new(x, y), 0.5, 0.05).unwrap())
            .collect();
        (store, ids)
    }

    #[test]
    fn nearest_ball_on_empty_store_is_empty() {
        let store = BallStore::with_capacity(1).unwrap();
        assert_eq!(nearest_ball(&store, Vec2::zero()), BallQuery::default());
    }

    #[test]
    fn nearest_ball_picks_minimum_even_at_index_zero() {
        let (store, ids) = store_at(&[(0.1, 0.0), (3.0, 0.0), (-2.0, 0.0)]);
        let q = nearest_ball(&store, Vec2::zero());
        assert_eq!(q.ball, Some(ids[0]));
        assert!((q.distance - 0.1).abs() < 1e-6);
    }

    #[test]
    fn valid_count_stops_at_first_ball_beyond_cutoff() {
        let (store, ids) = store_at(&[(3.0, 0.0), (0.0, 1.0), (-2.0, 0.0)]);
        let mut buffer = QueryBuffer::new(3);

        let result = nearest_balls(&store, Vec2::zero(), 3, 2.3, &mut buffer);

        assert_eq!(result, Err(QueryError::Incomplete { requested: 3, valid: 2 }));
        assert_eq!(buffer.valid_count(), 2);
        assert_eq!(buffer.valid()[0].ball, Some(ids[1]));
        assert_eq!(buffer.valid()[1].ball, Some(ids[2]));
        assert!((buffer.valid()[1].distance - 2.0).abs() < 1e-6);
    }

    #[test]
    fn all_within_cutoff_succeeds() {
        let (store, _) = store_at(&[(1.0, 0.0), (0.0, 1.5), (-2.0, 0.0), (0.0, -0.5)]);
        let mut buffer = QueryBuffer::new(3);
        assert_eq!(nearest_balls(&store, Vec2::zero(), 3, 2.3, &mut buffer), Ok(3));
        let d: Vec<f32> = buffer.valid().iter().map(|q| q.distance).collect();
        assert_eq!(d, vec![0.5, 1.0, 1.5]);
    }

    #[test]
    fn cutoff_is_strict() {
        let (store, _) = store_at(&[(2.0, 0.0)]);
        let mut buffer = QueryBuffer::new(1);
        assert_eq!(
            nearest_balls(&store, Vec2::zero(), 1, 2.0, &mut buffer),
            Err(QueryError::Incomplete { requested: 1, valid: 0 })
        );
    }

    #[test]
    fn empty_store_and_oversized_requests_fail() {
        let mut buffer = QueryBuffer::new(3);
        let empty = BallStore::with_capacity(1).unwrap();
        assert_eq!(
            nearest_balls(&empty, Vec2::zero(), 1, 2.3, &mut buffer),
            Err(QueryError::NoBalls)
        );

        let (store, _) = store_at(&[(0.5, 0.0)]);
        assert_eq!(
            nearest_balls(&store, Vec2::zero(), 4, 2.3, &mut buffer),
            Err(QueryError::ExceedsBuffer { requested: 4, capacity: 3 })
        );
        assert_eq!(
            nearest_balls(&store, Vec2::zero(), 3, 2.3, &mut buffer),
            Err(QueryError::Incomplete { requested: 3, valid: 1 })
        );
    }

    #[test]
    fn repeated_queries_are_deterministic() {
        let (store, _) = store_at(&[(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (0.2, 0.0), (4.0, 4.0)]);
        let mut first = QueryBuffer::new(3);
        let mut second = QueryBuffer::new(3);
        let a = nearest_balls(&store, Vec2::new(0.1, 0.1), 3, 2.3, &mut first);
        let b = nearest_balls(&store, Vec2::new(0.1, 0.1), 3, 2.3, &mut second);
        assert_eq!(a, b);
        assert_eq!(first.valid(), second.valid());
    }

    #[test]
    fn equidistant_balls_keep_container_order() {
        let (store, ids) = store_at(&[(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0)]);
        let mut buffer = QueryBuffer::new(3);
        nearest_balls(&store, Vec2::zero(), 3, 2.3, &mut buffer).unwrap();
        let order: Vec<_> = buffer.valid().iter().map(|q| q.ball).collect();
        assert_eq!(order, vec![Some(ids[0]), Some(ids[1]), Some(ids[2])]);
    }
}
