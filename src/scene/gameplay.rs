// scene/gameplay.rs
// Interprets the frame's input against the current balls: pan, place and
// connect, delete, teleport, and game mode presets

use ultraviolet::Vec2;

use super::{FrameContext, ModeKind, Scene};
use crate::ball::BallId;
use crate::error::{GraphError, QueryError};
use crate::math::distance;
use crate::query::QueryBuffer;
use crate::renderer::{ActiveKey, Camera, InputSnapshot};

/// Multi-frame interaction state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interaction {
    #[default]
    Idle,
    /// A ball was picked for teleporting; the next teleport press moves it.
    MovePending(BallId),
}

impl Scene {
    pub(crate) fn update_game<C: Camera>(
        &mut self,
        input: &InputSnapshot,
        camera: &mut C,
        frame: &mut FrameContext,
    ) {
        frame.queries.clear();

        let mouse = camera.view_to_world(input.mouse_x, input.mouse_y);
        let moved = camera.view_to_world(
            input.mouse_x + input.mouse_delta_x,
            input.mouse_y + input.mouse_delta_y,
        );
        frame.mouse_world = mouse;
        frame.mouse_delta = moved - mouse;
        frame.panning = input.right_down;

        if input.right_down {
            camera.pan(-frame.mouse_delta);
            return;
        }

        match input.active_key {
            ActiveKey::Delete => {
                self.delete_near(mouse, &mut frame.queries);
            }
            ActiveKey::Teleport => self.teleport(mouse, &mut frame.queries),
            ActiveKey::MoonMode => self.set_mode(ModeKind::Moon),
            ActiveKey::DefaultMode => self.set_mode(ModeKind::Default),
            ActiveKey::NoGravMode => self.set_mode(ModeKind::NoGravity),
            ActiveKey::None if input.left_down => self.place_debounced(mouse, &mut frame.queries),
            ActiveKey::None => {
                // Preview only; an incomplete result still leaves its prefix.
                let _ = self.nearest_balls(mouse, self.config.max_connections, &mut frame.queries);
            }
        }
    }

    /// Left button held: place a ball once the button has been down for
    /// more than the debounce window and the cursor is above the ground.
    fn place_debounced(&mut self, mouse: Vec2, queries: &mut QueryBuffer) {
        if mouse.y > self.config.floor_y
            && self.placement_frames > self.config.placement_debounce_frames
        {
            self.placement_frames = 0;
            let n = self.config.max_connections;
            if let Err(e) = self.place_connected(mouse, n, queries) {
                ftlog::warn!("could not place ball: {}", e);
            }
        } else {
            self.placement_frames += 1;
        }
    }

    /// Create a ball at `pos` and attach it to the valid prefix of its `n`
    /// nearest neighbours. With fewer than `n` balls in the scene the new
    /// ball stays unconnected. Springs that do not fit are skipped.
    pub fn place_connected(
        &mut self,
        pos: Vec2,
        n: usize,
        queries: &mut QueryBuffer,
    ) -> Result<BallId, GraphError> {
        queries.clear();
        if n > self.ball_count() {
            return self.create_ball(pos);
        }

        match self.nearest_balls(pos, n, queries) {
            Ok(_) | Err(QueryError::Incomplete { .. }) => {}
            Err(e) => ftlog::debug!("placement query failed: {}", e),
        }

        let id = self.create_ball(pos)?;
        let rest_length = self.config.link_rest_length;
        for q in queries.valid() {
            let Some(other) = q.ball else { continue };
            if let Err(e) = self.connect(id, other, rest_length) {
                ftlog::warn!("skipping spring {} -> {}: {}", id, other, e);
            }
        }
        Ok(id)
    }

    /// Remove the nearest ball if it lies within the pick radius. Returns the
    /// removed handle.
    pub fn delete_near(&mut self, pos: Vec2, queries: &mut QueryBuffer) -> Option<BallId> {
        if self.nearest_balls(pos, 1, queries).is_err() {
            return None;
        }
        let target = queries.nearest().copied()?;
        let id = target.ball?;
        if target.distance >= self.config.pick_radius {
            return None;
        }
        match self.remove_ball(id) {
            Ok(()) => Some(id),
            Err(e) => {
                ftlog::warn!("could not delete ball {}: {}", id, e);
                None
            }
        }
    }

    /// Two-press teleport. The first press picks the ball under the cursor,
    /// the second moves it to the cursor. Pressing again while still over the
    /// picked ball cancels.
    pub fn teleport(&mut self, pos: Vec2, queries: &mut QueryBuffer) {
        let pick_radius = self.config.pick_radius;
        match self.interaction {
            Interaction::MovePending(id) => {
                self.interaction = Interaction::Idle;
                match self.balls.get_mut(id) {
                    Ok(ball) if distance(ball.pos, pos) < pick_radius => {
                        ftlog::debug!("teleport of {} cancelled", id);
                    }
                    Ok(ball) => ball.pos = pos,
                    Err(e) => ftlog::warn!("teleport target lost: {}", e),
                }
            }
            Interaction::Idle => {
                if self.nearest_balls(pos, 1, queries).is_err() {
                    return;
                }
                if let Some(q) = queries.nearest() {
                    if let (Some(id), true) = (q.ball, q.distance < pick_radius) {
                        self.interaction = Interaction::MovePending(id);
                    }
                }
            }
        }
    }
}
