use super::{FrameContext, Scene};
use crate::profile_scope;
use crate::renderer::{InputSnapshot, Renderer};

impl Scene {
    /// Draw preview lines, then every spring once, then the balls.
    pub fn render<R: Renderer>(
        &mut self,
        renderer: &mut R,
        frame: &FrameContext,
        input: &InputSnapshot,
    ) {
        profile_scope!("render");
        if !input.right_down {
            for q in frame.queries.valid() {
                // Handles from the previous frame may have been removed since.
                let Some(ball) = q.ball.and_then(|id| self.balls.get(id).ok()) else {
                    continue;
                };
                renderer.draw_line(frame.mouse_world, ball.pos, false);
            }
        }

        self.render_springs(renderer);

        let radius = self.config.ball_radius;
        for ball in self.balls.balls() {
            renderer.draw_circle(ball.pos, radius);
        }
    }

    fn render_springs<R: Renderer>(&mut self, renderer: &mut R) {
        for ball in self.balls.balls_mut() {
            for spring in ball.springs.iter_mut() {
                spring.rendered = false;
            }
        }

        for i in 0..self.balls.len() {
            for j in 0..self.balls.balls()[i].springs.len() {
                let spring = self.balls.balls()[i].springs[j];
                if spring.rendered {
                    continue;
                }
                let Ok(k) = self.balls.index_of(spring.other) else {
                    continue;
                };
                let holder = self.balls.balls()[i].id;
                let balls = self.balls.balls_mut();
                balls[i].springs[j].rendered = true;
                if let Some(mirror) = balls[k].springs.iter_mut().find(|s| s.other == holder) {
                    mirror.rendered = true;
                }
                renderer.draw_line(balls[i].pos, balls[k].pos, true);
            }
        }
    }
}
