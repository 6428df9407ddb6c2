// app/script.rs
// Timed input cues that stand in for a mouse and keyboard in headless runs

use ultraviolet::Vec2;

use crate::renderer::{ActiveKey, InputSnapshot, ViewCamera};
use crate::scene::{ModeKind, Scene};

/// Where a cue points the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Target {
    World(Vec2),
    /// The current position of the ball stored at this index.
    Ball(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Hold the left button.
    Place,
    Delete,
    Teleport,
    Mode(ModeKind),
    /// Hold the right button while the cursor moves by this many pixels per frame.
    Pan { dx: f32, dy: f32 },
    Restart,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cue {
    pub start: u64,
    pub frames: u64,
    pub target: Target,
    pub action: Action,
}

impl Cue {
    fn covers(&self, frame: u64) -> bool {
        frame >= self.start && frame < self.start + self.frames.max(1)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Script {
    cues: Vec<Cue>,
}

impl Script {
    pub fn new(mut cues: Vec<Cue>) -> Self {
        cues.sort_by_key(|c| c.start);
        Self { cues }
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// A short tour of every interaction, timed for `fps` frames per second.
    pub fn demo(fps: u32) -> Self {
        let at = |seconds: f32| (seconds * fps as f32).round() as u64;
        let hold = (crate::config::PLACEMENT_DEBOUNCE_FRAMES + 2) as u64;
        let press = |seconds: f32, target: Target, action: Action| Cue {
            start: at(seconds),
            frames: 1,
            target,
            action,
        };
        Self::new(vec![
            Cue {
                start: at(0.5),
                frames: hold,
                target: Target::World(Vec2::new(0.0, 3.0)),
                action: Action::Place,
            },
            Cue {
                start: at(1.0),
                frames: hold,
                target: Target::World(Vec2::new(1.5, 3.5)),
                action: Action::Place,
            },
            press(1.5, Target::Ball(3), Action::Teleport),
            press(1.75, Target::World(Vec2::new(-3.0, 4.0)), Action::Teleport),
            press(2.0, Target::World(Vec2::zero()), Action::Mode(ModeKind::Moon)),
            press(2.5, Target::Ball(0), Action::Delete),
            Cue {
                start: at(3.0),
                frames: at(0.25).max(1),
                target: Target::World(Vec2::zero()),
                action: Action::Pan { dx: 4.0, dy: 0.0 },
            },
            press(3.5, Target::World(Vec2::zero()), Action::Mode(ModeKind::NoGravity)),
            press(4.0, Target::World(Vec2::zero()), Action::Mode(ModeKind::Default)),
        ])
    }

    pub fn active(&self, frame: u64) -> Option<&Cue> {
        self.cues.iter().find(|c| c.covers(frame))
    }

    /// Input for `frame`. Between cues the cursor rests on the last target,
    /// so the scene keeps previewing connections there.
    pub fn input(&self, frame: u64, scene: &Scene, camera: &ViewCamera) -> InputSnapshot {
        let cue = self
            .active(frame)
            .or_else(|| self.cues.iter().rev().find(|c| c.start <= frame));
        let Some(cue) = cue else {
            return InputSnapshot::default();
        };
        let world = match cue.target {
            Target::World(p) => p,
            Target::Ball(index) => match scene.balls().get(index) {
                Some(ball) => ball.pos,
                None => return InputSnapshot::default(),
            },
        };
        let (sx, sy) = camera.world_to_view(world);
        let input = InputSnapshot::at(sx, sy);
        if !cue.covers(frame) {
            return input;
        }

        match cue.action {
            Action::Place => input.with_left(),
            Action::Delete => input.with_key(ActiveKey::Delete),
            Action::Teleport => input.with_key(ActiveKey::Teleport),
            Action::Mode(ModeKind::Default) => input.with_key(ActiveKey::DefaultMode),
            Action::Mode(ModeKind::Moon) => input.with_key(ActiveKey::MoonMode),
            Action::Mode(ModeKind::NoGravity) => input.with_key(ActiveKey::NoGravMode),
            Action::Pan { dx, dy } => input.with_drag(dx, dy),
            Action::Restart => InputSnapshot {
                restart_requested: true,
                ..input
            },
            Action::Quit => InputSnapshot {
                quit_requested: true,
                ..input
            },
        }
    }
}
