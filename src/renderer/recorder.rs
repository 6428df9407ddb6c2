use ultraviolet::Vec2;

use super::Renderer;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Line { start: Vec2, end: Vec2, highlighted: bool },
    Circle { center: Vec2, radius: f32 },
}

/// Renderer that keeps the frame's draw calls instead of rasterising them.
#[derive(Clone, Debug)]
pub struct DrawRecorder {
    pub commands: Vec<DrawCommand>,
    width: u32,
    height: u32,
}

impl DrawRecorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            commands: Vec::new(),
            width,
            height,
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn lines(&self, highlighted: bool) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { highlighted: h, .. } if *h == highlighted))
            .count()
    }

    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl Renderer for DrawRecorder {
    fn draw_line(&mut self, start: Vec2, end: Vec2, highlighted: bool) {
        self.commands.push(DrawCommand::Line { start, end, highlighted });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    fn viewport_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
