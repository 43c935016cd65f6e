//====================================================================

use common::{Color, Rect};

use crate::sprite::{Sprite, Texture};

//====================================================================

/// Drawing surface provided by the rendering backend.
pub trait Painter {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    /// Fill the whole target with the current color.
    fn clear(&mut self);

    /// Fill a rectangle with the current color.
    fn draw_rectangle(&mut self, rect: Rect);

    fn draw_texture(&mut self, texture: &Texture, at: glam::IVec2, alpha: u8);

    /// Draw the cell at `row`, `column` of a sprite.
    fn draw_sprite(&mut self, sprite: &Sprite, row: u32, column: u32, at: glam::IVec2, alpha: u8);

    fn draw_text(&mut self, text: &str, at: glam::IVec2, color: Color);

    fn present(&mut self);
}

//====================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rectangle {
        rect: Rect,
        color: Color,
    },
    Texture {
        name: String,
        at: glam::IVec2,
        alpha: u8,
    },
    Sprite {
        name: String,
        row: u32,
        column: u32,
        at: glam::IVec2,
        alpha: u8,
    },
    Text {
        text: String,
        at: glam::IVec2,
        color: Color,
    },
}

/// Headless painter keeping every command of the current frame.
#[derive(Debug, Default)]
pub struct Recorder {
    color: Color,
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Every text drawn since the last present.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Painter for Recorder {
    #[inline]
    fn color(&self) -> Color {
        self.color
    }

    #[inline]
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear(self.color));
    }

    fn draw_rectangle(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Rectangle {
            rect,
            color: self.color,
        });
    }

    fn draw_texture(&mut self, texture: &Texture, at: glam::IVec2, alpha: u8) {
        self.commands.push(DrawCommand::Texture {
            name: texture.name.clone(),
            at,
            alpha,
        });
    }

    fn draw_sprite(&mut self, sprite: &Sprite, row: u32, column: u32, at: glam::IVec2, alpha: u8) {
        self.commands.push(DrawCommand::Sprite {
            name: sprite.texture.name.clone(),
            row,
            column,
            at,
            alpha,
        });
    }

    fn draw_text(&mut self, text: &str, at: glam::IVec2, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            color,
        });
    }

    fn present(&mut self) {
        log::trace!("Presenting frame {} ({} commands)", self.frames, self.commands.len());

        self.frames += 1;
        self.commands.clear();
    }
}

//====================================================================
