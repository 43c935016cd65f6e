//====================================================================

use std::sync::Arc;

use common::Size;

use crate::painter::Painter;

//====================================================================

/// Handle to an image owned by the rendering backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Texture {
    pub name: String,
    pub size: Size<u32>,
}

impl Texture {
    pub fn new(name: impl Into<String>, size: impl Into<Size<u32>>) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.size.width > 0 && self.size.height > 0
    }
}

//====================================================================

/// A texture split into a grid of equally sized cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sprite {
    pub texture: Texture,
    pub cell: Size<u32>,
    pub nrows: u32,
    pub ncols: u32,
}

impl Sprite {
    pub fn new(texture: Texture, cell: impl Into<Size<u32>>) -> Self {
        let cell = cell.into();
        let (nrows, ncols) = match cell.width > 0 && cell.height > 0 {
            true => (
                texture.size.height / cell.height,
                texture.size.width / cell.width,
            ),
            false => (0, 0),
        };

        Self {
            texture,
            cell,
            nrows,
            ncols,
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.texture.is_ok()
            && self.cell.width > 0
            && self.cell.height > 0
            && self.nrows > 0
            && self.ncols > 0
    }

    #[inline]
    pub fn draw(&self, painter: &mut dyn Painter, row: u32, column: u32, at: glam::IVec2) {
        painter.draw_sprite(self, row, column, at, u8::MAX);
    }
}

//====================================================================

/// Plays every cell of a sprite, row by row, with a fixed delay per frame.
#[derive(Debug, Clone)]
pub struct Animation {
    sprite: Arc<Sprite>,
    row: u32,
    column: u32,
    delay: u32,
    elapsed: u32,
}

impl Animation {
    pub fn new(sprite: Arc<Sprite>, delay: u32) -> Self {
        Self {
            sprite,
            row: 0,
            column: 0,
            delay,
            elapsed: 0,
        }
    }

    #[inline]
    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn start(&mut self) {
        self.row = 0;
        self.column = 0;
        self.elapsed = 0;
    }

    #[inline]
    pub fn completed(&self) -> bool {
        self.row >= self.sprite.nrows
    }

    /// Returns true once the last frame has been displayed for its delay.
    pub fn update(&mut self, ticks: u32) -> bool {
        if self.completed() {
            return true;
        }

        self.elapsed += ticks;

        while self.elapsed >= self.delay && !self.completed() {
            self.elapsed -= self.delay;
            self.column += 1;

            if self.column >= self.sprite.ncols {
                self.column = 0;
                self.row += 1;
            }

            if self.delay == 0 {
                break;
            }
        }

        self.completed()
    }

    pub fn draw(&self, painter: &mut dyn Painter, at: glam::IVec2) {
        if !self.completed() {
            self.sprite.draw(painter, self.row, self.column, at);
        }
    }
}

//====================================================================

/// Walking sprite, one orientation per row and one step per column.
#[derive(Debug, Clone)]
pub struct WalkSprite {
    sprite: Arc<Sprite>,
    delay: u32,
    index: u32,
    elapsed: u32,
}

impl WalkSprite {
    pub fn new(sprite: Arc<Sprite>, delay: u32) -> Self {
        Self {
            sprite,
            delay,
            index: 0,
            elapsed: 0,
        }
    }

    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.elapsed = 0;
    }

    pub fn update(&mut self, ticks: u32) {
        self.elapsed += ticks;

        if self.elapsed >= self.delay {
            self.elapsed = 0;
            self.index = match self.sprite.ncols {
                0 => 0,
                ncols => (self.index + 1) % ncols,
            };
        }
    }

    /// Orientations the sprite does not provide fall back to the first row.
    pub fn draw(&self, painter: &mut dyn Painter, orientation: u32, at: glam::IVec2) {
        let row = match orientation < self.sprite.nrows {
            true => orientation,
            false => 0,
        };

        self.sprite.draw(painter, row, self.index, at);
    }
}

//====================================================================


//====================================================================
