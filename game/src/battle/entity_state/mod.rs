//====================================================================

use engine::painter::Painter;

use crate::characters::{Character, SpriteKind};

pub use attacking::Attacking;
pub use blinking::{Blinking, OPAQUE, TRANSLUCENT};
pub use moving::Moving;

mod attacking;
mod blinking;
mod moving;

//====================================================================

/// Animation phase of a single battle entity. Only the owning battle state
/// requests transitions.
#[derive(Debug, Default)]
pub enum EntityState {
    #[default]
    Normal,
    Moving(Moving),
    Blinking(Blinking),
    Attacking(Attacking),
}

impl EntityState {
    pub fn name(&self) -> &'static str {
        match self {
            EntityState::Normal => "normal",
            EntityState::Moving(_) => "moving",
            EntityState::Blinking(_) => "blinking",
            EntityState::Attacking(_) => "attacking",
        }
    }

    /// Advance the animation, 0 ticks only reports whether it is complete.
    pub fn update(&mut self, position: &mut glam::IVec2, alpha: &mut u8, ticks: u32) -> bool {
        match self {
            EntityState::Normal => true,
            EntityState::Moving(moving) => moving.update(position, ticks),
            EntityState::Blinking(blinking) => blinking.update(alpha, ticks),
            EntityState::Attacking(attacking) => attacking.update(ticks),
        }
    }

    pub fn draw(
        &self,
        painter: &mut dyn Painter,
        character: &Character,
        position: glam::IVec2,
        alpha: u8,
    ) {
        match self {
            EntityState::Normal | EntityState::Blinking(_) => {
                draw_sprite(painter, character, position, alpha)
            }
            EntityState::Moving(moving) => moving.draw(painter, position),
            EntityState::Attacking(attacking) => attacking.draw(painter, position),
        }
    }

    pub fn finish(self, alpha: &mut u8) {
        if let EntityState::Blinking(blinking) = self {
            blinking.finish(alpha);
        }
    }
}

/// Draw the resting pose. Enemies usually come as a single cell while team
/// members provide a full walking sheet.
pub fn draw_sprite(painter: &mut dyn Painter, character: &Character, position: glam::IVec2, alpha: u8) {
    let sprite = match character.sprite(SpriteKind::Normal) {
        Some(sprite) => sprite,
        None => return,
    };

    let row = match sprite.nrows > 6 {
        true => 6,
        false => 0,
    };

    painter.draw_sprite(sprite, row, 0, position, alpha);
}

//====================================================================
