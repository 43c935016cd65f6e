//====================================================================

use std::sync::Arc;

use engine::{
    painter::Painter,
    sprite::Sprite,
    ui::{Label, Theme},
};

use crate::characters::{Character, SpriteKind};

use super::entity_state::{Attacking, Blinking, EntityState, Moving, OPAQUE, TRANSLUCENT};

//====================================================================

/// On screen presence of a character during a battle. Lives next to the
/// `Character` component of the same hecs entity.
#[derive(Debug)]
pub struct BattleEntity {
    pub position: glam::IVec2,
    pub alpha: u8,
    pub name: Label,
    state: EntityState,
}

impl BattleEntity {
    pub fn new(position: glam::IVec2) -> Self {
        Self {
            position,
            alpha: OPAQUE,
            name: Label::new(""),
            state: EntityState::Normal,
        }
    }

    /// Reset the character stats and get back to the resting pose.
    pub fn init(&mut self, character: &mut Character) {
        character.reset();

        self.alpha = OPAQUE;
        self.switch(EntityState::Normal);
    }

    #[inline]
    pub fn state(&self) -> &EntityState {
        &self.state
    }

    /// Install a new sub state, finishing the current one first.
    pub fn switch(&mut self, next: EntityState) {
        log::trace!("Entity state {} -> {}", self.state.name(), next.name());

        let previous = std::mem::replace(&mut self.state, next);
        previous.finish(&mut self.alpha);
    }

    #[inline]
    pub fn normal(&mut self) {
        self.switch(EntityState::Normal);
    }

    pub fn move_to(&mut self, character: &Character, destination: glam::IVec2) {
        match character.sprite(SpriteKind::Normal) {
            Some(sprite) => self.switch(EntityState::Moving(Moving::new(
                sprite.clone(),
                self.position,
                destination,
            ))),

            None => {
                log::warn!("'{}' has no sprite to walk with, teleporting", character.name);
                self.position = destination;
                self.normal();
            }
        }
    }

    pub fn blink(&mut self) {
        self.switch(EntityState::Blinking(Blinking::new()));
        self.alpha = TRANSLUCENT;
    }

    #[inline]
    pub fn attack(&mut self, sprite: Arc<Sprite>) {
        self.switch(EntityState::Attacking(Attacking::new(sprite)));
    }

    /// Advance the current sub state. Returns true once it is complete.
    pub fn update(&mut self, ticks: u32) -> bool {
        let Self {
            position,
            alpha,
            state,
            ..
        } = self;

        state.update(position, alpha, ticks)
    }

    /// Center the name label below the sprite.
    pub fn positionate_name(&mut self, character: &Character, theme: &Theme) {
        let cell = character.cell();

        self.name.text = character.name.clone();

        let size = self.name.size(theme);

        self.name.position = glam::ivec2(
            self.position.x + cell.width as i32 / 2 - size.width as i32 / 2,
            self.position.y + (cell.height + theme.padding) as i32,
        );
    }

    pub fn draw(&self, painter: &mut dyn Painter, character: &Character, theme: &Theme) {
        self.name.draw(painter, theme);
        self.state
            .draw(painter, character, self.position, self.alpha);
    }
}

//====================================================================

#[cfg(test)]
mod tests {
    use engine::sprite::Texture;

    use super::*;

    fn reset(character: &mut Character) {
        character.hpmax = 100;
    }

    fn character() -> Character {
        let sprite = Arc::new(Sprite::new(Texture::new("hero", (144, 256)), (48, 32)));
        Character::new("Hero", reset).with_sprite(SpriteKind::Normal, sprite)
    }

    #[test]
    fn switching_finishes_blinking() {
        let mut entity = BattleEntity::new(glam::IVec2::ZERO);
        entity.blink();
        assert_eq!(entity.alpha, TRANSLUCENT);

        entity.normal();
        assert_eq!(entity.alpha, OPAQUE);
        assert!(matches!(entity.state(), EntityState::Normal));
    }

    #[test]
    fn blinking_again_starts_translucent() {
        let mut entity = BattleEntity::new(glam::IVec2::ZERO);
        entity.blink();
        entity.update(80);
        entity.blink();

        assert_eq!(entity.alpha, TRANSLUCENT);
    }

    #[test]
    fn init_resets_character() {
        let mut character = character();
        character.hp = 500;

        let mut entity = BattleEntity::new(glam::IVec2::ZERO);
        entity.blink();
        entity.init(&mut character);

        assert_eq!(character.hp, 100);
        assert_eq!(entity.alpha, OPAQUE);
        assert!(entity.update(0));
    }

    #[test]
    fn name_is_centered_below_sprite() {
        let theme = Theme::default();
        let character = character();

        let mut entity = BattleEntity::new(glam::ivec2(100, 50));
        entity.positionate_name(&character, &theme);

        // 4 glyphs of 8 pixels, sprite cell of 48x32.
        assert_eq!(entity.name.position, glam::ivec2(100 + 24 - 16, 50 + 32 + 10));
        assert_eq!(entity.name.text, "Hero");
    }

    #[test]
    fn moving_then_polling() {
        let character = character();

        let mut entity = BattleEntity::new(glam::ivec2(0, 0));
        entity.move_to(&character, glam::ivec2(80, 0));

        assert!(!entity.update(50));
        assert!(!entity.update(0));
        assert_eq!(entity.position, glam::ivec2(40, 0));

        assert!(entity.update(50));
    }
}

//====================================================================
