//====================================================================

use std::sync::Arc;

use common::Size;
use engine::sprite::Sprite;
use hecs::Entity;

use crate::{battle::Battle, spell::Spell};

//====================================================================

/// Status bitmask, a character is normal when no bit is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Status(u8);

impl Status {
    pub const NORMAL: Status = Status(0);
    pub const POISON: Status = Status(1 << 0);

    #[inline]
    pub const fn contains(&self, other: Status) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn insert(&mut self, other: Status) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: Status) {
        self.0 &= !other.0;
    }

    pub fn as_str(&self) -> &'static str {
        match self.contains(Status::POISON) {
            true => "poison",
            false => "normal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Axe,
    Bow,
    Crossbow,
    Dagger,
    Hammer,
    Normal,
    Spike,
    Sword,
    Wand,
}

impl SpriteKind {
    pub const COUNT: usize = 9;
}

//====================================================================

/// Enemy strategy, expected to request an action on the battle.
pub type Strategy = fn(&mut Battle, Entity);

/// Recompute derived stats such as maximums from the level.
pub type Reset = fn(&mut Character);

#[derive(Debug, Clone)]
pub struct Character {
    pub name: String,
    pub level: u32,
    pub team_order: u32,
    pub status: Status,

    pub hp: u32,
    pub hpmax: u32,
    pub hpbonus: u32,
    pub mp: u32,
    pub mpmax: u32,
    pub mpbonus: u32,

    pub atk: u32,
    pub atkbonus: u32,
    pub def: u32,
    pub defbonus: u32,
    pub agt: u32,
    pub agtbonus: u32,
    pub luck: u32,
    pub luckbonus: u32,

    pub sprites: [Option<Arc<Sprite>>; SpriteKind::COUNT],
    pub spells: Vec<&'static Spell>,

    /// Set for characters driven by the game rather than the player.
    pub exec: Option<Strategy>,
    pub reset: Reset,
}

impl Character {
    pub fn new(name: impl Into<String>, reset: Reset) -> Self {
        Self {
            name: name.into(),
            level: 1,
            team_order: 0,
            status: Status::NORMAL,
            hp: 0,
            hpmax: 0,
            hpbonus: 0,
            mp: 0,
            mpmax: 0,
            mpbonus: 0,
            atk: 0,
            atkbonus: 0,
            def: 0,
            defbonus: 0,
            agt: 0,
            agtbonus: 0,
            luck: 0,
            luckbonus: 0,
            sprites: Default::default(),
            spells: Vec::new(),
            exec: None,
            reset,
        }
    }

    pub fn with_sprite(mut self, kind: SpriteKind, sprite: Arc<Sprite>) -> Self {
        self.sprites[kind as usize] = Some(sprite);
        self
    }

    pub fn with_spells(mut self, spells: Vec<&'static Spell>) -> Self {
        self.spells = spells;
        self
    }

    pub fn with_exec(mut self, exec: Strategy) -> Self {
        self.exec = Some(exec);
        self
    }

    #[inline]
    pub fn sprite(&self, kind: SpriteKind) -> Option<&Arc<Sprite>> {
        self.sprites[kind as usize].as_ref()
    }

    /// Cell size of the normal sprite, used to lay entities out.
    #[inline]
    pub fn cell(&self) -> Size<u32> {
        self.sprite(SpriteKind::Normal)
            .map(|sprite| sprite.cell)
            .unwrap_or_default()
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        !self.name.is_empty()
            && self
                .sprite(SpriteKind::Normal)
                .map(|sprite| sprite.is_ok())
                .unwrap_or(false)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.is_ok() && self.hp > 0
    }

    #[inline]
    pub fn is_player_controlled(&self) -> bool {
        self.exec.is_none()
    }

    #[inline]
    pub fn max_hp(&self) -> u32 {
        self.hpmax + self.hpbonus
    }

    #[inline]
    pub fn max_mp(&self) -> u32 {
        self.mpmax + self.mpbonus
    }

    #[inline]
    pub fn total_agt(&self) -> u32 {
        self.agt + self.agtbonus
    }

    pub fn reset(&mut self) {
        (self.reset)(self);

        self.hp = self.hp.min(self.max_hp());
        self.mp = self.mp.min(self.max_mp());
    }

    /// Remove up to `amount` hp and return what was actually removed.
    pub fn damage(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.hp);
        self.hp -= removed;
        removed
    }

    /// Restore up to `amount` hp without going past the maximum.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let added = amount.min(self.max_hp().saturating_sub(self.hp));
        self.hp += added;
        added
    }
}

//====================================================================

#[cfg(test)]
mod tests {
    use engine::sprite::Texture;

    use super::*;

    fn reset(character: &mut Character) {
        character.hpmax = 100;
        character.mpmax = 20;
    }

    fn character() -> Character {
        let sprite = Arc::new(Sprite::new(Texture::new("hero", (96, 256)), (48, 32)));
        Character::new("Hero", reset).with_sprite(SpriteKind::Normal, sprite)
    }

    #[test]
    fn requires_name_and_normal_sprite() {
        assert!(character().is_ok());
        assert!(!Character::new("Hero", reset).is_ok());

        let mut unnamed = character();
        unnamed.name.clear();
        assert!(!unnamed.is_ok());
    }

    #[test]
    fn reset_clamps_to_maximum() {
        let mut character = character();
        character.hp = 500;
        character.mp = 5;
        character.hpbonus = 10;
        character.reset();

        assert_eq!(character.hp, 110);
        assert_eq!(character.mp, 5);
    }

    #[test]
    fn damage_never_goes_below_zero() {
        let mut character = character();
        character.hp = 30;

        assert_eq!(character.damage(50), 30);
        assert_eq!(character.hp, 0);
        assert!(!character.is_alive());
    }

    #[test]
    fn status_strings() {
        let mut status = Status::NORMAL;
        assert_eq!(status.as_str(), "normal");

        status.insert(Status::POISON);
        assert_eq!(status.as_str(), "poison");

        status.remove(Status::POISON);
        assert_eq!(status, Status::NORMAL);
    }
}

//====================================================================
