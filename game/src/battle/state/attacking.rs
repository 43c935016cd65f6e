//====================================================================

use hecs::Entity;

use crate::{
    battle::{Battle, ATTACK_DAMAGE},
    characters::SpriteKind,
    error::Result,
};

use super::State;

//====================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackPhase {
    /// Walking up to the target.
    Advancing,
    /// Playing the weapon animation.
    Damaging,
    /// Walking back to the initial position.
    Returning,
    /// Enemies blink in place instead of moving.
    Blinking,
}

/// Physical attack from one entity to another.
#[derive(Debug)]
pub struct Attacking {
    source: Entity,
    target: Entity,
    origin: glam::IVec2,
    phase: AttackPhase,
}

impl Attacking {
    pub fn new(battle: &mut Battle, source: Entity, target: Entity) -> Result<Self> {
        let destination = {
            let cell = battle.character(target)?.cell();
            battle.entity(target)?.position + glam::ivec2(cell.width as i32, 0)
        };

        let (entity, character) = battle.parts_mut(source)?;
        let origin = entity.position;

        let phase = match character.is_player_controlled() {
            true => {
                entity.move_to(character, destination);
                AttackPhase::Advancing
            }
            false => {
                entity.blink();
                AttackPhase::Blinking
            }
        };

        log::debug!("'{}' attacks {:?}", character.name, target);

        Ok(Self {
            source,
            target,
            origin,
            phase,
        })
    }

    #[inline]
    pub fn phase(&self) -> AttackPhase {
        self.phase
    }

    fn hit(&self, battle: &mut Battle) {
        if let Err(e) = battle.damage(self.target, ATTACK_DAMAGE) {
            log::warn!("Attack target vanished: {}", e);
        }
    }

    pub(super) fn update(&mut self, battle: &mut Battle) {
        let (entity, character) = match battle.parts_mut(self.source) {
            Ok(parts) => parts,
            Err(e) => {
                log::error!("Attacker vanished: {}", e);
                battle.switch(State::Check);
                return;
            }
        };

        if !entity.update(0) {
            return;
        }

        match self.phase {
            AttackPhase::Advancing => {
                self.phase = AttackPhase::Damaging;

                match character
                    .sprite(SpriteKind::Sword)
                    .or_else(|| character.sprite(SpriteKind::Normal))
                {
                    Some(sprite) => entity.attack(sprite.clone()),
                    None => entity.normal(),
                }
            }

            AttackPhase::Damaging => {
                self.phase = AttackPhase::Returning;
                entity.move_to(character, self.origin);
                self.hit(battle);
            }

            AttackPhase::Returning => {
                entity.normal();
                battle.switch(State::Check);
            }

            AttackPhase::Blinking => {
                entity.normal();
                self.hit(battle);
                battle.switch(State::Check);
            }
        }
    }
}

//====================================================================
