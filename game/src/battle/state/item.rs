//====================================================================

use common::Rect;
use engine::{
    action::Action,
    ui::{Message, MessageFlags},
};
use hecs::Entity;

use crate::{
    battle::Battle,
    error::{BattleError, Result},
    item::Item,
};

//====================================================================

/// Distance walked by the user before using an object.
const ADVANCE: i32 = 100;
const MESSAGE_TIMEOUT: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemPhase {
    Advancing,
    /// Blocking message naming the object.
    Message,
    Returning,
}

/// A team member steps forward, shows the object then uses it.
#[derive(Debug)]
pub struct ItemState {
    source: Entity,
    target: Entity,
    item: &'static Item,
    origin: glam::IVec2,
    phase: ItemPhase,
}

impl ItemState {
    pub fn new(battle: &mut Battle, source: Entity, target: Entity, slot: usize) -> Result<Self> {
        let item = battle
            .inventory
            .as_ref()
            .and_then(|inventory| inventory.slot(slot))
            .filter(|slot| slot.amount > 0)
            .and_then(|slot| slot.item)
            .ok_or(BattleError::EmptySlot(slot))?;

        // Target must exist.
        battle.character(target)?;

        let (entity, character) = battle.parts_mut(source)?;
        let origin = entity.position;

        entity.move_to(character, origin - glam::ivec2(ADVANCE, 0));

        Ok(Self {
            source,
            target,
            item,
            origin,
            phase: ItemPhase::Advancing,
        })
    }

    #[inline]
    pub fn phase(&self) -> ItemPhase {
        self.phase
    }

    fn show(&self, battle: &mut Battle) {
        let mut message = Message::new(
            vec![self.item.name.to_string()],
            MessageFlags::AUTOMATIC | MessageFlags::FADEIN | MessageFlags::FADEOUT,
            battle.theme.clone(),
        );

        let size = message.query();
        message.timeout = MESSAGE_TIMEOUT;
        message.rect = Rect::new(
            (battle.size.width as i32 - size.width as i32) / 2,
            (battle.size.height / 10) as i32,
            size.width,
            size.height,
        );
        message.start();

        if let Err(e) = battle.actions[0].add(Box::new(message)) {
            log::warn!("Unable to show item name: {}", e);
        }
    }

    pub(super) fn update(&mut self, battle: &mut Battle) {
        // Blocking message is done when the state runs again.
        if self.phase == ItemPhase::Message {
            self.phase = ItemPhase::Returning;

            if let Ok((entity, character)) = battle.parts_mut(self.source) {
                entity.move_to(character, self.origin);
            }
            return;
        }

        let done = match battle.parts_mut(self.source) {
            Ok((entity, _)) => {
                let done = entity.update(0);
                if done {
                    entity.normal();
                }
                done
            }
            Err(e) => {
                log::error!("Item user vanished: {}", e);
                battle.switch(super::State::Check);
                return;
            }
        };

        if !done {
            return;
        }

        match self.phase {
            ItemPhase::Advancing => {
                self.phase = ItemPhase::Message;
                self.show(battle);
            }
            ItemPhase::Returning => battle.use_item(self.source, self.target, self.item),
            ItemPhase::Message => {}
        }
    }
}

//====================================================================
