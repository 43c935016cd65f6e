//====================================================================

use hecs::Entity;

use crate::{battle::Battle, characters::Character};

//====================================================================

pub type ItemBattle = fn(&mut Battle, Entity, Entity);
pub type ItemMenu = fn(&mut Character);

#[derive(Debug)]
pub struct Item {
    pub name: &'static str,
    pub description: &'static str,
    /// Maximum amount held in a single inventory slot.
    pub stackable: u32,

    /// Use the item in battle, from the owner onto the target.
    pub exec_battle: ItemBattle,
    /// Use the item from the menu, outside of battles.
    pub exec_menu: Option<ItemMenu>,
}

impl Item {
    #[inline]
    pub fn exec_battle(&self, battle: &mut Battle, owner: Entity, target: Entity) {
        log::info!("Using item '{}'", self.name);
        (self.exec_battle)(battle, owner, target)
    }

    /// Returns false if the item can't be used from the menu.
    pub fn exec_menu(&self, character: &mut Character) -> bool {
        match self.exec_menu {
            Some(exec) => {
                exec(character);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn same(&self, other: &Item) -> bool {
        self.name == other.name
    }
}

//====================================================================
