//====================================================================

use hecs::Entity;

use crate::battle::{
    selection::{SelectionKind, Sides},
    Battle, Selection,
};

//====================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpellType {
    Neutral,
    Fire,
    Wind,
    Water,
    Earth,
    Chaos,
    Holy,
    Time,
}

/// Fill the default target of a selection.
pub type SpellSelect = fn(&Battle, &mut Selection);

/// Run the spell, usually by switching the battle to a cast state.
pub type SpellAction = fn(&mut Battle, Entity, &Selection);

#[derive(Debug)]
pub struct Spell {
    pub name: &'static str,
    pub description: &'static str,
    pub mp: u32,
    pub kind: SpellType,
    pub selection: SelectionKind,
    pub sides: Sides,
    pub select: SpellSelect,
    pub action: SpellAction,
}

impl Spell {
    /// Selection preset for this spell, with its default target.
    pub fn selection(&self, battle: &Battle) -> Selection {
        let mut selection = Selection::new(self.selection, self.sides);
        (self.select)(battle, &mut selection);
        selection
    }

    #[inline]
    pub fn action(&self, battle: &mut Battle, source: Entity, selection: &Selection) {
        (self.action)(battle, source, selection)
    }
}

/// Select the first alive entity on the preferred side.
pub fn select_first(battle: &Battle, selection: &mut Selection) {
    if let Err(e) = selection.first(battle) {
        log::warn!("Unable to preselect a spell target: {}", e);
    }
}

//====================================================================
