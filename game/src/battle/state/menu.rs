//====================================================================

use engine::event::Event;

use crate::battle::Battle;

use super::{SelectionState, State};

//====================================================================

pub(super) fn handle(battle: &mut Battle, event: &Event) {
    if let Some(selection) = battle.bar_handle(event) {
        battle.switch(State::Selection(SelectionState::new(selection)));
    }
}

//====================================================================
