//====================================================================

use hecs::Entity;

use crate::battle::Battle;

use super::State;

//====================================================================

pub(super) fn update(battle: &mut Battle) {
    let current = match battle.current() {
        Some(current) => current,
        None => {
            log::warn!("No entity is playing");
            battle.switch(State::Check);
            return;
        }
    };

    let exec = battle
        .character(current)
        .ok()
        .and_then(|character| character.exec);

    match exec {
        Some(exec) => exec(battle, current),
        None => attack_random(battle, current),
    }

    if !battle.has_pending() {
        log::warn!("Strategy of {:?} did not act, skipping turn", current);
        battle.switch(State::Check);
    }
}

/// Default enemy strategy, hit a random alive team member.
pub fn attack_random(battle: &mut Battle, source: Entity) {
    if let Err(e) = battle.attack(source, None) {
        log::warn!("Unable to attack: {}", e);
    }
}

//====================================================================
