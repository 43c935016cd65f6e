use std::sync::Arc;

use engine::{
    event::Key,
    sprite::{Sprite, Texture},
};
use game::{
    battle::{
        effects::AnimationEffect,
        selection::{SelectionKind, Sides},
        state::Cast,
        Battle, Selection, State,
    },
    inventory::Inventory,
    item::Item,
    spell::{select_first, Spell, SpellType},
    BattleError,
};
use hecs::Entity;

mod support;

use support::*;

//====================================================================

fn fire(battle: &mut Battle, _: Entity, selection: &Selection) {
    let targets = selection.targets(battle);
    let sprite = Arc::new(Sprite::new(Texture::new("fire", (64, 32)), (32, 32)));
    let effect = AnimationEffect::new(sprite, 50, glam::IVec2::ZERO);

    battle.switch(State::Cast(Cast::new(
        Box::new(effect),
        Box::new(move |battle| {
            targets.into_iter().for_each(|target| {
                battle.damage(target, 100).unwrap();
            })
        }),
    )));
}

static FIRE: Spell = Spell {
    name: "Fire",
    description: "Burn a single enemy",
    mp: 5,
    kind: SpellType::Fire,
    selection: SelectionKind::One,
    sides: Sides::ENEMY,
    select: select_first,
    action: fire,
};

fn drink(battle: &mut Battle, _: Entity, target: Entity) {
    battle.heal(target, 50).unwrap();
}

static POTION: Item = Item {
    name: "Potion",
    description: "Recover 50 hp",
    stackable: 10,
    exec_battle: drink,
    exec_menu: None,
};

fn fizzle(_: &mut Battle, _: Entity, _: &Selection) {}

static FIZZLE: Spell = Spell {
    name: "Fizzle",
    description: "Does nothing at all",
    mp: 5,
    kind: SpellType::Fire,
    selection: SelectionKind::One,
    sides: Sides::ENEMY,
    select: select_first,
    action: fizzle,
};

//====================================================================

#[test]
fn fire_is_cast_from_the_menu() {
    let (mut battle, team, enemies) =
        battle(vec![molko().with_spells(vec![&FIRE])], vec![black_cat()]);
    battle.start().unwrap();

    assert!(wait_until(&mut battle, 500, |battle| in_state(battle, "menu")));

    key(&mut battle, Key::Right);
    key(&mut battle, Key::Enter);
    assert!(in_state(&battle, "menu"));

    key(&mut battle, Key::Enter);
    assert!(in_state(&battle, "selection"));

    key(&mut battle, Key::Enter);
    assert!(in_state(&battle, "cast"));
    assert_eq!(battle.character(team[0]).unwrap().mp, 45);

    assert!(wait_until(&mut battle, 100, |battle| !in_state(battle, "cast")));
    assert_eq!(hp(&battle, enemies[0]), 20);
}

#[test]
fn escape_keeps_the_spell_grid_open() {
    let (mut battle, _, enemies) =
        battle(vec![molko().with_spells(vec![&FIRE])], vec![black_cat()]);
    battle.start().unwrap();

    assert!(wait_until(&mut battle, 500, |battle| in_state(battle, "menu")));

    key(&mut battle, Key::Right);
    key(&mut battle, Key::Enter);
    key(&mut battle, Key::Enter);
    assert!(in_state(&battle, "selection"));

    key(&mut battle, Key::Escape);
    assert!(in_state(&battle, "menu"));

    key(&mut battle, Key::Enter);
    assert!(in_state(&battle, "selection"));

    key(&mut battle, Key::Enter);
    assert!(in_state(&battle, "cast"));

    assert!(wait_until(&mut battle, 100, |battle| !in_state(battle, "cast")));
    assert_eq!(hp(&battle, enemies[0]), 20);
}

#[test]
fn escape_after_attack_returns_to_the_top_menu() {
    let (mut battle, _, _) = battle(vec![molko().with_spells(vec![&FIRE])], vec![black_cat()]);
    battle.start().unwrap();

    assert!(wait_until(&mut battle, 500, |battle| in_state(battle, "menu")));

    key(&mut battle, Key::Enter);
    assert!(in_state(&battle, "selection"));

    key(&mut battle, Key::Escape);
    key(&mut battle, Key::Enter);
    key(&mut battle, Key::Enter);
    assert!(in_state(&battle, "attacking"));
}

#[test]
fn spell_needs_enough_mp() {
    let mut tired = molko().with_spells(vec![&FIRE]);
    tired.mp = 3;

    let (mut battle, team, _) = battle(vec![tired], vec![black_cat()]);
    battle.start().unwrap();

    let selection = FIRE.selection(&battle);
    assert_eq!(
        battle.cast(team[0], &FIRE, &selection),
        Err(BattleError::NotEnoughMp {
            required: 5,
            available: 3
        })
    );
    assert_eq!(battle.character(team[0]).unwrap().mp, 3);

    // The grid refuses the spell as well.
    assert!(wait_until(&mut battle, 500, |battle| in_state(battle, "menu")));
    key(&mut battle, Key::Right);
    key(&mut battle, Key::Enter);
    key(&mut battle, Key::Enter);
    assert!(in_state(&battle, "menu"));
}

#[test]
fn spell_without_effect_gives_mp_back() {
    let (mut battle, team, _) =
        battle(vec![molko().with_spells(vec![&FIZZLE])], vec![black_cat()]);
    battle.start().unwrap();

    let selection = FIZZLE.selection(&battle);
    battle.cast(team[0], &FIZZLE, &selection).unwrap();
    assert_eq!(battle.character(team[0]).unwrap().mp, 50);

    // Through the menu the turn is skipped, still without spending mp.
    assert!(wait_until(&mut battle, 500, |battle| in_state(battle, "menu")));
    key(&mut battle, Key::Right);
    key(&mut battle, Key::Enter);
    key(&mut battle, Key::Enter);
    key(&mut battle, Key::Enter);

    assert!(!in_state(&battle, "selection"));
    assert_eq!(battle.character(team[0]).unwrap().mp, 50);
}

#[test]
fn spell_selection_defaults_to_first_enemy() {
    let (mut battle, _, enemies) = battle(vec![molko()], vec![black_cat(), black_cat()]);
    battle.start().unwrap();

    battle.character_mut(enemies[0]).unwrap().hp = 0;

    let selection = FIRE.selection(&battle);
    assert_eq!(selection.target(&battle), Some(enemies[1]));
}

//====================================================================

#[test]
fn potion_is_used_on_self() {
    let mut hurt = molko();
    hurt.hp = 60;

    let (mut battle, team, _) = battle(vec![hurt], vec![black_cat()]);

    let mut inventory = Inventory::new();
    assert_eq!(inventory.push(&POTION, 2), 0);
    battle.inventory = Some(inventory);

    battle.start().unwrap();
    assert!(wait_until(&mut battle, 500, |battle| in_state(battle, "menu")));

    key(&mut battle, Key::Down);
    key(&mut battle, Key::Enter);
    key(&mut battle, Key::Enter);

    match battle.state() {
        Some(State::Selection(selection)) => {
            assert_eq!(selection.selection().target(&battle), Some(team[0]))
        }
        _ => panic!("expected a selection"),
    }

    key(&mut battle, Key::Enter);
    assert!(in_state(&battle, "item"));

    assert!(wait_until(&mut battle, 1000, |battle| !in_state(battle, "item")));
    assert_eq!(hp(&battle, team[0]), 110);

    let slot = battle.inventory.as_ref().unwrap().slot(0).unwrap();
    assert_eq!(slot.amount, 1);
}

#[test]
fn empty_slot_cannot_be_used() {
    let (mut battle, team, _) = battle(vec![molko()], vec![black_cat()]);
    battle.inventory = Some(Inventory::new());
    battle.start().unwrap();

    assert!(matches!(
        game::battle::state::ItemState::new(&mut battle, team[0], team[0], 3),
        Err(BattleError::EmptySlot(3))
    ));
}
