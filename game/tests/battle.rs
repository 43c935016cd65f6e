use engine::{event::Key, music::MusicMode, painter::{DrawCommand, Recorder}};
use game::{
    battle::{selection::Side, BattleStatus, State},
    BattleError,
};
use hecs::Entity;

mod support;

use support::*;

//====================================================================

fn attack_first_enemy(battle: &mut game::Battle) {
    assert!(wait_until(battle, 500, |battle| in_state(battle, "menu")));

    key(battle, Key::Enter);
    assert!(in_state(battle, "selection"));

    key(battle, Key::Enter);
    assert!(in_state(battle, "attacking"));

    assert!(wait_until(battle, 1000, |battle| !in_state(battle, "attacking")));
}

#[test]
fn third_attack_wins() {
    let (mut battle, team, enemies) = battle(vec![molko()], vec![black_cat()]);
    let playlist = with_music(&mut battle);
    let (molko, cat) = (team[0], enemies[0]);

    battle.start().unwrap();
    assert_eq!(battle.status(), BattleStatus::Running);
    assert!(in_state(&battle, "opening"));

    attack_first_enemy(&mut battle);
    assert_eq!(hp(&battle, cat), 70);

    attack_first_enemy(&mut battle);
    assert_eq!(hp(&battle, cat), 20);

    // The cat answered twice.
    attack_first_enemy(&mut battle);
    assert_eq!(hp(&battle, molko), 20);

    assert!(wait_until(&mut battle, 5, |battle| in_state(battle, "victory")));
    assert_eq!(battle.status(), BattleStatus::Won);
    assert_eq!(battle.enemies(), &[None]);
    assert!(battle.world.get::<&game::characters::Character>(cat).is_err());

    assert!(run_to_end(&mut battle, 1000));
    assert!(in_state(&battle, "closing"));

    assert_eq!(
        playlist.0.borrow().as_slice(),
        &[(0, MusicMode::Loop), (1, MusicMode::Once)]
    );
}

#[test]
fn faster_enemy_defeats_weak_team() {
    let mut weak = molko();
    weak.hp = 50;

    let mut cat = black_cat();
    cat.agtbonus = 60;

    let (mut battle, team, _) = battle(vec![weak], vec![cat]);
    let playlist = with_music(&mut battle);

    battle.start().unwrap();

    assert!(wait_until(&mut battle, 500, |battle| in_state(battle, "lost")));
    assert_eq!(hp(&battle, team[0]), 0);
    assert_eq!(battle.status(), BattleStatus::Lost);

    // Defeated team members stay in place.
    assert_eq!(battle.team(), &[Some(team[0])]);
    assert!(playlist.0.borrow().contains(&(2, MusicMode::Once)));
}

#[test]
fn wiped_out_on_both_sides_is_a_defeat() {
    let (mut battle, team, enemies) = battle(vec![molko()], vec![black_cat()]);
    battle.start().unwrap();

    battle.character_mut(team[0]).unwrap().hp = 0;
    battle.character_mut(enemies[0]).unwrap().hp = 0;
    battle.check();

    assert!(in_state(&battle, "lost"));
    assert_eq!(battle.status(), BattleStatus::Lost);
}

#[test]
fn dead_team_member_loses_its_turn() {
    let mut second = molko();
    second.name = "Second".to_string();
    second.agtbonus = 10;

    let (mut battle, team, _) = battle(vec![molko(), second], vec![black_cat()]);
    battle.start().unwrap();

    battle.character_mut(team[1]).unwrap().hp = 0;
    assert!(wait_until(&mut battle, 500, |battle| in_state(battle, "menu")));

    assert_eq!(battle.current(), Some(team[0]));
    assert_eq!(battle.team(), &[Some(team[0]), Some(team[1])]);
}

//====================================================================

fn idle(_: &mut game::Battle, _: Entity) {}

#[test]
fn idle_strategy_skips_the_turn() {
    let mut cat = black_cat().with_exec(idle);
    cat.agtbonus = 60;

    let (mut battle, team, enemies) = battle(vec![molko()], vec![cat]);
    battle.start().unwrap();

    assert!(wait_until(&mut battle, 500, |battle| in_state(battle, "ai")));
    assert_eq!(battle.current(), Some(enemies[0]));

    battle.update(FRAME);
    assert!(in_state(&battle, "check"));

    battle.update(FRAME);
    assert!(in_state(&battle, "menu"));
    assert_eq!(battle.current(), Some(team[0]));
}

#[test]
fn selection_moves_between_targets() {
    let (mut battle, team, _) = battle(vec![molko()], vec![black_cat(), black_cat()]);
    battle.start().unwrap();

    assert!(wait_until(&mut battle, 500, |battle| in_state(battle, "menu")));
    key(&mut battle, Key::Enter);

    let target = |battle: &game::Battle| match battle.state() {
        Some(State::Selection(selection)) => selection.selection().target(battle),
        _ => None,
    };
    let side = |battle: &game::Battle| match battle.state() {
        Some(State::Selection(selection)) => Some(selection.selection().index_side),
        _ => None,
    };

    assert_eq!(target(&battle), battle.enemies()[0]);

    key(&mut battle, Key::Down);
    assert_eq!(target(&battle), battle.enemies()[1]);

    key(&mut battle, Key::Down);
    assert_eq!(target(&battle), battle.enemies()[1]);

    // Attacks only target enemies.
    key(&mut battle, Key::Right);
    assert_eq!(side(&battle), Some(Side::Enemy));

    key(&mut battle, Key::Up);
    assert_eq!(target(&battle), battle.enemies()[0]);

    key(&mut battle, Key::Escape);
    assert!(in_state(&battle, "menu"));
    assert_eq!(battle.current(), Some(team[0]));
}

#[test]
fn attacking_without_target_needs_someone_alive() {
    let (mut battle, team, enemies) = battle(vec![molko()], vec![black_cat()]);
    battle.start().unwrap();

    battle.character_mut(team[0]).unwrap().hp = 0;

    assert_eq!(
        battle.attack(enemies[0], None),
        Err(BattleError::NoTarget(Side::Team))
    );
}

#[test]
fn roster_is_bounded() {
    let (mut battle, _, _) = battle(Vec::new(), Vec::new());

    for _ in 0..4 {
        battle.add_team(molko()).unwrap();
    }
    assert_eq!(battle.add_team(molko()), Err(BattleError::TeamFull));

    for _ in 0..8 {
        battle.add_enemy(black_cat(), glam::IVec2::ZERO).unwrap();
    }
    assert_eq!(
        battle.add_enemy(black_cat(), glam::IVec2::ZERO),
        Err(BattleError::EnemiesFull)
    );
}

#[test]
fn battle_needs_both_sides() {
    let (mut battle, _, _) = battle(vec![molko()], Vec::new());

    assert!(!battle.is_ok());
    assert_eq!(battle.start(), Err(BattleError::InvalidRoster));
    assert!(battle.state().is_none());
    assert_eq!(battle.status(), BattleStatus::None);

    for _ in 0..200 {
        battle.update(FRAME);
    }
    assert_ne!(battle.status(), BattleStatus::Won);

    let (mut nobody, _, _) = support::battle(Vec::new(), vec![black_cat()]);
    assert_eq!(nobody.start(), Err(BattleError::InvalidRoster));
}

#[test]
fn team_is_spread_vertically() {
    let (mut battle, team, _) = battle(vec![molko(), molko()], vec![black_cat()]);
    battle.start().unwrap();

    // 600 pixels, two cells of 32 and three gaps.
    let first = battle.entity(team[0]).unwrap().position;
    let second = battle.entity(team[1]).unwrap().position;

    assert_eq!(first, glam::ivec2(600, 178));
    assert_eq!(second, glam::ivec2(600, 178 * 2 + 32));
}

//====================================================================

#[test]
fn menu_is_drawn_with_status() {
    let (mut battle, _, _) = battle(vec![molko()], vec![black_cat()]);
    battle.start().unwrap();

    let mut painter = Recorder::new();
    battle.draw(&mut painter);
    assert!(painter
        .commands()
        .iter()
        .any(|command| matches!(command, DrawCommand::Rectangle { .. })));

    assert!(wait_until(&mut battle, 500, |battle| in_state(battle, "menu")));

    let mut painter = Recorder::new();
    battle.draw(&mut painter);

    let texts = painter.texts().collect::<Vec<_>>();
    assert!(texts.contains(&"Attack"));
    assert!(texts.contains(&"Molko"));
    assert!(texts.contains(&"120/120"));
    assert!(texts.contains(&"Black Cat"));
}
