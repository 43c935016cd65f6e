use proptest::prelude::*;

mod support;

use support::*;

//====================================================================

#[test]
fn fastest_plays_first() {
    let (mut battle, team, enemies) = battle(vec![molko()], vec![black_cat()]);
    battle.start().unwrap();

    assert_eq!(battle.order(), &[team[0], enemies[0]]);
}

#[test]
fn team_wins_agility_ties() {
    let mut cat = black_cat();
    cat.agtbonus = 39;

    let (mut battle, team, enemies) = battle(vec![molko()], vec![cat]);
    battle.start().unwrap();

    assert_eq!(battle.order(), &[team[0], enemies[0]]);
}

#[test]
fn team_plays_every_round_first() {
    let (mut battle, team, _) = battle(vec![molko()], vec![black_cat()]);
    battle.start().unwrap();

    for _ in 0..3 {
        assert!(wait_until(&mut battle, 500, |battle| in_state(battle, "menu")));
        assert_eq!(battle.current(), Some(team[0]));

        key(&mut battle, engine::event::Key::Enter);
        key(&mut battle, engine::event::Key::Enter);
        battle.update(FRAME);
    }
}

proptest! {
    #[test]
    fn order_is_sorted_and_stable(
        team in prop::collection::vec(0u32..20, 1..=4),
        enemies in prop::collection::vec(0u32..20, 1..=8),
    ) {
        let with_agility = |mut character: game::characters::Character, bonus: u32| {
            character.agtbonus = bonus;
            character
        };

        let (mut battle, team_entities, enemy_entities) = battle(
            team.iter().map(|bonus| with_agility(molko(), *bonus)).collect(),
            enemies.iter().map(|bonus| with_agility(black_cat(), *bonus)).collect(),
        );
        battle.start().unwrap();

        let mut expected = team_entities
            .iter()
            .zip(team.iter().map(|bonus| 50 + bonus))
            .chain(enemy_entities.iter().zip(enemies.iter().map(|bonus| 11 + bonus)))
            .map(|(entity, agt)| (*entity, agt))
            .collect::<Vec<_>>();
        expected.sort_by(|a, b| b.1.cmp(&a.1));

        let expected = expected.into_iter().map(|(entity, _)| entity).collect::<Vec<_>>();
        prop_assert_eq!(battle.order(), expected.as_slice());
    }
}
