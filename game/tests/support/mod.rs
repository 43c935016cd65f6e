#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc, sync::Arc};

use common::Size;
use engine::{
    event::{Event, Key},
    music::{Music, MusicMode},
    sprite::{Sprite, Texture},
};
use game::{
    battle::{state::attack_random, Battle, DefaultBar},
    characters::{Character, SpriteKind},
};
use hecs::Entity;

//====================================================================

pub const FRAME: u32 = 16;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[inline]
pub fn screen() -> Size<u32> {
    Size::new(800, 600)
}

pub fn sprite(name: &str) -> Arc<Sprite> {
    Arc::new(Sprite::new(Texture::new(name, (144, 256)), (48, 32)))
}

fn molko_reset(character: &mut Character) {
    character.hpmax = 120;
    character.mpmax = 50;
    character.atk = 50;
    character.agt = 50;
}

fn cat_reset(character: &mut Character) {
    character.hpmax = 120;
    character.agt = 11;
}

pub fn molko() -> Character {
    let mut character =
        Character::new("Molko", molko_reset).with_sprite(SpriteKind::Normal, sprite("molko"));
    character.hp = 120;
    character.mp = 50;
    character
}

pub fn black_cat() -> Character {
    let mut character = Character::new("Black Cat", cat_reset)
        .with_sprite(SpriteKind::Normal, sprite("black-cat"))
        .with_exec(attack_random);
    character.hp = 120;
    character
}

//====================================================================

/// Remembers which track was played and how.
#[derive(Clone, Default)]
pub struct Playlist(pub Rc<RefCell<Vec<(usize, MusicMode)>>>);

struct Track {
    index: usize,
    playlist: Playlist,
}

impl Music for Track {
    fn play(&mut self, mode: MusicMode) {
        self.playlist.0.borrow_mut().push((self.index, mode));
    }

    fn stop(&mut self) {}
}

pub fn with_music(battle: &mut Battle) -> Playlist {
    let playlist = Playlist::default();

    battle.music = [0, 1, 2].map(|index| {
        Some(Box::new(Track {
            index,
            playlist: playlist.clone(),
        }) as Box<dyn Music>)
    });

    playlist
}

pub fn battle(team: Vec<Character>, enemies: Vec<Character>) -> (Battle, Vec<Entity>, Vec<Entity>) {
    init_logger();

    let mut battle = Battle::new(screen(), Box::new(DefaultBar::new(screen())), 42);

    let team = team
        .into_iter()
        .map(|character| battle.add_team(character).unwrap())
        .collect();

    let enemies = enemies
        .into_iter()
        .enumerate()
        .map(|(index, character)| {
            battle
                .add_enemy(character, glam::ivec2(100, 60 + index as i32 * 80))
                .unwrap()
        })
        .collect();

    (battle, team, enemies)
}

//====================================================================

#[inline]
pub fn in_state(battle: &Battle, name: &str) -> bool {
    battle.state().map(|state| state.name()) == Some(name)
}

/// Run frames until `done` holds. Returns false when it never did.
pub fn wait_until(battle: &mut Battle, frames: usize, done: impl Fn(&Battle) -> bool) -> bool {
    for _ in 0..frames {
        if done(battle) {
            return true;
        }
        battle.update(FRAME);
    }

    done(battle)
}

/// Run frames until the battle reports it is over.
pub fn run_to_end(battle: &mut Battle, frames: usize) -> bool {
    (0..frames).any(|_| battle.update(FRAME))
}

#[inline]
pub fn key(battle: &mut Battle, key: Key) {
    battle.handle(&Event::KeyDown(key));
}

#[inline]
pub fn hp(battle: &Battle, entity: Entity) -> u32 {
    battle.character(entity).unwrap().hp
}
