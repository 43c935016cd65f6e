//====================================================================

use std::sync::Arc;

use common::Size;
use engine::{
    event::{Event, Key},
    music::SilentMusic,
    runner::EventSource,
    sprite::{Sprite, Texture},
    ui::Theme,
};
use game::{
    battle::{
        effects::AnimationEffect,
        selection::{SelectionKind, Sides},
        state::{attack_random, Cast},
        Battle, DefaultBar, Selection, State,
    },
    characters::{Character, SpriteKind},
    inventory::Inventory,
    item::Item,
    spell::{select_first, Spell, SpellType},
};
use hecs::Entity;
use rustc_hash::FxHashMap;

//====================================================================

/// Sprite sheets of the demo, by name.
#[derive(Debug, Default)]
pub struct SpriteRegistry {
    sprites: FxHashMap<&'static str, Arc<Sprite>>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        let mut registry = Self::default();

        registry.insert("molko", (144, 256), (48, 32));
        registry.insert("molko-sword", (768, 128), (256, 128));
        registry.insert("black-cat", (192, 64), (64, 64));
        registry.insert("cursor", (72, 24), (24, 24));

        registry
    }

    fn insert(&mut self, name: &'static str, size: (u32, u32), cell: (u32, u32)) {
        self.sprites
            .insert(name, Arc::new(Sprite::new(Texture::new(name, size), cell)));
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<Arc<Sprite>> {
        self.sprites.get(name).cloned()
    }
}

//====================================================================

fn molko_reset(character: &mut Character) {
    character.hpmax = 120;
    character.mpmax = 50;
    character.atk = 50;
    character.def = 50;
    character.agt = 50;
    character.luck = 50;
}

fn black_cat_reset(character: &mut Character) {
    character.hpmax = 120;
    character.mpmax = 0;
    character.atk = 20;
    character.def = 20;
    character.agt = 11;
    character.luck = 10;
}

fn fire_action(battle: &mut Battle, _: Entity, selection: &Selection) {
    let targets = selection.targets(battle);

    let position = targets
        .first()
        .and_then(|target| battle.entity(*target).ok().map(|entity| entity.position))
        .unwrap_or_default();

    let sprite = Arc::new(Sprite::new(Texture::new("fire", (640, 64)), (64, 64)));

    battle.switch(State::Cast(Cast::new(
        Box::new(AnimationEffect::new(sprite, 40, position)),
        Box::new(move |battle| {
            targets.into_iter().for_each(|target| {
                if let Err(e) = battle.damage(target, 100) {
                    log::warn!("Fire missed: {}", e);
                }
            })
        }),
    )));
}

pub static FIRE: Spell = Spell {
    name: "Fire",
    description: "A small ball of fire",
    mp: 5,
    kind: SpellType::Fire,
    selection: SelectionKind::One,
    sides: Sides::ENEMY,
    select: select_first,
    action: fire_action,
};

fn potion_battle(battle: &mut Battle, _: Entity, target: Entity) {
    if let Err(e) = battle.heal(target, 100) {
        log::warn!("Potion wasted: {}", e);
    }
}

fn potion_menu(character: &mut Character) {
    character.heal(100);
}

pub static POTION: Item = Item {
    name: "Potion",
    description: "Recover 100 HP",
    stackable: 99,
    exec_battle: potion_battle,
    exec_menu: Some(potion_menu),
};

//====================================================================

pub fn molko(sprites: &SpriteRegistry) -> Character {
    let mut character = Character::new("Molko", molko_reset).with_spells(vec![&FIRE]);

    if let Some(sprite) = sprites.get("molko") {
        character = character.with_sprite(SpriteKind::Normal, sprite);
    }
    if let Some(sprite) = sprites.get("molko-sword") {
        character = character.with_sprite(SpriteKind::Sword, sprite);
    }

    character.hp = 120;
    character.mp = 50;
    character
}

pub fn black_cat(sprites: &SpriteRegistry) -> Character {
    let mut character = Character::new("Black Cat", black_cat_reset).with_exec(attack_random);

    if let Some(sprite) = sprites.get("black-cat") {
        character = character.with_sprite(SpriteKind::Normal, sprite);
    }

    character.hp = 120;
    character
}

/// The demo encounter, Molko against a black cat.
pub fn battle(size: Size<u32>, seed: u64) -> game::Result<Battle> {
    let sprites = SpriteRegistry::new();

    let mut battle = Battle::new(size, Box::new(DefaultBar::new(size)), seed);

    battle.theme = Theme {
        cursor: sprites.get("cursor"),
        ..Theme::default()
    };
    battle.background = Some(Texture::new("battle-background", (size.width, size.height)));
    battle.music = [
        Some(Box::new(SilentMusic::new("battle-theme"))),
        Some(Box::new(SilentMusic::new("victory"))),
        Some(Box::new(SilentMusic::new("defeat"))),
    ];

    let mut inventory = Inventory::new();
    inventory.push(&POTION, 3);
    battle.inventory = Some(inventory);

    battle.add_team(molko(&sprites))?;
    battle.add_enemy(
        black_cat(&sprites),
        glam::ivec2(size.width as i32 / 5, size.height as i32 / 3),
    )?;

    Ok(battle)
}

//====================================================================

/// Presses enter at a fixed pace, which always picks the first action on the
/// first target.
#[derive(Debug)]
pub struct Autopilot {
    delay: u32,
    countdown: u32,
    pressed: bool,
}

impl Autopilot {
    pub fn new(delay: u32) -> Self {
        Self {
            delay: delay.max(1),
            countdown: delay.max(1),
            pressed: false,
        }
    }
}

impl EventSource for Autopilot {
    fn poll(&mut self) -> Option<Event> {
        // One event at most per frame.
        if self.pressed {
            self.pressed = false;
            return None;
        }

        self.countdown -= 1;

        if self.countdown == 0 {
            self.countdown = self.delay;
            self.pressed = true;
            return Some(Event::KeyDown(Key::Enter));
        }

        None
    }
}

//====================================================================


//====================================================================
