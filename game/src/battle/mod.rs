//====================================================================

use std::{cmp::Reverse, ops::BitOr};

use common::{Rect, Size};
use engine::{
    action::ActionStack,
    drawable::DrawableStack,
    event::Event,
    music::{Music, MusicMode},
    painter::Painter,
    sprite::Texture,
    ui::Theme,
};
use hecs::{Entity, World};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{
    characters::{Character, SpriteKind},
    error::{BattleError, Result},
    inventory::Inventory,
    item::Item,
    spell::Spell,
};

pub use bar::{BattleBar, Command, DefaultBar};
pub use entity::BattleEntity;
pub use selection::{Selection, Side};
pub use state::State;

pub mod bar;
pub mod effects;
pub mod entity;
pub mod entity_state;
pub mod selection;
pub mod state;

//====================================================================

pub const TEAM_MAX: usize = 4;
pub const ENEMY_MAX: usize = 8;

/// Flat amount removed by a physical attack.
pub const ATTACK_DAMAGE: u32 = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BattleStatus {
    #[default]
    None,
    Running,
    Won,
    Lost,
}

/// Parts of the battle drawn or updated by a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Components(u8);

impl Components {
    pub const BACKGROUND: Components = Components(1 << 0);
    pub const ENTITIES: Components = Components(1 << 1);
    pub const BAR: Components = Components(1 << 2);
    pub const ACTIONS: Components = Components(1 << 3);
    pub const DRAWABLES: Components = Components(1 << 4);
    pub const ALL: Components = Components(0x1f);

    #[inline]
    pub const fn contains(&self, other: Components) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Components {
    type Output = Components;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Components(self.0 | rhs.0)
    }
}

//====================================================================

pub struct Battle {
    pub world: World,

    team: Vec<Option<Entity>>,
    enemies: Vec<Option<Entity>>,

    order: Vec<Entity>,
    cursor: Option<usize>,

    state: Option<State>,
    pending: Option<State>,
    dispatching: bool,
    /// Bumped on every transition request.
    switches: u32,

    bar: Option<Box<dyn BattleBar>>,

    pub inventory: Option<Inventory>,
    pub effects: DrawableStack,
    /// Blocking actions first, background actions second.
    pub actions: [ActionStack; 2],
    pub background: Option<Texture>,
    /// Ambient, victory and defeat tracks.
    pub music: [Option<Box<dyn Music>>; 3],
    pub theme: Theme,
    pub size: Size<u32>,

    rng: StdRng,
    status: BattleStatus,
}

impl Battle {
    pub fn new(size: Size<u32>, bar: Box<dyn BattleBar>, seed: u64) -> Self {
        Self {
            world: World::new(),
            team: Vec::with_capacity(TEAM_MAX),
            enemies: Vec::with_capacity(ENEMY_MAX),
            order: Vec::new(),
            cursor: None,
            state: None,
            pending: None,
            dispatching: false,
            switches: 0,
            bar: Some(bar),
            inventory: None,
            effects: DrawableStack::default(),
            actions: [ActionStack::default(), ActionStack::default()],
            background: None,
            music: [None, None, None],
            theme: Theme::default(),
            size,
            rng: StdRng::seed_from_u64(seed),
            status: BattleStatus::None,
        }
    }

    pub fn add_team(&mut self, character: Character) -> Result<Entity> {
        if self.team.len() >= TEAM_MAX {
            return Err(BattleError::TeamFull);
        }

        let entity = self
            .world
            .spawn((BattleEntity::new(glam::IVec2::ZERO), character));
        self.team.push(Some(entity));

        Ok(entity)
    }

    pub fn add_enemy(&mut self, character: Character, position: glam::IVec2) -> Result<Entity> {
        if self.enemies.len() >= ENEMY_MAX {
            return Err(BattleError::EnemiesFull);
        }

        let entity = self.world.spawn((BattleEntity::new(position), character));
        self.enemies.push(Some(entity));

        Ok(entity)
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        (self.state.is_some() || self.pending.is_some())
            && self.enemies.iter().any(Option::is_some)
            && !self.team.is_empty()
    }

    #[inline]
    pub fn status(&self) -> BattleStatus {
        self.status
    }

    #[inline]
    pub fn set_status(&mut self, status: BattleStatus) {
        log::info!("Battle status {:?} -> {:?}", self.status, status);
        self.status = status;
    }

    #[inline]
    pub fn state(&self) -> Option<&State> {
        self.state.as_ref()
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    //--------------------------------------------------

    #[inline]
    pub fn team(&self) -> &[Option<Entity>] {
        &self.team
    }

    #[inline]
    pub fn enemies(&self) -> &[Option<Entity>] {
        &self.enemies
    }

    #[inline]
    pub fn side(&self, side: Side) -> &[Option<Entity>] {
        match side {
            Side::Enemy => &self.enemies,
            Side::Team => &self.team,
        }
    }

    #[inline]
    pub fn is_team(&self, entity: Entity) -> bool {
        self.team.contains(&Some(entity))
    }

    #[inline]
    pub fn team_index(&self, entity: Entity) -> Option<usize> {
        self.team.iter().position(|slot| *slot == Some(entity))
    }

    pub fn character(&self, entity: Entity) -> Result<hecs::Ref<'_, Character>> {
        Ok(self.world.get::<&Character>(entity)?)
    }

    pub fn character_mut(&self, entity: Entity) -> Result<hecs::RefMut<'_, Character>> {
        Ok(self.world.get::<&mut Character>(entity)?)
    }

    pub fn entity(&self, entity: Entity) -> Result<hecs::Ref<'_, BattleEntity>> {
        Ok(self.world.get::<&BattleEntity>(entity)?)
    }

    pub fn entity_mut(&self, entity: Entity) -> Result<hecs::RefMut<'_, BattleEntity>> {
        Ok(self.world.get::<&mut BattleEntity>(entity)?)
    }

    /// Both components of a combatant, when a state needs the character
    /// sprites to drive the entity.
    pub fn parts_mut(&mut self, entity: Entity) -> Result<(&mut BattleEntity, &mut Character)> {
        Ok(self
            .world
            .query_one_mut::<(&mut BattleEntity, &mut Character)>(entity)?)
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.character(entity)
            .map(|character| character.is_alive())
            .unwrap_or(false)
    }

    /// Indices of the alive entities on one side.
    pub fn alive_indices(&self, side: Side) -> impl Iterator<Item = usize> + '_ {
        self.side(side)
            .iter()
            .enumerate()
            .filter_map(move |(index, slot)| match slot {
                Some(entity) if self.is_alive(*entity) => Some(index),
                _ => None,
            })
    }

    pub fn random_alive(&mut self, side: Side) -> Result<usize> {
        let alive = self.alive_indices(side).collect::<Vec<_>>();

        alive
            .choose(&mut self.rng)
            .copied()
            .ok_or(BattleError::NoTarget(side))
    }

    //--------------------------------------------------

    /// Team members walking first, then enemies, by descending agility.
    /// Equal agility keeps that order.
    pub fn compute_order(&mut self) {
        let mut order = self
            .team
            .iter()
            .chain(self.enemies.iter())
            .flatten()
            .filter_map(|entity| {
                let character = self.character(*entity).ok()?;
                character
                    .is_alive()
                    .then(|| (character.total_agt(), *entity))
            })
            .collect::<Vec<_>>();

        order.sort_by_key(|(agt, _)| Reverse(*agt));

        log::debug!(
            "Turn order = {:?}",
            order
                .iter()
                .map(|(agt, entity)| (self
                    .character(*entity)
                    .map(|character| character.name.clone())
                    .unwrap_or_default(), *agt))
                .collect::<Vec<_>>()
        );

        self.order = order.into_iter().map(|(_, entity)| entity).collect();
        self.cursor = None;
    }

    #[inline]
    pub fn order(&self) -> &[Entity] {
        &self.order
    }

    /// The entity whose turn it is.
    #[inline]
    pub fn current(&self) -> Option<Entity> {
        self.cursor.and_then(|cursor| self.order.get(cursor).copied())
    }

    /// Give the turn to the next alive entity, starting a new round when the
    /// order is exhausted.
    pub fn next(&mut self) {
        let mut cursor = self.cursor.map(|cursor| cursor + 1).unwrap_or(0);
        let mut restarted = false;

        loop {
            while cursor < self.order.len() && !self.is_alive(self.order[cursor]) {
                cursor += 1;
            }

            if cursor < self.order.len() || restarted {
                break;
            }

            log::info!("------Starting new round------");
            self.compute_order();
            cursor = 0;
            restarted = true;
        }

        let current = match self.order.get(cursor) {
            Some(current) => *current,
            None => {
                log::warn!("Nobody is able to play");
                self.cursor = None;
                self.switch(State::Check);
                return;
            }
        };

        self.cursor = Some(cursor);

        if let Ok(character) = self.character(current) {
            log::debug!("Turn of '{}'", character.name);
        }

        if self.is_team(current) {
            self.start_bar();
            self.switch(State::Menu);
        } else {
            self.switch(State::Ai);
        }
    }

    //--------------------------------------------------

    /// Request a transition. The running state is finished once its callback
    /// returns.
    pub fn switch(&mut self, next: State) {
        log::debug!("Switching battle state to {}", next.name());
        self.switches = self.switches.wrapping_add(1);

        if let Some(previous) = self.pending.replace(next) {
            previous.finish(self);
        }

        if !self.dispatching {
            self.flush();
        }
    }

    fn flush(&mut self) {
        while let Some(next) = self.pending.take() {
            if let Some(previous) = self.state.replace(next) {
                previous.finish(self);
            }
        }
    }

    fn dispatch<R>(&mut self, run: impl FnOnce(&mut State, &mut Battle) -> R) -> Option<R> {
        let mut state = self.state.take()?;

        self.dispatching = true;
        let ret = run(&mut state, self);
        self.dispatching = false;

        self.state = Some(state);
        self.flush();
        Some(ret)
    }

    //--------------------------------------------------

    pub fn start(&mut self) -> Result<()> {
        if self.team.is_empty() || !self.enemies.iter().any(Option::is_some) {
            return Err(BattleError::InvalidRoster);
        }

        let entities = self
            .team
            .iter()
            .chain(self.enemies.iter())
            .flatten()
            .copied()
            .collect::<Vec<_>>();

        entities.into_iter().for_each(|entity| {
            if let Ok((battle_entity, character)) = self.parts_mut(entity) {
                if character.is_ok() {
                    battle_entity.init(character);
                }
            }
        });

        self.positionate_team();
        self.positionate_names();

        self.set_status(BattleStatus::Running);
        self.switch(State::opening());

        self.play_music(0, MusicMode::Loop);
        self.compute_order();

        debug_assert!(self.is_ok());
        Ok(())
    }

    fn positionate_team(&mut self) {
        let mut members = Vec::new();

        for entity in self.team.iter().flatten() {
            let battle_entity = match self.entity(*entity) {
                Ok(battle_entity) => battle_entity,
                Err(_) => continue,
            };

            // Already placed by the caller.
            if battle_entity.position != glam::IVec2::ZERO {
                return;
            }

            if let Ok(character) = self.character(*entity) {
                if character.is_ok() {
                    members.push((*entity, character.cell().height));
                }
            }
        }

        let requirement = members.iter().map(|(_, height)| height).sum::<u32>();
        let spacing = self.size.height.saturating_sub(requirement) / (members.len() as u32 + 1);
        let x = self.size.width as i32 - 200;
        let mut y = spacing as i32;

        members.into_iter().for_each(|(entity, height)| {
            if let Ok(mut battle_entity) = self.entity_mut(entity) {
                battle_entity.position = glam::ivec2(x, y);
                y += (height + spacing) as i32;
            }
        });
    }

    fn positionate_names(&mut self) {
        let Self {
            world,
            team,
            enemies,
            theme,
            ..
        } = self;

        team.iter()
            .chain(enemies.iter())
            .flatten()
            .for_each(|entity| {
                if let Ok((battle_entity, character)) =
                    world.query_one_mut::<(&mut BattleEntity, &Character)>(*entity)
                {
                    if character.is_ok() {
                        battle_entity.positionate_name(character, theme);
                    }
                }
            });
    }

    pub fn play_music(&mut self, index: usize, mode: MusicMode) {
        if let Some(Some(music)) = self.music.get_mut(index) {
            music.play(mode);
        }
    }

    //--------------------------------------------------

    pub fn start_bar(&mut self) {
        if let Some(mut bar) = self.bar.take() {
            bar.start(self);
            self.bar = Some(bar);
        }
    }

    pub fn bar_cancel(&mut self) {
        if let Some(mut bar) = self.bar.take() {
            bar.cancel(self);
            self.bar = Some(bar);
        }
    }

    /// Forward an event to the bar, returning a selection once the player
    /// picked an action.
    pub fn bar_handle(&mut self, event: &Event) -> Option<Selection> {
        let mut bar = self.bar.take()?;
        let selection = bar.handle(self, event);
        self.bar = Some(bar);

        selection
    }

    pub fn bar_select(&mut self, selection: &Selection) -> Option<Command> {
        let mut bar = self.bar.take()?;
        let command = bar.select(self, selection);
        self.bar = Some(bar);

        command
    }

    /// Run a player command for the current entity.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        let current = self.current().ok_or(BattleError::UnknownEntity)?;

        match command {
            Command::Attack { target } => self.attack(current, Some(target))?,
            Command::Cast { spell, selection } => self.cast(current, spell, &selection)?,
            Command::UseItem { slot, target } => {
                let item = state::ItemState::new(self, current, target, slot)?;
                self.switch(State::Item(item));
            }
        }

        if !self.has_pending() {
            log::warn!("Command did not change the battle state, skipping turn");
            self.switch(State::Check);
        }

        Ok(())
    }

    /// Physical attack. Without target a random alive opponent is chosen.
    pub fn attack(&mut self, source: Entity, target: Option<Entity>) -> Result<()> {
        let target = match target {
            Some(target) => target,
            None => {
                let side = match self.is_team(source) {
                    true => Side::Enemy,
                    false => Side::Team,
                };

                let index = self.random_alive(side)?;
                self.side(side)[index].ok_or(BattleError::NoTarget(side))?
            }
        };

        let attacking = state::Attacking::new(self, source, target)?;
        self.switch(State::Attacking(attacking));

        Ok(())
    }

    pub fn cast(&mut self, source: Entity, spell: &'static Spell, selection: &Selection) -> Result<()> {
        {
            let mut character = self.character_mut(source)?;

            if character.mp < spell.mp {
                return Err(BattleError::NotEnoughMp {
                    required: spell.mp,
                    available: character.mp,
                });
            }

            character.mp -= spell.mp;
            log::info!("'{}' casts '{}'", character.name, spell.name);
        }

        let switches = self.switches;
        spell.action(self, source, selection);

        // Nothing happened, the turn is skipped but the mp stays.
        if self.switches == switches {
            log::warn!("'{}' had no effect, giving {} mp back", spell.name, spell.mp);
            self.character_mut(source)?.mp += spell.mp;
        }

        Ok(())
    }

    /// Consume one unit of `item` and apply it. The battle goes back to
    /// check first so the item may switch to something else.
    pub fn use_item(&mut self, owner: Entity, target: Entity, item: &'static Item) {
        self.switch(State::Check);

        match &mut self.inventory {
            Some(inventory) => {
                inventory.consume(item, 1);
            }
            None => log::warn!("Using item '{}' without inventory", item.name),
        }

        item.exec_battle(self, owner, target);
    }

    /// Remove hp from a character and show how much.
    pub fn damage(&mut self, target: Entity, amount: u32) -> Result<u32> {
        let removed = {
            let mut character = self.character_mut(target)?;
            let removed = character.damage(amount);

            log::debug!("'{}' loses {} hp ({} left)", character.name, removed, character.hp);
            removed
        };

        self.indicator(target, amount, effects::HP_COLOR)?;
        Ok(removed)
    }

    pub fn heal(&mut self, target: Entity, amount: u32) -> Result<u32> {
        let added = self.character_mut(target)?.heal(amount);

        self.indicator(target, amount, effects::HP_COLOR)?;
        Ok(added)
    }

    fn indicator(&mut self, target: Entity, amount: u32, color: common::Color) -> Result<()> {
        let cell = self.character(target)?.cell();
        let position =
            self.entity(target)?.position + glam::ivec2(cell.width as i32, cell.height as i32);

        if let Err(e) = self
            .effects
            .add(Box::new(effects::Indicator::new(position, amount, color)))
        {
            log::warn!("Dropping indicator: {}", e);
        }

        Ok(())
    }

    //--------------------------------------------------

    /// Every team member is down.
    pub fn is_dead(&self) -> bool {
        self.team
            .iter()
            .flatten()
            .filter_map(|entity| self.character(*entity).ok())
            .filter(|character| character.is_ok())
            .all(|character| character.hp == 0)
    }

    /// No enemy is standing.
    pub fn is_won(&self) -> bool {
        !self
            .enemies
            .iter()
            .flatten()
            .any(|entity| self.is_alive(*entity))
    }

    /// Fade out and remove the enemies that were defeated.
    fn reap(&mut self) {
        for index in 0..self.enemies.len() {
            let entity = match self.enemies[index] {
                Some(entity) => entity,
                None => continue,
            };

            let fadeout = {
                let character = match self.character(entity) {
                    Ok(character) => character,
                    Err(_) => continue,
                };

                if !character.is_ok() || character.hp > 0 {
                    continue;
                }

                log::info!("'{}' has been defeated", character.name);

                let position = self
                    .entity(entity)
                    .map(|battle_entity| battle_entity.position)
                    .unwrap_or_default();

                character
                    .sprite(SpriteKind::Normal)
                    .map(|sprite| effects::Fadeout::new(sprite.clone(), position))
            };

            if let Some(fadeout) = fadeout {
                if let Err(e) = self.effects.add(Box::new(fadeout)) {
                    log::warn!("Dropping fadeout effect: {}", e);
                }
            }

            self.enemies[index] = None;

            if self.world.despawn(entity).is_err() {
                log::error!("Enemy {:?} was already despawned", entity);
            }
        }
    }

    /// Turn boundary: reap the defeated then decide who plays next.
    pub fn check(&mut self) {
        self.reap();

        if self.is_dead() {
            let lost = State::lost(self);
            self.switch(lost);
        } else if self.is_won() {
            let victory = State::victory(self);
            self.switch(victory);
        } else {
            self.next();
        }
    }

    //--------------------------------------------------

    pub fn handle(&mut self, event: &Event) {
        let blocked = !self.actions[0].is_completed();

        self.actions.iter_mut().for_each(|stack| stack.handle(event));

        if !blocked {
            self.dispatch(|state, battle| state.handle(battle, event));
        }
    }

    /// Returns true once the battle is over and closed.
    pub fn update(&mut self, ticks: u32) -> bool {
        self.actions[0].update(ticks);
        self.actions[1].update(ticks);
        self.effects.update(ticks);
        self.update_entities(ticks);

        if let Some(mut bar) = self.bar.take() {
            bar.update(self, ticks);
            self.bar = Some(bar);
        }

        if !self.actions[0].is_completed() {
            return false;
        }

        self.dispatch(|state, battle| state.update(battle, ticks))
            .unwrap_or(false)
    }

    fn update_entities(&mut self, ticks: u32) {
        let Self {
            world,
            team,
            enemies,
            ..
        } = self;

        team.iter().chain(enemies.iter()).flatten().for_each(|entity| {
            if let Ok(mut battle_entity) = world.get::<&mut BattleEntity>(*entity) {
                battle_entity.update(ticks);
            }
        });
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        match &self.state {
            Some(state) => state.draw(self, painter),
            None => self.draw_components(painter, Components::ALL),
        }
    }

    pub fn draw_components(&self, painter: &mut dyn Painter, components: Components) {
        if components.contains(Components::BACKGROUND) {
            if let Some(background) = self.background.as_ref().filter(|texture| texture.is_ok()) {
                painter.draw_texture(background, glam::IVec2::ZERO, u8::MAX);
            }
        }

        if components.contains(Components::ENTITIES) {
            self.team
                .iter()
                .chain(self.enemies.iter())
                .flatten()
                .for_each(|entity| {
                    if let (Ok(battle_entity), Ok(character)) =
                        (self.entity(*entity), self.character(*entity))
                    {
                        if character.is_ok() {
                            battle_entity.draw(painter, &character, &self.theme);
                        }
                    }
                });
        }

        if components.contains(Components::BAR) {
            if let Some(bar) = &self.bar {
                bar.draw(self, painter);
            }
        }

        if components.contains(Components::ACTIONS) {
            self.actions.iter().for_each(|stack| stack.draw(painter));
        }

        if components.contains(Components::DRAWABLES) {
            self.effects.draw(painter);
        }
    }

    #[inline]
    pub fn screen(&self) -> Rect {
        Rect::from_size(self.size)
    }

    pub fn finish(&mut self) {
        if let Some(state) = self.state.take() {
            state.finish(self);
        }

        if let Some(state) = self.pending.take() {
            state.finish(self);
        }

        self.actions.iter_mut().for_each(ActionStack::finish);
        self.effects.finish();

        self.music.iter_mut().flatten().for_each(|music| music.stop());
    }
}

//====================================================================
