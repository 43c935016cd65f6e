//====================================================================

use std::ops::BitOr;

use hecs::Entity;

use crate::error::{BattleError, Result};

use super::Battle;

//====================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Enemy,
    Team,
}

/// Bitmask of the sides a selection may target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sides(u8);

impl Sides {
    pub const TEAM: Sides = Sides(1 << 0);
    pub const ENEMY: Sides = Sides(1 << 1);
    pub const BOTH: Sides = Sides(Self::TEAM.0 | Self::ENEMY.0);

    #[inline]
    pub const fn contains(&self, other: Sides) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn allows(&self, side: Side) -> bool {
        match side {
            Side::Enemy => self.contains(Sides::ENEMY),
            Side::Team => self.contains(Sides::TEAM),
        }
    }
}

impl BitOr for Sides {
    type Output = Sides;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Sides(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    /// Only the character acting.
    SelfOnly,
    One,
    All,
    /// One or all, switched with tab.
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    One(usize),
    All,
}

//====================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub allowed_kinds: SelectionKind,
    pub allowed_sides: Sides,
    pub index_side: Side,
    pub index_character: Target,
}

impl Selection {
    pub fn new(allowed_kinds: SelectionKind, allowed_sides: Sides) -> Self {
        let index_side = match allowed_sides.contains(Sides::ENEMY) {
            true => Side::Enemy,
            false => Side::Team,
        };

        let index_character = match allowed_kinds {
            SelectionKind::All => Target::All,
            _ => Target::One(0),
        };

        Self {
            allowed_kinds,
            allowed_sides,
            index_side,
            index_character,
        }
    }

    /// Target the first alive entity of the current side.
    pub fn first(&mut self, battle: &Battle) -> Result<()> {
        let index = battle
            .alive_indices(self.index_side)
            .next()
            .ok_or(BattleError::NoTarget(self.index_side))?;

        self.index_character = Target::One(index);
        Ok(())
    }

    /// Target a uniformly random alive entity of the current side.
    pub fn random(&mut self, battle: &mut Battle) -> Result<()> {
        let index = battle.random_alive(self.index_side)?;

        self.index_character = Target::One(index);
        Ok(())
    }

    /// Move to the closest alive entity before (negative step) or after the
    /// current one. Stays in place when there is none.
    pub fn step(&mut self, battle: &Battle, step: i32) {
        let current = match self.index_character {
            Target::One(index) => index,
            Target::All => return,
        };

        let alive = battle.alive_indices(self.index_side).collect::<Vec<_>>();

        let next = match step < 0 {
            true => alive.iter().rev().find(|index| **index < current),
            false => alive.iter().find(|index| **index > current),
        };

        if let Some(index) = next {
            self.index_character = Target::One(*index);
        }
    }

    /// Switch to another side if allowed, retargeting its first alive entity.
    pub fn switch_side(&mut self, battle: &Battle, side: Side) {
        if !self.allowed_sides.allows(side) || self.index_side == side {
            return;
        }

        let previous = *self;
        self.index_side = side;

        if let Target::All = self.index_character {
            return;
        }

        if self.first(battle).is_err() {
            log::debug!("No alive entity on {:?} side, keeping selection", side);
            *self = previous;
        }
    }

    pub fn select_all(&mut self) {
        if self.allowed_kinds == SelectionKind::Both {
            self.index_character = Target::All;
        }
    }

    /// Entities covered by the selection, skipping dead ones.
    pub fn targets(&self, battle: &Battle) -> Vec<Entity> {
        let entities = battle.side(self.index_side);

        match self.index_character {
            Target::One(index) => entities
                .get(index)
                .copied()
                .flatten()
                .filter(|entity| battle.is_alive(*entity))
                .into_iter()
                .collect(),

            Target::All => entities
                .iter()
                .flatten()
                .copied()
                .filter(|entity| battle.is_alive(*entity))
                .collect(),
        }
    }

    /// The single entity selected, if any.
    #[inline]
    pub fn target(&self, battle: &Battle) -> Option<Entity> {
        match self.index_character {
            Target::One(index) => battle.side(self.index_side).get(index).copied().flatten(),
            Target::All => None,
        }
    }
}

//====================================================================
