//====================================================================

use engine::EngineError;
use thiserror::Error;

use crate::battle::selection::Side;

//====================================================================

pub type Result<T> = std::result::Result<T, BattleError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("no alive target on the {0:?} side")]
    NoTarget(Side),

    #[error("not enough mp: {required} required, {available} available")]
    NotEnoughMp { required: u32, available: u32 },

    #[error("entity is not part of the battle")]
    UnknownEntity,

    #[error("inventory slot {0} is empty")]
    EmptySlot(usize),

    #[error("team is full")]
    TeamFull,

    #[error("enemies are full")]
    EnemiesFull,

    #[error("a battle needs a team and at least one enemy")]
    InvalidRoster,

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl From<hecs::ComponentError> for BattleError {
    #[inline]
    fn from(_: hecs::ComponentError) -> Self {
        BattleError::UnknownEntity
    }
}

impl From<hecs::QueryOneError> for BattleError {
    #[inline]
    fn from(_: hecs::QueryOneError) -> Self {
        BattleError::UnknownEntity
    }
}

//====================================================================
