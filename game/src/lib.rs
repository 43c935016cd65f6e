//====================================================================

pub mod battle;
pub mod characters;
pub mod error;
pub mod inventory;
pub mod item;
pub mod save;
pub mod spell;

pub use battle::{Battle, BattleStatus};
pub use error::{BattleError, Result};

//====================================================================
