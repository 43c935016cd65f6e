//====================================================================

use thiserror::Error;

//====================================================================

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("no space in stack (capacity {capacity})")]
    StackFull { capacity: usize },

    #[error("no space in script (capacity {capacity})")]
    ScriptFull { capacity: usize },
}

//====================================================================
