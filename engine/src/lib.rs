//====================================================================

pub mod action;
pub mod drawable;
pub mod error;
pub mod event;
pub mod music;
pub mod painter;
pub mod runner;
pub mod scene;
pub mod sprite;
pub mod tools;
pub mod ui;

pub use error::{EngineError, Result};

//====================================================================
