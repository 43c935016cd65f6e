//====================================================================

pub mod frame;
pub mod gridmenu;
pub mod label;
pub mod message;
pub mod theme;

pub use frame::Frame;
pub use gridmenu::GridMenu;
pub use label::Label;
pub use message::{Message, MessageFlags, MessageState};
pub use theme::Theme;

//====================================================================
