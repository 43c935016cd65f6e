//====================================================================

use engine::{event::Event, painter::Painter};

use super::{Battle, Components};

pub use ai::attack_random;
pub use attacking::Attacking;
pub use cast::{Cast, Outcome};
pub use closing::Closing;
pub use ending::Ending;
pub use item::ItemState;
pub use opening::Opening;
pub use selection::SelectionState;

mod ai;
mod attacking;
mod cast;
mod closing;
mod ending;
mod item;
mod menu;
mod opening;
mod selection;

//====================================================================

/// Phase the battle is in. Transitions go through `Battle::switch`.
pub enum State {
    Opening(Opening),
    /// Turn boundary, decides between victory, defeat and the next turn.
    Check,
    /// A team member picks an action in the bar.
    Menu,
    /// An enemy runs its strategy.
    Ai,
    Selection(SelectionState),
    Attacking(Attacking),
    Cast(Cast),
    Item(ItemState),
    Victory(Ending),
    Lost(Ending),
    Closing(Closing),
}

impl State {
    #[inline]
    pub fn opening() -> Self {
        State::Opening(Opening::default())
    }

    #[inline]
    pub fn victory(battle: &mut Battle) -> Self {
        State::Victory(Ending::victory(battle))
    }

    #[inline]
    pub fn lost(battle: &mut Battle) -> Self {
        State::Lost(Ending::lost(battle))
    }

    pub fn name(&self) -> &'static str {
        match self {
            State::Opening(_) => "opening",
            State::Check => "check",
            State::Menu => "menu",
            State::Ai => "ai",
            State::Selection(_) => "selection",
            State::Attacking(_) => "attacking",
            State::Cast(_) => "cast",
            State::Item(_) => "item",
            State::Victory(_) => "victory",
            State::Lost(_) => "lost",
            State::Closing(_) => "closing",
        }
    }

    pub fn handle(&mut self, battle: &mut Battle, event: &Event) {
        match self {
            State::Menu => menu::handle(battle, event),
            State::Selection(selection) => selection.handle(battle, event),
            State::Victory(ending) | State::Lost(ending) => ending.handle(event),
            _ => {}
        }
    }

    /// Returns true once the battle is completely over.
    pub fn update(&mut self, battle: &mut Battle, ticks: u32) -> bool {
        match self {
            State::Opening(opening) => opening.update(battle, ticks),
            State::Check => battle.check(),
            State::Ai => ai::update(battle),
            State::Attacking(attacking) => attacking.update(battle),
            State::Cast(cast) => cast.update(battle, ticks),
            State::Item(item) => item.update(battle),
            State::Victory(ending) | State::Lost(ending) => ending.update(battle, ticks),
            State::Closing(closing) => return closing.update(ticks),
            State::Menu | State::Selection(_) => {}
        }

        false
    }

    pub fn draw(&self, battle: &Battle, painter: &mut dyn Painter) {
        match self {
            State::Opening(opening) => opening.draw(battle, painter),
            State::Selection(selection) => selection.draw(battle, painter),
            State::Cast(cast) => cast.draw(battle, painter),
            State::Victory(ending) | State::Lost(ending) => ending.draw(battle, painter),
            State::Closing(closing) => closing.draw(battle, painter),
            _ => battle.draw_components(painter, Components::ALL),
        }
    }

    pub fn finish(self, _battle: &mut Battle) {
        match self {
            State::Cast(cast) => cast.finish(),
            State::Victory(ending) | State::Lost(ending) => ending.finish(),
            _ => {}
        }
    }
}

//====================================================================
