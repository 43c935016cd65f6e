//====================================================================

use engine::{drawable::Drawable, painter::Painter};

use crate::battle::{Battle, Components};

use super::State;

//====================================================================

/// Applied once the spell animation is over.
pub type Outcome = Box<dyn FnOnce(&mut Battle)>;

/// Spell animation followed by its effect on the battle.
pub struct Cast {
    drawable: Box<dyn Drawable>,
    outcome: Option<Outcome>,
}

impl Cast {
    pub fn new(drawable: Box<dyn Drawable>, outcome: Outcome) -> Self {
        Self {
            drawable,
            outcome: Some(outcome),
        }
    }

    pub(super) fn update(&mut self, battle: &mut Battle, ticks: u32) {
        if !self.drawable.update(ticks) {
            return;
        }

        self.drawable.end();

        if let Some(outcome) = self.outcome.take() {
            outcome(battle);
        }

        if !battle.has_pending() {
            battle.switch(State::Check);
        }
    }

    pub(super) fn draw(&self, battle: &Battle, painter: &mut dyn Painter) {
        battle.draw_components(painter, Components::ALL);
        self.drawable.draw(painter);
    }

    pub(super) fn finish(mut self) {
        self.drawable.finish();
    }
}

//====================================================================
