//====================================================================

use common::Color;
use engine::painter::Painter;

use crate::battle::{Battle, Components};

//====================================================================

const DELAY: u32 = 8;
const STEP: u8 = 5;

/// Fade to black once the battle is over.
#[derive(Debug, Default)]
pub struct Closing {
    alpha: u8,
    elapsed: u32,
}

impl Closing {
    #[inline]
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Returns true on the first step after the screen is completely black.
    pub fn update(&mut self, ticks: u32) -> bool {
        self.elapsed += ticks;

        if self.elapsed > DELAY {
            self.elapsed = 0;

            if self.alpha == u8::MAX {
                return true;
            }

            self.alpha = self.alpha.saturating_add(STEP);
        }

        false
    }

    pub(super) fn draw(&self, battle: &Battle, painter: &mut dyn Painter) {
        battle.draw_components(painter, Components::ALL);

        painter.set_color(Color::BLACK.with_alpha(self.alpha));
        painter.draw_rectangle(battle.screen());
    }
}

//====================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fades_in_fifty_two_steps() {
        let mut closing = Closing::default();

        for _ in 0..51 {
            assert!(!closing.update(9));
        }
        assert_eq!(closing.alpha(), 255);
        assert!(closing.update(9));
    }

    #[test]
    fn waits_more_than_delay() {
        let mut closing = Closing::default();

        assert!(!closing.update(8));
        assert_eq!(closing.alpha(), 0);

        closing.update(1);
        assert_eq!(closing.alpha(), 5);
    }
}

//====================================================================
