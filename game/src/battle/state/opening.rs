//====================================================================

use common::{Color, Rect};
use engine::painter::Painter;

use crate::battle::{Battle, Components};

use super::State;

//====================================================================

const DURATION: u32 = 1000;

/// Two black bezels sliding away from the middle of the screen.
#[derive(Debug, Default)]
pub struct Opening {
    elapsed: u32,
}

impl Opening {
    #[inline]
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub(super) fn update(&mut self, battle: &mut Battle, ticks: u32) {
        self.elapsed += ticks;

        if self.elapsed >= DURATION {
            battle.switch(State::Check);
        }
    }

    /// Top and bottom bezels for a screen of the given size.
    pub fn bezels(&self, width: u32, height: u32) -> [Rect; 2] {
        let half = height / 2;
        let opened = self.elapsed.min(DURATION) * half / DURATION;
        let bezel = half - opened;

        [
            Rect::new(0, 0, width, bezel),
            Rect::new(0, (half + opened) as i32, width, bezel),
        ]
    }

    pub(super) fn draw(&self, battle: &Battle, painter: &mut dyn Painter) {
        battle.draw_components(painter, Components::BACKGROUND | Components::ENTITIES);

        painter.set_color(Color::BLACK);
        self.bezels(battle.size.width, battle.size.height)
            .into_iter()
            .for_each(|rect| painter.draw_rectangle(rect));
    }
}

//====================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bezels_slide_open() {
        let mut opening = Opening::default();

        assert_eq!(
            opening.bezels(800, 600),
            [Rect::new(0, 0, 800, 300), Rect::new(0, 300, 800, 300)]
        );

        opening.elapsed = 500;
        assert_eq!(
            opening.bezels(800, 600),
            [Rect::new(0, 0, 800, 150), Rect::new(0, 450, 800, 150)]
        );

        opening.elapsed = 4000;
        assert_eq!(opening.bezels(800, 600)[0].height, 0);
    }
}

//====================================================================
