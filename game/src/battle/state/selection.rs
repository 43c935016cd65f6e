//====================================================================

use engine::{
    event::{Event, Key},
    painter::Painter,
};

use crate::battle::{selection::Side, Battle, Components, Selection};

use super::State;

//====================================================================

/// The player picks the target of the action chosen in the bar.
#[derive(Debug)]
pub struct SelectionState {
    selection: Selection,
}

impl SelectionState {
    #[inline]
    pub fn new(selection: Selection) -> Self {
        Self { selection }
    }

    #[inline]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    fn back(battle: &mut Battle) {
        battle.start_bar();
        battle.switch(State::Menu);
    }

    fn cancel(battle: &mut Battle) {
        battle.bar_cancel();
        battle.switch(State::Menu);
    }

    fn validate(&self, battle: &mut Battle) {
        let command = match battle.bar_select(&self.selection) {
            Some(command) => command,
            None => {
                log::warn!("Selection does not match any action");
                return Self::back(battle);
            }
        };

        if let Err(e) = battle.execute(command) {
            log::warn!("Unable to run {:?}: {}", command, e);
            Self::back(battle);
        }
    }

    pub(super) fn handle(&mut self, battle: &mut Battle, event: &Event) {
        match event.key_down() {
            Some(Key::Escape) => Self::cancel(battle),
            Some(Key::Enter) => self.validate(battle),
            Some(Key::Left) => self.selection.switch_side(battle, Side::Enemy),
            Some(Key::Right) => self.selection.switch_side(battle, Side::Team),
            Some(Key::Up) => self.selection.step(battle, -1),
            Some(Key::Down) => self.selection.step(battle, 1),
            Some(Key::Tab) => self.selection.select_all(),
            _ => {}
        }
    }

    pub(super) fn draw(&self, battle: &Battle, painter: &mut dyn Painter) {
        battle.draw_components(painter, Components::ALL);

        let theme = &battle.theme;

        self.selection
            .targets(battle)
            .into_iter()
            .filter_map(|entity| battle.entity(entity).ok())
            .for_each(|entity| {
                let name = entity.name.position;
                let line = theme.line_height() as i32;

                match &theme.cursor {
                    Some(cursor) => {
                        let at = glam::ivec2(
                            name.x - (cursor.cell.width + theme.padding) as i32,
                            name.y + (line - cursor.cell.height as i32) / 2,
                        );
                        painter.draw_sprite(cursor, 0, cursor.ncols.saturating_sub(1), at, u8::MAX);
                    }
                    None => {
                        let at = glam::ivec2(
                            name.x - (theme.glyph.width + theme.padding) as i32,
                            name.y,
                        );
                        painter.draw_text(">", at, theme.selected);
                    }
                }
            });
    }
}

//====================================================================
