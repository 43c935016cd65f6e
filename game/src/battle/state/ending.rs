//====================================================================

use common::Rect;
use engine::{
    action::Action,
    event::Event,
    music::MusicMode,
    painter::Painter,
    ui::{Message, MessageFlags},
};

use crate::battle::{Battle, BattleStatus, Components};

use super::{Closing, State};

//====================================================================

const VICTORY_MUSIC: usize = 1;
const LOST_MUSIC: usize = 2;

/// Final message of a battle, shown over the still running scene.
#[derive(Debug)]
pub struct Ending {
    message: Message,
}

impl Ending {
    pub fn victory(battle: &mut Battle) -> Self {
        Self::new(battle, "Victory!", BattleStatus::Won, VICTORY_MUSIC)
    }

    pub fn lost(battle: &mut Battle) -> Self {
        Self::new(battle, "You have been defeated...", BattleStatus::Lost, LOST_MUSIC)
    }

    fn new(battle: &mut Battle, text: &str, status: BattleStatus, music: usize) -> Self {
        let mut message = Message::new(
            vec![text.to_string()],
            MessageFlags::AUTOMATIC | MessageFlags::FADEIN | MessageFlags::FADEOUT,
            battle.theme.clone(),
        );

        let width = battle.size.width * 6 / 10;
        message.rect = Rect::new(
            ((battle.size.width - width) / 2) as i32,
            (battle.size.height / 10) as i32,
            width,
            message.query().height,
        );
        message.start();

        battle.set_status(status);
        battle.play_music(music, MusicMode::Once);

        Self { message }
    }

    #[inline]
    pub fn message(&self) -> &Message {
        &self.message
    }

    pub(super) fn handle(&mut self, event: &Event) {
        self.message.handle(event);
    }

    pub(super) fn update(&mut self, battle: &mut Battle, ticks: u32) {
        if self.message.update(ticks) {
            battle.switch(State::Closing(Closing::default()));
        }
    }

    pub(super) fn draw(&self, battle: &Battle, painter: &mut dyn Painter) {
        battle.draw_components(painter, Components::ALL);
        self.message.draw(painter);
    }

    pub(super) fn finish(mut self) {
        self.message.finish();
    }
}

//====================================================================
