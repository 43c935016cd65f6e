//====================================================================

use engine::{
    event::Event,
    painter::Painter,
    scene::{Scene, SceneUpdate},
};
use game::{
    save::{RonSave, SaveStore},
    Battle, BattleStatus,
};

//====================================================================

/// Runs a single battle then stores the team.
pub struct BattleScene {
    battle: Battle,
    saves: RonSave,
}

impl BattleScene {
    pub fn new(mut battle: Battle) -> game::Result<Self> {
        battle.start()?;

        Ok(Self {
            battle,
            saves: RonSave::new(),
        })
    }

    #[inline]
    pub fn status(&self) -> BattleStatus {
        self.battle.status()
    }

    #[inline]
    pub fn saves(&self) -> &RonSave {
        &self.saves
    }

    fn save_team(&mut self) {
        let snapshots = self
            .battle
            .team()
            .iter()
            .flatten()
            .filter_map(|entity| self.battle.character(*entity).ok())
            .map(|character| character.snapshot())
            .collect::<Vec<_>>();

        snapshots.iter().for_each(|snapshot| {
            if let Err(e) = self.saves.save(snapshot) {
                log::error!("{}", e);
            }
        });
    }
}

impl Scene for BattleScene {
    fn handle(&mut self, event: &Event) {
        self.battle.handle(event);
    }

    fn update(&mut self, ticks: u32) -> SceneUpdate {
        match self.battle.update(ticks) {
            true => SceneUpdate::Pop,
            false => SceneUpdate::Continue,
        }
    }

    fn draw(&self, painter: &mut dyn Painter) {
        painter.clear();
        self.battle.draw(painter);
    }

    fn finish(&mut self) {
        log::info!("Battle over with status {:?}", self.battle.status());

        self.save_team();
        self.battle.finish();
    }
}

//====================================================================
