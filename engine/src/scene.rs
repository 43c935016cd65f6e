//====================================================================

use crate::{event::Event, painter::Painter};

//====================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneUpdate {
    Continue,
    /// Remove the scene from the runner.
    Pop,
}

pub trait Scene: 'static {
    fn handle(&mut self, event: &Event);
    fn update(&mut self, ticks: u32) -> SceneUpdate;
    fn draw(&self, painter: &mut dyn Painter);

    fn finish(&mut self) {}
}

//====================================================================
