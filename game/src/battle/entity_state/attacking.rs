//====================================================================

use std::sync::Arc;

use engine::{
    painter::Painter,
    sprite::{Animation, Sprite},
};

//====================================================================

const DELAY: u32 = 100;

#[derive(Debug)]
pub struct Attacking {
    animation: Animation,
}

impl Attacking {
    pub fn new(sprite: Arc<Sprite>) -> Self {
        let mut animation = Animation::new(sprite, DELAY);
        animation.start();

        Self { animation }
    }

    #[inline]
    pub fn update(&mut self, ticks: u32) -> bool {
        self.animation.update(ticks)
    }

    #[inline]
    pub fn draw(&self, painter: &mut dyn Painter, position: glam::IVec2) {
        self.animation.draw(painter, position);
    }
}

//====================================================================
