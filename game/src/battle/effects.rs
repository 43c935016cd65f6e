//====================================================================

use std::sync::Arc;

use common::Color;
use engine::{
    drawable::Drawable,
    painter::Painter,
    sprite::{Animation, Sprite},
};

//====================================================================

pub const HP_COLOR: Color = Color(0xa5303000);
pub const MP_COLOR: Color = Color(0xa23e8c00);

const INDICATOR_STEP: u8 = 2;
const INDICATOR_DELAY: u32 = 5;
const INDICATOR_ALPHA: u8 = 250;

/// Floating number shown after a stat change. Fades from white to its color
/// then vanishes.
#[derive(Debug)]
pub struct Indicator {
    position: glam::IVec2,
    text: String,
    color: Color,
    current: Color,
    alpha: u8,
    elapsed: u32,
}

impl Indicator {
    pub fn new(position: glam::IVec2, amount: u32, color: Color) -> Self {
        Self {
            position,
            text: amount.to_string(),
            color,
            current: Color::WHITE,
            alpha: INDICATOR_ALPHA,
            elapsed: 0,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    fn colored(&self) -> bool {
        self.current.same_rgb(self.color)
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.colored() && self.alpha == 0
    }
}

fn approach(current: u8, target: u8) -> u8 {
    match target > current {
        true => current.saturating_add(INDICATOR_STEP).min(target),
        false => current.saturating_sub(INDICATOR_STEP).max(target),
    }
}

impl Drawable for Indicator {
    fn update(&mut self, ticks: u32) -> bool {
        self.elapsed += ticks;

        if self.elapsed > INDICATOR_DELAY {
            self.elapsed = 0;

            if !self.colored() {
                self.current = Color::rgba(
                    approach(self.current.r(), self.color.r()),
                    approach(self.current.g(), self.color.g()),
                    approach(self.current.b(), self.color.b()),
                    255,
                );
            } else {
                self.alpha = self.alpha.saturating_sub(10);
            }
        }

        self.is_completed()
    }

    fn draw(&self, painter: &mut dyn Painter) {
        painter.draw_text(
            &self.text,
            self.position + glam::IVec2::ONE,
            Color::BLACK.with_alpha(self.alpha),
        );
        painter.draw_text(&self.text, self.position, self.current.with_alpha(self.alpha));
    }
}

//====================================================================

const FADEOUT_DELAY: u32 = 8;
const FADEOUT_ALPHA: u8 = 250;
const FADEOUT_STEP: u8 = 10;

/// Last image of a defeated enemy, fading away.
#[derive(Debug)]
pub struct Fadeout {
    sprite: Arc<Sprite>,
    position: glam::IVec2,
    alpha: u8,
    elapsed: u32,
}

impl Fadeout {
    pub fn new(sprite: Arc<Sprite>, position: glam::IVec2) -> Self {
        Self {
            sprite,
            position,
            alpha: FADEOUT_ALPHA,
            elapsed: 0,
        }
    }
}

impl Drawable for Fadeout {
    fn update(&mut self, ticks: u32) -> bool {
        self.elapsed += ticks;

        if self.elapsed >= FADEOUT_DELAY {
            self.elapsed = 0;

            if self.alpha == 0 {
                return true;
            }

            self.alpha = self.alpha.saturating_sub(FADEOUT_STEP);
        }

        false
    }

    fn draw(&self, painter: &mut dyn Painter) {
        painter.draw_sprite(&self.sprite, 0, 0, self.position, self.alpha);
    }
}

//====================================================================

/// Sprite animation played once at a fixed place, used by spells.
#[derive(Debug)]
pub struct AnimationEffect {
    animation: Animation,
    position: glam::IVec2,
}

impl AnimationEffect {
    pub fn new(sprite: Arc<Sprite>, delay: u32, position: glam::IVec2) -> Self {
        let mut animation = Animation::new(sprite, delay);
        animation.start();

        Self {
            animation,
            position,
        }
    }
}

impl Drawable for AnimationEffect {
    fn update(&mut self, ticks: u32) -> bool {
        self.animation.update(ticks)
    }

    fn draw(&self, painter: &mut dyn Painter) {
        self.animation.draw(painter, self.position);
    }
}

//====================================================================


//====================================================================
