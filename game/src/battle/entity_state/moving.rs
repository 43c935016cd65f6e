//====================================================================

use std::sync::Arc;

use engine::{
    painter::Painter,
    sprite::{Sprite, WalkSprite},
};

//====================================================================

/// Pixels per second, on each axis.
pub const SPEED: u32 = 800;
const SEC: u64 = 1000;
const WALK_DELAY: u32 = 40;

const ROW_LEFT: u32 = 6;
const ROW_RIGHT: u32 = 2;

#[derive(Debug)]
pub struct Moving {
    destination: glam::IVec2,
    speed: u32,
    walk: WalkSprite,
    left: bool,
    /// Sub pixel distance left over from previous updates.
    carry: u64,
}

impl Moving {
    pub fn new(sprite: Arc<Sprite>, from: glam::IVec2, destination: glam::IVec2) -> Self {
        Self::with_speed(sprite, from, destination, SPEED)
    }

    pub fn with_speed(
        sprite: Arc<Sprite>,
        from: glam::IVec2,
        destination: glam::IVec2,
        speed: u32,
    ) -> Self {
        debug_assert!(speed > 0);

        Self {
            destination,
            speed,
            walk: WalkSprite::new(sprite, WALK_DELAY),
            left: destination.x < from.x,
            carry: 0,
        }
    }

    #[inline]
    pub fn destination(&self) -> glam::IVec2 {
        self.destination
    }

    pub fn update(&mut self, position: &mut glam::IVec2, ticks: u32) -> bool {
        let travel = self.speed as u64 * ticks as u64 + self.carry;
        let step = (travel / SEC) as i64;
        self.carry = travel % SEC;

        let advance = |current: i32, target: i32| -> i32 {
            let delta = target as i64 - current as i64;
            (current as i64 + delta.signum() * step.min(delta.abs())) as i32
        };

        position.x = advance(position.x, self.destination.x);
        position.y = advance(position.y, self.destination.y);

        if *position != self.destination {
            self.walk.update(ticks);
            false
        } else {
            self.walk.reset();
            self.carry = 0;
            true
        }
    }

    pub fn draw(&self, painter: &mut dyn Painter, position: glam::IVec2) {
        let orientation = match self.left {
            true => ROW_LEFT,
            false => ROW_RIGHT,
        };

        self.walk.draw(painter, orientation, position);
    }
}

//====================================================================


//====================================================================
