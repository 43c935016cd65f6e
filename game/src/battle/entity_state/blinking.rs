//====================================================================

const DELAY: u32 = 80;
const TOGGLES: u32 = 3;

pub const TRANSLUCENT: u8 = 150;
pub const OPAQUE: u8 = 255;

/// Flicker in place, used by enemies instead of walking to their target.
#[derive(Debug, Default)]
pub struct Blinking {
    elapsed: u32,
    count: u32,
}

impl Blinking {
    /// The entity is expected to start translucent.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, alpha: &mut u8, ticks: u32) -> bool {
        if self.count >= TOGGLES {
            return true;
        }

        self.elapsed += ticks;

        if self.elapsed >= DELAY {
            self.elapsed = 0;
            self.count += 1;
        }

        *alpha = match self.count % 2 {
            0 => TRANSLUCENT,
            _ => OPAQUE,
        };

        self.count >= TOGGLES
    }

    pub fn finish(self, alpha: &mut u8) {
        *alpha = OPAQUE;
    }
}

//====================================================================


//====================================================================
