//====================================================================

use crate::{
    error::{EngineError, Result},
    painter::Painter,
};

//====================================================================

/// Fire and forget visual effect. Unlike an action it never sees input.
pub trait Drawable {
    /// Return true once the effect is over.
    fn update(&mut self, _ticks: u32) -> bool {
        false
    }

    fn draw(&self, painter: &mut dyn Painter);

    fn end(&mut self) {}

    fn finish(&mut self) {}
}

//====================================================================

pub struct DrawableStack {
    slots: Box<[Option<Box<dyn Drawable>>]>,
}

impl Default for DrawableStack {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl DrawableStack {
    pub const DEFAULT_CAPACITY: usize = 32;

    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn add(&mut self, drawable: Box<dyn Drawable>) -> Result<()> {
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(drawable);
                Ok(())
            }
            None => Err(EngineError::StackFull {
                capacity: self.capacity(),
            }),
        }
    }

    pub fn update(&mut self, ticks: u32) -> bool {
        for slot in self.slots.iter_mut() {
            let done = slot
                .as_mut()
                .map(|drawable| drawable.update(ticks))
                .unwrap_or(false);

            if done {
                if let Some(mut drawable) = slot.take() {
                    drawable.end();
                    drawable.finish();
                }
            }
        }

        self.is_completed()
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        self.slots
            .iter()
            .flatten()
            .for_each(|drawable| drawable.draw(painter));
    }

    pub fn finish(&mut self) {
        self.slots.iter_mut().for_each(|slot| {
            if let Some(mut drawable) = slot.take() {
                drawable.end();
                drawable.finish();
            }
        });
    }
}

impl std::fmt::Debug for DrawableStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawableStack")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish()
    }
}

//====================================================================


//====================================================================
