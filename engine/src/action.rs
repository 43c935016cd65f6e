//====================================================================

use crate::{
    error::{EngineError, Result},
    event::Event,
    painter::Painter,
};

//====================================================================

/// Unit of schedulable work. Every method defaults to a no-op and `update`
/// reports "not complete" unless overridden.
pub trait Action {
    fn start(&mut self) {}

    fn handle(&mut self, _event: &Event) {}

    /// Return true once the action is complete.
    fn update(&mut self, _ticks: u32) -> bool {
        false
    }

    fn draw(&self, _painter: &mut dyn Painter) {}

    /// Called once when the action completes normally.
    fn end(&mut self) {}

    /// Called once before the action is dropped, completed or not.
    fn finish(&mut self) {}
}

//====================================================================

/// Fixed number of actions running concurrently. A slot is reclaimed as soon
/// as its action completes.
pub struct ActionStack {
    slots: Box<[Option<Box<dyn Action>>]>,
}

impl Default for ActionStack {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl ActionStack {
    pub const DEFAULT_CAPACITY: usize = 16;

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

    /// Occupy the first free slot.
    pub fn add(&mut self, action: Box<dyn Action>) -> Result<()> {
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(action);
                Ok(())
            }
            None => Err(EngineError::StackFull {
                capacity: self.capacity(),
            }),
        }
    }

    pub fn start(&mut self) {
        self.slots
            .iter_mut()
            .flatten()
            .for_each(|action| action.start());
    }

    pub fn handle(&mut self, event: &Event) {
        self.slots
            .iter_mut()
            .flatten()
            .for_each(|action| action.handle(event));
    }

    /// Returns true when no action remains after this step.
    pub fn update(&mut self, ticks: u32) -> bool {
        for slot in self.slots.iter_mut() {
            let completed = match slot {
                Some(action) => action.update(ticks),
                None => continue,
            };

            if completed {
                if let Some(mut action) = slot.take() {
                    action.end();
                    action.finish();
                }
            }
        }

        self.is_completed()
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        self.slots
            .iter()
            .flatten()
            .for_each(|action| action.draw(painter));
    }

    /// End and finish every remaining action.
    pub fn finish(&mut self) {
        for slot in self.slots.iter_mut() {
            if let Some(mut action) = slot.take() {
                action.end();
                action.finish();
            }
        }
    }
}

impl std::fmt::Debug for ActionStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionStack")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish()
    }
}

//====================================================================

/// Bounded list of actions run one after another.
pub struct Script {
    actions: Vec<Box<dyn Action>>,
    capacity: usize,
    cursor: usize,
}

impl Default for Script {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl Script {
    pub const DEFAULT_CAPACITY: usize = 32;

    pub fn new(capacity: usize) -> Self {
        Self {
            actions: Vec::with_capacity(capacity),
            capacity,
            cursor: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.cursor >= self.actions.len()
    }

    pub fn append(&mut self, action: Box<dyn Action>) -> Result<()> {
        if self.actions.len() >= self.capacity {
            return Err(EngineError::ScriptFull {
                capacity: self.capacity,
            });
        }

        self.actions.push(action);
        Ok(())
    }
}

impl Action for Script {
    fn start(&mut self) {
        self.cursor = 0;

        if let Some(action) = self.actions.first_mut() {
            action.start();
        }
    }

    fn handle(&mut self, event: &Event) {
        if let Some(action) = self.actions.get_mut(self.cursor) {
            action.handle(event);
        }
    }

    fn update(&mut self, ticks: u32) -> bool {
        let action = match self.actions.get_mut(self.cursor) {
            Some(action) => action,
            None => return true,
        };

        if action.update(ticks) {
            action.end();
            self.cursor += 1;

            if let Some(next) = self.actions.get_mut(self.cursor) {
                next.start();
            }
        }

        self.is_completed()
    }

    fn draw(&self, painter: &mut dyn Painter) {
        if let Some(action) = self.actions.get(self.cursor) {
            action.draw(painter);
        }
    }

    fn finish(&mut self) {
        self.actions.iter_mut().for_each(|action| action.finish());
        self.actions.clear();
        self.cursor = 0;
    }
}

//====================================================================


//====================================================================
