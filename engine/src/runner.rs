//====================================================================

use std::collections::VecDeque;

use web_time::Duration;

use crate::{
    event::Event,
    painter::Painter,
    scene::{Scene, SceneUpdate},
    tools::{self, Time},
};

//====================================================================

const DEFAULT_FPS: u32 = 60;

/// Provider of input events, polled until empty every frame.
pub trait EventSource {
    fn poll(&mut self) -> Option<Event>;
}

/// Source that only hands out the events queued in advance.
#[derive(Debug, Default)]
pub struct QueuedEvents(pub VecDeque<Event>);

impl EventSource for QueuedEvents {
    #[inline]
    fn poll(&mut self) -> Option<Event> {
        self.0.pop_front()
    }
}

//====================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    pub fps: u32,
    /// Stop after this many frames.
    pub frame_limit: Option<u64>,
    /// Measure real time and sleep to the frame budget. Otherwise every frame
    /// advances by exactly one frame budget.
    pub realtime: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            frame_limit: None,
            realtime: true,
        }
    }
}

impl RunnerConfig {
    #[inline]
    pub fn frame_budget(&self) -> Duration {
        Duration::from_millis(1000 / self.fps.max(1) as u64)
    }
}

//====================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every scene was popped.
    Finished,
    Quit,
    FrameLimit,
}

/// Drives a stack of scenes, only the top one receives events and ticks.
pub struct Runner {
    config: RunnerConfig,
    scenes: Vec<Box<dyn Scene>>,
    time: Time,
    frames: u64,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            scenes: Vec::new(),
            time: Time::default(),
            frames: 0,
        }
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn push(&mut self, scene: Box<dyn Scene>) {
        self.scenes.push(scene);
    }

    fn ticks(&mut self) -> u32 {
        match self.config.realtime {
            true => tools::tick_time(&mut self.time),
            false => self.config.frame_budget().as_millis() as u32,
        }
    }

    /// Run a single frame. Returns None while the runner should keep going.
    pub fn frame(
        &mut self,
        source: &mut dyn EventSource,
        painter: &mut dyn Painter,
    ) -> Option<RunOutcome> {
        let ticks = self.ticks();

        let scene = match self.scenes.last_mut() {
            Some(scene) => scene,
            None => return Some(RunOutcome::Finished),
        };

        while let Some(event) = source.poll() {
            if let Event::Quit = event {
                log::info!("Quit requested. Closing runner");
                return Some(RunOutcome::Quit);
            }

            scene.handle(&event);
        }

        let update = scene.update(ticks);

        scene.draw(painter);
        painter.present();

        self.frames += 1;

        if let SceneUpdate::Pop = update {
            if let Some(mut scene) = self.scenes.pop() {
                log::debug!("Popping scene, {} remaining", self.scenes.len());
                scene.finish();
            }
        }

        match self.config.frame_limit {
            Some(limit) if self.frames >= limit => Some(RunOutcome::FrameLimit),
            _ => None,
        }
    }

    pub fn run(&mut self, source: &mut dyn EventSource, painter: &mut dyn Painter) -> RunOutcome {
        log::info!("Starting runner at {} fps", self.config.fps);

        let budget = self.config.frame_budget();

        loop {
            let started = web_time::Instant::now();

            if let Some(outcome) = self.frame(source, painter) {
                self.scenes.iter_mut().rev().for_each(|scene| scene.finish());
                self.scenes.clear();

                log::info!("Runner stopped after {} frames ({:?})", self.frames, outcome);
                return outcome;
            }

            if self.config.realtime {
                let spent = started.elapsed();

                if spent < budget {
                    std::thread::sleep(budget - spent);
                }
            }
        }
    }
}

//====================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{event::Key, painter::Recorder};

    struct Countdown {
        remaining: u32,
        keys: u32,
    }

    impl Scene for Countdown {
        fn handle(&mut self, event: &Event) {
            if event.key_down().is_some() {
                self.keys += 1;
            }
        }

        fn update(&mut self, ticks: u32) -> SceneUpdate {
            self.remaining = self.remaining.saturating_sub(ticks);

            match self.remaining {
                0 => SceneUpdate::Pop,
                _ => SceneUpdate::Continue,
            }
        }

        fn draw(&self, painter: &mut dyn Painter) {
            painter.clear();
        }
    }

    fn fixed(frame_limit: Option<u64>) -> RunnerConfig {
        RunnerConfig {
            fps: 50,
            frame_limit,
            realtime: false,
        }
    }

    #[test]
    fn fixed_step_pops_scene() {
        let mut runner = Runner::new(fixed(None));
        runner.push(Box::new(Countdown {
            remaining: 100,
            keys: 0,
        }));

        let outcome = runner.run(&mut QueuedEvents::default(), &mut Recorder::new());

        assert_eq!(outcome, RunOutcome::Finished);
        assert_eq!(runner.frames(), 5);
    }

    #[test]
    fn quit_and_frame_limit_stop_the_loop() {
        let mut runner = Runner::new(fixed(None));
        runner.push(Box::new(Countdown {
            remaining: 1000,
            keys: 0,
        }));

        let mut events = QueuedEvents(VecDeque::from([Event::KeyDown(Key::Enter), Event::Quit]));
        assert_eq!(runner.run(&mut events, &mut Recorder::new()), RunOutcome::Quit);

        let mut runner = Runner::new(fixed(Some(3)));
        runner.push(Box::new(Countdown {
            remaining: 1000,
            keys: 0,
        }));
        assert_eq!(
            runner.run(&mut QueuedEvents::default(), &mut Recorder::new()),
            RunOutcome::FrameLimit
        );
        assert_eq!(runner.frames(), 3);
    }
}

//====================================================================
