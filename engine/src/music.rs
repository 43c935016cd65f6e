//====================================================================

//====================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MusicMode {
    #[default]
    Once,
    Loop,
}

/// Audio track handle provided by the sound backend.
pub trait Music {
    fn play(&mut self, mode: MusicMode);
    fn stop(&mut self);
}

//====================================================================

/// Track that only logs, for headless runs.
#[derive(Debug, Default)]
pub struct SilentMusic {
    pub name: String,
    playing: Option<MusicMode>,
}

impl SilentMusic {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            playing: None,
        }
    }

    #[inline]
    pub fn playing(&self) -> Option<MusicMode> {
        self.playing
    }
}

impl Music for SilentMusic {
    fn play(&mut self, mode: MusicMode) {
        log::info!("Playing music '{}' ({:?})", self.name, mode);
        self.playing = Some(mode);
    }

    fn stop(&mut self) {
        log::debug!("Stopping music '{}'", self.name);
        self.playing = None;
    }
}

//====================================================================
