//====================================================================

use config::DemoConfig;
use engine::{
    painter::Recorder,
    runner::{RunOutcome, Runner},
};
use registry::Autopilot;
use scene::BattleScene;

mod config;
mod registry;
mod scene;

//====================================================================

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(&path).unwrap_or_else(|e| {
            log::error!("{}. Using default configuration", e);
            DemoConfig::default()
        }),
        None => DemoConfig::default(),
    };

    log::debug!("Configuration = {:?}", config);

    let scene = match registry::battle(config.size(), config.seed).and_then(BattleScene::new) {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("Unable to set up the battle: {}", e);
            return;
        }
    };

    let mut runner = Runner::new(config.runner());
    runner.push(Box::new(scene));

    let mut painter = Recorder::new();
    let mut autopilot = Autopilot::new(config.autopilot_delay);

    match runner.run(&mut autopilot, &mut painter) {
        RunOutcome::Finished => log::info!("Battle finished in {} frames", runner.frames()),
        outcome => log::warn!("Battle interrupted ({:?})", outcome),
    }
}

//====================================================================


//====================================================================
