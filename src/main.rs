//! Headless demo: generate a maze and let the wanderer roam it

use labyrinth::prelude::*;

/// Simulation rate of the demo loop
const TICK_RATE: f32 = 60.0;

/// Ticks to simulate (one minute of game time)
const DEMO_TICKS: u32 = 3600;

fn run(config: &LabyrinthConfig) -> Result<(), ConfigError> {
    let mut level = Level::from_config(config)?;
    println!("{}", level.grid());

    let dt = 1.0 / TICK_RATE;
    let mut footsteps = 0u32;
    let mut last_direction = level.wanderer().direction();

    for _ in 0..DEMO_TICKS {
        let report = level.tick(dt, &PlayerCommand::IDLE);
        let wanderer = report.wanderer;

        if wanderer.direction != last_direction {
            log::info!(
                "Wanderer heads {} at ({:.2}, {:.2})",
                wanderer.direction,
                wanderer.position.x,
                wanderer.position.z
            );
            last_direction = wanderer.direction;
        }
        if let Some(foot) = wanderer.footstep {
            footsteps += 1;
            log::debug!("Footstep {footsteps} ({foot:?})");
        }
    }

    log::info!(
        "Simulated {:.1}s: wanderer at {}, {footsteps} footsteps",
        level.time().elapsed_seconds(),
        level.wanderer().position()
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match LabyrinthConfig::load_ron(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => LabyrinthConfig::default(),
    };

    if let Err(e) = run(&config) {
        eprintln!("Labyrinth error: {e}");
        std::process::exit(1);
    }
}
