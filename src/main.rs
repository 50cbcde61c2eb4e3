//! Angr demo - plays one level headlessly and logs the outcome
//!
//! Usage: `angr-demo [level.json] [tuning.json] [seed]`
//! Run with `RUST_LOG=debug` to see every throw.

use angr_logic::consts::SIM_DT;
use angr_logic::{LevelConfig, Result, Session, TickInput, Tuning};
use glam::Vec2;

/// Ticks between throws (half a second at 60 Hz)
const THROW_INTERVAL: u64 = 30;
/// Safety cap so a level with no way to end can't spin forever
const MAX_TICKS: u64 = 60 * 60 * 10;

const DEFAULT_SEED: u64 = 12345;

fn main() {
    env_logger::init();
    log::info!("Angr demo starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    let level = match args.next() {
        Some(path) => LevelConfig::load(path)?,
        None => LevelConfig {
            badge_scale: 100,
            enemies: 4,
            grenades: 6,
        },
    };
    let tuning = match args.next() {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let seed = match args.next() {
        Some(arg) => parse_seed(&arg),
        None => DEFAULT_SEED,
    };

    let mut session = Session::new(&level, tuning, seed);
    let mut tick: u64 = 0;
    while !session.status().is_over() && tick < MAX_TICKS {
        // Sweep the aim across the arena so the camera has something to chase
        let angle = tick as f32 * SIM_DT;
        let input = TickInput {
            throw_grenade: tick % THROW_INTERVAL == THROW_INTERVAL - 1,
            aim: Some(Vec2::new(angle.cos(), angle.sin()) * 200.0),
        };
        session.tick(&input, SIM_DT)?;
        tick += 1;
    }

    let state = session.state();
    println!("Result: {:?}", session.status());
    println!("{}", state);
    println!("Badges: {}", state.badges());
    println!("Camera at: {:?}", session.camera_position());
    Ok(())
}

/// Parse a seed argument, falling back to the default seed with a warning
fn parse_seed(arg: &str) -> u64 {
    match arg.parse() {
        Ok(seed) => seed,
        Err(_) => {
            log::warn!("Seed {:?} is not a valid u64, using {}", arg, DEFAULT_SEED);
            DEFAULT_SEED
        }
    }
}
