//! Headless runner for the arena collision core.
//!
//! Loads a level, walks the player through it for a number of frames and
//! logs every gameplay notification.
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use arena::{init_logging, EventLog, LevelDefinition, PlayerState, Vitals};
use clap::Parser;
use glam::Vec3;
use log::info;

/// Headless runner stepping the collision core through a level
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Level file to load; an empty arena is used when omitted
    #[arg(short, long)]
    level: Option<PathBuf>,
    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u32,
    /// Frame length in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
    /// Player displacement per frame along X
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    walk_x: f32,
    /// Player displacement per frame along Z
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    walk_z: f32,
    /// Frame on which the player jumps
    #[arg(long)]
    jump_at: Option<u32>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let level = match &args.level {
        Some(path) => LevelDefinition::load(path)
            .with_context(|| format!("loading level {}", path.display()))?,
        None => LevelDefinition::default(),
    };
    let mut world = level.build().context("building level")?;
    let mut vitals = Vitals::new(world.player().position, level.coin_count());
    let dt = Duration::from_millis(args.frame_ms);
    let walk = Vec3::new(args.walk_x, 0.0, args.walk_z);

    for frame in 0..args.frames {
        if walk != Vec3::ZERO {
            let player = world.player_mut();
            player.moving = true;
            player.position += walk;
        }

        if args.jump_at == Some(frame) && world.jump() {
            info!("frame {frame}: jump");
        }

        let mut log = EventLog::new();
        let report = world.run_frame(dt, &mut log);
        vitals.tick(dt);
        for event in log.drain() {
            info!("frame {frame}: {event}");
            event.dispatch(&mut vitals);
        }
        if report.out_of_bounds {
            info!("frame {frame}: out of bounds at {}", world.player().position);
        }

        if vitals.is_dead() {
            let spawn = vitals.respawn();
            *world.player_mut() = PlayerState::new(spawn);
        }
        if vitals.take_victory() {
            info!("frame {frame}: every coin collected");
            break;
        }
    }

    info!(
        "finished at {} with {} HP and {}/{} coins",
        world.player().position,
        vitals.hp(),
        vitals.coins_found(),
        vitals.coins_total()
    );
    Ok(())
}
