use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use animated_core::Millis;
use tunnel_player::{Beat, Cue, Player, PlayerConfig, ReplayClock};

/// Drive a player through a beat pattern without a window and log its state.
#[derive(Parser, Debug)]
#[command(name = "tunnel-player", version, about)]
struct Cli {
    /// JSON file with player tuning (defaults are used for missing fields)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Simulated frame length in milliseconds
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u32).range(1..))]
    frame_ms: u32,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 240)]
    frames: u32,

    /// Log a snapshot every N frames
    #[arg(long, default_value_t = 15)]
    log_every: u32,

    /// Beat pattern, e.g. "kick,snare,hihat,shaman"
    #[arg(long, value_delimiter = ',', default_value = "kick,snare,kick,hihat,shaman")]
    pattern: Vec<Beat>,

    /// Delay between cues in milliseconds
    #[arg(long, default_value_t = 400)]
    interval_ms: u32,
}

fn load_config(path: Option<&PathBuf>) -> Result<PlayerConfig> {
    let Some(path) = path else {
        return Ok(PlayerConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    PlayerConfig::from_json_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;
    let mut player = Player::new(&config);
    let interval = Millis::new(cli.interval_ms);
    let mut replay = ReplayClock::new(cli.pattern.iter().map(|&beat| Cue::new(beat, interval)));
    let frame = Millis::new(cli.frame_ms);
    let log_every = cli.log_every.max(1);

    info!(
        "simulating {} frames of {} with {} cues on wall {:?}",
        cli.frames,
        frame,
        replay.remaining(),
        player.wall_color().to_array()
    );

    for n in 0..cli.frames {
        if let Some(beat) = replay.advance(frame) {
            info!("frame {n}: {}", beat.name());
            player.step(beat)?;
        }
        player.tick(frame);

        if n % log_every == 0 {
            let snap = player.snapshot();
            info!(
                "frame {n}: pos=({:.1}, {:.1}) r={:.1} color={:?}",
                snap.position.x,
                snap.position.y,
                snap.radius,
                snap.color.to_array()
            );
        }
    }

    player.reset()?;
    while player.is_animating() {
        player.tick(frame);
    }
    let snap = player.snapshot();
    info!("after reset: {}", serde_json::to_string(&snap)?);
    Ok(())
}
