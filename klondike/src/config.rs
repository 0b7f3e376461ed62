use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "klondike", version, about = "Klondike solitaire for the terminal")]
pub struct Cli {
    /// Seed for the first deal; random when omitted
    #[arg(long, env = "KLONDIKE_SEED")]
    pub seed: Option<u64>,
    /// Ticks per second
    #[arg(
        long,
        env = "KLONDIKE_FPS",
        default_value_t = 60,
        value_parser = clap::value_parser!(u32).range(1..=240)
    )]
    pub fps: u32,
    /// Append log lines to this file
    #[arg(long, env = "KLONDIKE_LOG")]
    pub log_file: Option<PathBuf>,
    #[arg(long, env = "KLONDIKE_LOG_LEVEL", default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }

    /// The win banner toggles twice a second
    pub fn flash_ticks(&self) -> u32 {
        (self.fps / 2).max(1)
    }
}
