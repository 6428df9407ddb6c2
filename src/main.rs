use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use ftlog::appender::FileAppender;
use ftlog::{LevelFilter, LoggerGuard};

use springnet::app::{self, RunOptions, Script};
use springnet::{InitConfig, Scene};

/// Run the spring network headless with a scripted tour of the gameplay.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML scene description; the built-in starter layout when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Simulated seconds to run
    #[arg(short, long, default_value_t = 5.0)]
    seconds: f32,

    /// Frames per second fed to the scene
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Log a scene summary every this many frames (0 to disable)
    #[arg(long, default_value_t = 60)]
    summary_every: u64,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn configure_logger(level: LevelFilter, file: Option<&PathBuf>) -> Result<LoggerGuard> {
    let builder = ftlog::Builder::new().max_log_level(level);
    // no root appender writes to stderr
    let builder = match file {
        Some(path) => builder.root(FileAppender::new(path)),
        None => builder,
    };
    builder.try_init().map_err(|e| anyhow!("failed to start logger: {e}"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = configure_logger(args.log_level, args.log_file.as_ref())?;

    let layout = match &args.config {
        Some(path) => InitConfig::load_from_file(path)
            .map_err(|e| anyhow!("failed to load {}: {e}", path.display()))?,
        None => InitConfig::starter(),
    };
    let mut scene = Scene::from_init(layout)?;

    let options = RunOptions {
        seconds: args.seconds,
        fps: args.fps,
        summary_every: args.summary_every,
        ..Default::default()
    };
    app::run(&mut scene, &Script::demo(options.fps), &options);
    Ok(())
}
