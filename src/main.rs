mod engine;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use engine::core::AnimationConfig;
use engine::AnimationApp;

/// Interpolates a rigid body between two poses and logs every frame.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RON animation config; built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the sampled frames to this file as RON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pace frames in wall-clock time
    #[arg(long)]
    realtime: bool,

    /// Play the motion this many times
    #[arg(long)]
    loops: Option<u32>,

    /// Stop playback once this animation time is reached
    #[arg(long)]
    stop_at: Option<f64>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AnimationConfig::load(path)?,
        None => AnimationConfig::default(),
    };
    config.realtime |= args.realtime;
    if let Some(loops) = args.loops {
        config.loops = loops;
    }
    if args.stop_at.is_some() {
        config.stop_at = args.stop_at;
    }

    let mut app = AnimationApp::new(config)?;
    app.run()?;

    if let Some(path) = &args.output {
        let text = app.frames().to_ron()?;
        std::fs::write(path, text)
            .with_context(|| format!("writing frames to {}", path.display()))?;
        tracing::info!(target: "animation", path = %path.display(), "frames written");
    }

    Ok(())
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
