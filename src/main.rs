mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::models::{CaptureSourceKind, PipelineSettings};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SourceArg {
    Screen,
    File,
}

impl From<SourceArg> for CaptureSourceKind {
    fn from(source: SourceArg) -> Self {
        match source {
            SourceArg::Screen => CaptureSourceKind::Screen,
            SourceArg::File => CaptureSourceKind::ImageFile,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "graph-parse", version, about = "Capture an image, upload it and report its URL")]
struct CliArgs {
    /// Settings file; defaults to the user config directory
    #[arg(long, env = "GRAPH_PARSE_CONFIG")]
    config: Option<PathBuf>,

    /// Overrides the capture source from the settings file
    #[arg(long, value_enum)]
    source: Option<SourceArg>,

    /// Capture a single image and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    let args = CliArgs::parse();

    let mut settings = PipelineSettings::load(args.config.as_deref())?;
    if let Some(source) = args.source {
        settings.capture_source = source.into();
    }

    let app = app::GraphParseApp::build(&settings)?;

    if args.once {
        app.run_once().await;
    } else {
        app.run_until_quit().await;
    }

    Ok(())
}
