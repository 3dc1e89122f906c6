mod config;
mod viewer;

use std::process::ExitCode;

use anyhow::Result;

use quadview_engine::device::GpuInit;
use quadview_engine::logging::{init_logging, LoggingConfig};
use quadview_engine::window::Runtime;

use crate::config::ViewerConfig;
use crate::viewer::Viewer;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match run(ViewerConfig::default()) {
        Ok(()) => {
            log::info!("bye");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: ViewerConfig) -> Result<()> {
    log::info!(
        "starting quadview: {} ({}x{}, rotate: {})",
        config.image_path.display(),
        config.width,
        config.height,
        config.rotate
    );

    let viewer = Viewer::new(&config)?;
    Runtime::run(config.runtime_config(), GpuInit::default(), viewer)
}
