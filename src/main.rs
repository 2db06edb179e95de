mod capture;
mod configure;
mod models;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use crate::capture::runner;
use crate::capture::tshark::Tshark;
use crate::models::config::{CaptureConfig, CONFIG_FILE, DEFAULT_TSHARK_PATH};
use crate::utils::logging;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Automated rotating packet captures via tshark")]
struct Args {
    /// List all network interfaces using tshark and exit
    #[clap(short = 'D', long)]
    list_interfaces: bool,

    /// Configure capture settings (select interface, write the config file)
    #[clap(short = 'C', long)]
    configure: bool,

    /// Path to the configuration file
    #[clap(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error, off)
    #[clap(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logger(&args.log_level);

    if args.configure {
        configure::configure(&args.config)?;
        return Ok(());
    }

    if args.list_interfaces {
        Tshark::new(DEFAULT_TSHARK_PATH).list_interfaces()?;
        return Ok(());
    }

    let config = CaptureConfig::load(&args.config)?;

    info!("Starting autoshark v{}", env!("CARGO_PKG_VERSION"));
    runner::run_loop(&config)?;

    Ok(())
}
