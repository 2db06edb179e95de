use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use log::{error, info};

use crate::capture::retention::prune_day_folder;
use crate::capture::tshark::Tshark;
use crate::models::config::CaptureConfig;
use crate::utils::error::AppResult;

/// Pause between capture windows
const LOOP_PAUSE: Duration = Duration::from_secs(2);

/// Day folder name for a timestamp, `YYYYMMDD`
fn day_folder_name(now: &NaiveDateTime) -> String {
    now.format("%Y%m%d").to_string()
}

/// Capture file name for a timestamp, `capture<YYYYMMDD>_<HHMM>.pcapng`
fn capture_file_name(now: &NaiveDateTime) -> String {
    format!(
        "capture{}_{}.pcapng",
        now.format("%Y%m%d"),
        now.format("%H%M")
    )
}

/// Run capture windows back to back until interrupted
pub fn run_loop(config: &CaptureConfig) -> AppResult<()> {
    fs::create_dir_all(&config.base_folder)?;
    info!(
        "Starting auto-capture. Captures will be saved in: {}",
        config.base_folder.display()
    );

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        if let Err(e) = ctrlc::set_handler(move || {
            running.store(false, Ordering::SeqCst);
        }) {
            error!("Failed to install Ctrl-C handler: {}", e);
        }
    }

    let tshark = Tshark::new(&config.tshark_path);

    while running.load(Ordering::SeqCst) {
        let now = Local::now().naive_local();

        let day_folder = config.base_folder.join(day_folder_name(&now));
        fs::create_dir_all(&day_folder)?;

        let file_name = capture_file_name(&now);
        let file_path = day_folder.join(&file_name);

        info!("Starting capture: {}", file_name);
        tshark.capture(config.interface, config.duration, &file_path)?;

        if config.retain_count > 0 {
            prune_day_folder(&day_folder, config.retain_count)?;
        }

        if !running.load(Ordering::SeqCst) {
            break;
        }
        thread::sleep(LOOP_PAUSE);
    }

    info!("Capture loop stopped");
    Ok(())
}
