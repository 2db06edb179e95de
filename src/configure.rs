use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::capture::tshark::Tshark;
use crate::models::config::{CaptureConfig, DEFAULT_TSHARK_PATH};
use crate::utils::error::{AppError, AppResult};

/// Outcome of validating one line of interface-selection input
enum Selection {
    Valid(u32),
    OutOfRange,
    NotANumber,
}

/// Validate a selection against the number of listed interfaces.
/// Interface numbers are 1-based, matching `tshark -D` output.
fn parse_selection(input: &str, interface_count: usize) -> Selection {
    match input.trim().parse::<u32>() {
        Ok(n) if n >= 1 && (n as usize) <= interface_count => Selection::Valid(n),
        Ok(_) => Selection::OutOfRange,
        Err(_) => Selection::NotANumber,
    }
}

/// Interactively choose an interface and write the configuration file,
/// replacing any existing one
pub fn configure(config_path: &Path) -> AppResult<()> {
    let tshark = Tshark::new(DEFAULT_TSHARK_PATH);
    let interfaces = tshark.list_interfaces()?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let interface = loop {
        print!("\nSelect interface number: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(AppError::CaptureError(
                    "stdin closed during configuration".into(),
                ))
            }
        };

        match parse_selection(&line, interfaces.len()) {
            Selection::Valid(n) => break n,
            Selection::OutOfRange => println!("Invalid selection. Try again."),
            Selection::NotANumber => println!("Enter a number corresponding to the interface."),
        }
    };

    let config = CaptureConfig::with_interface(interface);
    config.save(config_path)?;

    println!(
        "\nConfig saved to {} with interface {}",
        config_path.display(),
        interface
    );
    println!("Recommended settings:");
    println!("duration = {}", config.duration);
    println!("retain_count = {}", config.retain_count);
    println!("base_folder = {}", config.base_folder.display());
    println!("tshark_path = {}", config.tshark_path.display());

    Ok(())
}
