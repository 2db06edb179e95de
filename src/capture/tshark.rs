use std::path::{Path, PathBuf};
use std::process::Command;

use log::warn;

use crate::utils::error::{AppError, AppResult};

/// Thin wrapper around the external tshark executable
pub struct Tshark {
    path: PathBuf,
}

impl Tshark {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// List available network interfaces (`tshark -D`), echoing the tool
    /// output to the console and returning it one interface per line
    pub fn list_interfaces(&self) -> AppResult<Vec<String>> {
        println!("\nListing interfaces using: {}\n", self.path.display());

        let output = Command::new(&self.path).arg("-D").output().map_err(|e| {
            AppError::CaptureError(format!("failed to run {}: {}", self.path.display(), e))
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        print!("{}", stdout);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::CaptureError(format!(
                "{} -D exited with {}: {}",
                self.path.display(),
                output.status,
                stderr.trim()
            )));
        }

        Ok(stdout
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect())
    }

    /// Run one duration-bounded capture, blocking until tshark exits.
    /// A non-zero exit status is logged but not treated as fatal.
    pub fn capture(&self, interface: u32, duration_secs: u64, out_file: &Path) -> AppResult<()> {
        let status = Command::new(&self.path)
            .arg("-i")
            .arg(interface.to_string())
            .arg("-a")
            .arg(format!("duration:{}", duration_secs))
            .arg("-w")
            .arg(out_file)
            .status()
            .map_err(|e| {
                AppError::CaptureError(format!("failed to run {}: {}", self.path.display(), e))
            })?;

        if !status.success() {
            warn!("tshark exited with {}", status);
        }

        Ok(())
    }
}
