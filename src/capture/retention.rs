use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::info;

use crate::utils::error::AppResult;

/// Delete the oldest capture files in `day_folder` so that at most
/// `retain_count` remain. A count of zero keeps everything.
///
/// Returns the deleted paths, oldest first.
pub fn prune_day_folder(day_folder: &Path, retain_count: usize) -> AppResult<Vec<PathBuf>> {
    if retain_count == 0 {
        return Ok(Vec::new());
    }

    let mut files: Vec<(PathBuf, SystemTime)> = Vec::new();
    for entry in fs::read_dir(day_folder)? {
        let entry = entry?;
        let path = entry.path();
        if !is_capture_file(&path) {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        files.push((path, modified));
    }

    if files.len() <= retain_count {
        return Ok(Vec::new());
    }

    files.sort_by_key(|(_, modified)| *modified);

    let excess = files.len() - retain_count;
    let mut deleted = Vec::with_capacity(excess);
    for (path, _) in files.drain(..excess) {
        fs::remove_file(&path)?;
        info!("Deleted old file: {}", path.display());
        deleted.push(path);
    }

    Ok(deleted)
}

/// Matches the `capture*.pcapng` files written by the capture loop
fn is_capture_file(path: &Path) -> bool {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => name.starts_with("capture") && name.ends_with(".pcapng"),
        None => false,
    }
}

#[cfg(test)]
mod retention_tests {
    use super::*;
    use std::fs::File;
    use std::time::Duration;

    fn write_capture(dir: &Path, name: &str, age_secs: u64) -> PathBuf {
        let path = dir.join(name);
        let file = File::create(&path).unwrap();
        file.set_modified(SystemTime::now() - Duration::from_secs(age_secs))
            .unwrap();
        path
    }

    #[test]
    fn deletes_oldest_files_beyond_retain_count() {
        let dir = tempfile::tempdir().unwrap();
        let f1 = write_capture(dir.path(), "capture20240101_0000.pcapng", 400);
        let f2 = write_capture(dir.path(), "capture20240101_0005.pcapng", 300);
        let f3 = write_capture(dir.path(), "capture20240101_0010.pcapng", 200);
        let f4 = write_capture(dir.path(), "capture20240101_0015.pcapng", 100);

        let deleted = prune_day_folder(dir.path(), 2).unwrap();

        assert_eq!(deleted, vec![f1.clone(), f2.clone()]);
        assert!(!f1.exists());
        assert!(!f2.exists());
        assert!(f3.exists());
        assert!(f4.exists());
    }

    #[test]
    fn zero_retain_count_deletes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let f1 = write_capture(dir.path(), "capture20240101_0000.pcapng", 200);
        let f2 = write_capture(dir.path(), "capture20240101_0005.pcapng", 100);

        let deleted = prune_day_folder(dir.path(), 0).unwrap();

        assert!(deleted.is_empty());
        assert!(f1.exists());
        assert!(f2.exists());
    }

    #[test]
    fn folder_under_limit_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let f1 = write_capture(dir.path(), "capture20240101_0000.pcapng", 100);

        let deleted = prune_day_folder(dir.path(), 3).unwrap();

        assert!(deleted.is_empty());
        assert!(f1.exists());
    }

    #[test]
    fn unrelated_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let notes = write_capture(dir.path(), "notes.txt", 500);
        let old_pcap = write_capture(dir.path(), "capture20240101_0000.pcap", 400);
        let f1 = write_capture(dir.path(), "capture20240101_0005.pcapng", 300);
        let f2 = write_capture(dir.path(), "capture20240101_0010.pcapng", 200);

        let deleted = prune_day_folder(dir.path(), 1).unwrap();

        assert_eq!(deleted, vec![f1]);
        assert!(notes.exists());
        assert!(old_pcap.exists());
        assert!(f2.exists());
    }
}
