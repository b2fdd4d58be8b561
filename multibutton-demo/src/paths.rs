//! Where the demo keeps its files.
//!
//! The saved selection goes in the data directory and logs go in the cache
//! directory, both resolved per platform by `directories`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "multibutton";
const APPLICATION: &str = "multibutton-demo";

const LATEST_LOG: &str = "latest.log";

/// Archived logs kept after rotation.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Data directory; survives cache cleanups.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Cache directory; safe to wipe.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// State file used when `--state` is not given.
pub fn state_file() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("selection.bin"))
}

/// Log file for the current run.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous run's log under a timestamp and prune old archives.
///
/// Must run before the logger opens a fresh `latest.log`.
pub fn rotate_logs() {
    if let Some(cache) = cache_dir() {
        rotate_logs_in(&cache);
    }
}

fn rotate_logs_in(dir: &Path) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S%.3f");
        let archived = dir.join(format!("{}.log", timestamp));
        let _ = fs::rename(&latest, &archived);
    }

    cleanup_old_logs(dir);
}

/// Delete archived logs past the newest `MAX_OLD_LOGS`.
fn cleanup_old_logs(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archived: Vec<(Option<SystemTime>, PathBuf)> = entries
        .flatten()
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .map(|entry| {
            let modified = entry.metadata().and_then(|m| m.modified()).ok();
            (modified, entry.path())
        })
        .collect();

    let excess = archived.len().saturating_sub(MAX_OLD_LOGS);
    if excess == 0 {
        return;
    }

    // Oldest first
    archived.sort();
    for (_, path) in archived.into_iter().take(excess) {
        let _ = fs::remove_file(path);
    }
}
