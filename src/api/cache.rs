//! On-disk snapshot of the last player list fetched from the API.
//!
//! Path: `<cache dir>/premier-pulse/players.json`. The snapshot records the
//! base URL it came from so switching servers never serves stale data.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::model::PlayerCollection;
use crate::Result;

/// Snapshot file location under the user cache directory.
pub fn players_snapshot_path() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("premier-pulse").join("players.json")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    source: String,
    players: PlayerCollection,
}

/// Load a snapshot taken from `source`. Missing, unreadable or foreign
/// snapshots read as `None`.
pub fn load_snapshot(path: &Path, source: &str) -> Option<PlayerCollection> {
    let raw = try_read_to_string(path)?;
    let snapshot: Snapshot = match serde_json::from_str(&raw) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("ignoring unreadable snapshot {}: {}", path.display(), e);
            return None;
        }
    };
    if snapshot.source != source {
        log::debug!(
            "snapshot at {} is from {}, not {}",
            path.display(),
            snapshot.source,
            source
        );
        return None;
    }
    Some(snapshot.players)
}

/// Persist `players` as fetched from `source`.
pub fn save_snapshot(path: &Path, source: &str, players: &PlayerCollection) -> Result<()> {
    let snapshot = Snapshot {
        source: source.to_string(),
        players: players.clone(),
    };
    write_string(path, &serde_json::to_string(&snapshot)?)?;
    log::info!("saved {} players to {}", players.len(), path.display());
    Ok(())
}
