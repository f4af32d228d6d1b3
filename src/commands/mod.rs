//! Command implementations for the Premier Pulse CLI
//!
//! Each handler loads the player collection once, runs the pure engine
//! functions over it and prints either a text table or JSON.

pub mod compare;
pub mod insights;
pub mod leaders;
pub mod output;
pub mod player;
pub mod players;

use reqwest::Client;
use std::path::PathBuf;

use crate::{
    api::{
        fetch_player, fetch_players, find_exact, load_snapshot, players_snapshot_path,
        save_snapshot,
    },
    cli::SourceArgs,
    error::PulseError,
    model::{parse_collection_str, PlayerCollection, PlayerRecord},
    Result, API_URL_ENV_VAR, DEFAULT_API_URL,
};


/// Where the player collection is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Player API base URL.
    Api(String),
    /// Local JSON file holding a player array.
    File(PathBuf),
}

impl DataSource {
    pub fn from_args(args: &SourceArgs) -> Result<Self> {
        match &args.file {
            Some(path) => Ok(DataSource::File(path.clone())),
            None => Ok(DataSource::Api(resolve_api_url(args.api_url.clone())?)),
        }
    }
}

/// Resolve the API base URL from the flag, then the environment, then the
/// default, and check that it is an http(s) URL.
pub fn resolve_api_url(api_url: Option<String>) -> Result<String> {
    let url = api_url
        .or_else(|| {
            std::env::var(API_URL_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let url = url.trim().to_string();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url)
    } else {
        Err(PulseError::InvalidApiUrl { url })
    }
}

/// Load the full player collection.
///
/// API data is served from the snapshot unless `refresh` is set; a fresh
/// fetch rewrites the snapshot.
pub async fn load_players(source: &DataSource, refresh: bool) -> Result<PlayerCollection> {
    match source {
        DataSource::File(path) => {
            log::info!("reading players from {}", path.display());
            let raw = std::fs::read_to_string(path)?;
            parse_collection_str(&raw)
        }
        DataSource::Api(url) => {
            let path = players_snapshot_path();
            if !refresh {
                if let Some(players) = load_snapshot(&path, url) {
                    log::info!("using {} cached players from {}", players.len(), path.display());
                    return Ok(players);
                }
            }

            let client = Client::new();
            let players = fetch_players(&client, url, None).await?;
            if let Err(e) = save_snapshot(&path, url, &players) {
                log::warn!("could not write snapshot {}: {}", path.display(), e);
            }
            Ok(players)
        }
    }
}

/// Load a single player by exact name.
///
/// Without a usable snapshot the API is queried with its server-side name
/// filter instead of downloading the whole league.
pub async fn load_player(source: &DataSource, name: &str, refresh: bool) -> Result<PlayerRecord> {
    match source {
        DataSource::File(_) => {
            let players = load_players(source, refresh).await?;
            find_exact(&players, name).cloned()
        }
        DataSource::Api(url) => {
            if !refresh {
                if let Some(players) = load_snapshot(&players_snapshot_path(), url) {
                    return find_exact(&players, name).cloned();
                }
            }
            fetch_player(&Client::new(), url, name).await
        }
    }
}
