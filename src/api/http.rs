//! Player API client (`GET /api/v1/player`).

use reqwest::Client;
use serde_json::Value;

use crate::error::{PulseError, Result};
use crate::model::{parse_collection, PlayerCollection, PlayerRecord};

/// Path of the player listing endpoint.
pub const PLAYER_PATH: &str = "/api/v1/player";

/// Full endpoint URL for a base such as `http://localhost:8080/`.
pub fn player_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), PLAYER_PATH)
}

/// Fetch the player list, optionally narrowed server-side by `name`.
pub async fn fetch_players(
    client: &Client,
    base_url: &str,
    name: Option<&str>,
) -> Result<PlayerCollection> {
    let url = player_url(base_url);
    let mut request = client.get(&url);
    if let Some(n) = name {
        request = request.query(&[("name", n)]);
    }
    log::info!("fetching players from {}", url);

    let payload = request
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    let players = parse_collection(payload)?;
    log::info!("received {} players", players.len());
    Ok(players)
}

/// Fetch one player by exact name.
///
/// The server filter may return near matches, so the result is narrowed to
/// the record whose name equals `name` exactly.
pub async fn fetch_player(client: &Client, base_url: &str, name: &str) -> Result<PlayerRecord> {
    let players = fetch_players(client, base_url, Some(name)).await?;
    if players.is_empty() {
        return Err(PulseError::PlayerNotFound {
            name: name.to_string(),
        });
    }
    find_exact(&players, name).cloned()
}

/// Exact-name lookup within an already loaded collection.
pub fn find_exact<'a>(players: &'a [PlayerRecord], name: &str) -> Result<&'a PlayerRecord> {
    players
        .iter()
        .find(|p| p.name.as_deref() == Some(name))
        .ok_or_else(|| PulseError::PlayerNotFound {
            name: name.to_string(),
        })
}
