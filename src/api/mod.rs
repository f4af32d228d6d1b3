//! Data source plumbing: the player API client and its on-disk snapshot.

pub mod cache;
pub mod http;

pub use cache::{load_snapshot, players_snapshot_path, save_snapshot};
pub use http::{fetch_player, fetch_players, find_exact, player_url, PLAYER_PATH};
