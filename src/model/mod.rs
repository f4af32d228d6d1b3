//! Player data model shared by every engine component.

pub mod player;

pub use player::{
    parse_collection, parse_collection_str, PlayerCollection, PlayerField, PlayerRecord,
};
