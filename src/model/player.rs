//! Player season records as served by `GET /api/v1/player`.
//!
//! Every numeric field is optional: the source table leaves cells empty for
//! players without minutes, and the API forwards them as `null` or omits
//! them. Consumers read through [`PlayerRecord::get`] or
//! [`PlayerRecord::value_or_zero`] so an absent value never turns into NaN.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{PulseError, Result};


/// Ordered player list, in the order the data source returned it.
pub type PlayerCollection = Vec<PlayerRecord>;

/// One player's season statistics.
///
/// `name` is the identity key for search, selection and comparison.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nation: Option<String>,
    #[serde(default)]
    pub pos: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default)]
    pub mp: Option<f64>,
    #[serde(default)]
    pub starts: Option<f64>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub nineties: Option<f64>,
    #[serde(default)]
    pub gls: Option<f64>,
    #[serde(default)]
    pub ast: Option<f64>,
    #[serde(default)]
    pub g_a: Option<f64>,
    #[serde(default)]
    pub gpk: Option<f64>,
    #[serde(default)]
    pub pk: Option<f64>,
    #[serde(default)]
    pub pkatt: Option<f64>,
    #[serde(default)]
    pub crdy: Option<f64>,
    #[serde(default)]
    pub crdr: Option<f64>,
    #[serde(default)]
    pub xg: Option<f64>,
    #[serde(default)]
    pub npxg: Option<f64>,
    #[serde(default)]
    pub xag: Option<f64>,
    #[serde(default)]
    pub npxg_xag: Option<f64>,
    #[serde(default)]
    pub prgc: Option<f64>,
    #[serde(default)]
    pub prgp: Option<f64>,
    #[serde(default)]
    pub prgr: Option<f64>,
    #[serde(default)]
    pub gls_1: Option<f64>,
    #[serde(default)]
    pub ast_1: Option<f64>,
    #[serde(default)]
    pub g_a_1: Option<f64>,
    #[serde(default)]
    pub gpk_1: Option<f64>,
    #[serde(default)]
    pub g_apk: Option<f64>,
    #[serde(default)]
    pub xg_1: Option<f64>,
    #[serde(default)]
    pub xag_1: Option<f64>,
    #[serde(default)]
    pub xg_xag: Option<f64>,
    #[serde(default)]
    pub npxg_1: Option<f64>,
    #[serde(default)]
    pub npxg_xag_1: Option<f64>,
    #[serde(default)]
    pub matches: Option<String>,
}

/// Numeric columns of a [`PlayerRecord`], addressable by their wire key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerField {
    Age,
    Mp,
    Starts,
    Min,
    Nineties,
    Gls,
    Ast,
    GA,
    Gpk,
    Pk,
    PkAtt,
    CrdY,
    CrdR,
    Xg,
    Npxg,
    Xag,
    NpxgXag,
    PrgC,
    PrgP,
    PrgR,
    GlsPer90,
    AstPer90,
    GAPer90,
    GpkPer90,
    GApkPer90,
    XgPer90,
    XagPer90,
    XgXagPer90,
    NpxgPer90,
    NpxgXagPer90,
}

impl PlayerField {
    pub const ALL: [PlayerField; 30] = [
        PlayerField::Age,
        PlayerField::Mp,
        PlayerField::Starts,
        PlayerField::Min,
        PlayerField::Nineties,
        PlayerField::Gls,
        PlayerField::Ast,
        PlayerField::GA,
        PlayerField::Gpk,
        PlayerField::Pk,
        PlayerField::PkAtt,
        PlayerField::CrdY,
        PlayerField::CrdR,
        PlayerField::Xg,
        PlayerField::Npxg,
        PlayerField::Xag,
        PlayerField::NpxgXag,
        PlayerField::PrgC,
        PlayerField::PrgP,
        PlayerField::PrgR,
        PlayerField::GlsPer90,
        PlayerField::AstPer90,
        PlayerField::GAPer90,
        PlayerField::GpkPer90,
        PlayerField::GApkPer90,
        PlayerField::XgPer90,
        PlayerField::XagPer90,
        PlayerField::XgXagPer90,
        PlayerField::NpxgPer90,
        PlayerField::NpxgXagPer90,
    ];

    /// JSON key used by the player API.
    pub fn key(&self) -> &'static str {
        match self {
            PlayerField::Age => "age",
            PlayerField::Mp => "mp",
            PlayerField::Starts => "starts",
            PlayerField::Min => "min",
            PlayerField::Nineties => "nineties",
            PlayerField::Gls => "gls",
            PlayerField::Ast => "ast",
            PlayerField::GA => "g_a",
            PlayerField::Gpk => "gpk",
            PlayerField::Pk => "pk",
            PlayerField::PkAtt => "pkatt",
            PlayerField::CrdY => "crdy",
            PlayerField::CrdR => "crdr",
            PlayerField::Xg => "xg",
            PlayerField::Npxg => "npxg",
            PlayerField::Xag => "xag",
            PlayerField::NpxgXag => "npxg_xag",
            PlayerField::PrgC => "prgc",
            PlayerField::PrgP => "prgp",
            PlayerField::PrgR => "prgr",
            PlayerField::GlsPer90 => "gls_1",
            PlayerField::AstPer90 => "ast_1",
            PlayerField::GAPer90 => "g_a_1",
            PlayerField::GpkPer90 => "gpk_1",
            PlayerField::GApkPer90 => "g_apk",
            PlayerField::XgPer90 => "xg_1",
            PlayerField::XagPer90 => "xag_1",
            PlayerField::XgXagPer90 => "xg_xag",
            PlayerField::NpxgPer90 => "npxg_1",
            PlayerField::NpxgXagPer90 => "npxg_xag_1",
        }
    }
}

impl fmt::Display for PlayerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl Serialize for PlayerField {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl FromStr for PlayerField {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self> {
        PlayerField::ALL
            .iter()
            .copied()
            .find(|field| field.key() == s)
            .ok_or_else(|| PulseError::UnknownStat {
                name: s.to_string(),
            })
    }
}

impl PlayerRecord {
    /// Convenience constructor used by tests and fixtures.
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Identity key; an absent name reads as the empty string.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Raw value of a numeric column, `None` when absent or non-finite.
    pub fn get(&self, field: PlayerField) -> Option<f64> {
        let value = match field {
            PlayerField::Age => self.age,
            PlayerField::Mp => self.mp,
            PlayerField::Starts => self.starts,
            PlayerField::Min => self.min,
            PlayerField::Nineties => self.nineties,
            PlayerField::Gls => self.gls,
            PlayerField::Ast => self.ast,
            PlayerField::GA => self.g_a,
            PlayerField::Gpk => self.gpk,
            PlayerField::Pk => self.pk,
            PlayerField::PkAtt => self.pkatt,
            PlayerField::CrdY => self.crdy,
            PlayerField::CrdR => self.crdr,
            PlayerField::Xg => self.xg,
            PlayerField::Npxg => self.npxg,
            PlayerField::Xag => self.xag,
            PlayerField::NpxgXag => self.npxg_xag,
            PlayerField::PrgC => self.prgc,
            PlayerField::PrgP => self.prgp,
            PlayerField::PrgR => self.prgr,
            PlayerField::GlsPer90 => self.gls_1,
            PlayerField::AstPer90 => self.ast_1,
            PlayerField::GAPer90 => self.g_a_1,
            PlayerField::GpkPer90 => self.gpk_1,
            PlayerField::GApkPer90 => self.g_apk,
            PlayerField::XgPer90 => self.xg_1,
            PlayerField::XagPer90 => self.xag_1,
            PlayerField::XgXagPer90 => self.xg_xag,
            PlayerField::NpxgPer90 => self.npxg_1,
            PlayerField::NpxgXagPer90 => self.npxg_xag_1,
        };
        value.filter(|v| v.is_finite())
    }

    /// Value of a numeric column with absent data read as 0.
    pub fn value_or_zero(&self, field: PlayerField) -> f64 {
        self.get(field).unwrap_or(0.0)
    }

    pub fn goals(&self) -> f64 {
        self.value_or_zero(PlayerField::Gls)
    }

    pub fn assists(&self) -> f64 {
        self.value_or_zero(PlayerField::Ast)
    }

    pub fn minutes(&self) -> f64 {
        self.value_or_zero(PlayerField::Min)
    }
}

/// Validate and deserialize an already-decoded API payload.
///
/// The payload must be a JSON array whose elements are all objects; anything
/// else is a caller contract violation reported as `InvalidInput`.
pub fn parse_collection(payload: Value) -> Result<PlayerCollection> {
    let Value::Array(items) = payload else {
        return Err(PulseError::invalid_input(format!(
            "expected a JSON array of player records, got {}",
            json_kind(&payload)
        )));
    };

    let mut players = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            return Err(PulseError::invalid_input(format!(
                "player record at index {} is {}, expected an object",
                index,
                json_kind(&item)
            )));
        }
        players.push(serde_json::from_value::<PlayerRecord>(item)?);
    }

    log::debug!("parsed {} player records", players.len());
    Ok(players)
}

/// Parse a JSON document holding a player array.
pub fn parse_collection_str(s: &str) -> Result<PlayerCollection> {
    parse_collection(serde_json::from_str(s)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
