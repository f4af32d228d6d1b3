//! Named statistics and their extraction rules.
//!
//! A [`StatName`] is the label a user picks ("Goals", "Expected Assists");
//! its [`StatDescriptor`] says which [`PlayerField`] backs it, how the raw
//! value is scaled, and how it is rounded for tables and chart series.
//! Absent data always reads as 0.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PulseError, Result};
use crate::model::{PlayerField, PlayerRecord};


/// Statistics offered for comparison tables and chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatName {
    #[serde(rename = "Goals")]
    Goals,
    #[serde(rename = "Assists")]
    Assists,
    #[serde(rename = "Expected Goals")]
    ExpectedGoals,
    #[serde(rename = "Expected Assists")]
    ExpectedAssists,
    #[serde(rename = "Matches")]
    Matches,
    #[serde(rename = "Starts")]
    Starts,
    #[serde(rename = "Minutes Played")]
    MinutesPlayed,
    #[serde(rename = "Yellow Cards")]
    YellowCards,
}

impl StatName {
    /// Every selectable statistic, in menu order.
    pub const ALL: [StatName; 8] = [
        StatName::Goals,
        StatName::Assists,
        StatName::ExpectedGoals,
        StatName::ExpectedAssists,
        StatName::Matches,
        StatName::Starts,
        StatName::MinutesPlayed,
        StatName::YellowCards,
    ];

    /// Columns a fresh comparison starts with.
    pub const DEFAULT_COMPARISON: [StatName; 5] = [
        StatName::Goals,
        StatName::Assists,
        StatName::ExpectedGoals,
        StatName::ExpectedAssists,
        StatName::Matches,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            StatName::Goals => "Goals",
            StatName::Assists => "Assists",
            StatName::ExpectedGoals => "Expected Goals",
            StatName::ExpectedAssists => "Expected Assists",
            StatName::Matches => "Matches",
            StatName::Starts => "Starts",
            StatName::MinutesPlayed => "Minutes Played",
            StatName::YellowCards => "Yellow Cards",
        }
    }

    pub fn descriptor(&self) -> StatDescriptor {
        let (field, scale, format) = match self {
            StatName::Goals => (PlayerField::Gls, StatScale::Unit, StatFormat::Integer),
            StatName::Assists => (PlayerField::Ast, StatScale::Unit, StatFormat::Integer),
            StatName::ExpectedGoals => (PlayerField::Xg, StatScale::Unit, StatFormat::OneDecimal),
            StatName::ExpectedAssists => {
                (PlayerField::Xag, StatScale::Unit, StatFormat::OneDecimal)
            }
            StatName::Matches => (PlayerField::Mp, StatScale::Unit, StatFormat::Integer),
            StatName::Starts => (PlayerField::Starts, StatScale::Unit, StatFormat::Integer),
            StatName::MinutesPlayed => (
                PlayerField::Min,
                StatScale::NinetyMinuteBlocks,
                StatFormat::Integer,
            ),
            StatName::YellowCards => (PlayerField::CrdY, StatScale::Unit, StatFormat::Integer),
        };
        StatDescriptor {
            stat: *self,
            field,
            scale,
            format,
        }
    }

    fn short_key(&self) -> &'static str {
        self.descriptor().field.key()
    }
}

impl fmt::Display for StatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Strict parsing: accepts the display name (any case) or the backing field
/// key (`gls`, `xag`, `min`, ...). Anything else is `UnknownStat`.
impl FromStr for StatName {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        StatName::ALL
            .iter()
            .copied()
            .find(|stat| {
                stat.display_name().eq_ignore_ascii_case(wanted)
                    || stat.short_key().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| PulseError::UnknownStat {
                name: s.to_string(),
            })
    }
}

/// Rounding rule applied to a stat value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatFormat {
    Integer,
    OneDecimal,
    TwoDecimal,
}

impl StatFormat {
    pub fn decimals(&self) -> usize {
        match self {
            StatFormat::Integer => 0,
            StatFormat::OneDecimal => 1,
            StatFormat::TwoDecimal => 2,
        }
    }

    /// Round a value to this format's precision.
    pub fn round(&self, value: f64) -> f64 {
        round_to(value, self.decimals())
    }

    /// Render a value with this format's precision ("3", "2.4", "0.00").
    pub fn display(&self, value: f64) -> String {
        format!("{:.*}", self.decimals(), self.round(value))
    }
}

/// Transformation applied to the raw field before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatScale {
    Unit,
    /// Minutes expressed as full-match equivalents (`min / 90`).
    NinetyMinuteBlocks,
}

/// How one named statistic is read from a player record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatDescriptor {
    pub stat: StatName,
    pub field: PlayerField,
    pub scale: StatScale,
    pub format: StatFormat,
}

/// A computed stat: the rounded number for charts and its table rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatValue {
    pub value: f64,
    pub display: String,
}

impl StatDescriptor {
    /// Scaled and rounded value; 0 when the field is absent.
    pub fn value(&self, player: &PlayerRecord) -> f64 {
        let raw = player.value_or_zero(self.field);
        let scaled = match self.scale {
            StatScale::Unit => raw,
            StatScale::NinetyMinuteBlocks => raw / 90.0,
        };
        self.format.round(scaled)
    }

    pub fn stat_value(&self, player: &PlayerRecord) -> StatValue {
        let value = self.value(player);
        StatValue {
            value,
            display: self.format.display(value),
        }
    }
}

/// Typed lookup of a statistic on one player.
pub fn stat_value(player: &PlayerRecord, stat: StatName) -> StatValue {
    stat.descriptor().stat_value(player)
}

/// Permissive lookup by display name.
///
/// Unrecognised names yield 0 rather than an error; use
/// [`StatName::from_str`] where a typo should be reported.
pub fn value_of(player: &PlayerRecord, stat_name: &str) -> f64 {
    match stat_name.parse::<StatName>() {
        Ok(stat) => stat.descriptor().value(player),
        Err(_) => {
            log::debug!("unknown statistic {:?}, reading as 0", stat_name);
            0.0
        }
    }
}

/// Rate normalised to 90 minutes: `value * 90 / minutes`.
///
/// `None` when minutes are absent or zero.
pub fn per_90(value: f64, minutes: Option<f64>) -> Option<f64> {
    match minutes {
        Some(m) if m > 0.0 && m.is_finite() => Some(value * 90.0 / m),
        _ => None,
    }
}

/// Digits of the exact binary expansion inspected by [`round_to`].
const EXACT_DIGITS: usize = 40;

/// Round to `decimals` places on the exact decimal expansion of `value`.
///
/// Ties go away from zero, but only true ties: `0.35` is stored just below
/// 0.35 and rounds to `0.3`, matching a fixed-point rendering of the value.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() || decimals >= EXACT_DIGITS {
        return value;
    }
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let Some((whole, frac)) = exact.split_once('.') else {
        return value;
    };
    let Ok(mut scaled) = format!("{}{}", whole, &frac[..decimals]).parse::<u64>() else {
        // Beyond u64 range the fractional places are not representable anyway.
        return value;
    };
    if frac.as_bytes()[decimals] >= b'5' {
        scaled = scaled.saturating_add(1);
    }
    if scaled == 0 {
        return 0.0;
    }
    (scaled as f64 / 10f64.powi(decimals as i32)).copysign(value)
}
