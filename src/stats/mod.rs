//! Statistic extraction shared by tables, charts and the player profile.

pub mod accessor;
pub mod profile;

pub use accessor::{
    per_90, round_to, stat_value, value_of, StatDescriptor, StatFormat, StatName, StatScale,
    StatValue,
};
pub use profile::{PlayerProfile, ProfileItem, ProfileSection};
