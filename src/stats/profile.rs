//! Sectioned statistics for a single player's detail view.

use serde::Serialize;

use super::accessor::StatFormat;
use crate::model::{PlayerField, PlayerRecord};

/// One labelled line of a profile section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileItem {
    pub label: &'static str,
    pub field: PlayerField,
    pub display: String,
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSection {
    pub title: &'static str,
    pub items: Vec<ProfileItem>,
}

/// Header facts plus the statistic sections of one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerProfile {
    pub name: String,
    pub position: Option<String>,
    pub team: Option<String>,
    pub nation: Option<String>,
    pub age: Option<u32>,
    pub sections: Vec<ProfileSection>,
}

type SectionLayout = (&'static str, &'static [(&'static str, PlayerField, StatFormat, bool)]);

const LAYOUT: &[SectionLayout] = &[
    (
        "Basic Statistics",
        &[
            ("Matches Played", PlayerField::Mp, StatFormat::Integer, false),
            ("Starts", PlayerField::Starts, StatFormat::Integer, false),
            ("Minutes", PlayerField::Min, StatFormat::Integer, false),
            ("90s Played", PlayerField::Nineties, StatFormat::OneDecimal, false),
        ],
    ),
    (
        "Attacking",
        &[
            ("Goals", PlayerField::Gls, StatFormat::Integer, true),
            ("Assists", PlayerField::Ast, StatFormat::Integer, true),
            ("Goals + Assists", PlayerField::GA, StatFormat::Integer, false),
            ("Non-penalty Goals", PlayerField::Gpk, StatFormat::Integer, false),
            ("Penalties", PlayerField::Pk, StatFormat::Integer, false),
            ("Penalty Attempts", PlayerField::PkAtt, StatFormat::Integer, false),
        ],
    ),
    (
        "Expected Statistics",
        &[
            ("Expected Goals (xG)", PlayerField::Xg, StatFormat::TwoDecimal, false),
            ("Non-penalty xG", PlayerField::Npxg, StatFormat::TwoDecimal, false),
            ("Expected Assists (xAG)", PlayerField::Xag, StatFormat::TwoDecimal, false),
            ("npxG + xAG", PlayerField::NpxgXag, StatFormat::TwoDecimal, false),
        ],
    ),
    (
        "Per 90 Minutes",
        &[
            ("Goals per 90", PlayerField::GlsPer90, StatFormat::TwoDecimal, false),
            ("Assists per 90", PlayerField::AstPer90, StatFormat::TwoDecimal, false),
            ("G+A per 90", PlayerField::GAPer90, StatFormat::TwoDecimal, false),
            ("xG per 90", PlayerField::XgPer90, StatFormat::TwoDecimal, false),
            ("xAG per 90", PlayerField::XagPer90, StatFormat::TwoDecimal, false),
        ],
    ),
    (
        "Progression",
        &[
            ("Progressive Carries", PlayerField::PrgC, StatFormat::Integer, false),
            ("Progressive Passes", PlayerField::PrgP, StatFormat::Integer, false),
            ("Progressive Receptions", PlayerField::PrgR, StatFormat::Integer, false),
        ],
    ),
    (
        "Discipline",
        &[
            ("Yellow Cards", PlayerField::CrdY, StatFormat::Integer, false),
            ("Red Cards", PlayerField::CrdR, StatFormat::Integer, false),
        ],
    ),
];

impl PlayerProfile {
    pub fn from_record(player: &PlayerRecord) -> Self {
        let sections = LAYOUT
            .iter()
            .map(|&(title, items)| ProfileSection {
                title,
                items: items
                    .iter()
                    .map(|&(label, field, format, highlight)| ProfileItem {
                        label,
                        field,
                        display: format.display(player.value_or_zero(field)),
                        highlight,
                    })
                    .collect(),
            })
            .collect();

        Self {
            name: player.name().to_string(),
            position: player.pos.clone(),
            team: player.team.clone(),
            nation: player.nation.clone(),
            age: player
                .get(PlayerField::Age)
                .filter(|age| *age > 0.0)
                .map(|age| age as u32),
            sections,
        }
    }

    pub fn section(&self, title: &str) -> Option<&ProfileSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}
