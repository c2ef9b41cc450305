//! Faction (team) enumeration.
//!
//! The game has exactly three teams plus the unaligned state of a trainer who has not
//! picked one yet. The set is closed, so factions are an enum rather than seeded rows.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::EntityError;

/// One of the four fixed factions.
///
/// Serialized as its lowercase slug (`"mystic"`). Numeric ids follow the legacy
/// ordering: Unaligned 0, Mystic 1, Valor 2, Instinct 3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    #[default]
    Unaligned,
    Mystic,
    Valor,
    Instinct,
}

impl Faction {
    /// All factions in id order.
    pub const ALL: [Faction; 4] = [
        Faction::Unaligned,
        Faction::Mystic,
        Faction::Valor,
        Faction::Instinct,
    ];

    /// Legacy numeric id.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Looks up a faction by legacy numeric id.
    ///
    /// # Returns
    /// - `Some(Faction)` - For ids 0 through 3
    /// - `None` - For any other id
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Lowercase slug used in documents and URLs.
    pub fn slug(self) -> &'static str {
        match self {
            Faction::Unaligned => "unaligned",
            Faction::Mystic => "mystic",
            Faction::Valor => "valor",
            Faction::Instinct => "instinct",
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Faction::Unaligned => "Unaligned",
            Faction::Mystic => "Mystic",
            Faction::Valor => "Valor",
            Faction::Instinct => "Instinct",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Faction {
    type Err = EntityError;

    /// Parses a slug (case-insensitive) or a legacy numeric id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.parse::<u8>() {
            return Self::from_id(id).ok_or_else(|| EntityError::UnknownFaction(s.to_string()));
        }

        Self::ALL
            .into_iter()
            .find(|faction| faction.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| EntityError::UnknownFaction(s.to_string()))
    }
}
