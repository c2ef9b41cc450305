//! Feature release dates.
//!
//! Some medals could not progress before the feature behind them shipped. Those dates
//! serve as the earliest sensible anchor when estimating how fast a trainer progressed.

use chrono::NaiveDate;

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid release date"),
    }
}

/// Earliest account start date accepted for a trainer profile.
pub const EARLIEST_START_DATE: NaiveDate = ymd(2016, 7, 5);

/// A game feature whose release bounds when related stats could start growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Release {
    /// Global launch of the game.
    PokemonGo,
    /// Gym rework introducing berries and defender hours.
    GymRework,
    /// Raid battles.
    Raids,
    /// Legendary raid bosses.
    LegendaryRaids,
    /// Field research quests.
    Quests,
    /// Friendships and trading.
    Friendships,
}

impl Release {
    /// Calendar date the feature became available.
    pub const fn date(self) -> NaiveDate {
        match self {
            Release::PokemonGo => ymd(2016, 7, 6),
            Release::GymRework => ymd(2017, 6, 22),
            Release::Raids => ymd(2017, 6, 26),
            Release::LegendaryRaids => ymd(2017, 7, 22),
            Release::Quests => ymd(2018, 3, 30),
            Release::Friendships => ymd(2018, 6, 21),
        }
    }
}
