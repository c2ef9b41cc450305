//! Point-in-time stat snapshots.
//!
//! A snapshot records whichever stats a trainer reported at one moment. Stats that
//! were not reported are simply absent from the map; absence never means zero.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::stat::Stat;

/// Where a snapshot's numbers came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataSource {
    #[default]
    #[serde(rename = "?")]
    Unknown,
    #[serde(rename = "web_quick")]
    WebQuick,
    #[serde(rename = "web_detailed")]
    WebDetailed,
    #[serde(rename = "ts_registration")]
    Registration,
    #[serde(rename = "ss_ocr")]
    ScreenshotOcr,
    #[serde(rename = "ts_social_discord")]
    DiscordBot,
    #[serde(rename = "com.nianticlabs.pokemongo.friends")]
    InGameFriends,
    #[serde(rename = "com.pokeassistant.trainerstats")]
    PokeAssistant,
    #[serde(rename = "com.pokenavbot.profiles")]
    PokeNav,
    #[serde(rename = "com.tl40data.website")]
    Tl40Data,
}

/// A trainer's reported stats at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Stable identity; a resubmitted snapshot keeps its uuid.
    #[serde(default = "Uuid::new_v4")]
    pub uuid: Uuid,
    /// Owning trainer's id.
    pub trainer_id: i32,
    /// Instant the stats were observed.
    pub post_dt: DateTime<Utc>,
    #[serde(default)]
    pub data_source: DataSource,
    /// Reported values keyed by stat. Unreported stats are absent.
    #[serde(default)]
    pub stats: BTreeMap<Stat, f64>,
}

impl Snapshot {
    /// Creates an empty snapshot with a fresh uuid.
    pub fn new(trainer_id: i32, post_dt: DateTime<Utc>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            trainer_id,
            post_dt,
            data_source: DataSource::default(),
            stats: BTreeMap::new(),
        }
    }

    /// Value reported for `stat`, if any.
    pub fn get(&self, stat: Stat) -> Option<f64> {
        self.stats.get(&stat).copied()
    }

    /// Sets the value for `stat`, returning `self` for chaining.
    pub fn with(mut self, stat: Stat, value: f64) -> Self {
        self.stats.insert(stat, value);
        self
    }

    /// Iterates over populated stats in catalogue order.
    pub fn populated(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        self.stats.iter().map(|(stat, value)| (*stat, *value))
    }

    /// Calendar date (UTC) of the observation.
    pub fn post_date(&self) -> NaiveDate {
        self.post_dt.date_naive()
    }
}
