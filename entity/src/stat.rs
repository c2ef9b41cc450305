//! Catalogue of tracked statistics.
//!
//! Every stat a trainer can report is a variant of [`Stat`]. Per-field metadata lives
//! in a single static table indexed by the variant's discriminant, so callers iterate
//! the catalogue uniformly instead of matching on field names.
//!
//! All stats are cumulative counters: a trainer's value for any stat never goes down.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::EntityError;

/// Numeric shape of a stat value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    /// Whole-number counter.
    Count,
    /// Fractional distance in kilometres.
    Distance,
}

/// A tracked statistic.
///
/// Serialized as its snake_case field identifier, e.g. `"badge_capture_total"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    TotalXp,
    PokedexCaught,
    PokedexSeen,
    BadgeTravelKm,
    BadgePokedexEntries,
    BadgeCaptureTotal,
    BadgeEvolvedTotal,
    BadgeHatchedTotal,
    BadgePokestopsVisited,
    BadgeUniquePokestops,
    BadgeBigMagikarp,
    BadgeBattleAttackWon,
    BadgeBattleTrainingWon,
    BadgeSmallRattata,
    BadgePikachu,
    BadgeUnown,
    BadgePokedexEntriesGen2,
    BadgeRaidBattleWon,
    BadgeLegendaryBattleWon,
    BadgeBerriesFed,
    BadgeHoursDefended,
    BadgePokedexEntriesGen3,
    BadgeChallengeQuests,
    BadgeMaxLevelFriends,
    BadgeTrading,
    BadgeTradingDistance,
    BadgePokedexEntriesGen4,
    BadgeGreatLeague,
    BadgeUltraLeague,
    BadgeMasterLeague,
    BadgePhotobomb,
    BadgePokedexEntriesGen5,
    BadgePokemonPurified,
    BadgeRocketGruntsDefeated,
    BadgeRocketGiovanniDefeated,
    BadgeBuddyBest,
    BadgePokedexEntriesGen6,
    BadgePokedexEntriesGen7,
    BadgePokedexEntriesGen8,
    #[serde(rename = "badge_7_day_streaks")]
    Badge7DayStreaks,
    BadgeUniqueRaidBossesDefeated,
    BadgeRaidsWithFriends,
    BadgePokemonCaughtAtYourLures,
    BadgeWayfarer,
    BadgeTotalMegaEvos,
    BadgeUniqueMegaEvos,
    BadgeTypeNormal,
    BadgeTypeFighting,
    BadgeTypeFlying,
    BadgeTypePoison,
    BadgeTypeGround,
    BadgeTypeRock,
    BadgeTypeBug,
    BadgeTypeGhost,
    BadgeTypeSteel,
    BadgeTypeFire,
    BadgeTypeWater,
    BadgeTypeGrass,
    BadgeTypeElectric,
    BadgeTypePsychic,
    BadgeTypeIce,
    BadgeTypeDragon,
    BadgeTypeDark,
    BadgeTypeFairy,
}

/// Static metadata for one stat.
#[derive(Debug)]
pub struct StatInfo {
    /// The stat this row describes.
    pub stat: Stat,
    /// Field identifier, identical to the serialized form.
    pub field: &'static str,
    /// Human readable title, the medal name for badges.
    pub title: &'static str,
    /// Whether values are whole counts or distances.
    pub kind: StatKind,
    /// Smallest accepted value, if bounded.
    pub min: Option<f64>,
    /// Largest accepted value, if bounded.
    pub max: Option<f64>,
}

const fn count(stat: Stat, field: &'static str, title: &'static str) -> StatInfo {
    StatInfo {
        stat,
        field,
        title,
        kind: StatKind::Count,
        min: None,
        max: None,
    }
}

const fn bounded(
    stat: Stat,
    field: &'static str,
    title: &'static str,
    min: Option<f64>,
    max: Option<f64>,
) -> StatInfo {
    StatInfo {
        stat,
        field,
        title,
        kind: StatKind::Count,
        min,
        max,
    }
}

// Rows must stay in variant declaration order; `Stat::info` indexes by discriminant.
static STATS: [StatInfo; 64] = [
    bounded(Stat::TotalXp, "total_xp", "Total XP", Some(100.0), None),
    bounded(Stat::PokedexCaught, "pokedex_caught", "Unique Species Caught", Some(1.0), None),
    bounded(Stat::PokedexSeen, "pokedex_seen", "Unique Species Seen", Some(1.0), None),
    StatInfo {
        stat: Stat::BadgeTravelKm,
        field: "badge_travel_km",
        title: "Jogger",
        kind: StatKind::Distance,
        min: Some(0.0),
        max: None,
    },
    bounded(Stat::BadgePokedexEntries, "badge_pokedex_entries", "Kanto", Some(1.0), Some(151.0)),
    bounded(Stat::BadgeCaptureTotal, "badge_capture_total", "Collector", Some(1.0), None),
    count(Stat::BadgeEvolvedTotal, "badge_evolved_total", "Scientist"),
    count(Stat::BadgeHatchedTotal, "badge_hatched_total", "Breeder"),
    count(Stat::BadgePokestopsVisited, "badge_pokestops_visited", "Backpacker"),
    count(Stat::BadgeUniquePokestops, "badge_unique_pokestops", "Sightseer"),
    count(Stat::BadgeBigMagikarp, "badge_big_magikarp", "Fisher"),
    count(Stat::BadgeBattleAttackWon, "badge_battle_attack_won", "Battle Girl"),
    count(Stat::BadgeBattleTrainingWon, "badge_battle_training_won", "Ace Trainer"),
    count(Stat::BadgeSmallRattata, "badge_small_rattata", "Youngster"),
    count(Stat::BadgePikachu, "badge_pikachu", "Pikachu Fan"),
    bounded(Stat::BadgeUnown, "badge_unown", "Unown", None, Some(28.0)),
    bounded(Stat::BadgePokedexEntriesGen2, "badge_pokedex_entries_gen2", "Johto", None, Some(100.0)),
    count(Stat::BadgeRaidBattleWon, "badge_raid_battle_won", "Champion"),
    count(Stat::BadgeLegendaryBattleWon, "badge_legendary_battle_won", "Battle Legend"),
    count(Stat::BadgeBerriesFed, "badge_berries_fed", "Berry Master"),
    count(Stat::BadgeHoursDefended, "badge_hours_defended", "Gym Leader"),
    bounded(Stat::BadgePokedexEntriesGen3, "badge_pokedex_entries_gen3", "Hoenn", None, Some(135.0)),
    count(Stat::BadgeChallengeQuests, "badge_challenge_quests", "Pokémon Ranger"),
    count(Stat::BadgeMaxLevelFriends, "badge_max_level_friends", "Idol"),
    count(Stat::BadgeTrading, "badge_trading", "Gentleman"),
    count(Stat::BadgeTradingDistance, "badge_trading_distance", "Pilot"),
    bounded(Stat::BadgePokedexEntriesGen4, "badge_pokedex_entries_gen4", "Sinnoh", None, Some(107.0)),
    count(Stat::BadgeGreatLeague, "badge_great_league", "Great League Veteran"),
    count(Stat::BadgeUltraLeague, "badge_ultra_league", "Ultra League Veteran"),
    count(Stat::BadgeMasterLeague, "badge_master_league", "Master League Veteran"),
    count(Stat::BadgePhotobomb, "badge_photobomb", "Cameraman"),
    bounded(Stat::BadgePokedexEntriesGen5, "badge_pokedex_entries_gen5", "Unova", None, Some(156.0)),
    count(Stat::BadgePokemonPurified, "badge_pokemon_purified", "Purifier"),
    count(Stat::BadgeRocketGruntsDefeated, "badge_rocket_grunts_defeated", "Hero"),
    count(Stat::BadgeRocketGiovanniDefeated, "badge_rocket_giovanni_defeated", "Ultra Hero"),
    count(Stat::BadgeBuddyBest, "badge_buddy_best", "Best Buddy"),
    bounded(Stat::BadgePokedexEntriesGen6, "badge_pokedex_entries_gen6", "Kalos", None, Some(72.0)),
    bounded(Stat::BadgePokedexEntriesGen7, "badge_pokedex_entries_gen7", "Alola", None, Some(88.0)),
    bounded(Stat::BadgePokedexEntriesGen8, "badge_pokedex_entries_gen8", "Galar", None, Some(89.0)),
    count(Stat::Badge7DayStreaks, "badge_7_day_streaks", "Triathlete"),
    count(Stat::BadgeUniqueRaidBossesDefeated, "badge_unique_raid_bosses_defeated", "Rising Star"),
    count(Stat::BadgeRaidsWithFriends, "badge_raids_with_friends", "Rising Star Duo"),
    count(Stat::BadgePokemonCaughtAtYourLures, "badge_pokemon_caught_at_your_lures", "Picnicker"),
    count(Stat::BadgeWayfarer, "badge_wayfarer", "Wayfarer"),
    count(Stat::BadgeTotalMegaEvos, "badge_total_mega_evos", "Successor"),
    count(Stat::BadgeUniqueMegaEvos, "badge_unique_mega_evos", "Mega Evolution Guru"),
    count(Stat::BadgeTypeNormal, "badge_type_normal", "Schoolkid"),
    count(Stat::BadgeTypeFighting, "badge_type_fighting", "Black Belt"),
    count(Stat::BadgeTypeFlying, "badge_type_flying", "Bird Keeper"),
    count(Stat::BadgeTypePoison, "badge_type_poison", "Punk Girl"),
    count(Stat::BadgeTypeGround, "badge_type_ground", "Ruin Maniac"),
    count(Stat::BadgeTypeRock, "badge_type_rock", "Hiker"),
    count(Stat::BadgeTypeBug, "badge_type_bug", "Bug Catcher"),
    count(Stat::BadgeTypeGhost, "badge_type_ghost", "Hex Maniac"),
    count(Stat::BadgeTypeSteel, "badge_type_steel", "Rail Staff"),
    count(Stat::BadgeTypeFire, "badge_type_fire", "Kindler"),
    count(Stat::BadgeTypeWater, "badge_type_water", "Swimmer"),
    count(Stat::BadgeTypeGrass, "badge_type_grass", "Gardener"),
    count(Stat::BadgeTypeElectric, "badge_type_electric", "Rocker"),
    count(Stat::BadgeTypePsychic, "badge_type_psychic", "Psychic"),
    count(Stat::BadgeTypeIce, "badge_type_ice", "Skier"),
    count(Stat::BadgeTypeDragon, "badge_type_dragon", "Dragon Tamer"),
    count(Stat::BadgeTypeDark, "badge_type_dark", "Delinquent"),
    count(Stat::BadgeTypeFairy, "badge_type_fairy", "Fairy Tale Girl"),
];

impl Stat {
    /// Iterates over every stat in catalogue order.
    pub fn all() -> impl Iterator<Item = Stat> {
        STATS.iter().map(|info| info.stat)
    }

    /// Static metadata row for this stat.
    pub fn info(self) -> &'static StatInfo {
        &STATS[self as usize]
    }

    /// Field identifier, e.g. `"total_xp"`.
    pub fn field(self) -> &'static str {
        self.info().field
    }

    /// Human readable title.
    pub fn title(self) -> &'static str {
        self.info().title
    }

    pub fn kind(self) -> StatKind {
        self.info().kind
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

impl FromStr for Stat {
    type Err = EntityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STATS
            .iter()
            .find(|info| info.field == s)
            .map(|info| info.stat)
            .ok_or_else(|| EntityError::UnknownStat(s.to_string()))
    }
}
