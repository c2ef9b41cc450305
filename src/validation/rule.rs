//! Daily-rate ceilings per stat.
//!
//! Each rule names the stat it limits, the date progress is measured from and the most
//! a trainer is expected to gain per day. The table is iterated uniformly; stats without
//! a rule only get the monotonicity and bounds checks.

use chrono::NaiveDate;
use entity::prelude::{Release, Stat, Trainer};

/// Where long-run progress for a stat is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceDate {
    /// The trainer's account start date. The long-run check is skipped when it is unknown.
    StartDate,
    /// The later of a feature release and the trainer's start date, or launch date when
    /// the start date is unknown.
    Release(Release),
}

impl ReferenceDate {
    /// Resolves the reference date for a trainer.
    ///
    /// # Arguments
    /// - `trainer` - Trainer whose start date anchors the measurement
    ///
    /// # Returns
    /// - `Some(NaiveDate)` - Date progress is measured from
    /// - `None` - The rule uses the start date and the trainer has none
    pub fn resolve(self, trainer: &Trainer) -> Option<NaiveDate> {
        match self {
            ReferenceDate::StartDate => trainer.start_date,
            ReferenceDate::Release(release) => Some(release.date().max(trainer.start_or_launch())),
        }
    }
}

/// Daily-rate ceiling for one stat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateRule {
    pub stat: Stat,
    pub reference: ReferenceDate,
    /// Highest plausible gain per day.
    pub daily_limit: f64,
}

const fn rule(stat: Stat, reference: ReferenceDate, daily_limit: f64) -> RateRule {
    RateRule {
        stat,
        reference,
        daily_limit,
    }
}

use ReferenceDate::{Release as Since, StartDate};

/// Rate ceilings for every limited stat.
pub static RATE_RULES: [RateRule; 17] = [
    rule(Stat::TotalXp, StartDate, 10_000_000.0),
    rule(Stat::BadgeTravelKm, StartDate, 60.0),
    rule(Stat::BadgeCaptureTotal, StartDate, 800.0),
    rule(Stat::BadgeEvolvedTotal, StartDate, 250.0),
    rule(Stat::BadgeHatchedTotal, StartDate, 60.0),
    rule(Stat::BadgePokestopsVisited, StartDate, 500.0),
    rule(Stat::BadgeBigMagikarp, StartDate, 25.0),
    rule(Stat::BadgeBattleAttackWon, StartDate, 500.0),
    rule(Stat::BadgeSmallRattata, StartDate, 25.0),
    rule(Stat::BadgePikachu, StartDate, 200.0),
    rule(Stat::BadgeBerriesFed, Since(Release::GymRework), 3_200.0),
    rule(Stat::BadgeHoursDefended, Since(Release::GymRework), 480.0),
    rule(Stat::BadgeRaidBattleWon, Since(Release::Raids), 100.0),
    rule(Stat::BadgeLegendaryBattleWon, Since(Release::LegendaryRaids), 100.0),
    rule(Stat::BadgeChallengeQuests, Since(Release::Quests), 500.0),
    rule(Stat::BadgeTrading, Since(Release::Friendships), 200.0),
    rule(Stat::BadgeTradingDistance, Since(Release::Friendships), 1_920_000.0),
];

/// Looks up the rate rule for a stat, if it has one.
pub fn rule_for(stat: Stat) -> Option<&'static RateRule> {
    RATE_RULES.iter().find(|rule| rule.stat == stat)
}
