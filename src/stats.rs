//! Derived statistics: scored points, efficiency rating, and team aggregates.

use crate::models::{Player, PlayerStats, ShootingPercentages, TeamStats};

impl PlayerStats {
    /// Points scored, derived from the made-shot counters.
    pub fn points(&self) -> u32 {
        2 * self.points2_made + 3 * self.points3_made + self.free_throws_made
    }

    /// Total rebounds on both ends.
    pub fn rebounds(&self) -> u32 {
        self.offensive_rebounds + self.defensive_rebounds
    }

    /// Efficiency rating: positive contributions minus missed shots and
    /// turnovers. Can go negative on a bad night.
    pub fn evaluation(&self) -> i64 {
        let positive = self.points() + self.rebounds() + self.assists + self.steals + self.blocks;
        let negative = self.points2_missed
            + self.points3_missed
            + self.free_throws_missed
            + self.turnovers;
        i64::from(positive) - i64::from(negative)
    }
}

impl TeamStats {
    /// Aggregate a roster into team totals and shooting percentages.
    ///
    /// The `evaluation` total is recomputed from the summed counters rather
    /// than summing stored per-player values, which may predate the counter
    /// they were derived from.
    pub fn from_players(players: &[Player]) -> Self {
        let mut totals = PlayerStats::default();
        for player in players {
            let s = &player.stats;
            totals.points2_made += s.points2_made;
            totals.points2_missed += s.points2_missed;
            totals.points3_made += s.points3_made;
            totals.points3_missed += s.points3_missed;
            totals.free_throws_made += s.free_throws_made;
            totals.free_throws_missed += s.free_throws_missed;
            totals.offensive_rebounds += s.offensive_rebounds;
            totals.defensive_rebounds += s.defensive_rebounds;
            totals.assists += s.assists;
            totals.steals += s.steals;
            totals.blocks += s.blocks;
            totals.turnovers += s.turnovers;
        }
        totals.evaluation = totals.evaluation();

        Self {
            total_points: totals.points(),
            shooting_percentages: ShootingPercentages {
                points2: percentage(totals.points2_made, totals.points2_missed),
                points3: percentage(totals.points3_made, totals.points3_missed),
                free_throws: percentage(totals.free_throws_made, totals.free_throws_missed),
            },
            totals,
        }
    }
}

/// Accuracy ratio for one shot category; `0` when nothing was attempted.
fn percentage(made: u32, missed: u32) -> f64 {
    let attempts = made + missed;
    if attempts == 0 {
        0.0
    } else {
        f64::from(made) / f64::from(attempts)
    }
}
