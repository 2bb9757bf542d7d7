//! Shared type declarations for games, players, and their statistics.
//!
//! `Player` and `PlayerStats` are also the persisted JSON shape of the
//! `players` column, so their serde keys stay camelCase to remain compatible
//! with rows written by earlier revisions of the tracker.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Per-player counters accumulated over one game.
///
/// All counters are raw tallies. Nothing at this layer ties made/missed pairs
/// to attempt totals; the repository persists whatever the tracker counted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStats {
    /// Two-point field goals made.
    pub points2_made: u32,
    /// Two-point field goals missed.
    pub points2_missed: u32,
    /// Three-point field goals made.
    pub points3_made: u32,
    /// Three-point field goals missed.
    pub points3_missed: u32,
    /// Free throws made.
    pub free_throws_made: u32,
    /// Free throws missed.
    pub free_throws_missed: u32,
    /// Rebounds collected on the offensive end.
    pub offensive_rebounds: u32,
    /// Rebounds collected on the defensive end.
    pub defensive_rebounds: u32,
    /// Assists.
    pub assists: u32,
    /// Steals.
    pub steals: u32,
    /// Blocked shots. Absent in rows persisted by early revisions.
    #[serde(rename = "block")]
    pub blocks: u32,
    /// Turnovers committed.
    pub turnovers: u32,
    /// Derived efficiency rating, may be negative. Absent in rows persisted
    /// by early revisions; recomputable via [`PlayerStats::evaluation`].
    pub evaluation: i64,
}

/// One roster entry: who played and what they accumulated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Identifier unique within the game's roster.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Counters accumulated by this player.
    pub stats: PlayerStats,
    /// Elapsed seconds on court.
    pub playing_time: u64,
    /// Whether the player was on court when the game was saved. Absent in
    /// rows persisted by early revisions.
    #[serde(default)]
    pub on_court: bool,
}

/// Shooting accuracy ratios, each in `[0, 1]`; `0` when nothing was attempted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShootingPercentages {
    /// Two-point accuracy.
    pub points2: f64,
    /// Three-point accuracy.
    pub points3: f64,
    /// Free-throw accuracy.
    pub free_throws: f64,
}

/// Team-level aggregate over a game's roster.
///
/// Derived from the players via [`TeamStats::from_players`]; never persisted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    /// Summed counters across the roster.
    #[serde(flatten)]
    pub totals: PlayerStats,
    /// Points scored by the whole team.
    pub total_points: u32,
    /// Accuracy ratios for the three shot categories.
    pub shooting_percentages: ShootingPercentages,
}

/// One recorded session: when it was played, what it was called, and the
/// players who took part with their accumulated statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    /// Backend-assigned row identifier; `None` before the first save.
    pub id: Option<i64>,
    /// When the session took place.
    pub date: OffsetDateTime,
    /// Display name of the session.
    pub name: String,
    /// Participating players, in display order.
    pub players: Vec<Player>,
}
