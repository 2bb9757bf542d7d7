//! Wire-level shapes for the `games` table and the validation step turning
//! untyped rows into [`Game`] values.
//!
//! The backend is untyped from this crate's perspective, and the table has
//! accumulated drift across tracker revisions (a `data` column standing in
//! for `players`, rosters missing newer counters). Decoding therefore goes
//! through one explicit row-validation step instead of coercing fields along
//! the read path.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::models::{Game, Player};

use super::error::{SupabaseDaoError, SupabaseResult};

/// Name of the backing table.
pub const GAMES_TABLE: &str = "games";
/// Display name used when a stored row carries no name.
pub const UNNAMED_GAME: &str = "Unnamed game";

/// Insert payload for one game row, in the canonical write shape.
#[derive(Debug, Serialize)]
pub struct NewGameRow<'a> {
    /// RFC 3339 rendering of the game date.
    pub date: String,
    /// Display name, passed through unchanged.
    pub name: &'a str,
    /// Roster, persisted as a JSON array in the `players` column.
    pub players: &'a [Player],
}

impl<'a> NewGameRow<'a> {
    /// Prepare a game for insertion. The `id` is left to the backend.
    pub fn from_game(game: &'a Game) -> SupabaseResult<Self> {
        let date = game
            .date
            .format(&Rfc3339)
            .map_err(|source| SupabaseDaoError::FormatDate { source })?;
        Ok(Self {
            date,
            name: &game.name,
            players: &game.players,
        })
    }
}

/// Raw row as returned by PostgREST, left untyped where historical revisions
/// disagree on shape.
#[derive(Debug, Deserialize)]
pub struct GameRow {
    /// Backend-assigned identifier.
    #[serde(default)]
    pub id: Option<i64>,
    /// Stored date; a string in canonical rows, a bare timestamp in others.
    #[serde(default)]
    pub date: Value,
    /// Stored display name, if any.
    #[serde(default)]
    pub name: Option<String>,
    /// Roster column. Canonical rows use `players`; one early revision wrote
    /// the same array under `data`.
    #[serde(default, alias = "data")]
    pub players: Option<Value>,
}

impl GameRow {
    /// Validate one stored row into a typed [`Game`].
    pub fn into_game(self) -> SupabaseResult<Game> {
        let date = decode_date(&self.date)?;
        let players = decode_players(self.players)?;
        let name = self.name.unwrap_or_else(|| UNNAMED_GAME.to_string());
        Ok(Game {
            id: self.id,
            date,
            name,
            players,
        })
    }
}

fn decode_date(value: &Value) -> SupabaseResult<OffsetDateTime> {
    match value {
        Value::String(raw) => OffsetDateTime::parse(raw, &Rfc3339)
            .map_err(|_| SupabaseDaoError::MalformedDate { found: raw.clone() }),
        Value::Number(number) => number
            .as_i64()
            .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
            .ok_or_else(|| SupabaseDaoError::MalformedDate {
                found: value.to_string(),
            }),
        other => Err(SupabaseDaoError::MalformedDate {
            found: other.to_string(),
        }),
    }
}

fn decode_players(value: Option<Value>) -> SupabaseResult<Vec<Player>> {
    match value {
        Some(Value::Array(entries)) => entries
            .into_iter()
            .map(|entry| {
                serde_json::from_value(entry)
                    .map_err(|source| SupabaseDaoError::DeserializePlayers { source })
            })
            .collect(),
        // A missing or non-list roster decodes as an empty one.
        _ => Ok(Vec::new()),
    }
}
