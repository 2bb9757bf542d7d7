use std::sync::Arc;

use futures::future::BoxFuture;
use reqwest::{Client, Method};
use serde::Deserialize;
use serde_json::{Value, from_value};
use tracing::{debug, error};

use crate::dao::{game_store::GameStore, storage::StorageResult};
use crate::models::Game;

use super::{
    config::SupabaseConfig,
    error::{SupabaseDaoError, SupabaseResult},
    rows::{GAMES_TABLE, GameRow, NewGameRow},
};

/// Game store backed by a hosted Supabase project, addressed through its
/// PostgREST endpoint.
///
/// Both operations are one-shot request/response calls: no retry, no
/// pagination, no partial results. Failures surface to the caller after
/// being logged.
#[derive(Clone)]
pub struct SupabaseGameStore {
    client: Client,
    base_url: Arc<str>,
    api_key: Arc<str>,
}

impl SupabaseGameStore {
    /// Validate the configuration and build the HTTP client.
    ///
    /// Construct one store at startup and reuse it; clones share the
    /// underlying client. Missing or empty credentials fail here, before any
    /// network call.
    pub fn connect(config: SupabaseConfig) -> SupabaseResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .build()
            .map_err(|source| SupabaseDaoError::ClientBuilder { source })?;

        Ok(Self {
            client,
            base_url: Arc::from(config.base_url.trim_end_matches('/')),
            api_key: Arc::from(config.api_key.as_str()),
        })
    }

    fn request(&self, method: Method, table: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        self.client
            .request(method, url)
            .header("apikey", self.api_key.as_ref())
            .bearer_auth(self.api_key.as_ref())
    }

    async fn insert_game(&self, game: Game) -> SupabaseResult<()> {
        let row = NewGameRow::from_game(&game)?;
        let response = self
            .request(Method::POST, GAMES_TABLE)
            .header("Prefer", "return=minimal")
            // PostgREST inserts take an array of rows, of which we send one.
            .json(&[row])
            .send()
            .await
            .map_err(|source| SupabaseDaoError::RequestSend {
                path: GAMES_TABLE.to_string(),
                source,
            })?;

        ensure_success(GAMES_TABLE, response).await?;
        Ok(())
    }

    async fn select_games(&self) -> SupabaseResult<Vec<Game>> {
        let response = self
            .request(Method::GET, GAMES_TABLE)
            .query(&[("select", "*"), ("order", "date.desc")])
            .send()
            .await
            .map_err(|source| SupabaseDaoError::RequestSend {
                path: GAMES_TABLE.to_string(),
                source,
            })?;

        let response = ensure_success(GAMES_TABLE, response).await?;
        let payload =
            response
                .json::<Value>()
                .await
                .map_err(|source| SupabaseDaoError::DecodeResponse {
                    path: GAMES_TABLE.to_string(),
                    source,
                })?;

        games_from_payload(payload)
    }
}

impl GameStore for SupabaseGameStore {
    fn save_game(&self, game: Game) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store.insert_game(game).await.map_err(|err| {
                error!(error = %err, "failed to save game");
                err.into()
            })
        })
    }

    fn load_games(&self) -> BoxFuture<'static, StorageResult<Vec<Game>>> {
        let store = self.clone();
        Box::pin(async move {
            let games = store.select_games().await.map_err(|err| {
                error!(error = %err, "failed to load games");
                err
            })?;
            debug!(count = games.len(), "loaded games");
            Ok(games)
        })
    }
}

/// Decode a select payload into games: the top level must be a JSON array,
/// and every row must pass validation.
fn games_from_payload(payload: Value) -> SupabaseResult<Vec<Game>> {
    let rows = match payload {
        Value::Array(rows) => rows,
        other => {
            return Err(SupabaseDaoError::UnexpectedPayload {
                path: GAMES_TABLE.to_string(),
                found: json_kind(&other),
            });
        }
    };

    let mut games = Vec::with_capacity(rows.len());
    for row in rows {
        let row: GameRow =
            from_value(row).map_err(|source| SupabaseDaoError::DeserializeRow { source })?;
        games.push(row.into_game()?);
    }
    Ok(games)
}

/// Pass successful responses through; turn anything else into a rejection
/// carrying the reason the backend reported.
async fn ensure_success(
    path: &str,
    response: reqwest::Response,
) -> SupabaseResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    Err(SupabaseDaoError::Rejected {
        path: path.to_string(),
        status,
        message: rejection_message(response).await,
    })
}

/// Extract the `message` field of a PostgREST error body, falling back to the
/// raw body text when the body is not the usual JSON shape.
async fn rejection_message(response: reqwest::Response) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.message)
            .unwrap_or(body),
        Err(_) => String::new(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dao::storage::StorageError;
    use reqwest::StatusCode;
    use serde_json::json;
    use time::macros::datetime;

    fn response(status: u16, body: &str) -> reqwest::Response {
        http::Response::builder()
            .status(status)
            .body(body.to_string())
            .expect("response should build")
            .into()
    }

    fn unreachable_store() -> SupabaseGameStore {
        // Bind an ephemeral port and drop the listener so the port is closed
        // by construction.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let port = listener.local_addr().expect("listener has an address").port();
        drop(listener);

        let base_url = format!("http://127.0.0.1:{port}");
        SupabaseGameStore::connect(SupabaseConfig::new(base_url, "anon-key"))
            .expect("connect should only validate config")
    }

    #[test]
    fn connect_rejects_empty_credentials() {
        let result = SupabaseGameStore::connect(SupabaseConfig::new("", ""));
        assert!(matches!(
            result.map_err(StorageError::from),
            Err(StorageError::Configuration { .. })
        ));
    }

    #[tokio::test]
    async fn success_response_passes_through() {
        let response = response(200, "[]");
        assert!(ensure_success(GAMES_TABLE, response).await.is_ok());
    }

    #[tokio::test]
    async fn rejection_carries_backend_message() {
        let response = response(
            409,
            r#"{"code":"23505","message":"duplicate key value violates unique constraint"}"#,
        );
        let err = ensure_success(GAMES_TABLE, response)
            .await
            .expect_err("conflict status is a rejection");
        match err {
            SupabaseDaoError::Rejected {
                status, message, ..
            } => {
                assert_eq!(status, StatusCode::CONFLICT);
                assert_eq!(message, "duplicate key value violates unique constraint");
            }
            other => panic!("expected a rejection, got {other}"),
        }
        // The rejection is a persistence failure from the caller's side.
        let err = SupabaseDaoError::Rejected {
            path: GAMES_TABLE.to_string(),
            status: StatusCode::CONFLICT,
            message: String::new(),
        };
        assert!(matches!(
            StorageError::from(err),
            StorageError::Persistence { .. }
        ));
    }

    #[tokio::test]
    async fn rejection_falls_back_to_raw_body() {
        let response = response(502, "upstream timed out");
        let err = ensure_success(GAMES_TABLE, response)
            .await
            .expect_err("bad gateway is a rejection");
        match err {
            SupabaseDaoError::Rejected { message, .. } => {
                assert_eq!(message, "upstream timed out");
            }
            other => panic!("expected a rejection, got {other}"),
        }
    }

    #[test]
    fn array_payload_decodes_to_games() {
        let games = games_from_payload(json!([
            {"id": 1, "date": "2024-03-09T18:30:00Z", "name": "first", "players": []},
            {"id": 2, "date": "2024-02-01T19:00:00Z", "name": "second", "players": []}
        ]))
        .expect("array payload should decode");
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].name, "first");
    }

    #[test]
    fn non_array_payload_is_a_decode_error() {
        for payload in [json!({"rows": []}), json!("nope"), json!(null)] {
            let err = games_from_payload(payload).expect_err("top level must be an array");
            assert!(matches!(
                err,
                SupabaseDaoError::UnexpectedPayload { .. }
            ));
            assert!(matches!(
                StorageError::from(err),
                StorageError::Decode { .. }
            ));
        }
    }

    #[test]
    fn non_object_row_is_a_decode_error() {
        let err = games_from_payload(json!([42])).expect_err("rows must be objects");
        assert!(matches!(err, SupabaseDaoError::DeserializeRow { .. }));
    }

    #[tokio::test]
    async fn unreachable_backend_surfaces_persistence_error() {
        let store: Arc<dyn GameStore> = Arc::new(unreachable_store());
        let err = store
            .load_games()
            .await
            .expect_err("nothing is listening on the dropped port");
        assert!(matches!(err, StorageError::Persistence { .. }));

        let game = Game {
            id: None,
            date: datetime!(2024-03-09 18:30:00 UTC),
            name: "unsaved".to_string(),
            players: Vec::new(),
        };
        let err = store
            .save_game(game)
            .await
            .expect_err("nothing is listening on the dropped port");
        assert!(matches!(err, StorageError::Persistence { .. }));
    }
}
