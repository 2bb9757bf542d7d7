/// Supabase (PostgREST) implementation of the game store.
pub mod supabase;

use futures::future::BoxFuture;

use crate::dao::storage::StorageResult;
use crate::models::Game;

/// Abstraction over the persistence layer for recorded games.
///
/// Callers construct one store at startup, keep it for the life of the
/// process, and share it as `Arc<dyn GameStore>`. The store itself holds no
/// global state; connect-once-reuse is the caller's choice, not a hidden
/// singleton.
pub trait GameStore: Send + Sync {
    /// Append one game to the backend. The game's `id` is assigned by the
    /// backend and need not be set.
    fn save_game(&self, game: Game) -> BoxFuture<'static, StorageResult<()>>;
    /// Fetch every recorded game, most recent first. Empty when nothing has
    /// been saved yet.
    fn load_games(&self) -> BoxFuture<'static, StorageResult<Vec<Game>>>;
}
