/// Game persistence and retrieval operations.
pub mod game_store;
/// Storage abstraction layer shared by backends.
pub mod storage;
