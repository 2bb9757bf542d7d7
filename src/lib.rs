//! Library crate for courtside-back, the persistence layer of the courtside
//! basketball stat tracker.
//!
//! UI code constructs a [`dao::game_store::supabase::SupabaseGameStore`] once
//! at startup and shares it as `Arc<dyn GameStore>`; the type declarations in
//! [`models`] travel between the tracker screens and the storage backend.

pub mod dao;
pub mod models;
pub mod stats;
