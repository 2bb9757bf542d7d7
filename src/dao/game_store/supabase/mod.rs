mod config;
mod error;
mod rows;
mod store;

pub use config::SupabaseConfig;
pub use error::{SupabaseDaoError, SupabaseResult};
pub use store::SupabaseGameStore;

use crate::dao::storage::StorageError;

impl From<SupabaseDaoError> for StorageError {
    fn from(err: SupabaseDaoError) -> Self {
        use SupabaseDaoError::*;

        let message = err.to_string();
        match err {
            MissingEnvVar { .. } | EmptyCredential { .. } | ClientBuilder { .. } => {
                StorageError::Configuration { message }
            }
            RequestSend { .. } | Rejected { .. } | FormatDate { .. } | MalformedDate { .. } => {
                StorageError::Persistence {
                    message,
                    source: Box::new(err),
                }
            }
            DecodeResponse { .. }
            | UnexpectedPayload { .. }
            | DeserializeRow { .. }
            | DeserializePlayers { .. } => StorageError::Decode {
                message,
                source: Box::new(err),
            },
        }
    }
}
