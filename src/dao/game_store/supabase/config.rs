use super::error::{SupabaseDaoError, SupabaseResult};

/// Environment variable naming the Supabase project endpoint URL.
pub const URL_ENV: &str = "SUPABASE_URL";
/// Environment variable naming the anon API key.
pub const KEY_ENV: &str = "SUPABASE_ANON_KEY";

/// Runtime configuration describing how to reach the Supabase REST endpoint.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project endpoint, e.g. `https://<project>.supabase.co`.
    pub base_url: String,
    /// Anon key sent as both `apikey` and bearer token.
    pub api_key: String,
}

impl SupabaseConfig {
    /// Construct a configuration from an explicit endpoint URL and anon key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a configuration by reading the expected environment variables.
    pub fn from_env() -> SupabaseResult<Self> {
        let base_url = read_env(URL_ENV)?;
        let api_key = read_env(KEY_ENV)?;
        Ok(Self::new(base_url, api_key))
    }

    /// Reject empty credentials before any network call is attempted.
    pub(crate) fn validate(&self) -> SupabaseResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(SupabaseDaoError::EmptyCredential { field: "base URL" });
        }
        if self.api_key.trim().is_empty() {
            return Err(SupabaseDaoError::EmptyCredential { field: "anon key" });
        }
        Ok(())
    }
}

fn read_env(var: &'static str) -> SupabaseResult<String> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(SupabaseDaoError::MissingEnvVar { var }),
    }
}
