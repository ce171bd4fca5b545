//! Connection settings read from flags or the environment.

use clap::Args;
use euc_core::explain::{ExplainClient, DEFAULT_ENDPOINT, DEFAULT_MODEL};
use euc_core::rest::RestStore;
use euc_core::EucError;

/// Hosted store settings.
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Base URL of the hosted store
    #[arg(long, env = "SUPABASE_URL")]
    pub store_url: Option<String>,

    /// Anonymous API key for the hosted store
    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub store_key: Option<String>,
}

impl StoreArgs {
    /// A REST client when both URL and key are set and non-empty.
    pub fn rest_store(&self, client: reqwest::Client) -> euc_core::Result<RestStore> {
        let url = non_empty(&self.store_url).ok_or(EucError::MissingConfig("SUPABASE_URL"))?;
        let key =
            non_empty(&self.store_key).ok_or(EucError::MissingConfig("SUPABASE_ANON_KEY"))?;
        Ok(RestStore::new(client, url, key))
    }
}

/// Explanation endpoint settings.
#[derive(Args, Debug, Clone)]
pub struct ExplainArgs {
    /// API key for the chat-completion endpoint
    #[arg(long, env = "MISTRAL_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat-completion endpoint URL
    #[arg(long, env = "MISTRAL_API_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Model name sent with each request
    #[arg(long, env = "MISTRAL_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,
}

impl ExplainArgs {
    pub fn client(&self, client: reqwest::Client) -> euc_core::Result<ExplainClient> {
        let key = non_empty(&self.api_key).ok_or(EucError::MissingConfig("MISTRAL_API_KEY"))?;
        Ok(ExplainClient::new(client, key)
            .with_endpoint(&self.endpoint)
            .with_model(&self.model))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
