/// HTTP client for the Supabase REST and auth endpoints

use gloo_net::http::Request;

use super::{ApiError, Result};
use crate::config::SupabaseConfig;

/// Handle to the hosted backend.
///
/// Constructed once at mount and passed to components through context.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    config: SupabaseConfig,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    /// GET a single row from a PostgREST table endpoint.
    ///
    /// Returns `Ok(None)` when no row matches: PostgREST answers 406 to a
    /// single-object request that selects zero rows.
    pub async fn get_single<T>(&self, path_and_query: &str, access_token: &str) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/rest/v1/{}", self.config.url, path_and_query);
        let response = Request::get(&url)
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", access_token))
            .header("Accept", "application/vnd.pgrst.object+json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        match response.status() {
            200 => {
                let row = response
                    .json::<T>()
                    .await
                    .map_err(|e| ApiError::Decode(e.to_string()))?;
                Ok(Some(row))
            }
            404 | 406 => Ok(None),
            status => Err(ApiError::Http(status)),
        }
    }

    /// POST to an auth endpoint on behalf of the current session.
    pub async fn auth_post(&self, path: &str, access_token: &str) -> Result<()> {
        let url = format!("{}/auth/v1/{}", self.config.url, path);
        let response = Request::post(&url)
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::Http(response.status()))
        }
    }
}
