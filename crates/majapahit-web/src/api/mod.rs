/// Backend client for the hosted Supabase project
///
/// HTTP access to the auth endpoint and the PostgREST data surface.

pub mod client;
pub mod profiles;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("http status {0}")]
    Http(u16),

    #[error("decode error: {0}")]
    Decode(String),
}
