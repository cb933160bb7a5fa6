/// Session handling for the sidebar
///
/// Reads the Supabase session persisted by the auth pages out of
/// localStorage, validates its expiry, and terminates it on sign-out.

use chrono::Utc;
use leptos::logging;

use crate::api::client::SupabaseClient;
use crate::config::SupabaseConfig;
use crate::types::SessionSnapshot;

/// Load the stored session, discarding expired or undecodable ones.
pub fn stored_session(config: &SupabaseConfig) -> Option<SessionSnapshot> {
    let raw = read_storage(&config.storage_key)?;
    parse_session(&raw, Utc::now().timestamp())
}

/// Decode and validate a stored session payload.
pub(crate) fn parse_session(raw: &str, now: i64) -> Option<SessionSnapshot> {
    match serde_json::from_str::<SessionSnapshot>(raw) {
        Ok(session) if !session.is_expired(now) => Some(session),
        Ok(_) => None,
        Err(e) => {
            logging::warn!("stored session is not decodable: {}", e);
            None
        }
    }
}

pub fn clear_stored_session(config: &SupabaseConfig) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(&config.storage_key);
        }
    }
}

/// Terminate the backend session and drop the stored copy.
///
/// The stored copy is cleared even when the logout round trip fails, so the
/// widget never resurrects a half-dead session on the next page.
pub async fn sign_out(client: &SupabaseClient, session: &SessionSnapshot) {
    if let Err(e) = client.auth_post("logout", &session.access_token).await {
        logging::warn!("sign-out request failed: {}", e);
    }
    clear_stored_session(client.config());
}

fn read_storage(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn session_json(expires_at: i64) -> String {
        format!(
            r#"{{
                "access_token": "jwt-token",
                "token_type": "bearer",
                "expires_at": {},
                "refresh_token": "refresh",
                "user": {{
                    "id": "11111111-2222-3333-4444-555555555555",
                    "email": "ana@example.com",
                    "user_metadata": {{ "role": "instructor" }}
                }}
            }}"#,
            expires_at
        )
    }

    #[test]
    fn test_parse_valid_session() {
        let session = parse_session(&session_json(2_000), 1_000).unwrap();
        assert_eq!(session.user.email, "ana@example.com");
        assert_eq!(session.role_hint(), Some(Role::Instructor));
    }

    #[test]
    fn test_expired_session_is_discarded() {
        assert!(parse_session(&session_json(1_000), 1_000).is_none());
        assert!(parse_session(&session_json(500), 1_000).is_none());
    }

    #[test]
    fn test_malformed_session_is_discarded() {
        assert!(parse_session("not json", 0).is_none());
        assert!(parse_session("{}", 0).is_none());
    }

    #[test]
    fn test_session_without_metadata_role_has_no_hint() {
        let raw = r#"{
            "access_token": "jwt-token",
            "expires_at": 2000,
            "user": { "id": "u1", "email": "b@example.com" }
        }"#;
        let session = parse_session(raw, 1_000).unwrap();
        assert_eq!(session.role_hint(), None);
    }
}
