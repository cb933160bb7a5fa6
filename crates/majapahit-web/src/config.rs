/// Backend endpoint configuration
///
/// The widget talks to the hosted Supabase project with the publishable
/// (anon) key; per-row access is enforced server-side by row-level security.

pub const SUPABASE_URL: &str = "https://kfzujigpgmyywdfafagi.supabase.co";
pub const SUPABASE_ANON_KEY: &str = "sb_publishable_-bvXQioPjNBauiIQuikGNA_diyKQlyJ";

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    /// localStorage slot where the auth pages persist the session.
    pub storage_key: String,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: SUPABASE_URL.to_string(),
            anon_key: SUPABASE_ANON_KEY.to_string(),
            storage_key: storage_key_for(SUPABASE_URL),
        }
    }
}

/// supabase-js persists the session under `sb-<project-ref>-auth-token`.
fn storage_key_for(url: &str) -> String {
    let host = url
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let project_ref = host.split('.').next().unwrap_or(host);
    format!("sb-{}-auth-token", project_ref)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_from_project_url() {
        assert_eq!(
            storage_key_for("https://kfzujigpgmyywdfafagi.supabase.co"),
            "sb-kfzujigpgmyywdfafagi-auth-token"
        );
    }

    #[test]
    fn test_storage_key_without_scheme() {
        assert_eq!(storage_key_for("local.test"), "sb-local-auth-token");
    }
}
