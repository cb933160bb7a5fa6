/// Profile lookups against the `profiles` table

use super::client::SupabaseClient;
use super::Result;
use crate::types::Profile;

/// Fetch the authoritative profile row for a user, if one exists.
///
/// A missing row is not an error; the caller falls back to the role hint
/// embedded in the session.
pub async fn fetch_profile(
    client: &SupabaseClient,
    user_id: &str,
    access_token: &str,
) -> Result<Option<Profile>> {
    let query = format!("profiles?id=eq.{}&select=role,full_name", user_id);
    client.get_single(&query, access_token).await
}
