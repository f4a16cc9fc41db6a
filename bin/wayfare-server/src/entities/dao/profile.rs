use chrono::{DateTime, Utc};

/// A row in the `profiles` table, keyed by the external auth identity.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: String,
    pub auth_id: Option<String>,
    pub display_name: String,
    pub bio: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
