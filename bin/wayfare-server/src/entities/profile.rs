use std::future::Future;

use crate::entities::{dao::Profile, parse_timestamp, AnyStore};

pub trait ProfileStore: Send + Sync + 'static {
    fn get_profile(&self, id: &str)
        -> impl Future<Output = Result<Option<Profile>, sqlx::Error>> + Send;
    /// Insert-or-update on the profile id.
    fn upsert_profile(&self, profile: Profile) -> impl Future<Output = Result<(), sqlx::Error>> + Send;
}

type ProfileRow = (
    String,
    Option<String>,
    String,
    String,
    Option<String>,
    String,
    String,
);

impl ProfileStore for AnyStore {
    async fn get_profile(&self, id: &str) -> Result<Option<Profile>, sqlx::Error> {
        let row: Option<ProfileRow> = sqlx::query_as(
            "SELECT id, auth_id, display_name, bio, email, created_at, updated_at \
             FROM profiles WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(
            |(id, auth_id, display_name, bio, email, created_at, updated_at)| Profile {
                id,
                auth_id,
                display_name,
                bio,
                email,
                created_at: parse_timestamp(&created_at),
                updated_at: parse_timestamp(&updated_at),
            },
        ))
    }

    async fn upsert_profile(&self, profile: Profile) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO profiles (id, auth_id, display_name, bio, email, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
             ON CONFLICT (id) DO UPDATE SET \
                 display_name = excluded.display_name, \
                 bio = excluded.bio, \
                 email = excluded.email, \
                 updated_at = excluded.updated_at",
        )
        .bind(&profile.id)
        .bind(&profile.auth_id)
        .bind(&profile.display_name)
        .bind(&profile.bio)
        .bind(&profile.email)
        .bind(profile.created_at.to_rfc3339())
        .bind(profile.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
