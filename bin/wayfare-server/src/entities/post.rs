use std::future::Future;

use crate::entities::{dao::PostRecord, parse_timestamp, AnyStore};

pub trait PostStore: Send + Sync + 'static {
    fn insert_post(&self, post: PostRecord) -> impl Future<Output = Result<(), sqlx::Error>> + Send;
    fn list_posts(&self) -> impl Future<Output = Result<Vec<PostRecord>, sqlx::Error>> + Send;
}

impl PostStore for AnyStore {
    async fn insert_post(&self, post: PostRecord) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO posts (id, media_url, caption, created_at) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(post.id)
        .bind(&post.media_url)
        .bind(&post.caption)
        .bind(post.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_posts(&self) -> Result<Vec<PostRecord>, sqlx::Error> {
        let rows: Vec<(i64, String, String, String)> = sqlx::query_as(
            "SELECT id, media_url, caption, created_at FROM posts ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(id, media_url, caption, created_at)| PostRecord {
                id,
                media_url,
                caption,
                created_at: parse_timestamp(&created_at),
            })
            .collect())
    }
}
