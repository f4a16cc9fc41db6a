use std::future::Future;

use crate::entities::{dao::Message, parse_timestamp, AnyStore};

pub trait MessageStore: Send + Sync + 'static {
    /// Append-only; messages are never mutated or deleted.
    fn append_message(&self, msg: Message) -> impl Future<Output = Result<(), sqlx::Error>> + Send;
    fn list_messages(
        &self,
        conversation_id: &str,
    ) -> impl Future<Output = Result<Vec<Message>, sqlx::Error>> + Send;
    fn count_messages(&self) -> impl Future<Output = Result<i64, sqlx::Error>> + Send;
}

impl MessageStore for AnyStore {
    async fn append_message(&self, msg: Message) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO messages (id, conversation_id, sender, content, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&msg.id)
        .bind(&msg.conversation_id)
        .bind(&msg.sender)
        .bind(&msg.content)
        .bind(msg.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_messages(&self, conversation_id: &str) -> Result<Vec<Message>, sqlx::Error> {
        let rows: Vec<(String, String, String, String, String)> = sqlx::query_as(
            "SELECT id, conversation_id, sender, content, created_at \
             FROM messages WHERE conversation_id = ?1 ORDER BY created_at ASC",
        )
        .bind(conversation_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(id, conversation_id, sender, content, created_at)| Message {
                id,
                conversation_id,
                sender,
                content,
                created_at: parse_timestamp(&created_at),
            })
            .collect())
    }

    async fn count_messages(&self) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
