use std::future::Future;

use crate::entities::{dao::EventRecord, parse_timestamp, AnyStore};

pub trait EventStore: Send + Sync + 'static {
    fn list_events(&self) -> impl Future<Output = Result<Vec<EventRecord>, sqlx::Error>> + Send;
}

type EventRow = (
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    Option<String>,
    Option<String>,
);

impl EventStore for AnyStore {
    async fn list_events(&self) -> Result<Vec<EventRecord>, sqlx::Error> {
        let rows: Vec<EventRow> = sqlx::query_as(
            "SELECT id, title, category, description, starts_at, ends_at, venue, \
                    ticket_url, ticket_price \
             FROM events ORDER BY starts_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(
                |(id, title, category, description, starts_at, ends_at, venue, ticket_url, ticket_price)| {
                    EventRecord {
                        id,
                        title,
                        category,
                        description,
                        starts_at: parse_timestamp(&starts_at),
                        ends_at: parse_timestamp(&ends_at),
                        venue,
                        ticket_url,
                        ticket_price,
                    }
                },
            )
            .collect())
    }
}
