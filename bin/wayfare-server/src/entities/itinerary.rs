use std::future::Future;

use crate::entities::{dao::ItineraryRecord, parse_timestamp, AnyStore};

pub trait ItineraryStore: Send + Sync + 'static {
    fn insert_itinerary(
        &self,
        record: ItineraryRecord,
    ) -> impl Future<Output = Result<(), sqlx::Error>> + Send;
    fn list_itineraries(
        &self,
    ) -> impl Future<Output = Result<Vec<ItineraryRecord>, sqlx::Error>> + Send;
}

type ItineraryRow = (
    String,
    String,
    String,
    i64,
    String,
    String,
    Option<String>,
    String,
);

impl ItineraryStore for AnyStore {
    async fn insert_itinerary(&self, record: ItineraryRecord) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO itineraries \
                 (id, title, destination, duration_days, travel_style, budget_range, user_id, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .bind(&record.id)
        .bind(&record.title)
        .bind(&record.destination)
        .bind(record.duration_days)
        .bind(&record.travel_style)
        .bind(&record.budget_range)
        .bind(&record.user_id)
        .bind(record.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_itineraries(&self) -> Result<Vec<ItineraryRecord>, sqlx::Error> {
        let rows: Vec<ItineraryRow> = sqlx::query_as(
            "SELECT id, title, destination, duration_days, travel_style, budget_range, \
                    user_id, created_at \
             FROM itineraries ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(
                |(id, title, destination, duration_days, travel_style, budget_range, user_id, created_at)| {
                    ItineraryRecord {
                        id,
                        title,
                        destination,
                        duration_days,
                        travel_style,
                        budget_range,
                        user_id,
                        created_at: parse_timestamp(&created_at),
                    }
                },
            )
            .collect())
    }
}
