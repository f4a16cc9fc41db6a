//! Database abstraction layer.
//!
//! Each store trait covers one entity family; all of them are implemented on
//! [`AnyStore`], a single sqlx Any-driver pool (SQLite by default). To swap
//! to another database, point the connection URL at it, or implement the
//! traits for a new type and change the concrete type in
//! [`crate::state::AppState`].
//!
//! All trait methods use `impl Future` in their signatures (stable since Rust
//! 1.75) so no extra `async-trait` crate is required here.

pub mod conversation;
pub mod dao;
pub mod event;
pub mod itinerary;
pub mod message;
pub mod post;
pub mod profile;

pub use dao::{Conversation, EventRecord, ItineraryRecord, Message, PostRecord, Profile};

pub use conversation::ConversationStore;
pub use event::EventStore;
pub use itinerary::ItineraryStore;
pub use message::MessageStore;
pub use post::PostStore;
pub use profile::ProfileStore;

use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Shared sqlx pool behind every store trait.
#[derive(Clone, Debug)]
pub struct AnyStore {
    pub(crate) pool: sqlx::Pool<sqlx::Any>,
}

impl AnyStore {
    /// Open (or create) the database at `url` and run pending migrations.
    ///
    /// `url` should be a sqlx-compatible URL, e.g. `"sqlite://wayfare.db"`
    /// or `"sqlite::memory:"` for tests. In-memory SQLite is pinned to a
    /// single connection so every query sees the migrated schema.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        sqlx::any::install_default_drivers();
        let options = sqlx::any::AnyConnectOptions::from_str(url)?;
        let mut pool_options = sqlx::pool::PoolOptions::<sqlx::Any>::new();
        if url.contains(":memory:") {
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }
        let pool = pool_options.connect_with(options).await?;
        // Path is resolved relative to CARGO_MANIFEST_DIR at compile time.
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    /// Reachability check for the heartbeat endpoint.
    pub async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

/// Parse an RFC 3339 column, warning and substituting `now` on bad data.
pub(crate) fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap_or_else(|e: chrono::ParseError| {
        tracing::warn!(raw = %raw, error = %e, "failed to parse stored timestamp; using now");
        Utc::now()
    })
}
