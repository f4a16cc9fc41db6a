//! The assistant's two capabilities, bound to the data store.
//!
//! `save_itinerary` persists a structured itinerary record; `fetch_events`
//! reads and formats the event list. Both return human-readable strings so
//! the model can quote them, and both surface failures as [`AgentError::Tool`]
//! for the tool loop to narrate.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use wayfare_agent::{AgentError, Tool};

use crate::entities::{AnyStore, EventStore, ItineraryRecord, ItineraryStore};

fn tool_error(name: &str, e: impl std::fmt::Display) -> AgentError {
    AgentError::Tool { name: name.into(), message: e.to_string() }
}

// ── save_itinerary ───────────────────────────────────────────────────────────

pub struct SaveItineraryTool {
    store: Arc<AnyStore>,
}

impl SaveItineraryTool {
    pub fn new(store: Arc<AnyStore>) -> Self {
        Self { store }
    }
}

#[derive(Debug, Deserialize)]
struct SaveItineraryArgs {
    title: String,
    destination: String,
    duration_days: i64,
    #[serde(default = "default_style")]
    travel_style: String,
    #[serde(default = "default_budget")]
    budget_range: String,
}

fn default_style() -> String {
    "balanced".into()
}

fn default_budget() -> String {
    "mid-range".into()
}

#[async_trait]
impl Tool for SaveItineraryTool {
    fn name(&self) -> &str {
        "save_itinerary"
    }

    fn description(&self) -> &str {
        "Save the traveler's agreed itinerary (title, destination, duration in \
         days, travel style, budget range) so they can find it later."
    }

    fn parameters(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "title":         { "type": "string", "description": "Short itinerary title" },
                "destination":   { "type": "string", "description": "Primary destination city or region" },
                "duration_days": { "type": "integer", "description": "Trip length in days", "minimum": 1 },
                "travel_style":  { "type": "string", "description": "e.g. relaxed, adventurous, cultural" },
                "budget_range":  { "type": "string", "description": "e.g. budget, mid-range, luxury" }
            },
            "required": ["title", "destination", "duration_days"]
        })
    }

    async fn call(&self, args: &serde_json::Value) -> Result<String, AgentError> {
        let args: SaveItineraryArgs = serde_json::from_value(args.clone())
            .map_err(|e| tool_error("save_itinerary", e))?;
        if args.duration_days < 1 {
            return Err(tool_error("save_itinerary", "duration_days must be at least 1"));
        }

        let record = ItineraryRecord {
            id: Uuid::new_v4().to_string(),
            title: args.title.clone(),
            destination: args.destination.clone(),
            duration_days: args.duration_days,
            travel_style: args.travel_style,
            budget_range: args.budget_range,
            user_id: None,
            created_at: Utc::now(),
        };
        self.store
            .insert_itinerary(record)
            .await
            .map_err(|e| tool_error("save_itinerary", e))?;

        info!(title = %args.title, destination = %args.destination, "itinerary saved");
        Ok(format!(
            "Saved the itinerary '{}': {} days in {}.",
            args.title, args.duration_days, args.destination
        ))
    }
}

// ── fetch_events ─────────────────────────────────────────────────────────────

pub struct FetchEventsTool {
    store: Arc<AnyStore>,
}

impl FetchEventsTool {
    pub fn new(store: Arc<AnyStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for FetchEventsTool {
    fn name(&self) -> &str {
        "fetch_events"
    }

    fn description(&self) -> &str {
        "Fetch the current list of local events (title, category, venue, \
         start time) to recommend to the traveler."
    }

    fn parameters(&self) -> serde_json::Value {
        serde_json::json!({ "type": "object", "properties": {} })
    }

    async fn call(&self, _args: &serde_json::Value) -> Result<String, AgentError> {
        let events = self
            .store
            .list_events()
            .await
            .map_err(|e| tool_error("fetch_events", e))?;

        if events.is_empty() {
            return Ok("No events are currently listed.".into());
        }

        let lines: Vec<String> = events
            .iter()
            .map(|e| {
                format!(
                    "- {} ({}) at {}, starting {}",
                    e.title,
                    e.category,
                    e.venue,
                    e.starts_at.format("%Y-%m-%d %H:%M")
                )
            })
            .collect();
        Ok(format!("Upcoming events:\n{}", lines.join("\n")))
    }
}
