//! wayfare-server library surface.
//!
//! Exposed as a library so integration tests can assemble the router with an
//! in-memory store and a scripted chat provider.

pub mod catalog;
pub mod config;
pub mod entities;
pub mod error;
pub mod middleware;
pub mod planner;
pub mod routes;
pub mod schemas;
pub mod state;
pub mod tools;
