//! REST API module for the MotoTrack service
//!
//! Provides HTTP endpoints for managing motos, RFID readers and scan
//! records, plus health, metrics and interactive API docs.

pub mod dto;
pub mod handlers;
pub mod metrics;
pub mod router;
pub mod validated_json;

pub use router::{create_api_router, ApiDoc};
