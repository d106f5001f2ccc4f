//! # MotoTrack RFID Tracking Service
//!
//! REST service for tracking RFID-tagged motorcycles across fixed readers
//! in a fleet yard.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and repository traits
//! - **application**: Business logic and use cases
//! - **infrastructure**: External concerns (database, in-memory storage)
//! - **api**: REST API with Swagger documentation
//! - **server**: Reusable server runtime with graceful shutdown
//! - **shared**: Errors, validation helpers and shutdown plumbing

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, MemoryStorage, SeaOrmRepositoryProvider};

// Re-export the application service
pub use application::TrackingService;

// Re-export API router
pub use api::create_api_router;
