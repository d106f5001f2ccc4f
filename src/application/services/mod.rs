//! Application services

mod tracking;

pub use tracking::TrackingService;
