//! Moto aggregate
//!
//! Contains the Moto entity (a motorcycle fitted with an RFID tag) and its
//! repository contract.

pub mod model;
pub mod repository;

pub use model::{Moto, DEFAULT_STATUS, PLACA_MAX_LEN};
pub use repository::MotoRepository;
