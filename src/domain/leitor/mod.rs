//! LeitorRFID aggregate
//!
//! Contains the Leitor entity (a fixed RFID reader) and its repository
//! contract.

pub mod model;
pub mod repository;

pub use model::Leitor;
pub use repository::LeitorRepository;
