//! RegistroLeituraRFID aggregate
//!
//! Contains the Registro entity (an immutable scan event) and its repository
//! contract.

pub mod model;
pub mod repository;

pub use model::{Registro, RegistroDetalhado};
pub use repository::RegistroRepository;
