//! API data transfer objects

pub mod common;
pub mod leitor;
pub mod moto;
pub mod registro;

pub use common::ApiResponse;
pub use leitor::{CreateLeitorRequest, LeitorDto, UpdateLeitorRequest};
pub use moto::{CreateMotoRequest, MotoDto, UpdateMotoRequest};
pub use registro::{CreateRegistroRequest, RegistroDto};
