//! Database entities module

pub mod leitor;
pub mod moto;
pub mod registro;

pub use leitor::Entity as Leitor;
pub use moto::Entity as Moto;
pub use registro::Entity as Registro;
