//! Repositórios
//!
//! Contratos de persistência usados pelos serviços e suas implementações
//! em memória.

pub mod entregador_repository;
pub mod veiculo_repository;

pub use entregador_repository::*;
pub use veiculo_repository::*;
