//! Modelos do sistema
//!
//! Objetos de valor do cadastro: entregador, CNH e veículo.

pub mod documento;
pub mod entregador;
pub mod veiculo;

pub use documento::Documento;
pub use entregador::Entregador;
pub use veiculo::Veiculo;
