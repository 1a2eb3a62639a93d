//! Serviços
//!
//! Regras de negócio do cadastro: a cadeia de validação do entregador e os
//! serviços de CNH e veículo que ela usa.

pub mod documento_service;
pub mod entregador_service;
pub mod regras;
pub mod veiculo_service;

pub use documento_service::DocumentoService;
pub use entregador_service::EntregadorService;
pub use regras::{regras_padrao, ContextoValidacao, Regra};
pub use veiculo_service::VeiculoService;
