//! Configuração do projeto
//!
//! Configuração das regras de cadastro lida do ambiente.

pub mod environment;

pub use environment::*;
