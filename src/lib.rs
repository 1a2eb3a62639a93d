//! Cadastro de entregadores do ifome
//!
//! Valida CPF, RG, CNH e veículo de um entregador antes de entregá-lo à
//! persistência. Ver [`services::EntregadorService::salvar`].

pub mod config;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;

pub use config::RegrasConfig;
pub use models::{Documento, Entregador, Veiculo};
pub use repositories::{EntregadorRepository, InMemoryEntregadorRepository, InMemoryVeiculoRepository, VeiculoRepository};
pub use services::{DocumentoService, EntregadorService, VeiculoService};
pub use utils::{CadastroError, CadastroResult, Clock, FixedClock, MotivoVeiculo, RepositoryError, SystemClock};
