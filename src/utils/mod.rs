//! Utilitários do sistema
//!
//! Tratamento de erros, validaciones de formato compartidas, relógio e logging.

pub mod clock;
pub mod errors;
pub mod logging;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{CadastroError, CadastroResult, MotivoVeiculo, RepositoryError};
