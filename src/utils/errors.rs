//! Tratamento de erros
//!
//! Define a taxonomia de erros do cadastro: um erro por grupo de campos
//! rejeitado, mais os erros vindos da persistência.

use thiserror::Error;
use validator::ValidationError;

/// Motivo pelo qual um veículo foi recusado
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotivoVeiculo {
    #[error("ano modelo {ano} anterior ao mínimo aceito ({minimo})")]
    AnoModeloAntigo { ano: i32, minimo: i32 },

    #[error("placa fora do padrão: {0}")]
    PlacaInvalida(String),

    #[error("renavam não informado")]
    RenavamAusente,
}

/// Erros de persistência, propagados sem alteração
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Erros principais do cadastro de entregadores
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CadastroError {
    #[error("CPF inválido")]
    CpfInvalido(#[source] ValidationError),

    #[error("RG inválido")]
    RgInvalido(#[source] ValidationError),

    #[error("CNH inválida")]
    CnhInvalida(#[source] ValidationError),

    #[error("CNH vencida")]
    CnhVencida(#[source] ValidationError),

    #[error("Veículo inválido: {0}")]
    VeiculoInvalido(#[source] MotivoVeiculo),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CadastroError {
    /// Código estável do erro, útil para logs e respostas
    pub fn code(&self) -> &'static str {
        match self {
            CadastroError::CpfInvalido(_) => "CPF_INVALIDO",
            CadastroError::RgInvalido(_) => "RG_INVALIDO",
            CadastroError::CnhInvalida(_) => "CNH_INVALIDA",
            CadastroError::CnhVencida(_) => "CNH_VENCIDA",
            CadastroError::VeiculoInvalido(_) => "VEICULO_INVALIDO",
            CadastroError::Repository(_) => "REPOSITORY_ERROR",
        }
    }

    /// Indica se o erro veio das regras de validação (e não da persistência)
    pub fn is_validation(&self) -> bool {
        !matches!(self, CadastroError::Repository(_))
    }
}

/// Resultado tipado para operações do cadastro
pub type CadastroResult<T> = Result<T, CadastroError>;
