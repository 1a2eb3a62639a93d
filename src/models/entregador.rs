//! Modelo de Entregador
//!
//! Entregador candidato ao cadastro, com CNH e veículo opcionais. A identidade
//! só é atribuída pela persistência.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::documento::Documento;
use super::veiculo::Veiculo;

/// Entregador - CPF e RG ficam como texto para preservar zeros à esquerda
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entregador {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub rg: Option<String>,
    #[serde(default)]
    pub documento: Option<Documento>,
    #[serde(default)]
    pub veiculo: Option<Veiculo>,
}

impl Entregador {
    pub fn new(cpf: impl Into<String>, rg: impl Into<String>) -> Self {
        Self {
            cpf: Some(cpf.into()),
            rg: Some(rg.into()),
            ..Self::default()
        }
    }

    pub fn with_documento(mut self, documento: Documento) -> Self {
        self.documento = Some(documento);
        self
    }

    pub fn with_veiculo(mut self, veiculo: Veiculo) -> Self {
        self.veiculo = Some(veiculo);
        self
    }
}
