//! Modelo de Documento (CNH)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Carteira de motorista do entregador
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Documento {
    #[serde(default)]
    pub id: Option<i64>,
    /// UF emissora (ex.: "SP")
    #[serde(default)]
    pub estado: Option<String>,
    /// Número da CNH, 11 dígitos
    #[serde(default)]
    pub numero: Option<u64>,
    /// Categoria (ex.: "AB", "ABCD")
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub data_emissao: Option<NaiveDate>,
    #[serde(default)]
    pub data_vencimento: Option<NaiveDate>,
}

impl Documento {
    pub fn new(numero: u64, data_vencimento: NaiveDate) -> Self {
        Self {
            numero: Some(numero),
            data_vencimento: Some(data_vencimento),
            ..Self::default()
        }
    }
}
