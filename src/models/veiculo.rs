//! Modelo de Veiculo
//!
//! Veículo usado nas entregas. O Renavam é opcional no modelo para que a
//! ausência seja rejeitada pela validação, não pela desserialização.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Veiculo {
    pub ano_modelo: i32,
    pub placa: String,
    #[serde(default)]
    pub renavam: Option<u64>,
}

impl Veiculo {
    pub fn new(ano_modelo: i32, placa: impl Into<String>, renavam: Option<u64>) -> Self {
        Self {
            ano_modelo,
            placa: placa.into(),
            renavam,
        }
    }
}
