//! Validação da CNH do entregador

use chrono::NaiveDate;
use tracing::debug;

use crate::models::documento::Documento;
use crate::utils::errors::{CadastroError, CadastroResult};
use crate::utils::validation::{validate_not_before, validate_number_digits, validate_required};

/// Quantidade de dígitos do número da CNH
pub const CNH_DIGITOS: usize = 11;

/// Serviço de regras da CNH
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentoService;

impl DocumentoService {
    pub fn new() -> Self {
        Self
    }

    /// Verifica formato e vencimento, nessa ordem
    pub fn validar(&self, documento: &Documento, hoje: NaiveDate) -> CadastroResult<()> {
        self.validar_numero(documento)?;
        self.validar_vencimento(documento, hoje)
    }

    /// O número da CNH deve ter exatamente 11 dígitos
    pub fn validar_numero(&self, documento: &Documento) -> CadastroResult<()> {
        let numero = validate_required(documento.numero.as_ref(), "numero")
            .map_err(CadastroError::CnhInvalida)?;
        validate_number_digits(*numero, CNH_DIGITOS).map_err(CadastroError::CnhInvalida)
    }

    /// A CNH vale até o dia do vencimento, inclusive. Sem data de vencimento
    /// não há como provar validade, então é tratada como vencida.
    pub fn validar_vencimento(&self, documento: &Documento, hoje: NaiveDate) -> CadastroResult<()> {
        let vencimento = validate_required(documento.data_vencimento.as_ref(), "dataVencimento")
            .map_err(CadastroError::CnhVencida)?;
        debug!("Vencimento da CNH: {} (hoje: {})", vencimento, hoje);
        validate_not_before(*vencimento, hoje).map_err(CadastroError::CnhVencida)
    }

    pub fn vencida(&self, documento: &Documento, hoje: NaiveDate) -> bool {
        self.validar_vencimento(documento, hoje).is_err()
    }
}
