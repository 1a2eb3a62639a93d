//! Cadeia de regras do cadastro de entregadores
//!
//! Cada regra é independente e devolve o seu próprio erro. A ordem da lista
//! é a ordem de avaliação; a primeira falha interrompe a cadeia. Regras de
//! CNH e veículo não restringem nada quando o objeto está ausente.

use chrono::NaiveDate;

use crate::config::RegrasConfig;
use crate::models::entregador::Entregador;
use crate::services::documento_service::DocumentoService;
use crate::services::veiculo_service::validar_veiculo;
use crate::utils::errors::{CadastroError, CadastroResult};
use crate::utils::validation::{validate_digits, validate_required};

pub const CPF_DIGITOS: usize = 11;
pub const RG_DIGITOS: usize = 7;

/// Dados que as regras podem consultar além do próprio entregador
#[derive(Debug, Clone)]
pub struct ContextoValidacao<'a> {
    pub hoje: NaiveDate,
    pub config: &'a RegrasConfig,
}

pub type Verificacao = fn(&Entregador, &ContextoValidacao<'_>) -> CadastroResult<()>;

/// Uma regra nomeada da cadeia
#[derive(Clone, Copy)]
pub struct Regra {
    pub nome: &'static str,
    verificar: Verificacao,
}

impl Regra {
    pub const fn new(nome: &'static str, verificar: Verificacao) -> Self {
        Self { nome, verificar }
    }

    pub fn verificar(&self, entregador: &Entregador, contexto: &ContextoValidacao<'_>) -> CadastroResult<()> {
        (self.verificar)(entregador, contexto)
    }
}

impl std::fmt::Debug for Regra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Regra").field("nome", &self.nome).finish()
    }
}

/// Regras padrão, na ordem em que são avaliadas
pub fn regras_padrao() -> Vec<Regra> {
    vec![
        Regra::new("cpf", cpf),
        Regra::new("rg", rg),
        Regra::new("cnh_numero", cnh_numero),
        Regra::new("cnh_vencimento", cnh_vencimento),
        Regra::new("veiculo", veiculo),
    ]
}

/// Avalia as regras em ordem e para na primeira falha
pub fn avaliar(regras: &[Regra], entregador: &Entregador, contexto: &ContextoValidacao<'_>) -> Result<(), (&'static str, CadastroError)> {
    for regra in regras {
        tracing::debug!("Avaliando regra '{}'", regra.nome);
        regra
            .verificar(entregador, contexto)
            .map_err(|e| (regra.nome, e))?;
    }
    Ok(())
}

pub fn cpf(entregador: &Entregador, _: &ContextoValidacao<'_>) -> CadastroResult<()> {
    let cpf = validate_required(entregador.cpf.as_ref(), "cpf").map_err(CadastroError::CpfInvalido)?;
    validate_digits(cpf, CPF_DIGITOS).map_err(CadastroError::CpfInvalido)
}

pub fn rg(entregador: &Entregador, _: &ContextoValidacao<'_>) -> CadastroResult<()> {
    let rg = validate_required(entregador.rg.as_ref(), "rg").map_err(CadastroError::RgInvalido)?;
    validate_digits(rg, RG_DIGITOS).map_err(CadastroError::RgInvalido)
}

pub fn cnh_numero(entregador: &Entregador, _: &ContextoValidacao<'_>) -> CadastroResult<()> {
    match &entregador.documento {
        Some(documento) => DocumentoService::new().validar_numero(documento),
        None => Ok(()),
    }
}

pub fn cnh_vencimento(entregador: &Entregador, contexto: &ContextoValidacao<'_>) -> CadastroResult<()> {
    match &entregador.documento {
        Some(documento) => DocumentoService::new().validar_vencimento(documento, contexto.hoje),
        None => Ok(()),
    }
}

pub fn veiculo(entregador: &Entregador, contexto: &ContextoValidacao<'_>) -> CadastroResult<()> {
    match &entregador.veiculo {
        Some(veiculo) => validar_veiculo(veiculo, contexto.config),
        None => Ok(()),
    }
}
