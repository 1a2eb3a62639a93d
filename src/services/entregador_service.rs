//! Cadastro de entregadores
//!
//! `salvar` roda a cadeia de regras e, só se todas passarem, chama o
//! repositório uma única vez com o entregador original.

use tracing::{info, warn};

use crate::config::RegrasConfig;
use crate::models::entregador::Entregador;
use crate::repositories::EntregadorRepository;
use crate::services::regras::{avaliar, regras_padrao, ContextoValidacao, Regra};
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::errors::CadastroResult;
use crate::utils::logging::mask_cpf;

/// Serviço de cadastro. Estado imutável: uma instância pode ser
/// compartilhada entre threads.
pub struct EntregadorService<R, C = SystemClock> {
    repository: R,
    clock: C,
    config: RegrasConfig,
    regras: Vec<Regra>,
}

impl<R: EntregadorRepository> EntregadorService<R, SystemClock> {
    pub fn new(repository: R) -> Self {
        Self::with_clock(repository, SystemClock, RegrasConfig::default())
    }

    pub fn with_config(repository: R, config: RegrasConfig) -> Self {
        Self::with_clock(repository, SystemClock, config)
    }
}

impl<R: EntregadorRepository, C: Clock> EntregadorService<R, C> {
    pub fn with_clock(repository: R, clock: C, config: RegrasConfig) -> Self {
        Self {
            repository,
            clock,
            config,
            regras: regras_padrao(),
        }
    }

    /// Substituir a cadeia de regras padrão
    pub fn with_regras(mut self, regras: Vec<Regra>) -> Self {
        self.regras = regras;
        self
    }

    pub fn regras(&self) -> &[Regra] {
        &self.regras
    }

    pub fn config(&self) -> &RegrasConfig {
        &self.config
    }

    /// Roda todas as regras sem persistir nada
    pub fn validar(&self, entregador: &Entregador) -> CadastroResult<()> {
        let contexto = ContextoValidacao {
            hoje: self.clock.today(),
            config: &self.config,
        };

        avaliar(&self.regras, entregador, &contexto).map_err(|(regra, e)| {
            warn!(
                "🚫 Entregador {} recusado na regra '{}': {} [{}]",
                mask_cpf(entregador.cpf.as_deref()),
                regra,
                e,
                e.code()
            );
            e
        })
    }

    /// Valida e salva o entregador
    pub fn salvar(&self, entregador: &Entregador) -> CadastroResult<Entregador> {
        self.validar(entregador)?;

        let salvo = self.repository.save(entregador)?;
        info!("✅ Entregador {} cadastrado", mask_cpf(salvo.cpf.as_deref()));
        Ok(salvo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryEntregadorRepository;
    use crate::utils::clock::FixedClock;
    use chrono::NaiveDate;

    #[test]
    fn test_new_usa_regras_padrao() {
        let service = EntregadorService::new(InMemoryEntregadorRepository::new());
        assert_eq!(service.regras().len(), 5);
        assert_eq!(service.config(), &RegrasConfig::default());
    }

    #[test]
    fn test_with_config() {
        let config = RegrasConfig::default().with_ano_minimo_veiculo(2018);
        let service = EntregadorService::with_config(InMemoryEntregadorRepository::new(), config.clone());
        assert_eq!(service.config(), &config);
    }

    #[test]
    fn test_cadeia_vazia_aceita_tudo() {
        let repository = InMemoryEntregadorRepository::new();
        let hoje = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let service = EntregadorService::with_clock(&repository, FixedClock(hoje), RegrasConfig::default())
            .with_regras(Vec::new());

        let salvo = service.salvar(&Entregador::default()).unwrap();
        assert!(salvo.id.is_some());
        assert_eq!(repository.count().unwrap(), 1);
    }
}
