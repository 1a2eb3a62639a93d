//! Elegibilidade de veículos para entrega

use tracing::{info, warn};

use crate::config::RegrasConfig;
use crate::models::veiculo::Veiculo;
use crate::repositories::VeiculoRepository;
use crate::utils::errors::{CadastroError, CadastroResult, MotivoVeiculo};
use crate::utils::validation::{validate_min, validate_pattern, validate_required, PLACA_REGEX};

/// Regras de veículo. Não guarda estado mutável
pub struct VeiculoService<R> {
    repository: R,
    config: RegrasConfig,
}

impl<R: VeiculoRepository> VeiculoService<R> {
    pub fn new(repository: R, config: RegrasConfig) -> Self {
        Self { repository, config }
    }

    pub fn validar(&self, veiculo: &Veiculo) -> CadastroResult<()> {
        validar_veiculo(veiculo, &self.config)
    }

    /// Valida e salva; nada é persistido se a validação falhar
    pub fn salvar(&self, veiculo: &Veiculo) -> CadastroResult<Veiculo> {
        if let Err(e) = self.validar(veiculo) {
            warn!("🚫 Veículo {} recusado: {}", veiculo.placa, e);
            return Err(e);
        }

        let salvo = self.repository.save(veiculo)?;
        info!("✅ Veículo {} salvo", salvo.placa);
        Ok(salvo)
    }
}

/// Ano modelo, placa e Renavam, nessa ordem
pub fn validar_veiculo(veiculo: &Veiculo, config: &RegrasConfig) -> CadastroResult<()> {
    validate_min(veiculo.ano_modelo, config.ano_minimo_veiculo).map_err(|_| {
        CadastroError::VeiculoInvalido(MotivoVeiculo::AnoModeloAntigo {
            ano: veiculo.ano_modelo,
            minimo: config.ano_minimo_veiculo,
        })
    })?;

    validate_pattern(&veiculo.placa, &PLACA_REGEX, "placa")
        .map_err(|_| CadastroError::VeiculoInvalido(MotivoVeiculo::PlacaInvalida(veiculo.placa.clone())))?;

    validate_required(veiculo.renavam.as_ref(), "renavam")
        .map_err(|_| CadastroError::VeiculoInvalido(MotivoVeiculo::RenavamAusente))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryVeiculoRepository;
    use std::sync::Arc;

    fn motivo(veiculo: &Veiculo) -> MotivoVeiculo {
        match validar_veiculo(veiculo, &RegrasConfig::default()) {
            Err(CadastroError::VeiculoInvalido(motivo)) => motivo,
            other => panic!("esperava VeiculoInvalido, veio {:?}", other),
        }
    }

    #[test]
    fn test_veiculo_valido() {
        let veiculo = Veiculo::new(2010, "ABC1234", Some(12345678901));
        assert!(validar_veiculo(&veiculo, &RegrasConfig::default()).is_ok());
    }

    #[test]
    fn test_motivos() {
        assert_eq!(
            motivo(&Veiculo::new(2005, "ABC1234", Some(12345678901))),
            MotivoVeiculo::AnoModeloAntigo { ano: 2005, minimo: 2010 }
        );
        assert_eq!(
            motivo(&Veiculo::new(2010, "ABC123E", Some(12345678901))),
            MotivoVeiculo::PlacaInvalida("ABC123E".to_string())
        );
        assert_eq!(motivo(&Veiculo::new(2010, "ABC1234", None)), MotivoVeiculo::RenavamAusente);
    }

    #[test]
    fn test_ano_minimo_configuravel() {
        let config = RegrasConfig::default().with_ano_minimo_veiculo(2015);
        let veiculo = Veiculo::new(2012, "ABC1234", Some(12345678901));
        assert!(validar_veiculo(&veiculo, &config).is_err());
        assert!(validar_veiculo(&veiculo, &RegrasConfig::default()).is_ok());
    }

    #[test]
    fn test_salvar() {
        let repository = Arc::new(InMemoryVeiculoRepository::new());
        let service = VeiculoService::new(repository.clone(), RegrasConfig::default());

        let valido = Veiculo::new(2020, "XYZ9876", Some(98765432101));
        assert_eq!(service.salvar(&valido).unwrap(), valido);
        assert!(repository.find_by_placa("XYZ9876").unwrap().is_some());

        let invalido = Veiculo::new(2020, "XYZ987", Some(98765432101));
        assert!(service.salvar(&invalido).is_err());
        assert!(repository.find_by_placa("XYZ987").unwrap().is_none());
    }
}
