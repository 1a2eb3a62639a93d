use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::models::veiculo::Veiculo;
use crate::utils::errors::RepositoryError;

/// Capacidade de persistência de veículos
pub trait VeiculoRepository: Send + Sync {
    fn save(&self, veiculo: &Veiculo) -> Result<Veiculo, RepositoryError>;
}

impl<R: VeiculoRepository + ?Sized> VeiculoRepository for Arc<R> {
    fn save(&self, veiculo: &Veiculo) -> Result<Veiculo, RepositoryError> {
        (**self).save(veiculo)
    }
}

/// Repositório em memória indexado pela placa
#[derive(Debug, Default)]
pub struct InMemoryVeiculoRepository {
    veiculos: RwLock<HashMap<String, Veiculo>>,
}

impl InMemoryVeiculoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_by_placa(&self, placa: &str) -> Result<Option<Veiculo>, RepositoryError> {
        let veiculos = self
            .veiculos
            .read()
            .map_err(|_| RepositoryError::Storage("in-memory store lock poisoned".to_string()))?;
        Ok(veiculos.get(placa).cloned())
    }
}

impl VeiculoRepository for InMemoryVeiculoRepository {
    fn save(&self, veiculo: &Veiculo) -> Result<Veiculo, RepositoryError> {
        let mut veiculos = self
            .veiculos
            .write()
            .map_err(|_| RepositoryError::Storage("in-memory store lock poisoned".to_string()))?;
        veiculos.insert(veiculo.placa.clone(), veiculo.clone());
        Ok(veiculo.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_find_by_placa() {
        let repository = InMemoryVeiculoRepository::new();
        let veiculo = Veiculo::new(2018, "ABC1234", Some(12345678901));

        repository.save(&veiculo).unwrap();

        assert_eq!(repository.find_by_placa("ABC1234").unwrap(), Some(veiculo));
        assert_eq!(repository.find_by_placa("XYZ9876").unwrap(), None);
    }
}
