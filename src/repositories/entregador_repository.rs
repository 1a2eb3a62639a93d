use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;
use uuid::Uuid;

use crate::models::entregador::Entregador;
use crate::utils::errors::RepositoryError;

/// Capacidade de persistência exigida pelo cadastro de entregadores
pub trait EntregadorRepository: Send + Sync {
    /// Persistir o entregador e devolver a cópia salva (com identidade)
    fn save(&self, entregador: &Entregador) -> Result<Entregador, RepositoryError>;
}

impl<R: EntregadorRepository + ?Sized> EntregadorRepository for Arc<R> {
    fn save(&self, entregador: &Entregador) -> Result<Entregador, RepositoryError> {
        (**self).save(entregador)
    }
}

impl<R: EntregadorRepository + ?Sized> EntregadorRepository for &R {
    fn save(&self, entregador: &Entregador) -> Result<Entregador, RepositoryError> {
        (**self).save(entregador)
    }
}

/// Repositório em memória; CPF é único
#[derive(Debug, Default)]
pub struct InMemoryEntregadorRepository {
    entregadores: RwLock<HashMap<Uuid, Entregador>>,
}

impl InMemoryEntregadorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_by_id(&self, id: Uuid) -> Result<Option<Entregador>, RepositoryError> {
        let entregadores = self.entregadores.read().map_err(|_| poisoned())?;
        Ok(entregadores.get(&id).cloned())
    }

    pub fn find_by_cpf(&self, cpf: &str) -> Result<Option<Entregador>, RepositoryError> {
        let entregadores = self.entregadores.read().map_err(|_| poisoned())?;
        Ok(entregadores
            .values()
            .find(|e| e.cpf.as_deref() == Some(cpf))
            .cloned())
    }

    pub fn count(&self) -> Result<usize, RepositoryError> {
        let entregadores = self.entregadores.read().map_err(|_| poisoned())?;
        Ok(entregadores.len())
    }
}

impl EntregadorRepository for InMemoryEntregadorRepository {
    fn save(&self, entregador: &Entregador) -> Result<Entregador, RepositoryError> {
        let mut entregadores = self.entregadores.write().map_err(|_| poisoned())?;

        let id = entregador.id.unwrap_or_else(Uuid::new_v4);

        // Mesmo CPF em outro registro
        let duplicado = entregadores
            .iter()
            .any(|(existing_id, e)| *existing_id != id && e.cpf.is_some() && e.cpf == entregador.cpf);
        if duplicado {
            return Err(RepositoryError::Conflict(
                "Entregador with this CPF already exists".to_string(),
            ));
        }

        let mut salvo = entregador.clone();
        salvo.id = Some(id);
        entregadores.insert(id, salvo.clone());
        debug!("💾 Entregador {} salvo em memória", id);

        Ok(salvo)
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::Storage("in-memory store lock poisoned".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_assigns_id() {
        let repository = InMemoryEntregadorRepository::new();
        let salvo = repository.save(&Entregador::new("04455566633", "4447487")).unwrap();

        let id = salvo.id.expect("id atribuído");
        assert_eq!(repository.find_by_id(id).unwrap(), Some(salvo));
        assert_eq!(repository.count().unwrap(), 1);
    }

    #[test]
    fn test_save_keeps_existing_id() {
        let repository = InMemoryEntregadorRepository::new();
        let salvo = repository.save(&Entregador::new("04455566633", "4447487")).unwrap();

        let mut alterado = salvo.clone();
        alterado.rg = Some("1234567".to_string());
        let atualizado = repository.save(&alterado).unwrap();

        assert_eq!(atualizado.id, salvo.id);
        assert_eq!(repository.count().unwrap(), 1);
        assert_eq!(
            repository.find_by_cpf("04455566633").unwrap().unwrap().rg.as_deref(),
            Some("1234567")
        );
    }

    #[test]
    fn test_duplicated_cpf_is_conflict() {
        let repository = InMemoryEntregadorRepository::new();
        repository.save(&Entregador::new("04455566633", "4447487")).unwrap();

        let error = repository.save(&Entregador::new("04455566633", "1234567")).unwrap_err();
        assert!(matches!(error, RepositoryError::Conflict(_)));
        assert_eq!(repository.count().unwrap(), 1);
    }

    #[test]
    fn test_find_by_cpf_missing() {
        let repository = InMemoryEntregadorRepository::new();
        assert_eq!(repository.find_by_cpf("00000000000").unwrap(), None);
    }
}
