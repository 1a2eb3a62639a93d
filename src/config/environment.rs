//! Configuração via variáveis de ambiente
//!
//! Constantes de negócio ajustáveis pelo ambiente. O `.env` é carregado com
//! `dotenvy` e valores ausentes caem no padrão.

use anyhow::{Context, Result};
use std::env;

/// Variável com o ano modelo mínimo aceito para veículos
pub const ANO_MINIMO_VEICULO_VAR: &str = "ENTREGADOR_ANO_MINIMO_VEICULO";

/// Ano modelo mínimo padrão
pub const ANO_MINIMO_VEICULO_PADRAO: i32 = 2010;

/// Configuração das regras de cadastro
#[derive(Debug, Clone, PartialEq)]
pub struct RegrasConfig {
    pub ano_minimo_veiculo: i32,
}

impl Default for RegrasConfig {
    fn default() -> Self {
        Self {
            ano_minimo_veiculo: ANO_MINIMO_VEICULO_PADRAO,
        }
    }
}

impl RegrasConfig {
    /// Carregar a configuração do `.env` e do ambiente do processo
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Carregar a configuração a partir de uma função de consulta
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ANO_MINIMO_VEICULO_VAR) {
            config.ano_minimo_veiculo = value
                .trim()
                .parse()
                .with_context(|| format!("{} must be a valid year, got '{}'", ANO_MINIMO_VEICULO_VAR, value))?;
        }

        Ok(config)
    }

    pub fn with_ano_minimo_veiculo(mut self, ano: i32) -> Self {
        self.ano_minimo_veiculo = ano;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        assert_eq!(RegrasConfig::default().ano_minimo_veiculo, 2010);
    }

    #[test]
    fn test_from_lookup_overrides_default() {
        let vars: HashMap<&str, &str> = [(ANO_MINIMO_VEICULO_VAR, " 2015 ")].into_iter().collect();
        let config = RegrasConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.ano_minimo_veiculo, 2015);
    }

    #[test]
    fn test_from_lookup_without_vars() {
        let config = RegrasConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, RegrasConfig::default());
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        let error = RegrasConfig::from_lookup(|_| Some("dois mil".to_string())).unwrap_err();
        assert!(error.to_string().contains(ANO_MINIMO_VEICULO_VAR));
    }
}
