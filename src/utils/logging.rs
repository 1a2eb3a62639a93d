//! Configuração de logging
//!
//! Instala o subscriber de `tracing`. Pode ser chamado mais de uma vez
//! (testes, binários que embutem o crate): só a primeira chamada vale.

use tracing::Level;

/// Inicializar o subscriber `fmt` com nível DEBUG
pub fn init_tracing() {
    init_tracing_with_level(Level::DEBUG);
}

/// Inicializar o subscriber `fmt` com o nível informado
pub fn init_tracing_with_level(level: Level) {
    // try_init falha se já existe um subscriber global; isso é esperado
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_test_writer()
        .try_init();
}

/// Mascarar CPF para logs, mantendo só os dois últimos dígitos
pub fn mask_cpf(cpf: Option<&str>) -> String {
    match cpf {
        None => "<ausente>".to_string(),
        Some(value) => {
            let chars: Vec<char> = value.chars().collect();
            let visible = chars.len().min(2);
            let masked: String = "*".repeat(chars.len() - visible);
            let tail: String = chars[chars.len() - visible..].iter().collect();
            format!("{}{}", masked, tail)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_cpf() {
        assert_eq!(mask_cpf(Some("04455566633")), "*********33");
        assert_eq!(mask_cpf(Some("1")), "1");
        assert_eq!(mask_cpf(Some("")), "");
        assert_eq!(mask_cpf(None), "<ausente>");
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing_with_level(Level::INFO);
    }
}
