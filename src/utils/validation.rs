//! Utilitários de validação
//!
//! Funções auxiliares compartilhadas pelos serviços de cadastro. Cada uma devolve
//! um `ValidationError` com código e parâmetros, e cabe ao serviço decidir
//! qual erro de domínio corresponde.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

lazy_static! {
    static ref DIGITS_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();
    /// Placa no padrão antigo: 3 letras seguidas de 4 dígitos (ABC1234)
    pub static ref PLACA_REGEX: Regex = Regex::new(r"^[A-Z]{3}[0-9]{4}$").unwrap();
}

/// Validar que o valor tenha exatamente `len` dígitos e nada mais
pub fn validate_digits(value: &str, len: usize) -> Result<(), ValidationError> {
    if !DIGITS_REGEX.is_match(value) {
        let mut error = ValidationError::new("digits");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }

    let actual = value.chars().count();
    if actual != len {
        let mut error = ValidationError::new("length");
        error.add_param("equal".into(), &len);
        error.add_param("actual".into(), &actual);
        return Err(error);
    }
    Ok(())
}

/// Validar número armazenado como inteiro (CNH, Renavam) pela quantidade de dígitos
pub fn validate_number_digits(value: u64, len: usize) -> Result<(), ValidationError> {
    validate_digits(&value.to_string(), len)
}

/// Validar que um campo opcional esteja presente
pub fn validate_required<'a, T>(value: Option<&'a T>, field: &'static str) -> Result<&'a T, ValidationError> {
    value.ok_or_else(|| {
        let mut error = ValidationError::new("required");
        error.add_param("field".into(), &field);
        error
    })
}

/// Validar formato contra uma regex
pub fn validate_pattern(value: &str, pattern: &Regex, code: &'static str) -> Result<(), ValidationError> {
    if !pattern.is_match(value) {
        let mut error = ValidationError::new(code);
        error.add_param("value".into(), &value.to_string());
        error.add_param("pattern".into(), &pattern.as_str().to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar valor mínimo
pub fn validate_min<T: PartialOrd + Serialize>(value: T, min: T) -> Result<(), ValidationError> {
    if value < min {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &min);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que a data não seja anterior à data de referência
pub fn validate_not_before(date: NaiveDate, reference: NaiveDate) -> Result<(), ValidationError> {
    if date < reference {
        let mut error = ValidationError::new("expired");
        error.add_param("date".into(), &date.to_string());
        error.add_param("reference".into(), &reference.to_string());
        return Err(error);
    }
    Ok(())
}
