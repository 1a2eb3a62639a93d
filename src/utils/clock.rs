//! Fonte de tempo para a verificação de vencimento da CNH

use chrono::{NaiveDate, Utc};

/// Fornece a data "de hoje" usada nas validações
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Relógio do sistema (data UTC)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Relógio parado numa data fixa, para testes
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let data = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(FixedClock(data).today(), data);
    }

    #[test]
    fn test_system_clock_is_after_2020() {
        assert!(SystemClock.today() > NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }
}
