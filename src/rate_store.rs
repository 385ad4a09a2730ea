use std::collections::HashMap;

use crate::error::{RateError, Result};
use crate::exchange_rate::{ExchangeRate, normalize_code};

/// In-memory mapping from currency code to rate.
///
/// Entries keep the order in which their code was first inserted;
/// overwriting a rate does not move it.
#[derive(Debug, Clone, Default)]
pub struct RateStore {
    rates: Vec<ExchangeRate>,
    index: HashMap<String, usize>,
}

impl RateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the rate for `code`, or overwrites the existing one.
    pub fn upsert(&mut self, code: &str, rate: f64) {
        let code = normalize_code(code);
        match self.index.get(&code) {
            Some(&position) => self.rates[position].rate = rate,
            None => {
                self.index.insert(code.clone(), self.rates.len());
                self.rates.push(ExchangeRate { code, rate });
            }
        }
    }

    pub fn lookup(&self, code: &str) -> Result<f64> {
        let code = normalize_code(code);
        self.index
            .get(&code)
            .map(|&position| self.rates[position].rate)
            .ok_or(RateError::CurrencyNotFound(code))
    }

    /// Snapshot of every entry in store order.
    pub fn all(&self) -> Vec<ExchangeRate> {
        self.rates.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExchangeRate> {
        self.rates.iter()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
