//! Cross-rate conversion over a [`RateStore`].

use crate::error::Result;
use crate::rate_store::RateStore;

/// Converts amounts between any two currencies held by a store.
///
/// All rates share one implicit base, so `A -> B` is
/// `amount / rate(A) * rate(B)`. No rounding is applied.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    store: &'a RateStore,
}

impl<'a> Converter<'a> {
    pub fn new(store: &'a RateStore) -> Self {
        Self { store }
    }

    /// Fails with `CurrencyNotFound` naming the first missing code,
    /// checking `from` before `to`.
    pub fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64> {
        let from_rate = self.store.lookup(from)?;
        let to_rate = self.store.lookup(to)?;
        Ok((amount / from_rate) * to_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RateError;

    fn store() -> RateStore {
        let mut store = RateStore::new();
        store.upsert("USD", 1.0);
        store.upsert("EUR", 0.9);
        store.upsert("JPY", 149.5);
        store
    }

    #[test]
    fn test_usd_to_eur() {
        let store = store();
        let converter = Converter::new(&store);
        assert_eq!(converter.convert("USD", "EUR", 100.0).unwrap(), 90.0);
    }

    #[test]
    fn test_cross_rate_formula() {
        let store = store();
        let converter = Converter::new(&store);
        for from in ["USD", "EUR", "JPY"] {
            for to in ["USD", "EUR", "JPY"] {
                let expected = (250.0 / store.lookup(from).unwrap()) * store.lookup(to).unwrap();
                assert_eq!(converter.convert(from, to, 250.0).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_identity_conversion() {
        let store = store();
        let converter = Converter::new(&store);
        assert_eq!(converter.convert("eur", "EUR", 42.0).unwrap(), 42.0);
    }

    #[test]
    fn test_negative_amount_is_converted() {
        let store = store();
        let converter = Converter::new(&store);
        assert_eq!(converter.convert("USD", "EUR", -10.0).unwrap(), -10.0 * 0.9);
    }

    #[test]
    fn test_missing_from_is_reported_first() {
        let store = store();
        let converter = Converter::new(&store);
        let err = converter.convert("AAA", "BBB", 1.0).unwrap_err();
        assert!(matches!(err, RateError::CurrencyNotFound(ref code) if code == "AAA"));
    }

    #[test]
    fn test_missing_to() {
        let store = store();
        let converter = Converter::new(&store);
        let err = converter.convert("USD", "zzz", 1.0).unwrap_err();
        assert!(matches!(err, RateError::CurrencyNotFound(ref code) if code == "ZZZ"));
    }
}
