//! Fixed currency pair configuration.
//!
//! The watch list is a hardcoded table of 23 forex pairs in canonical
//! "BASE/QUOTE" form. Pairs are validated once at startup so the upstream
//! symbol split can assume well-formed 6-letter symbols.

use std::fmt;

// ============================================================================
// PAIR CONFIGURATION
// ============================================================================

/// Every pair the service watches, in fetch order.
pub const CONFIGURED_PAIRS: [CurrencyPair; 23] = [
    CurrencyPair::new("EUR/USD"),
    CurrencyPair::new("GBP/USD"),
    CurrencyPair::new("USD/JPY"),
    CurrencyPair::new("AUD/USD"),
    CurrencyPair::new("USD/CAD"),
    CurrencyPair::new("USD/CHF"),
    CurrencyPair::new("NZD/USD"),
    CurrencyPair::new("EUR/GBP"),
    CurrencyPair::new("EUR/JPY"),
    CurrencyPair::new("GBP/JPY"),
    CurrencyPair::new("EUR/AUD"),
    CurrencyPair::new("AUD/JPY"),
    CurrencyPair::new("CHF/JPY"),
    CurrencyPair::new("GBP/CAD"),
    CurrencyPair::new("GBP/CHF"),
    CurrencyPair::new("AUD/CAD"),
    CurrencyPair::new("AUD/CHF"),
    CurrencyPair::new("NZD/JPY"),
    CurrencyPair::new("CAD/JPY"),
    CurrencyPair::new("EUR/CAD"),
    CurrencyPair::new("TRY/USD"),
    CurrencyPair::new("ZAR/USD"),
    CurrencyPair::new("MXN/USD"),
];

// ============================================================================
// CURRENCY PAIR TYPE
// ============================================================================

/// An ordered base/quote currency pair in canonical "BASE/QUOTE" form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    canonical: &'static str,
}

impl CurrencyPair {
    pub const fn new(canonical: &'static str) -> Self {
        Self { canonical }
    }

    /// Canonical "BASE/QUOTE" form, used as the response map key.
    pub fn canonical(&self) -> &'static str {
        self.canonical
    }

    /// Upstream symbol with the separator removed, e.g. "EURUSD".
    pub fn symbol(&self) -> String {
        self.canonical.replace('/', "")
    }

    /// Base and quote 3-letter codes for the upstream query.
    ///
    /// Assumes `validate` passed; the watch list is checked at config load
    /// before any fetch can slice a symbol.
    pub fn codes(&self) -> (String, String) {
        let symbol = self.symbol();
        (symbol[..3].to_string(), symbol[3..].to_string())
    }

    /// A pair is well-formed when its symbol is exactly 6 ASCII letters.
    pub fn validate(&self) -> Result<(), String> {
        let symbol = self.symbol();
        if symbol.len() != 6 || !symbol.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!(
                "Pair '{}' must reduce to a 6-letter symbol, got '{}'",
                self.canonical, symbol
            ));
        }
        Ok(())
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)
    }
}

/// Validate the whole watch list. Called once at configuration load.
pub fn validate_configured_pairs() -> Result<(), String> {
    for pair in CONFIGURED_PAIRS.iter() {
        pair.validate()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_pair_count() {
        assert_eq!(CONFIGURED_PAIRS.len(), 23);
    }

    #[test]
    fn test_symbol_strips_separator() {
        assert_eq!(CurrencyPair::new("EUR/USD").symbol(), "EURUSD");
    }

    #[test]
    fn test_codes_split() {
        let (base, quote) = CurrencyPair::new("GBP/JPY").codes();
        assert_eq!(base, "GBP");
        assert_eq!(quote, "JPY");
    }

    #[test]
    fn test_all_configured_pairs_are_well_formed() {
        for pair in CONFIGURED_PAIRS.iter() {
            assert!(pair.validate().is_ok(), "pair {} failed validation", pair);
        }
    }

    #[test]
    fn test_malformed_pairs_rejected() {
        assert!(CurrencyPair::new("EURO/USD").validate().is_err());
        assert!(CurrencyPair::new("EUR/US").validate().is_err());
        assert!(CurrencyPair::new("EUR-USD").validate().is_err());
    }

    #[test]
    fn test_fetch_order_is_stable() {
        assert_eq!(CONFIGURED_PAIRS[0].canonical(), "EUR/USD");
        assert_eq!(CONFIGURED_PAIRS[22].canonical(), "MXN/USD");
    }
}
