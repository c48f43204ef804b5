//! Placeholder trading signal derivation.
//!
//! Signals are a demo layer over the cached exchange rates: two directional
//! recommendations (short and long horizon) with stop-loss/take-profit levels
//! computed from fixed multipliers. Inherited placeholder logic, reproduced
//! as-is: the direction branch keys off `rate % 2.0 > 1.0`, which conflates a
//! modulo result with a magnitude proxy. Do not mistake any of this for
//! trading advice.

use serde::Serialize;

// ============================================================================
// SIGNAL TYPES
// ============================================================================

/// Fixed rationale attached to every derived signal.
pub const SIGNAL_REASON: &str =
    "Price action + market structure analysis (support/resistance + HH/HL levels)";

/// Trade direction, serialized as "BUY" / "SELL" on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Buy,
    Sell,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Buy => write!(f, "BUY"),
            Direction::Sell => write!(f, "SELL"),
        }
    }
}

/// A derived per-pair trading signal in wire form.
///
/// Stop-loss/take-profit levels are 5-decimal strings; field names match the
/// public API payload exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signal {
    #[serde(rename = "shortSignal")]
    pub short_signal: Direction,
    #[serde(rename = "shortSL")]
    pub short_sl: String,
    #[serde(rename = "shortTP")]
    pub short_tp: String,
    #[serde(rename = "longSignal")]
    pub long_signal: Direction,
    #[serde(rename = "longSL")]
    pub long_sl: String,
    #[serde(rename = "longTP")]
    pub long_tp: String,
    pub reason: &'static str,
}

// ============================================================================
// SIGNAL DERIVATION
// ============================================================================

/// Derive the placeholder signal for an exchange rate.
///
/// Pure and deterministic: the same rate always yields the same signal.
/// Stop-loss uses a 0.5% offset against the direction, take-profit 0.5% with
/// it on the short horizon and 1% on the long horizon. Levels are formatted
/// from the f64 products, so the strings reflect IEEE-754 rounding.
pub fn derive_signal(rate: f64) -> Signal {
    let parity = rate % 2.0;
    let (short_signal, long_signal) = if parity > 1.0 {
        (Direction::Buy, Direction::Sell)
    } else {
        (Direction::Sell, Direction::Buy)
    };

    let short_sl = rate * if short_signal == Direction::Buy { 0.995 } else { 1.005 };
    let short_tp = rate * if short_signal == Direction::Buy { 1.005 } else { 0.995 };
    let long_sl = rate * if long_signal == Direction::Buy { 0.995 } else { 1.005 };
    let long_tp = rate * if long_signal == Direction::Buy { 1.01 } else { 0.99 };

    Signal {
        short_signal,
        short_sl: format_level(short_sl),
        short_tp: format_level(short_tp),
        long_signal,
        long_sl: format_level(long_sl),
        long_tp: format_level(long_tp),
        reason: SIGNAL_REASON,
    }
}

/// Price levels are serialized with exactly 5 decimal places.
fn format_level(level: f64) -> String {
    format!("{:.5}", level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_above_parity_threshold_goes_short_buy() {
        // 1.0850 % 2.0 = 1.085 > 1.0
        let signal = derive_signal(1.0850);
        assert_eq!(signal.short_signal, Direction::Buy);
        assert_eq!(signal.long_signal, Direction::Sell);
        assert_eq!(signal.short_sl, "1.07957");
        assert_eq!(signal.short_tp, "1.09042");
        assert_eq!(signal.long_sl, "1.09042");
        assert_eq!(signal.long_tp, "1.07415");
        assert_eq!(signal.reason, SIGNAL_REASON);
    }

    #[test]
    fn test_rate_below_parity_threshold_goes_short_sell() {
        let signal = derive_signal(0.5);
        assert_eq!(signal.short_signal, Direction::Sell);
        assert_eq!(signal.long_signal, Direction::Buy);
        // Multipliers follow the direction, not the raw comparison:
        // SELL stop sits above the rate, BUY stop below it.
        assert_eq!(signal.short_sl, "0.50250");
        assert_eq!(signal.short_tp, "0.49750");
        assert_eq!(signal.long_sl, "0.49750");
        assert_eq!(signal.long_tp, "0.50500");
    }

    #[test]
    fn test_branch_is_modulo_not_magnitude() {
        // 2.5 % 2.0 = 0.5, so a rate above 1 can still land in the SELL branch
        let wrapped = derive_signal(2.5);
        assert_eq!(wrapped.short_signal, Direction::Sell);
        assert_eq!(wrapped.long_signal, Direction::Buy);

        // 3.2 % 2.0 = 1.2 > 1.0
        let above = derive_signal(3.2);
        assert_eq!(above.short_signal, Direction::Buy);
        assert_eq!(above.long_signal, Direction::Sell);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        assert_eq!(derive_signal(1.0850), derive_signal(1.0850));
        assert_eq!(derive_signal(142.37), derive_signal(142.37));
    }

    #[test]
    fn test_wire_field_names_and_direction_encoding() {
        let value = serde_json::to_value(derive_signal(1.0850)).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "shortSignal",
            "shortSL",
            "shortTP",
            "longSignal",
            "longSL",
            "longTP",
            "reason",
        ] {
            assert!(obj.contains_key(key), "missing wire field {}", key);
        }
        assert_eq!(obj.len(), 7);
        assert_eq!(value["shortSignal"], "BUY");
        assert_eq!(value["longSignal"], "SELL");
    }

    #[test]
    fn test_levels_always_have_five_decimals() {
        for rate in [0.0071, 0.5, 1.0850, 18.92, 142.37] {
            let signal = derive_signal(rate);
            for level in [&signal.short_sl, &signal.short_tp, &signal.long_sl, &signal.long_tp] {
                let (_, decimals) = level.split_once('.').unwrap();
                assert_eq!(decimals.len(), 5, "level {} for rate {}", level, rate);
            }
        }
    }
}
