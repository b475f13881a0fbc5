//! Signal evaluation and message rendering.
//!
//! The evaluator is a pure function from a price and a `BuyZone` to one of three
//! mutually exclusive outcomes. Rendering produces the exact one-line messages
//! the monitor prints; prices are always shown to 6 decimal places.
use crate::model::zone::BuyZone;

/// Evaluation outcome for a single quote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// Price is inside the accumulation zone, bounds inclusive.
    InZone(f64),
    /// Price has dropped below the lower bound of the zone.
    BelowZone(f64),
    /// Price is above the zone; nothing actionable.
    NoSignal(f64),
}

impl Signal {
    /// Classify `price` against `zone`. First match wins: in-zone, then
    /// below-zone, otherwise no signal.
    ///
    /// The caller guarantees `price` is finite; the fetcher rejects NaN and
    /// infinite values before they reach this point.
    pub fn evaluate(price: f64, zone: &BuyZone) -> Self {
        if zone.contains(price) {
            Signal::InZone(price)
        } else if zone.is_below(price) {
            Signal::BelowZone(price)
        } else {
            Signal::NoSignal(price)
        }
    }

    /// Render the single output line for this signal.
    ///
    /// - name: short asset name shown in the message (e.g. `DOGE`).
    /// - zone: the configured zone, restated in the in-zone message.
    pub fn render(&self, name: &str, zone: &BuyZone) -> String {
        match self {
            Signal::InZone(price) => {
                format!("🎯 {} 进入吸筹区间: ${:.6} (目标: {})", name, price, zone.band())
            }
            Signal::BelowZone(price) => {
                format!("⚠️ {} 跌破吸筹底线: ${:.6}，需观察支撑是否失效", name, price)
            }
            Signal::NoSignal(price) => {
                format!("DEBUG: {} current price ${:.6} - No signal.", name, price)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> BuyZone {
        BuyZone::new(0.090, 0.093).unwrap()
    }

    #[test]
    fn price_inside_zone_is_in_zone() {
        assert_eq!(Signal::evaluate(0.0915, &zone()), Signal::InZone(0.0915));
    }

    #[test]
    fn boundaries_classify_as_in_zone() {
        assert_eq!(Signal::evaluate(0.090, &zone()), Signal::InZone(0.090));
        assert_eq!(Signal::evaluate(0.093, &zone()), Signal::InZone(0.093));
    }

    #[test]
    fn price_below_bottom_is_below_zone() {
        assert_eq!(Signal::evaluate(0.0899, &zone()), Signal::BelowZone(0.0899));
    }

    #[test]
    fn price_above_top_is_no_signal() {
        assert_eq!(Signal::evaluate(0.0950, &zone()), Signal::NoSignal(0.0950));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let first = Signal::evaluate(0.0912, &zone());
        let second = Signal::evaluate(0.0912, &zone());
        assert_eq!(first, second);
    }

    #[test]
    fn in_zone_message_restates_the_band() {
        let line = Signal::evaluate(0.0915, &zone()).render("DOGE", &zone());
        assert_eq!(line, "🎯 DOGE 进入吸筹区间: $0.091500 (目标: $0.090 - $0.093)");
    }

    #[test]
    fn below_zone_message_carries_the_price() {
        let line = Signal::evaluate(0.0899, &zone()).render("DOGE", &zone());
        assert_eq!(line, "⚠️ DOGE 跌破吸筹底线: $0.089900，需观察支撑是否失效");
    }

    #[test]
    fn no_signal_renders_the_debug_line() {
        let line = Signal::evaluate(0.0950, &zone()).render("DOGE", &zone());
        assert_eq!(line, "DEBUG: DOGE current price $0.095000 - No signal.");
    }

    #[test]
    fn prices_round_to_six_decimals() {
        let line = Signal::evaluate(0.09123456, &zone()).render("DOGE", &zone());
        assert!(line.contains("$0.091235"), "got: {}", line);

        let line = Signal::evaluate(0.0912344, &zone()).render("DOGE", &zone());
        assert!(line.contains("$0.091234"), "got: {}", line);
    }
}
