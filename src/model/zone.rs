//! Accumulation zone configuration.
//!
//! A `BuyZone` is the closed price interval considered favorable for acquiring a
//! position. Construction validates the bounds once at startup, so the rest of
//! the pipeline can rely on `bottom <= top` holding.
use crate::error::MonitorError;
use crate::result::Result;

/// Closed price interval `[bottom, top]` in quote currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuyZone {
    /// Lower bound of the zone.
    pub bottom: f64,
    /// Upper bound of the zone.
    pub top: f64,
}

impl BuyZone {
    /// Create a zone, rejecting inverted or non-finite bounds.
    pub fn new(bottom: f64, top: f64) -> Result<Self> {
        if !bottom.is_finite() || !top.is_finite() || bottom > top {
            return Err(MonitorError::InvalidZone { bottom, top });
        }
        Ok(BuyZone { bottom, top })
    }

    /// Returns `true` if `price` lies inside the zone, bounds inclusive.
    pub fn contains(&self, price: f64) -> bool {
        self.bottom <= price && price <= self.top
    }

    /// Returns `true` if `price` lies strictly below the lower bound.
    pub fn is_below(&self, price: f64) -> bool {
        price < self.bottom
    }

    /// Render the zone as the band text used in messages, e.g. `$0.090 - $0.093`.
    pub fn band(&self) -> String {
        format!("${:.3} - ${:.3}", self.bottom, self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let zone = BuyZone::new(0.090, 0.093).unwrap();
        assert!(zone.contains(0.090));
        assert!(zone.contains(0.093));
        assert!(zone.contains(0.0915));
        assert!(!zone.contains(0.0950));
        assert!(!zone.contains(0.0899));
    }

    #[test]
    fn below_is_strict() {
        let zone = BuyZone::new(0.090, 0.093).unwrap();
        assert!(zone.is_below(0.0899));
        assert!(!zone.is_below(0.090));
    }

    #[test]
    fn degenerate_single_point_zone_is_allowed() {
        let zone = BuyZone::new(0.091, 0.091).unwrap();
        assert!(zone.contains(0.091));
        assert!(!zone.contains(0.0911));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert!(matches!(
            BuyZone::new(0.093, 0.090),
            Err(MonitorError::InvalidZone { .. })
        ));
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        assert!(BuyZone::new(f64::NAN, 0.093).is_err());
        assert!(BuyZone::new(0.090, f64::INFINITY).is_err());
    }

    #[test]
    fn band_renders_to_three_decimals() {
        let zone = BuyZone::new(0.090, 0.093).unwrap();
        assert_eq!(zone.band(), "$0.090 - $0.093");
    }
}
