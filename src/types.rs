// 1.0: primitives. prices, trade direction, logical time. each is a newtype
// so the compiler catches unit mixups between prices, share counts and ticks.

use serde::{Deserialize, Serialize};
use std::fmt;

// 1.1: normalized price. the market quotes a single asset whose price lives
// on [0, 1]: a filled contract pays out exactly one unit, so price is the
// cost of the long side and (1 - price) the cost of the short side.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        // NaN fails both comparisons and is rejected here
        if (0.0..=1.0).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn new_unchecked(value: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&value));
        Self(value)
    }

    // opening quote for a fresh market
    pub fn midpoint() -> Self {
        Self(0.5)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    // cost per share of the short side under the unit-payout convention
    pub fn complement(&self) -> f64 {
        1.0 - self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

// 1.2: trade direction. Buy = acquire shares, Sell = give them up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn sign(&self) -> f64 {
        match self {
            Side::Buy => 1.0,
            Side::Sell => -1.0,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "bought"),
            Side::Sell => write!(f, "sold"),
        }
    }
}

// 1.3: logical time. one tick = one full order-collection/clearing/settlement
// round. there is no wall clock anywhere in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tick(pub u64);

impl Tick {
    pub fn zero() -> Self {
        Self(0)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_accepts_unit_interval() {
        assert!(Price::new(0.0).is_some());
        assert!(Price::new(0.5).is_some());
        assert!(Price::new(1.0).is_some());
    }

    #[test]
    fn price_rejects_out_of_range() {
        assert!(Price::new(-0.1).is_none());
        assert!(Price::new(1.1).is_none());
        assert!(Price::new(f64::NAN).is_none());
        assert!(Price::new(f64::INFINITY).is_none());
    }

    #[test]
    fn price_complement() {
        let p = Price::new(0.3).unwrap();
        assert!((p.complement() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn side_sign_and_opposite() {
        assert_eq!(Side::Buy.sign(), 1.0);
        assert_eq!(Side::Sell.sign(), -1.0);
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn tick_advances() {
        let t = Tick::zero();
        assert_eq!(t.next(), Tick(1));
        assert_eq!(t.next().next().value(), 2);
    }
}
