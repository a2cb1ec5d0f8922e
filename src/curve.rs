// 2.0: order curves. a curve is a linear ramp of willingness to trade
// between two price bounds, the only order shape the market accepts.
//
// for a buy curve: at price hi zero shares are wanted, at price lo the full
// `shares` is wanted. a sell curve mirrors this: zero supplied at lo, the
// full `shares` supplied at hi. prices outside [lo, hi] clamp to the
// nearest bound, so a curve's fill is defined for every price in [0, 1].

use serde::{Deserialize, Serialize};

// 2.1: the ramp itself. invariants: 0 <= lo < hi <= 1 (strict, hi == lo
// would divide by zero in the fill fraction), shares >= 0, all fields
// finite. construction via struct literal is allowed; the book validates
// at insertion time, before any curve reaches the solver or settlement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderCurve {
    /// Upper price bound.
    pub hi: f64,
    /// Lower price bound.
    pub lo: f64,
    /// Maximum quantity transactable across the full span.
    pub shares: f64,
}

impl OrderCurve {
    #[must_use]
    pub fn new(hi: f64, lo: f64, shares: f64) -> Result<Self, CurveError> {
        let curve = Self { hi, lo, shares };
        curve.validate()?;
        Ok(curve)
    }

    pub fn new_unchecked(hi: f64, lo: f64, shares: f64) -> Self {
        let curve = Self { hi, lo, shares };
        debug_assert!(curve.validate().is_ok());
        curve
    }

    pub fn validate(&self) -> Result<(), CurveError> {
        if !(self.hi.is_finite() && self.lo.is_finite() && self.shares.is_finite()) {
            return Err(CurveError::NonFinite {
                hi: self.hi,
                lo: self.lo,
                shares: self.shares,
            });
        }
        if self.hi <= self.lo {
            return Err(CurveError::Degenerate {
                hi: self.hi,
                lo: self.lo,
            });
        }
        if self.lo < 0.0 || self.hi > 1.0 {
            return Err(CurveError::OutOfBounds {
                hi: self.hi,
                lo: self.lo,
            });
        }
        if self.shares < 0.0 {
            return Err(CurveError::NegativeShares {
                shares: self.shares,
            });
        }
        Ok(())
    }

    fn clamp(&self, price: f64) -> f64 {
        price.min(self.hi).max(self.lo)
    }

    // 2.2: shares still wanted at `price` when this is a buy curve.
    // non-increasing in price: full shares at lo, zero at hi.
    pub fn demand_at(&self, price: f64) -> f64 {
        let p = self.clamp(price);
        self.shares * (self.hi - p) / (self.hi - self.lo)
    }

    // 2.3: shares offered at `price` when this is a sell curve.
    // non-decreasing in price: zero at lo, full shares at hi.
    pub fn supply_at(&self, price: f64) -> f64 {
        let p = self.clamp(price);
        self.shares * (p - self.lo) / (self.hi - self.lo)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CurveError {
    #[error("degenerate curve: hi {hi} <= lo {lo}")]
    Degenerate { hi: f64, lo: f64 },

    #[error("curve bounds outside [0, 1]: lo {lo}, hi {hi}")]
    OutOfBounds { hi: f64, lo: f64 },

    #[error("negative share limit: {shares}")]
    NegativeShares { shares: f64 },

    #[error("non-finite curve field: hi {hi}, lo {lo}, shares {shares}")]
    NonFinite { hi: f64, lo: f64, shares: f64 },
}
