//! Participant accounting.
//!
//! A participant is a registered strategy plus the cash and position the
//! engine tracks for it across the whole run. Both start at zero and are
//! unbounded in either direction: shorting and uncollateralized buying are
//! allowed by design.

use crate::strategy::{Observation, Orders, Strategy};
use crate::types::Price;

pub struct Participant {
    strategy: Box<dyn Strategy>,
    pub cash: f64,
    pub position: f64,
}

impl Participant {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self {
            strategy,
            cash: 0.0,
            position: 0.0,
        }
    }

    /// Poll the strategy with the previous tick's market state and this
    /// participant's live balances.
    pub fn observe(&mut self, price: Price, volume: f64) -> Orders {
        let obs = Observation {
            price,
            volume,
            cash: self.cash,
            position: self.position,
        };
        self.strategy.observe(&obs)
    }

    /// Apply a signed trade at the given price. Buys (shares > 0) pay
    /// `price` per share; sells pay out `1 - price` per share, the cost of
    /// the short side of a unit-payout contract. Position moves by the
    /// signed quantity either way.
    pub fn apply_trade(&mut self, shares: f64, price: Price) {
        if shares > 0.0 {
            self.cash -= price.value() * shares;
        } else {
            self.cash -= price.complement() * shares;
        }
        self.position += shares;
    }

    /// Mark-to-market equity at the given price.
    pub fn equity(&self, price: Price) -> f64 {
        self.cash + self.position * price.value()
    }
}

impl std::fmt::Debug for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Participant")
            .field("cash", &self.cash)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
