// 10.0: all settings in one place. thresholds, opening quote, event
// retention. every field has a sensible default so `Market::default()`
// runs out of the box.

use crate::types::Price;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Opening quote strategies observe on the first tick.
    pub initial_price: Price,
    /// Maximum tolerated gap between total shares bought and sold per tick.
    /// A larger gap means the solver and settlement disagree, which is a
    /// bug, not a market condition.
    pub volume_tolerance: f64,
    /// Fills at or below this share quantity are settled but not reported.
    pub fill_report_threshold: f64,
    /// Maximum number of events to retain in memory.
    pub max_events: usize,
    /// Echo every event to stdout.
    pub verbose: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            initial_price: Price::midpoint(),
            volume_tolerance: 1e-6,
            fill_report_threshold: 1e-6,
            max_events: 100_000,
            verbose: false,
        }
    }
}
