//! Equilibrium price discovery.
//!
//! Bracketed bisection over [0, 1]. Aggregate demand is non-increasing and
//! aggregate supply non-decreasing in price, so demand - supply crosses zero
//! at most once and the bracket always contains the crossing.

use crate::book::OrderBook;
use crate::types::Price;

/// Find the price at which aggregate demand meets aggregate supply.
///
/// Total over any validated book, including an empty one. The loop halves
/// the bracket until the midpoint collides with an endpoint at f64
/// precision, so it needs no iteration cap: the mantissa runs out after
/// roughly 52 halvings of the active bracket.
///
/// Tie-break: when demand equals supply at the midpoint the bracket moves
/// up (`lo = mid`). A book with no curves therefore resolves to exactly
/// 1.0, the upper endpoint.
pub fn clear(book: &OrderBook) -> Price {
    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    loop {
        let mid = 0.5 * (lo + hi);
        if mid == lo || mid == hi {
            return Price::new_unchecked(mid);
        }
        let demand = book.demand_above(mid);
        let supply = book.supply_below(mid);
        if demand < supply {
            hi = mid;
        } else {
            lo = mid;
        }
    }
}
