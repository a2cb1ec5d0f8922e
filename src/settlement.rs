// 7.0: settlement. once the solver fixes a price, every curve on the book
// is filled at that price: each side's fill is recomputed from its own
// curve, cash and position move, and the two sides must balance.

use crate::book::OrderBook;
use crate::config::SimConfig;
use crate::curve::OrderCurve;
use crate::events::FillEvent;
use crate::market::MarketError;
use crate::participant::Participant;
use crate::types::{Price, Side};
use std::collections::BTreeMap;

/// Outcome of settling one tick.
#[derive(Debug, Clone)]
pub struct Settlement {
    /// Total shares bought, the tick's traded volume.
    pub bought: f64,
    /// Total shares sold. Within tolerance of `bought` or settlement fails.
    pub sold: f64,
    /// Fills above the reporting threshold, in book order, buys first.
    pub fills: Vec<FillEvent>,
}

// 7.1: fill every curve at the clearing price and move the money.
// buys and sells share one code path: a fill is applied with the side's
// sign, and the participant's accounting handles the rest.
pub fn execute_trades(
    book: &OrderBook,
    price: Price,
    participants: &mut BTreeMap<String, Participant>,
    config: &SimConfig,
) -> Result<Settlement, MarketError> {
    let mut fills = Vec::new();

    let bought = settle_side(book.bids(), Side::Buy, price, participants, config, &mut fills)?;
    let sold = settle_side(book.asks(), Side::Sell, price, participants, config, &mut fills)?;

    // both totals derive from the same curves the solver bisected over, so
    // a gap beyond tolerance means the engine itself is inconsistent
    let mismatch = (bought - sold).abs();
    if mismatch > config.volume_tolerance {
        return Err(MarketError::VolumeMismatch {
            bought,
            sold,
            tolerance: config.volume_tolerance,
        });
    }

    Ok(Settlement {
        bought,
        sold,
        fills,
    })
}

fn settle_side(
    curves: &BTreeMap<String, OrderCurve>,
    side: Side,
    price: Price,
    participants: &mut BTreeMap<String, Participant>,
    config: &SimConfig,
    fills: &mut Vec<FillEvent>,
) -> Result<f64, MarketError> {
    let mut total = 0.0;
    for (name, curve) in curves {
        let shares = match side {
            Side::Buy => curve.demand_at(price.value()),
            Side::Sell => curve.supply_at(price.value()),
        };

        let participant = participants
            .get_mut(name)
            .ok_or_else(|| MarketError::UnknownParticipant(name.clone()))?;
        participant.apply_trade(side.sign() * shares, price);
        total += shares;

        if shares > config.fill_report_threshold {
            fills.push(FillEvent {
                participant: name.clone(),
                side,
                shares,
                price,
            });
        }
    }
    Ok(total)
}
