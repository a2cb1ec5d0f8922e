//! Property-based tests for the clearing core.
//!
//! These verify the aggregation, solver and settlement invariants under
//! random well-formed curve sets.

// both auction_core and proptest's prelude export a `Strategy` trait, so
// the crate's names come in explicitly
use auction_core::{clear, execute_trades, DoNothing, OrderBook, OrderCurve, Participant, SimConfig};
use proptest::prelude::*;
use std::collections::BTreeMap;

// Strategies for generating test data

// well-formed curve: 0 <= lo < hi <= 1 with a band wide enough that fill
// fractions stay numerically tame
fn curve_strategy() -> impl Strategy<Value = OrderCurve> {
    (0.0..0.5f64, 0.01..0.5f64, 0.0..1000.0f64)
        .prop_map(|(lo, width, shares)| OrderCurve::new_unchecked(lo + width, lo, shares))
}

fn curves_strategy(max: usize) -> impl Strategy<Value = Vec<OrderCurve>> {
    prop::collection::vec(curve_strategy(), 0..max)
}

fn build_book(bids: &[OrderCurve], asks: &[OrderCurve]) -> OrderBook {
    let mut book = OrderBook::new();
    for (i, curve) in bids.iter().enumerate() {
        book.insert_bid(format!("b{i}"), *curve).unwrap();
    }
    for (i, curve) in asks.iter().enumerate() {
        book.insert_ask(format!("s{i}"), *curve).unwrap();
    }
    book
}

fn build_participants(book: &OrderBook) -> BTreeMap<String, Participant> {
    book.bids()
        .keys()
        .chain(book.asks().keys())
        .map(|name| (name.clone(), Participant::new(Box::new(DoNothing))))
        .collect()
}

proptest! {
    /// Aggregate demand never increases with price, supply never decreases
    #[test]
    fn aggregates_are_monotonic(
        bids in curves_strategy(8),
        asks in curves_strategy(8),
        p1 in 0.0..=1.0f64,
        p2 in 0.0..=1.0f64,
    ) {
        let book = build_book(&bids, &asks);
        let (low, high) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };

        prop_assert!(book.demand_above(low) >= book.demand_above(high));
        prop_assert!(book.supply_below(low) <= book.supply_below(high));
    }

    /// The solver always lands inside the unit interval
    #[test]
    fn clearing_price_in_unit_interval(
        bids in curves_strategy(8),
        asks in curves_strategy(8),
    ) {
        let book = build_book(&bids, &asks);
        let price = clear(&book).value();
        prop_assert!((0.0..=1.0).contains(&price));
    }

    /// At the cleared price, residual demand/supply imbalance is negligible
    #[test]
    fn clearing_balances_the_book(
        bids in curves_strategy(8),
        asks in curves_strategy(8),
    ) {
        let book = build_book(&bids, &asks);
        let price = clear(&book).value();
        let gap = (book.demand_above(price) - book.supply_below(price)).abs();
        prop_assert!(gap <= 1e-6, "residual imbalance {} at {}", gap, price);
    }

    /// Settling at the cleared price always balances bought against sold
    #[test]
    fn settlement_volume_balances(
        bids in curves_strategy(8),
        asks in curves_strategy(8),
    ) {
        let book = build_book(&bids, &asks);
        let mut participants = build_participants(&book);
        let price = clear(&book);

        let settlement = execute_trades(&book, price, &mut participants, &SimConfig::default());
        prop_assert!(settlement.is_ok(), "settlement failed: {:?}", settlement.err());

        let settlement = settlement.unwrap();
        prop_assert!((settlement.bought - settlement.sold).abs() <= 1e-6);
        prop_assert!(settlement.bought >= 0.0);
    }

    /// Cash and position follow the trade formulas exactly: a buyer pays
    /// price per filled share, a seller receives the complement
    #[test]
    fn settlement_accounting_matches_formulas(
        bids in curves_strategy(8),
        asks in curves_strategy(8),
    ) {
        let book = build_book(&bids, &asks);
        let mut participants = build_participants(&book);
        let price = clear(&book);

        prop_assume!(execute_trades(&book, price, &mut participants, &SimConfig::default()).is_ok());

        let p = price.value();
        for (name, curve) in book.bids() {
            let fill = curve.demand_at(p);
            let account = &participants[name];
            prop_assert_eq!(account.position, fill);
            prop_assert_eq!(account.cash, -(p * fill));
        }
        for (name, curve) in book.asks() {
            let fill = curve.supply_at(p);
            let account = &participants[name];
            prop_assert_eq!(account.position, -fill);
            prop_assert_eq!(account.cash, -((1.0 - p) * -fill));
        }
    }

    /// Per-curve fills never exceed the curve's share limit
    #[test]
    fn fills_respect_share_limits(
        curve in curve_strategy(),
        price in 0.0..=1.0f64,
    ) {
        let demand = curve.demand_at(price);
        let supply = curve.supply_at(price);
        prop_assert!((0.0..=curve.shares).contains(&demand));
        prop_assert!((0.0..=curve.shares).contains(&supply));
    }
}
