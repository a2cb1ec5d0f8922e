//! Double-auction clearing simulation.
//!
//! Demonstrates the full engine lifecycle: strategy polling, equilibrium
//! search, settlement, and account evolution across ticks.

use auction_core::*;

fn main() {
    env_logger::init();

    println!("Double-Auction Clearing Engine Simulation");
    println!("Single Asset, Unit-Payout Contracts, Price on [0, 1]\n");

    scenario_1_crossed_curves();
    scenario_2_market_maker_ecology();
    scenario_3_empty_market();

    println!("\nAll simulations completed successfully.");
}

/// Two participants with symmetric curves crossing at the midpoint.
fn scenario_1_crossed_curves() {
    println!("Scenario 1: Symmetric Crossed Curves\n");

    let mut market = Market::default();
    let curve = OrderCurve::new_unchecked(0.6, 0.4, 10.0);
    market.register("alice", Box::new(FixedOrders::new(Orders::buy_only(curve))));
    market.register("bob", Box::new(FixedOrders::new(Orders::sell_only(curve))));

    println!("  Alice bids 10 shares on [0.40, 0.60]");
    println!("  Bob offers 10 shares on [0.40, 0.60]\n");

    let result = market.tick().expect("tick failed");
    print_fills(&result);
    println!("  Cleared at {} with volume {:.6}\n", result.price, result.volume);

    print_accounts(&market, &["alice", "bob"]);
    println!();
}

/// The default strategy roster trading against each other.
fn scenario_2_market_maker_ecology() {
    println!("Scenario 2: Market Maker Ecology\n");

    let mut market = Market::default();
    market.register("DoNothing", Box::new(DoNothing));
    market.register("WideSpreadMM", Box::new(WideSpreadMarketMaker));
    market.register("ZeroSpreadMM", Box::new(ZeroSpreadMarketMaker));
    market.register("RandomWalk1", Box::new(RandomWalk::new()));
    market.register("RandomWalk2", Box::new(RandomWalk::new()));

    println!("  Registered: DoNothing, WideSpreadMM, ZeroSpreadMM, RandomWalk1, RandomWalk2\n");

    for _ in 0..3 {
        let result = market.tick().expect("tick failed");
        print_fills(&result);
        println!("  tick {}: price {} volume {:.6}\n", result.tick, result.price, result.volume);
    }

    print_accounts(
        &market,
        &["DoNothing", "WideSpreadMM", "ZeroSpreadMM", "RandomWalk1", "RandomWalk2"],
    );
    println!("  Events recorded: {}\n", market.events().len());
}

/// No orders at all: the bisection still terminates, at the upper bound.
fn scenario_3_empty_market() {
    println!("Scenario 3: Empty Market\n");

    let mut market = Market::default();
    let result = market.tick().expect("tick failed");

    println!("  No participants registered");
    println!("  Cleared at {} with volume {:.6}", result.price, result.volume);
}

fn print_fills(result: &TickResult) {
    for fill in &result.fills {
        println!(
            "  {} {} {:.6} at {}",
            fill.participant, fill.side, fill.shares, fill.price
        );
    }
}

fn print_accounts(market: &Market, names: &[&str]) {
    println!("  Accounts (cash, position, equity at {}):", market.price());
    for name in names {
        let p = market.participant(name).expect("unregistered name");
        let equity = market.equity(name).expect("unregistered name");
        println!(
            "    {:<14} cash {:>10.6}  position {:>10.6}  equity {:>10.6}",
            name, p.cash, p.position, equity
        );
    }
}
