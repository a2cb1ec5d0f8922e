// 6.0: pluggable trading strategies. a strategy sees one observation per
// tick (previous clearing price and volume, plus its own cash and position)
// and answers with at most one curve per side. strategies own any private
// state they need, including RNGs; the engine only tracks cash and position.

use crate::curve::OrderCurve;
use crate::types::Price;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// What a strategy gets to see each tick.
#[derive(Debug, Clone, Copy)]
pub struct Observation {
    /// Clearing price of the previous tick.
    pub price: Price,
    /// Traded volume of the previous tick.
    pub volume: f64,
    /// The strategy's own cash balance.
    pub cash: f64,
    /// The strategy's own position, signed.
    pub position: f64,
}

/// What a strategy answers with. Absence of a side means no order there
/// this tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Orders {
    pub buy: Option<OrderCurve>,
    pub sell: Option<OrderCurve>,
}

impl Orders {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn buy_only(curve: OrderCurve) -> Self {
        Self {
            buy: Some(curve),
            sell: None,
        }
    }

    pub fn sell_only(curve: OrderCurve) -> Self {
        Self {
            buy: None,
            sell: Some(curve),
        }
    }

    pub fn two_sided(buy: OrderCurve, sell: OrderCurve) -> Self {
        Self {
            buy: Some(buy),
            sell: Some(sell),
        }
    }
}

// 6.1: the single capability every participant implements. &mut self because
// strategies may carry private randomness.
pub trait Strategy {
    fn observe(&mut self, obs: &Observation) -> Orders;
}

// 6.2: sits out every tick. useful as a control in mixed populations.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoNothing;

impl Strategy for DoNothing {
    fn observe(&mut self, _obs: &Observation) -> Orders {
        Orders::none()
    }
}

// 6.3: quotes one share at each extreme of the price range. only trades
// when the market swings hard, harvesting the spread between the bands.
#[derive(Debug, Clone, Copy, Default)]
pub struct WideSpreadMarketMaker;

impl Strategy for WideSpreadMarketMaker {
    fn observe(&mut self, _obs: &Observation) -> Orders {
        Orders::two_sided(
            OrderCurve {
                hi: 0.10,
                lo: 0.0,
                shares: 1.0,
            },
            OrderCurve {
                hi: 1.0,
                lo: 0.90,
                shares: 1.0,
            },
        )
    }
}

// 6.4: ramps from the last price outward on both sides, sized so a fixed
// bankroll covers the average fill cost of each ramp. the buy ramp's
// average cost per share is price/2; the sell ramp ties up (1 - price)/2
// of capital per share since the short side posts the complement.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroSpreadMarketMaker;

impl ZeroSpreadMarketMaker {
    const BANKROLL: f64 = 10.0;
}

impl Strategy for ZeroSpreadMarketMaker {
    fn observe(&mut self, obs: &Observation) -> Orders {
        let price = obs.price.value();
        let budget = Self::BANKROLL + obs.cash;
        let mut orders = Orders::none();

        // at price 0 the buy ramp would collapse to a point, omit that side
        if price > 0.0 {
            let buy_price = 0.5 * price;
            let buy_shares = (budget / buy_price).max(0.0);
            orders.buy = Some(OrderCurve {
                hi: price,
                lo: 0.0,
                shares: buy_shares,
            });
        }

        // and at price 1 the sell ramp collapses the same way
        if price < 1.0 {
            let sell_price = 0.5 * (price + 1.0);
            let sell_capital_cost = 1.0 - sell_price;
            let sell_shares = (budget / sell_capital_cost).max(0.0);
            orders.sell = Some(OrderCurve {
                hi: 1.0,
                lo: price,
                shares: sell_shares,
            });
        }

        orders
    }
}

// 6.5: bids near the top of the range every tick, a steady one-way demand
// source for stressing the clearing logic.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysBuy;

impl Strategy for AlwaysBuy {
    fn observe(&mut self, _obs: &Observation) -> Orders {
        Orders::buy_only(OrderCurve {
            hi: 1.0,
            lo: 0.99,
            shares: 0.01,
        })
    }
}

// 6.6: random order flow. accumulates while flat, dumps near the bottom of
// the range once long. sizes are a random fraction of a tenth of the
// bankroll, assuming worst-case fill cost of one per share.
#[derive(Debug)]
pub struct RandomWalk {
    rng: StdRng,
}

impl RandomWalk {
    const BANKROLL: f64 = 1.0;
    const WORST_CASE_COST: f64 = 1.0;

    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded construction for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomWalk {
    fn observe(&mut self, obs: &Observation) -> Orders {
        let budget = Self::BANKROLL + obs.cash;
        let max_shares = (0.1 * budget / Self::WORST_CASE_COST).max(0.0);
        let shares = self.rng.random::<f64>() * max_shares;

        if obs.position > 0.0 {
            Orders::sell_only(OrderCurve {
                hi: 0.01,
                lo: 0.0,
                shares,
            })
        } else {
            Orders::buy_only(OrderCurve {
                hi: 1.0,
                lo: 0.99,
                shares,
            })
        }
    }
}

// 6.7: replays a fixed order set every tick. the workhorse for tests and
// hand-built scenarios.
#[derive(Debug, Clone, Copy)]
pub struct FixedOrders {
    orders: Orders,
}

impl FixedOrders {
    pub fn new(orders: Orders) -> Self {
        Self { orders }
    }
}

impl Strategy for FixedOrders {
    fn observe(&mut self, _obs: &Observation) -> Orders {
        self.orders
    }
}
