// 8.0: the market itself. owns the participant registry, the evolving
// price/volume state, and the per-tick orchestration: poll strategies,
// build the book, clear, settle, emit.
//
// everything is an explicit context object so several independent markets
// can run side by side in one process.

use crate::book::OrderBook;
use crate::config::SimConfig;
use crate::curve::CurveError;
use crate::events::{Event, EventCollector, EventEmitter, EventPayload, FillEvent, TickSettledEvent};
use crate::participant::Participant;
use crate::settlement;
use crate::solver;
use crate::strategy::Strategy;
use crate::types::{Price, Side, Tick};
use std::collections::BTreeMap;

// 8.1: price and volume carried from one tick into the next. this is the
// "previous observation" every strategy conditions on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketState {
    pub price: Price,
    pub volume: f64,
}

/// What one tick produced.
#[derive(Debug, Clone)]
pub struct TickResult {
    pub tick: Tick,
    pub price: Price,
    pub volume: f64,
    pub fills: Vec<FillEvent>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MarketError {
    /// A strategy produced a curve the market cannot price. This is a bug
    /// in the strategy, so the tick aborts rather than clamping.
    #[error("participant {participant} submitted a bad {side:?} curve: {source}")]
    InvalidCurve {
        participant: String,
        side: Side,
        #[source]
        source: CurveError,
    },

    /// Aggregate buys and sells disagree at the settled price. This means
    /// the solver and settlement disagree about the same curves, so the
    /// run aborts.
    #[error("volume mismatch after settlement: bought {bought}, sold {sold} (tolerance {tolerance})")]
    VolumeMismatch {
        bought: f64,
        sold: f64,
        tolerance: f64,
    },

    /// A curve was booked under a name with no registered participant.
    #[error("participant {0} has a booked curve but no account")]
    UnknownParticipant(String),
}

// 8.2: the context object.
pub struct Market {
    config: SimConfig,
    participants: BTreeMap<String, Participant>,
    state: MarketState,
    clock: Tick,
    events: EventCollector,
}

impl Default for Market {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl Market {
    pub fn new(config: SimConfig) -> Self {
        let state = MarketState {
            price: config.initial_price,
            volume: 0.0,
        };
        Self {
            config,
            participants: BTreeMap::new(),
            state,
            clock: Tick::zero(),
            events: EventCollector::new(),
        }
    }

    /// Register a strategy under a unique name with zero cash and position.
    /// Registering the same name again replaces the previous participant,
    /// balances included.
    pub fn register(&mut self, name: impl Into<String>, strategy: Box<dyn Strategy>) {
        self.participants
            .insert(name.into(), Participant::new(strategy));
    }

    pub fn participant(&self, name: &str) -> Option<&Participant> {
        self.participants.get(name)
    }

    pub fn participant_names(&self) -> impl Iterator<Item = &str> {
        self.participants.keys().map(String::as_str)
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn state(&self) -> MarketState {
        self.state
    }

    pub fn price(&self) -> Price {
        self.state.price
    }

    pub fn volume(&self) -> f64 {
        self.state.volume
    }

    pub fn current_tick(&self) -> Tick {
        self.clock
    }

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    /// A participant's mark-to-market equity at the current price.
    pub fn equity(&self, name: &str) -> Option<f64> {
        self.participants
            .get(name)
            .map(|p| p.equity(self.state.price))
    }

    /// Sum of all participants' equity at the current price.
    pub fn total_equity(&self) -> f64 {
        self.participants
            .values()
            .map(|p| p.equity(self.state.price))
            .sum()
    }

    // 8.3: one full round: poll every strategy with the previous tick's
    // price and volume, assemble the validated book, find the clearing
    // price, settle, then roll the state forward.
    pub fn tick(&mut self) -> Result<TickResult, MarketError> {
        let MarketState { price, volume } = self.state;

        let mut book = OrderBook::new();
        for (name, participant) in self.participants.iter_mut() {
            let orders = participant.observe(price, volume);
            if let Some(curve) = orders.buy {
                book.insert_bid(name.clone(), curve)
                    .map_err(|source| MarketError::InvalidCurve {
                        participant: name.clone(),
                        side: Side::Buy,
                        source,
                    })?;
            }
            if let Some(curve) = orders.sell {
                book.insert_ask(name.clone(), curve)
                    .map_err(|source| MarketError::InvalidCurve {
                        participant: name.clone(),
                        side: Side::Sell,
                        source,
                    })?;
            }
        }

        let clearing = solver::clear(&book);
        let outcome =
            settlement::execute_trades(&book, clearing, &mut self.participants, &self.config)?;

        self.state = MarketState {
            price: clearing,
            volume: outcome.bought,
        };

        let tick = self.clock;
        for fill in &outcome.fills {
            log::debug!(
                "tick {tick}: {} {} {:.6} at {}",
                fill.participant,
                fill.side,
                fill.shares,
                fill.price
            );
            self.emit(tick, EventPayload::Fill(fill.clone()));
        }
        log::info!(
            "tick {tick} settled at {} volume {:.6}",
            clearing,
            outcome.bought
        );
        self.emit(
            tick,
            EventPayload::TickSettled(TickSettledEvent {
                price: clearing,
                volume: outcome.bought,
            }),
        );

        self.clock = self.clock.next();
        Ok(TickResult {
            tick,
            price: clearing,
            volume: outcome.bought,
            fills: outcome.fills,
        })
    }

    /// Drive `ticks` sequential rounds. Stops at the first failure; ticks
    /// already settled stay settled.
    pub fn run(&mut self, ticks: u64) -> Result<(), MarketError> {
        for _ in 0..ticks {
            self.tick()?;
        }
        Ok(())
    }

    fn emit(&mut self, tick: Tick, payload: EventPayload) {
        let event = Event::new(self.events.next_id(), tick, payload);

        if self.config.verbose {
            println!("[Event {}] {:?}", event.id.0, event.payload);
        }

        self.events.emit(event);
        self.events.truncate_to(self.config.max_events);
    }
}
