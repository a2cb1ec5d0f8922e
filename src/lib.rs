// auction-core: continuous double-auction market simulator.
// solver-first: curve math, the clearing bisection and settlement
// consistency take priority. all computation is deterministic given the
// strategies' RNG seeds, with no external I/O.
//
// file map (search X.0 for structs, X.1+ for logic):
//   1.x  types.rs: primitives: Price, Side, Tick
//   2.x  curve.rs: piecewise-linear order curves and validation
//   3.x  book.rs: per-tick order book, demand/supply aggregation
//   4.x  solver.rs: equilibrium price bisection
//   5.x  participant.rs: cash/position accounting, trade application
//   6.x  strategy.rs: pluggable strategies: DoNothing, WideSpreadMM,
//        ZeroSpreadMM, AlwaysBuy, RandomWalk, FixedOrders
//   7.x  settlement.rs: fills at the cleared price, volume balance check
//   8.x  market.rs: market context, tick orchestration, run loop
//   9.x  events.rs: fill and tick-settled events for audit
//   10.x config.rs: simulation settings

// clearing pipeline
pub mod book;
pub mod curve;
pub mod settlement;
pub mod solver;

// participants and orchestration
pub mod market;
pub mod participant;
pub mod strategy;

// supporting modules
pub mod config;
pub mod events;
pub mod types;

// re exports for convenience
pub use book::*;
pub use config::*;
pub use curve::*;
pub use events::*;
pub use market::*;
pub use participant::*;
pub use settlement::*;
pub use solver::clear;
pub use strategy::*;
pub use types::*;
