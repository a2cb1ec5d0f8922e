// 9.0: observability. settlement and tick completion produce events for
// audit trails and external sinks. events are observational only, nothing
// in the engine reads them back.

use crate::types::{Price, Side, Tick};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u64);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub tick: Tick,
    pub payload: EventPayload,
}

impl Event {
    pub fn new(id: EventId, tick: Tick, payload: EventPayload) -> Self {
        Self { id, tick, payload }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventPayload {
    /// A participant's curve was filled at the clearing price. Only fills
    /// above the reporting threshold are emitted.
    Fill(FillEvent),
    /// A tick finished clearing and settling.
    TickSettled(TickSettledEvent),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillEvent {
    pub participant: String,
    pub side: Side,
    /// Unsigned share quantity.
    pub shares: f64,
    pub price: Price,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TickSettledEvent {
    pub price: Price,
    pub volume: f64,
}

pub trait EventEmitter {
    fn emit(&mut self, event: Event);
}

#[derive(Debug, Default)]
pub struct EventCollector {
    events: Vec<Event>,
    next_id: u64,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn next_id(&mut self) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Drop oldest events beyond `max`.
    pub fn truncate_to(&mut self, max: usize) {
        if self.events.len() > max {
            let drain_count = self.events.len() - max;
            self.events.drain(0..drain_count);
        }
    }
}

impl EventEmitter for EventCollector {
    fn emit(&mut self, event: Event) {
        self.events.push(event);
    }
}
