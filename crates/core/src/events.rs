use crate::AttackResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    HistoryAccepted { spins: usize },
    AttackArmed {
        label: String,
        score: f64,
        win_limit: u32,
    },
    NoAttackAvailable,
    SpinRecorded { number: u8 },
    AttackResolved {
        label: String,
        result: AttackResult,
        spins_taken: u32,
    },
    SessionCompleted { wins: usize, losses: usize },
    SessionReset,
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
