use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Bounded buffer of observed outcomes, most recent first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinHistory {
    spins: VecDeque<u8>,
    cap: usize,
}

impl SpinHistory {
    pub fn with_cap(cap: usize) -> Self {
        Self {
            spins: VecDeque::with_capacity(cap),
            cap,
        }
    }

    /// Replaces the buffer with a caller-supplied sequence given most recent
    /// LAST, stored most recent first.
    pub fn seed(&mut self, most_recent_last: &[u8]) {
        self.spins.clear();
        for &number in most_recent_last {
            self.spins.push_front(number);
        }
        self.drop_oldest();
    }

    pub fn record(&mut self, number: u8) {
        self.spins.push_front(number);
        self.drop_oldest();
    }

    fn drop_oldest(&mut self) {
        while self.spins.len() > self.cap {
            self.spins.pop_back();
        }
    }

    /// The most recent `window` outcomes, newest first.
    pub fn recent(&self, window: usize) -> impl Iterator<Item = u8> + '_ {
        self.spins.iter().copied().take(window)
    }

    pub fn len(&self) -> usize {
        self.spins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spins.is_empty()
    }
}
