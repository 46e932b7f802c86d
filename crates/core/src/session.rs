//! One conversation's session: collects history, arms attacks, consumes
//! spins until every armed attack is won or lost.

use crate::{
    select_attacks, AttackPattern, EngineConfig, EngineError, Event, EventBus, ScoredCandidate,
    SpinHistory,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionState {
    AwaitingHistory,
    AwaitingAttack,
    Monitoring,
    Completed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttackResult {
    Win,
    Loss,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveAttack {
    pub pattern: AttackPattern,
    pub score: f64,
    pub spins_elapsed: u32,
    pub win_limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedAttack {
    pub pattern: AttackPattern,
    pub result: AttackResult,
    pub spins_taken: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionResult {
    pub attacks: Vec<ScoredCandidate>,
    pub awaiting_more: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub resolved: Vec<ResolvedAttack>,
    pub still_active: Vec<AttackPattern>,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub state: SessionState,
    pub active: Vec<ActiveAttack>,
    pub resolved: Vec<ResolvedAttack>,
    pub history_len: usize,
}

#[derive(Debug)]
pub struct Session {
    config: EngineConfig,
    state: SessionState,
    history: SpinHistory,
    active: Vec<ActiveAttack>,
    resolved: Vec<ResolvedAttack>,
}

impl Session {
    pub fn new(config: EngineConfig) -> Self {
        let history = SpinHistory::with_cap(config.history_cap);
        Self {
            config,
            state: SessionState::AwaitingHistory,
            history,
            active: Vec::new(),
            resolved: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Seeds the session with an initial history given most recent LAST and
    /// runs the first selection. Validation happens before any mutation, so
    /// a rejected submission leaves the session untouched.
    pub fn submit_history(
        &mut self,
        numbers: &[u8],
        events: &mut EventBus,
    ) -> Result<SelectionResult, EngineError> {
        if self.state != SessionState::AwaitingHistory {
            return Err(EngineError::InvalidState(self.state));
        }
        if numbers.len() < self.config.min_seed_len {
            return Err(EngineError::HistoryTooShort {
                min: self.config.min_seed_len,
                got: numbers.len(),
            });
        }
        if numbers.len() > self.config.max_seed_len {
            return Err(EngineError::HistoryTooLong {
                max: self.config.max_seed_len,
                got: numbers.len(),
            });
        }
        if let Some(&bad) = numbers.iter().find(|&&number| number > 36) {
            return Err(EngineError::OutOfRange(bad as i64));
        }

        self.history.seed(numbers);
        events.push(Event::HistoryAccepted {
            spins: numbers.len(),
        });
        Ok(self.run_selection(events))
    }

    /// Applies one observed spin. In `AwaitingAttack` the spin extends the
    /// history and retries selection; in `Monitoring` it advances every armed
    /// attack and resolves those whose set contains the number.
    pub fn submit_spin(
        &mut self,
        number: u8,
        events: &mut EventBus,
    ) -> Result<SpinOutcome, EngineError> {
        if number > 36 {
            return Err(EngineError::OutOfRange(number as i64));
        }
        match self.state {
            SessionState::AwaitingAttack => {
                self.history.record(number);
                events.push(Event::SpinRecorded { number });
                self.run_selection(events);
                Ok(SpinOutcome {
                    resolved: Vec::new(),
                    still_active: self.active_patterns(),
                    completed: false,
                })
            }
            SessionState::Monitoring => {
                self.history.record(number);
                events.push(Event::SpinRecorded { number });
                for attack in &mut self.active {
                    attack.spins_elapsed += 1;
                }

                let mut resolved_now = Vec::new();
                let mut remaining = Vec::new();
                for attack in std::mem::take(&mut self.active) {
                    if attack.pattern.contains(number) {
                        let result = if attack.spins_elapsed <= attack.win_limit {
                            AttackResult::Win
                        } else {
                            AttackResult::Loss
                        };
                        events.push(Event::AttackResolved {
                            label: attack.pattern.label.clone(),
                            result,
                            spins_taken: attack.spins_elapsed,
                        });
                        resolved_now.push(ResolvedAttack {
                            pattern: attack.pattern,
                            result,
                            spins_taken: attack.spins_elapsed,
                        });
                    } else {
                        remaining.push(attack);
                    }
                }
                self.active = remaining;
                self.resolved.extend(resolved_now.iter().cloned());

                let completed = self.active.is_empty();
                if completed {
                    self.state = SessionState::Completed;
                    let wins = self
                        .resolved
                        .iter()
                        .filter(|r| r.result == AttackResult::Win)
                        .count();
                    events.push(Event::SessionCompleted {
                        wins,
                        losses: self.resolved.len() - wins,
                    });
                }
                Ok(SpinOutcome {
                    resolved: resolved_now,
                    still_active: self.active_patterns(),
                    completed,
                })
            }
            other => Err(EngineError::InvalidState(other)),
        }
    }

    pub fn reset(&mut self, events: &mut EventBus) {
        self.history = SpinHistory::with_cap(self.config.history_cap);
        self.active.clear();
        self.resolved.clear();
        self.state = SessionState::AwaitingHistory;
        events.push(Event::SessionReset);
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            state: self.state,
            active: self.active.clone(),
            resolved: self.resolved.clone(),
            history_len: self.history.len(),
        }
    }

    fn run_selection(&mut self, events: &mut EventBus) -> SelectionResult {
        let candidates = select_attacks(&self.history, &self.config);
        if candidates.is_empty() {
            self.state = SessionState::AwaitingAttack;
            events.push(Event::NoAttackAvailable);
            return SelectionResult {
                attacks: Vec::new(),
                awaiting_more: true,
            };
        }
        self.active = candidates
            .iter()
            .map(|candidate| {
                let win_limit = candidate.pattern.win_limit();
                events.push(Event::AttackArmed {
                    label: candidate.pattern.label.clone(),
                    score: candidate.score,
                    win_limit,
                });
                ActiveAttack {
                    pattern: candidate.pattern.clone(),
                    score: candidate.score,
                    spins_elapsed: 0,
                    win_limit,
                }
            })
            .collect();
        self.state = SessionState::Monitoring;
        SelectionResult {
            attacks: candidates,
            awaiting_more: false,
        }
    }

    fn active_patterns(&self) -> Vec<AttackPattern> {
        self.active
            .iter()
            .map(|attack| attack.pattern.clone())
            .collect()
    }
}
