//! Keyed session store for hosts serving many conversations. One lock for
//! the map, one lock per session; keys never coordinate with each other.

use crate::{
    EngineConfig, EngineError, EventBus, SelectionResult, Session, SessionState, SessionView,
    SpinOutcome,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub fn parse_outcome(value: i64) -> Result<u8, EngineError> {
    if (0..=36).contains(&value) {
        Ok(value as u8)
    } else {
        Err(EngineError::OutOfRange(value))
    }
}

pub fn parse_outcomes(values: &[i64]) -> Result<Vec<u8>, EngineError> {
    values.iter().map(|&value| parse_outcome(value)).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Submission {
    Selection(SelectionResult),
    Spin(SpinOutcome),
}

#[derive(Debug, Default)]
pub struct SessionTable {
    config: EngineConfig,
    sessions: Mutex<HashMap<String, Arc<Mutex<Session>>>>,
}

impl SessionTable {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn submit_history(
        &self,
        key: &str,
        numbers: &[i64],
        events: &mut EventBus,
    ) -> Result<SelectionResult, EngineError> {
        let numbers = parse_outcomes(numbers)?;
        let session = self.session(key);
        let mut session = session.lock().unwrap();
        session.submit_history(&numbers, events)
    }

    pub fn submit_spin(
        &self,
        key: &str,
        number: i64,
        events: &mut EventBus,
    ) -> Result<SpinOutcome, EngineError> {
        let number = parse_outcome(number)?;
        let session = self.session(key);
        let mut session = session.lock().unwrap();
        session.submit_spin(number, events)
    }

    /// Routes a line-oriented submission the way the chat surfaces do: a
    /// fresh session takes the whole list as its initial history, an armed
    /// session takes exactly one spin per message.
    pub fn submit(
        &self,
        key: &str,
        numbers: &[i64],
        events: &mut EventBus,
    ) -> Result<Submission, EngineError> {
        let parsed = parse_outcomes(numbers)?;
        let session = self.session(key);
        let mut session = session.lock().unwrap();
        match session.state() {
            SessionState::AwaitingHistory => session
                .submit_history(&parsed, events)
                .map(Submission::Selection),
            _ if parsed.len() == 1 => {
                session.submit_spin(parsed[0], events).map(Submission::Spin)
            }
            _ => Err(EngineError::WrongSpinCount {
                expected: 1,
                got: parsed.len(),
            }),
        }
    }

    pub fn reset(&self, key: &str, events: &mut EventBus) {
        let session = self.session(key);
        let mut session = session.lock().unwrap();
        session.reset(events);
    }

    /// Read-only snapshot. Creates the session on first contact so a view
    /// before any submission shows `AwaitingHistory`.
    pub fn view(&self, key: &str) -> SessionView {
        self.session(key).lock().unwrap().view()
    }

    fn session(&self, key: &str) -> Arc<Mutex<Session>> {
        let mut sessions = self.sessions.lock().unwrap();
        sessions
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(Session::new(self.config.clone()))))
            .clone()
    }
}
