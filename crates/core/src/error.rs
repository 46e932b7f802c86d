use crate::SessionState;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("number {0} is outside the wheel range 0..=36")]
    OutOfRange(i64),
    #[error("history needs at least {min} spins, got {got}")]
    HistoryTooShort { min: usize, got: usize },
    #[error("history holds at most {max} spins, got {got}")]
    HistoryTooLong { max: usize, got: usize },
    #[error("expected {expected} number(s), got {got}")]
    WrongSpinCount { expected: usize, got: usize },
    #[error("operation not accepted in state {0:?}")]
    InvalidState(SessionState),
}
