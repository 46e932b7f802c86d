use sektor_core::{
    parse_outcome, parse_outcomes, EngineConfig, EngineError, EventBus, SessionState,
    SessionTable, Submission,
};
use std::sync::Arc;
use std::thread;

fn seed() -> Vec<i64> {
    let mut seed = vec![26i64; 16];
    seed.extend_from_slice(&[22, 18, 29, 7]);
    seed
}

#[test]
fn parse_rejects_numbers_off_the_wheel() {
    assert_eq!(parse_outcome(36), Ok(36));
    assert_eq!(parse_outcome(0), Ok(0));
    assert_eq!(parse_outcome(37), Err(EngineError::OutOfRange(37)));
    assert_eq!(parse_outcome(-1), Err(EngineError::OutOfRange(-1)));
    assert_eq!(
        parse_outcomes(&[4, 40, 2]),
        Err(EngineError::OutOfRange(40))
    );
}

#[test]
fn first_contact_view_awaits_history() {
    let table = SessionTable::new(EngineConfig::default());
    let view = table.view("chat-1");
    assert_eq!(view.state, SessionState::AwaitingHistory);
    assert_eq!(view.history_len, 0);
}

#[test]
fn submit_routes_by_session_state() {
    let table = SessionTable::new(EngineConfig::default());
    let mut events = EventBus::default();

    let first = table.submit("chat-1", &seed(), &mut events).expect("seed");
    assert!(matches!(first, Submission::Selection(_)));

    // A multi-number message while spins are expected is a count error.
    let err = table
        .submit("chat-1", &[5, 6], &mut events)
        .expect_err("two spins");
    assert_eq!(
        err,
        EngineError::WrongSpinCount {
            expected: 1,
            got: 2
        }
    );

    let next = table.submit("chat-1", &[10], &mut events).expect("spin");
    assert!(matches!(next, Submission::Spin(_)));
}

#[test]
fn keys_are_isolated() {
    let table = SessionTable::new(EngineConfig::default());
    let mut events = EventBus::default();

    table
        .submit_history("alice", &seed(), &mut events)
        .expect("alice seed");
    assert_eq!(table.view("alice").state, SessionState::Monitoring);
    assert_eq!(table.view("bob").state, SessionState::AwaitingHistory);

    table.reset("alice", &mut events);
    assert_eq!(table.view("alice").state, SessionState::AwaitingHistory);
}

#[test]
fn concurrent_keys_do_not_interfere() {
    let table = Arc::new(SessionTable::new(EngineConfig::default()));
    let mut handles = Vec::new();
    for worker in 0..4 {
        let table = Arc::clone(&table);
        handles.push(thread::spawn(move || {
            let key = format!("chat-{worker}");
            let mut events = EventBus::default();
            table
                .submit_history(&key, &seed(), &mut events)
                .expect("seed");
            for _ in 0..5 {
                table.submit_spin(&key, 10, &mut events).expect("spin");
            }
        }));
    }
    for handle in handles {
        handle.join().expect("worker");
    }
    for worker in 0..4 {
        let view = table.view(&format!("chat-{worker}"));
        assert_eq!(view.state, SessionState::Monitoring);
        assert_eq!(view.active.len(), 2);
        assert_eq!(view.active[0].spins_elapsed, 5);
    }
}

#[test]
fn spin_for_a_fresh_key_reports_invalid_state() {
    let table = SessionTable::new(EngineConfig::default());
    let mut events = EventBus::default();
    let err = table
        .submit_spin("nobody", 4, &mut events)
        .expect_err("no history yet");
    assert_eq!(
        err,
        EngineError::InvalidState(SessionState::AwaitingHistory)
    );
}
