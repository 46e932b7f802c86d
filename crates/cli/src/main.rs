use sektor_core::{
    color_of, AttackKind, AttackPattern, AttackResult, Color, EngineConfig, EngineError, Event,
    EventBus, Session, SessionState,
};
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    println!("Sektor roulette attack advisor");
    println!("Enter the last 20-50 numbers (comma separated, most recent LAST).");
    println!("Type 'help' for commands.");

    let mut session = Session::new(EngineConfig::default());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", prompt(session.state()));
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "quit" | "exit" | "q" => break,
            "help" | "?" => {
                print_help();
                continue;
            }
            "state" => {
                print_view(&session);
                continue;
            }
            "json" => {
                println!("{}", serde_json::to_string_pretty(&session.view())?);
                continue;
            }
            "reset" => {
                let mut events = EventBus::default();
                session.reset(&mut events);
                println!("Session cleared. Send a fresh history.");
                continue;
            }
            _ => {}
        }

        let numbers = match parse_numbers(input) {
            Some(numbers) => numbers,
            None => {
                println!("Send numbers between 0 and 36, or 'help'.");
                continue;
            }
        };

        let mut events = EventBus::default();
        match session.state() {
            SessionState::AwaitingHistory => {
                match session.submit_history(&numbers, &mut events) {
                    Ok(selection) if selection.awaiting_more => {
                        println!("Not enough attack patterns found. Send spins one by one.");
                    }
                    Ok(_) => render_armed(&session),
                    Err(err) => println!("{err}"),
                }
            }
            state => {
                if numbers.len() != 1 {
                    let err = EngineError::WrongSpinCount {
                        expected: 1,
                        got: numbers.len(),
                    };
                    println!("{err}");
                    continue;
                }
                let was_waiting = state == SessionState::AwaitingAttack;
                match session.submit_spin(numbers[0], &mut events) {
                    Ok(outcome) => {
                        if was_waiting && !outcome.still_active.is_empty() {
                            render_armed(&session);
                        }
                        render_events(&mut events);
                        if !outcome.completed
                            && outcome.resolved.is_empty()
                            && session.state() == SessionState::Monitoring
                        {
                            println!("...waiting for a hit...");
                        }
                    }
                    Err(err) => println!("{err}"),
                }
            }
        }
    }
    Ok(())
}

fn prompt(state: SessionState) -> &'static str {
    match state {
        SessionState::AwaitingHistory => "history> ",
        SessionState::AwaitingAttack | SessionState::Monitoring => "spin> ",
        SessionState::Completed => "done> ",
    }
}

fn print_help() {
    println!("  <numbers>  comma-separated history, or a single new spin");
    println!("  state      show the session snapshot");
    println!("  json       dump the session snapshot as JSON");
    println!("  reset      clear the session");
    println!("  quit       leave");
}

fn parse_numbers(input: &str) -> Option<Vec<u8>> {
    let mut numbers = Vec::new();
    for chunk in input.split(|c: char| c == ',' || c.is_whitespace()) {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        match chunk.parse::<u8>() {
            Ok(number) if number <= 36 => numbers.push(number),
            _ => return None,
        }
    }
    if numbers.is_empty() {
        None
    } else {
        Some(numbers)
    }
}

fn render_armed(session: &Session) {
    println!("Recommended attacks:");
    for attack in &session.view().active {
        println!("{}", format_attack(&attack.pattern, attack.score));
        println!("   win within {} spins", attack.win_limit);
    }
    println!("Now enter spins one by one until every attack wins or loses.");
}

fn render_events(events: &mut EventBus) {
    for event in events.drain() {
        match event {
            Event::AttackResolved {
                label,
                result: AttackResult::Win,
                spins_taken,
            } => println!("\u{2705} {label} won after {spins_taken} spins!"),
            Event::AttackResolved {
                label,
                result: AttackResult::Loss,
                spins_taken,
            } => println!("\u{274c} {label} hit on spin {spins_taken}, past its limit. Lost."),
            Event::SessionCompleted { wins, losses } => {
                println!("Session over: {wins} won, {losses} lost. 'reset' to go again.");
            }
            Event::NoAttackAvailable => {
                println!("...no eligible attack yet, keep the spins coming...");
            }
            _ => {}
        }
    }
}

fn format_attack(pattern: &AttackPattern, score: f64) -> String {
    let title = match pattern.kind {
        AttackKind::Sectoral => format!("Sectoral: {}", pattern.label),
        _ => pattern.label.clone(),
    };
    let numbers: Vec<String> = pattern.numbers.iter().map(|&n| color_number(n)).collect();
    format!(
        "\u{2728} {title} (score {score})\nPut on: {}",
        numbers.join(", ")
    )
}

fn color_number(number: u8) -> String {
    match color_of(number) {
        Color::Green => format!("\u{1f7e9} {number}"),
        Color::Red => format!("\u{1f7e5} {number}"),
        Color::Black => format!("\u{2b1b}\u{fe0f} {number}"),
    }
}

fn print_view(session: &Session) {
    let view = session.view();
    println!("state: {:?}", view.state);
    println!("history: {} spins", view.history_len);
    for attack in &view.active {
        println!(
            "  active: {}, {} of {} spins used",
            attack.pattern.label, attack.spins_elapsed, attack.win_limit
        );
    }
    for resolved in &view.resolved {
        println!(
            "  resolved: {}, {:?} in {} spins",
            resolved.pattern.label, resolved.result, resolved.spins_taken
        );
    }
}
