//! Keypad Session
//!
//! This demo drives an engine the way a host UI would: it forwards key
//! names one at a time and renders the display after each one.
//!
//! Key concepts:
//! - Host keys map onto the engine's six events
//! - Left-to-right evaluation with operator chaining
//! - Division by zero and the clear-to-recover policy
//! - The calculation tape
//!
//! Run with: RUST_LOG=keycalc=debug cargo run --example keypad_session

use keycalc::config::ErrorPolicy;
use keycalc::engine::Event;
use keycalc::EngineBuilder;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();
}

fn run_session(title: &str, keys: &[&str], engine: &mut keycalc::Engine) {
    println!("{title}");
    for key in keys {
        match engine.press(key) {
            Some(display) => println!("  {key:>6} -> {display}"),
            None => println!("  {key:>6} (no event)"),
        }
    }
    println!();
}

fn main() {
    init_tracing();

    println!("=== Keypad Session Demo ===\n");

    let mut engine = EngineBuilder::new()
        .error_policy(ErrorPolicy::RequireClear)
        .tape_capacity(16)
        .build()
        .expect("default separators are valid");

    run_session(
        "Session 1: grouping and decimal comma",
        &["1", "2", "3", "4", ".", "5", "*", "1", "0", "0", "0", "Enter"],
        &mut engine,
    );

    run_session(
        "Session 2: no precedence, 2 + 3 * 4",
        &["Escape", "2", "+", "3", "*", "4", "="],
        &mut engine,
    );

    run_session(
        "Session 3: division by zero needs a clear",
        &["9", "/", "0", "=", "5", "Tab", "Escape"],
        &mut engine,
    );
    println!("Back to the initial state: {}", engine.state().is_initial());
    engine.press("5");
    println!();

    println!("Sign toggle (host button, no key):");
    println!("  {:>6} -> {}", "+/-", engine.handle(Event::ToggleSign));
    println!();

    println!("Tape:");
    for record in engine.tape().records() {
        let outcome = match record.outcome {
            Ok(result) => engine.number_format().format(result),
            Err(fault) => fault.to_string(),
        };
        println!(
            "  {} {} {} = {}",
            record.lhs, record.operator, record.rhs, outcome
        );
    }

    if let Some(span) = engine.tape().duration() {
        println!("  ({} records over {span:?})", engine.tape().len());
    }

    println!("\n=== Demo Complete ===");
}
