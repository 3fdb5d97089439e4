//! Longest-Match Scanner
//!
//! This example replays a small automaton step by step, then uses the same
//! engine to split text into tokens.
//!
//! Key concepts:
//! - Rules registered later are tried first
//! - `run` traps when no rule matches and keeps its place via the counter
//! - `retract` rewinds to the last accepting state to recover a token
//! - `skip` discards a symbol nothing recognizes
//!
//! Run with: cargo run --example scanner

use dfa_scan::core::Predicate;
use dfa_scan::{Automaton, AutomatonBuilder, RetractResult, RunResult};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
enum Lex {
    Start,
    Ident,
    Number,
    Space,
    Operator,
}

/// Input is fed to the engine in windows of this many symbols.
const CHUNK: usize = 4;

fn print_configuration(automaton: &Automaton<i32>) {
    let configuration = automaton.current_configuration();
    println!(
        "  state {} ({:?}), counter {}",
        configuration.state, configuration.class, configuration.counter
    );
}

fn replay() {
    println!("=== Step-by-step replay ===\n");

    let mut automaton = Automaton::new(vec![1, 2, 3, 4, 5], b"ab".to_vec(), 1, vec![3, 5])
        .expect("definition is valid");
    automaton.add_exact(1, 2, b'a').expect("declared states");
    automaton
        .add_custom(2, 3, |c| c == b'b')
        .expect("declared states");
    automaton.add_exact(2, 4, b'a').expect("declared states");
    automaton.add_exact(3, 4, b'a').expect("declared states");
    automaton.add_exact(4, 5, b'b').expect("declared states");
    automaton
        .add_exact_inverted(5, 4, b'b')
        .expect("declared states");

    let input = b"abababaab";
    print_configuration(&automaton);
    for &symbol in input {
        let result = automaton.step(symbol);
        println!("step {:?} -> {:?}", symbol as char, result);
        print_configuration(&automaton);
    }

    automaton.reset();
    println!("\nreset");
    print_configuration(&automaton);

    let result = automaton.run(input, 1);
    println!("run {:?} -> {:?}", String::from_utf8_lossy(input), result);
    print_configuration(&automaton);

    for _ in 0..2 {
        let result = automaton.retract();
        println!("retract -> {:?}", result);
        print_configuration(&automaton);
    }
}

fn token_automaton() -> Automaton<Lex> {
    AutomatonBuilder::new()
        .states([Lex::Start, Lex::Ident, Lex::Number, Lex::Space, Lex::Operator])
        .alphabet(b'a'..=b'z')
        .alphabet(b'0'..=b'9')
        .alphabet(b" +-*/".iter().copied())
        .start(Lex::Start)
        .finals([Lex::Ident, Lex::Number, Lex::Space, Lex::Operator])
        .rule(Lex::Start, Lex::Ident, Predicate::range(b'a', b'z'))
        .rule(
            Lex::Ident,
            Lex::Ident,
            Predicate::custom(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
        )
        .rule(Lex::Start, Lex::Number, Predicate::range(b'0', b'9'))
        .rule(Lex::Number, Lex::Number, Predicate::range(b'0', b'9'))
        .rule(Lex::Start, Lex::Space, Predicate::exact(b' '))
        .rule(Lex::Space, Lex::Space, Predicate::exact(b' '))
        .rule(Lex::Start, Lex::Operator, Predicate::set(b"+-*/".to_vec()))
        .build()
        .expect("token automaton is valid")
}

fn scan(automaton: &mut Automaton<Lex>, input: &[u8]) -> Vec<(Lex, String)> {
    let mut tokens = Vec::new();
    let mut token_start = 0;

    loop {
        let next = automaton.current_configuration().counter;
        let window = &input[next.min(input.len())..(next + CHUNK).min(input.len())];
        if automaton.run(window, next + 1) == RunResult::MoreInput {
            continue;
        }

        // Trapped, or out of input
        match automaton.retract() {
            RetractResult::Success => {
                let configuration = automaton.current_configuration();
                let text = String::from_utf8_lossy(&input[token_start..configuration.counter]);
                tokens.push((configuration.state, text.into_owned()));
            }
            RetractResult::Fail => {
                let counter = automaton.current_configuration().counter;
                if counter >= input.len() {
                    break;
                }
                println!("  skipping unrecognized {:?}", input[counter] as char);
                automaton.skip();
            }
        }

        automaton.reset_state();
        token_start = automaton.current_configuration().counter;
    }

    tokens
}

fn main() {
    replay();

    println!("\n=== Longest-match scanning ===\n");

    let mut automaton = token_automaton();
    let input = b"width * 12 + x2 ? 7";
    println!("input: {:?}", String::from_utf8_lossy(input));

    for (kind, text) in scan(&mut automaton, input) {
        if kind != Lex::Space {
            println!("  {:<8} {:?}", format!("{:?}", kind), text);
        }
    }

    println!("\n=== Example Complete ===");
}
