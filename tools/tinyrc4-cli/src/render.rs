//! Plain-text rendering of cipher results and step traces.

use std::fmt::Write;

use tinyrc4_engine::{CipherOutcome, Operation, TraceEvent};

const RULE: &str = "----------------------------------------";

/// Result block for a successful run.
pub fn render_outcome(operation: Operation, outcome: &CipherOutcome) -> String {
    let plaintext = format!(
        "Plaintext:  {} ({})",
        outcome.plaintext, outcome.plaintext_binary
    );
    let ciphertext = format!(
        "Ciphertext: {} ({})",
        outcome.ciphertext, outcome.ciphertext_binary
    );
    let (first, second) = match operation {
        Operation::Encrypt => (plaintext, ciphertext),
        Operation::Decrypt => (ciphertext, plaintext),
    };

    let mut out = String::new();
    let _ = writeln!(out, "✓ {} successful!", operation.title());
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{first}");
    let _ = writeln!(out, "{second}");
    let _ = writeln!(out, "Key:        {:?}", outcome.key);
    let _ = writeln!(out, "Stream:     {:?}", outcome.stream);
    let _ = writeln!(out, "{RULE}");
    out
}

/// Failure block.
pub fn render_failure(operation: Operation, message: &str) -> String {
    format!("✗ {} failed!\nError: {message}\n", operation.title())
}

/// One line per event, numbered from 1.
pub fn render_steps(steps: &[TraceEvent]) -> String {
    let mut out = String::new();
    for (index, event) in steps.iter().enumerate() {
        let _ = writeln!(out, "{}", render_step(index + 1, event));
    }
    out
}

pub fn render_step(number: usize, event: &TraceEvent) -> String {
    format!(
        "[{number:02}] {:<15}  {}  S={:?} T={:?}",
        event.phase().as_str(),
        event.description(),
        event.sbox(),
        event.tarray()
    )
}
