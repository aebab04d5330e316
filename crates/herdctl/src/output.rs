//! Terminal output helpers.
//!
//! Records go to stdout as JSON so the output stays pipeable; human-facing
//! markers and notices go to stdout/stderr with color when attached to a
//! terminal.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a dimmed notice on stderr, keeping stdout parseable.
pub fn notice(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a value as JSON: one compact record per line, or pretty-printed
/// when asked.
pub fn json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", rendered);
    Ok(())
}
