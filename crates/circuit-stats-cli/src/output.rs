//! Terminal output formatting for the circuit-stats CLI.
//!
//! Provides consistent, colored output using the [`console`] crate.

use console::style;
use serde::Serialize;

/// Print a bold cyan header with an underline separator.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.len())).dim());
}

/// Print a success message prefixed with green `[OK]`.
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

/// Print a key-value pair with dimmed key formatting.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
