//! `chanlock parse` handler.

use chanlock::RestrictedNames;
use std::fmt::Write;

/// Describe the normalized restricted set for `raw`.
pub fn describe(raw: &str) -> String {
    let names = RestrictedNames::parse(raw);
    if names.is_empty() {
        return "No channels restricted\n".to_string();
    }
    let mut out = format!("Restricted channels ({}):\n", names.len());
    for name in names.iter() {
        let _ = writeln!(out, "  {}", name);
    }
    let _ = writeln!(out, "Canonical: {}", names.canonical());
    out
}

/// Print the normalized restricted set for `raw`.
pub fn run_parse(raw: &str) {
    print!("{}", describe(raw));
}
