//! Shared output helpers

use retention::KeepReason;

/// `Keep <name>: <reason>, <reason>`
pub fn format_keep_line(name: &str, reasons: &[KeepReason]) -> String {
    let reasons: Vec<String> = reasons.iter().map(ToString::to_string).collect();
    format!("Keep {}: {}", name, reasons.join(", "))
}

/// Human-readable plural for counters in summaries
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
