//! Human-readable number formatting for file sizes and counters.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
const SIZE_STEP: f64 = 1024.0;

/// Format a byte count as `"<n> <unit>"` with at most two decimals.
///
/// `0` renders as `"0 Bytes"`. The unit is the largest one the value reaches
/// at least `1` of, capped at the last entry of the unit table.
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(size_bytes: u64) -> String {
    if size_bytes == 0 {
        return "0 Bytes".to_owned();
    }
    let mut value = size_bytes as f64;
    let mut unit = 0;
    while value >= SIZE_STEP && unit < SIZE_UNITS.len() - 1 {
        value /= SIZE_STEP;
        unit += 1;
    }
    format!("{} {}", trim_decimals(value), SIZE_UNITS[unit])
}

/// Round to two decimals and drop trailing zeros (`1.50` → `1.5`, `1.00` → `1`).
fn trim_decimals(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_owned()
}

/// Group an integer's digits in threes with `,` (`12345` → `12,345`).
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
