//! Count-up animation for the company figures strip.

/// Value to display `elapsed_ms` into a count-up of `duration_ms` towards
/// `target`, eased out (fast start, slow finish).
pub fn value_at(target: u32, elapsed_ms: u64, duration_ms: u64) -> u32 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    let progress = elapsed_ms as f64 / duration_ms as f64;
    let eased = 1.0 - (1.0 - progress).powi(3);
    ((target as f64) * eased).floor() as u32
}

pub fn is_finished(elapsed_ms: u64, duration_ms: u64) -> bool {
    elapsed_ms >= duration_ms
}

/// Thousands separator used for both languages (Thai uses the same comma).
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
