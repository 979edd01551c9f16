/// Parses a `data-count-target` value; anything unparsable counts as zero.
pub fn parse_target(raw: &str) -> u64 {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite() && *n > 0.0).map_or(0, |n| n as u64)
}

/// Linear progress in `[0, 1]`.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Text for one animation frame. The last frame always shows the exact target.
pub fn counter_text(target: u64, suffix: &str, elapsed_ms: f64, duration_ms: f64) -> String {
    let progress = progress(elapsed_ms, duration_ms);
    let current = if progress >= 1.0 {
        target
    } else {
        (progress * target as f64).floor() as u64
    };
    format!("{}{}", current, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_targets_are_zero() {
        assert_eq!(parse_target("1200"), 1200);
        assert_eq!(parse_target(" 98 "), 98);
        assert_eq!(parse_target("many"), 0);
        assert_eq!(parse_target(""), 0);
        assert_eq!(parse_target("-5"), 0);
    }

    #[test]
    fn counts_up_and_lands_on_target() {
        assert_eq!(counter_text(1200, "+", 0.0, 1500.0), "0+");
        assert_eq!(counter_text(1200, "+", 750.0, 1500.0), "600+");
        assert_eq!(counter_text(98, "%", 1000.0, 1500.0), "65%");
        assert_eq!(counter_text(98, "%", 1500.0, 1500.0), "98%");
        assert_eq!(counter_text(98, "%", 9000.0, 1500.0), "98%");
    }
}
