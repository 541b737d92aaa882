//! Project-wide constants.

/// The oracle's stage name.
pub const STAR: &str = "Zuckerbot 3000";

/// Where the oracle holds court.
pub const VENUE: &str = "NSA";

/// Seconds since the Unix epoch, for seeding the oracle's randomness.
/// A fresh seed every run, no determinism guarantee between runs.
pub fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock before epoch")
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_are_non_empty() {
        assert!(!STAR.is_empty());
        assert!(!VENUE.is_empty());
    }

    #[test]
    fn clock_seed_is_past_2020() {
        // 2020-01-01 in epoch seconds
        assert!(clock_seed() > 1_577_836_800);
    }
}
