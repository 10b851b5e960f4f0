//! Change detection against the persisted watermark.

/// Decide whether the newest thread is due for announcement.
///
/// Side-effect-free: the watermark is advanced by the orchestrator only
/// after the announcement succeeds. A missing watermark compares below
/// every real id, so the first observed thread is announced once.
pub fn should_announce(watermark: Option<u64>, newest: u64) -> bool {
    watermark.map_or(true, |last| newest > last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_watermark_always_announces() {
        assert!(should_announce(None, 0));
        assert!(should_announce(None, 9999));
    }

    #[test]
    fn test_equal_id_is_silent() {
        assert!(!should_announce(Some(5), 5));
    }

    #[test]
    fn test_newer_id_announces() {
        assert!(should_announce(Some(5), 6));
    }

    #[test]
    fn test_older_id_is_silent() {
        // A stale listing must never re-announce.
        assert!(!should_announce(Some(5), 4));
    }
}
