//! Transaction-id generation.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

/// Generate a nonzero 64-bit transaction id.
///
/// OS randomness mixed with the current time in nanoseconds. Ids correlate
/// log lines and responses; they are never used for deduplication.
#[must_use]
pub fn generate() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let time_bits = (now.as_secs() << 32) | u64::from(now.subsec_nanos());

    let mut rng = rand::rng();
    loop {
        let id = rng.random::<u64>() ^ time_bits;
        if id != 0 {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generated_ids_are_nonzero() {
        for _ in 0..64 {
            assert_ne!(generate(), 0);
        }
    }

    #[test]
    fn generated_ids_do_not_repeat_in_a_small_sample() {
        let ids: HashSet<u64> = (0..64).map(|_| generate()).collect();
        assert_eq!(ids.len(), 64);
    }
}
