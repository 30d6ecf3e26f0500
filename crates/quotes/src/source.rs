//! Random index sources used to pick a quote.

use rand::Rng;

/// Produces a uniform index in `[0, len)`.
///
/// Callers guarantee `len > 0`. Implementations are shared across request
/// handlers, so they must be `Send + Sync`.
pub trait IndexSource: Send + Sync {
    fn index(&self, len: usize) -> usize;
}

/// Index source backed by the thread-local rng.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl IndexSource for ThreadRngSource {
    fn index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Always returns the same index. Used to make selection deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIndex(pub usize);

impl IndexSource for FixedIndex {
    fn index(&self, _len: usize) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_rng_stays_in_range() {
        let source = ThreadRngSource;
        for len in 1..20 {
            for _ in 0..50 {
                assert!(source.index(len) < len);
            }
        }
    }

    #[test]
    fn thread_rng_single_entry_is_zero() {
        let source = ThreadRngSource;
        for _ in 0..100 {
            assert_eq!(source.index(1), 0);
        }
    }

    #[test]
    fn thread_rng_reaches_every_index() {
        let source = ThreadRngSource;
        let mut seen = [false; 4];
        for _ in 0..2_000 {
            seen[source.index(4)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn fixed_index_ignores_len() {
        let source = FixedIndex(2);
        assert_eq!(source.index(5), 2);
        assert_eq!(source.index(1), 2);
    }
}
