//! Frequency rating of candidate words
//!
//! Words are rated by their Cyrillic spelling through a `RatingService`.
//! The `RatingCache` is passed in explicitly: load it before the batch, call
//! `rate_words`, save it afterwards (also when the batch aborted, since the
//! cache only holds successful ratings).

mod cache;
mod client;
mod record;

pub use cache::RatingCache;
pub use client::{KorpusClient, RatingService};
pub use record::FrequencyRecord;

use crate::error::Result;

/// Rate every `(latin, cyrillic)` pair not yet in the cache.
///
/// Returns the number of newly rated words. The first service failure aborts
/// the batch; words rated before it stay in the cache.
pub fn rate_words<S, I, L, C>(service: &mut S, cache: &mut RatingCache, pairs: I) -> Result<usize>
where
    S: RatingService + ?Sized,
    I: IntoIterator<Item = (L, C)>,
    L: AsRef<str>,
    C: AsRef<str>,
{
    let mut rated = 0;
    for (latin, cyrillic) in pairs {
        let (latin, cyrillic) = (latin.as_ref(), cyrillic.as_ref());
        if cache.contains(cyrillic) {
            continue;
        }

        let count = service.occurrences(cyrillic)?;
        let record = FrequencyRecord::new(latin, cyrillic, count);
        log::debug!("rated {}", record);
        cache.insert(record);
        rated += 1;
    }

    log::info!("{} words rated, {} in cache", rated, cache.len());
    Ok(rated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;

    /// Canned counts; unknown words fail like a broken service
    struct FakeService {
        counts: HashMap<&'static str, u64>,
        calls: Vec<String>,
    }

    impl FakeService {
        fn new(counts: &[(&'static str, u64)]) -> Self {
            Self {
                counts: counts.iter().copied().collect(),
                calls: Vec::new(),
            }
        }
    }

    impl RatingService for FakeService {
        fn occurrences(&mut self, cyrillic: &str) -> Result<u64> {
            self.calls.push(cyrillic.to_string());
            self.counts
                .get(cyrillic)
                .copied()
                .ok_or_else(|| Error::RatingService(format!("503 for {}", cyrillic)))
        }
    }

    #[test]
    fn test_rates_uncached_words_only() {
        let mut service = FakeService::new(&[("хата", 412), ("горад", 95)]);
        let mut cache = RatingCache::new();
        cache.insert(FrequencyRecord::new("chata", "хата", 400));

        let rated = rate_words(
            &mut service,
            &mut cache,
            [("chata", "хата"), ("horad", "горад")],
        )
        .unwrap();

        assert_eq!(rated, 1);
        assert_eq!(service.calls, vec!["горад"]);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.records()[0].count, 400);
        assert_eq!(cache.records()[1], FrequencyRecord::new("horad", "горад", 95));
    }

    #[test]
    fn test_failure_aborts_batch() {
        let mut service = FakeService::new(&[("хата", 412), ("горад", 95)]);
        let mut cache = RatingCache::new();

        let result = rate_words(
            &mut service,
            &mut cache,
            [("chata", "хата"), ("brduk", "брдук"), ("horad", "горад")],
        );

        assert!(matches!(result, Err(Error::RatingService(_))));
        // no zero count recorded for the failing word, nothing after it asked
        assert_eq!(cache.len(), 1);
        assert!(!cache.contains("брдук"));
        assert_eq!(service.calls, vec!["хата", "брдук"]);
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let mut service = FakeService::new(&[("хата", 412)]);
        let mut cache = RatingCache::new();

        rate_words(&mut service, &mut cache, [("chata", "хата")]).unwrap();
        let rated = rate_words(&mut service, &mut cache, [("chata", "хата")]).unwrap();

        assert_eq!(rated, 0);
        assert_eq!(service.calls.len(), 1);
    }
}
