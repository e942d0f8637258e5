use crate::cards::{Card, CardSet};
use crate::evaluator::{evaluate_five, Classification};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Memoized classifications for one analysis call.
///
/// Keyed by the [`CardSet`] of the five cards, so the same final hand reached
/// through different masks or draw orders is classified once. Lives only as
/// long as the call that created it.
#[derive(Debug, Default)]
pub struct ClassificationCache {
    entries: Mutex<HashMap<u64, Classification>>,
    lookups: AtomicUsize,
}

impl ClassificationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(&self, cards: &[Card; 5]) -> Classification {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        let key = CardSet::from_cards(cards).bits();
        let cached = self.entries.lock().get(&key).copied();
        if let Some(hit) = cached {
            return hit;
        }
        // Classify outside the lock; a racing insert of the same key is harmless.
        let fresh = evaluate_five(cards);
        self.entries.lock().insert(key, fresh);
        fresh
    }

    /// Distinct hands classified so far.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Total lookups, hits included.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::Category;

    fn five(s: &str) -> [Card; 5] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn same_cards_in_any_order_share_an_entry() {
        let cache = ClassificationCache::new();
        let a = cache.classify(&five("Ts Js Qs Ks As"));
        let b = cache.classify(&five("As Ks Qs Js Ts"));
        assert_eq!(a.category, Category::RoyalFlush);
        assert_eq!(a, b);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.lookups(), 2);
    }

    #[test]
    fn distinct_hands_get_distinct_entries() {
        let cache = ClassificationCache::new();
        assert_eq!(cache.len(), 0);
        cache.classify(&five("2c 7d 9h Js Kh"));
        cache.classify(&five("2c 7d 9h Js Kd"));
        assert_eq!(cache.len(), 2);
    }
}
