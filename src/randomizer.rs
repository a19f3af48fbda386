//! Client-side shuffling of result lists.

use rand::seq::SliceRandom;

/// Trait for shuffling a list in place.
pub trait ListRandomizer<T>: Send + Sync {
    /// Shuffle `items` in place.
    fn randomize(&self, items: &mut [T]);
}

/// Randomizer backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngRandomizer;

impl<T> ListRandomizer<T> for ThreadRngRandomizer {
    fn randomize(&self, items: &mut [T]) {
        let mut rng = rand::rng();
        items.shuffle(&mut rng);
    }
}

/// Randomizer that leaves the list untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRandomizer;

impl<T> ListRandomizer<T> for NoopRandomizer {
    fn randomize(&self, _items: &mut [T]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut items: Vec<u32> = (0..100).collect();
        ThreadRngRandomizer.randomize(&mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_changes_order() {
        let original: Vec<u32> = (0..100).collect();
        // 100! orderings; eight identical shuffles in a row do not happen.
        let changed = (0..8).any(|_| {
            let mut items = original.clone();
            ThreadRngRandomizer.randomize(&mut items);
            items != original
        });
        assert!(changed);
    }

    #[test]
    fn test_noop() {
        let mut items = vec!["a", "b", "c"];
        NoopRandomizer.randomize(&mut items);
        assert_eq!(items, vec!["a", "b", "c"]);
    }
}
