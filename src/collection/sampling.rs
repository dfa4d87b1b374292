//! Random sampling of keys without replacement.

use rand::Rng;
use rand::seq::index;

use super::Collection;

impl<K, V, S> Collection<K, V, S> {
    /// Draws up to `amount` distinct keys in random order.
    ///
    /// Returns `min(amount, len)` keys; an empty collection or an `amount`
    /// of zero yields an empty sequence. Uses the thread-local generator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap_collection::collection::Collection;
    ///
    /// let collection: Collection<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into();
    /// let picked = collection.random_key(2);
    /// assert_eq!(picked.len(), 2);
    /// assert_ne!(picked[0], picked[1]);
    /// ```
    pub fn random_key(&self, amount: usize) -> Vec<&K> {
        self.random_key_with(amount, &mut rand::rng())
    }

    /// Draws up to `amount` distinct keys using the supplied generator.
    ///
    /// Each drawn position is removed from the pool before the next draw,
    /// so no key repeats.
    pub fn random_key_with<R>(&self, amount: usize, rng: &mut R) -> Vec<&K>
    where
        R: Rng + ?Sized,
    {
        let amount = amount.min(self.len());
        if amount == 0 {
            return Vec::new();
        }
        log::trace!("sampling {amount} of {} keys", self.len());
        index::sample(rng, self.len(), amount)
            .into_iter()
            .filter_map(|position| self.entries.get_index(position))
            .map(|(key, _)| key)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;
    use std::collections::HashSet;

    fn numbers(size: usize) -> Collection<usize, usize> {
        (0..size).map(|key| (key, key * 10)).collect()
    }

    #[rstest]
    #[case(0, 5, 0)]
    #[case(5, 0, 0)]
    #[case(5, 3, 3)]
    #[case(5, 5, 5)]
    #[case(5, 50, 5)]
    fn test_random_key_length(#[case] size: usize, #[case] amount: usize, #[case] expected: usize) {
        assert_eq!(numbers(size).random_key(amount).len(), expected);
    }

    #[rstest]
    fn test_random_key_has_no_duplicates() {
        let collection = numbers(100);
        let picked = collection.random_key(60);
        let unique: HashSet<&usize> = picked.iter().copied().collect();
        assert_eq!(unique.len(), picked.len());
        assert!(picked.iter().all(|key| collection.has(*key)));
    }

    #[rstest]
    fn test_random_key_with_seeded_rng_is_reproducible() {
        let collection = numbers(20);
        let first = collection.random_key_with(7, &mut StdRng::seed_from_u64(42));
        let second = collection.random_key_with(7, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_random_key_full_draw_is_permutation() {
        let collection = numbers(10);
        let mut picked: Vec<usize> = collection
            .random_key_with(10, &mut StdRng::seed_from_u64(7))
            .into_iter()
            .copied()
            .collect();
        picked.sort_unstable();
        assert_eq!(picked, (0..10).collect::<Vec<_>>());
    }
}
