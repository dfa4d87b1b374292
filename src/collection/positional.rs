//! Positional slicing by count and by index.
//!
//! Counts are signed: a negative count asks the opposite end of the
//! collection for the same number of entries, so `first(-3)` is `last(3)`.
//!
//! | Count        | `first` / `first_key` | `last` / `last_key`    |
//! |--------------|-----------------------|------------------------|
//! | `n < 0`      | `last(-n)`            | `first(-n)`            |
//! | `n == 0`     | empty                 | empty                  |
//! | `n > len`    | clamped to `len`      | every entry            |

use super::Collection;

/// The keys selected by [`Collection::first_key`].
///
/// A selection of exactly one key is reported as [`KeySelection::One`];
/// any other number of keys (including none) as [`KeySelection::Many`].
///
/// # Examples
///
/// ```rust
/// use ordmap_collection::collection::{Collection, KeySelection};
///
/// let collection: Collection<&str, i32> = [("a", 1), ("b", 2)].into();
/// assert_eq!(collection.first_key(1), KeySelection::One(&"a"));
/// assert_eq!(collection.first_key(2), KeySelection::Many(vec![&"a", &"b"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySelection<'a, K> {
    /// Exactly one key was selected.
    One(&'a K),
    /// Zero or several keys were selected.
    Many(Vec<&'a K>),
}

impl<'a, K> KeySelection<'a, K> {
    /// Returns the number of selected keys.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(keys) => keys.len(),
        }
    }

    /// Returns `true` if no key was selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the key when the selection is [`KeySelection::One`].
    #[must_use]
    pub const fn single(&self) -> Option<&'a K> {
        match self {
            Self::One(key) => Some(*key),
            Self::Many(_) => None,
        }
    }

    /// Flattens the selection into a sequence of keys.
    #[must_use]
    pub fn into_vec(self) -> Vec<&'a K> {
        match self {
            Self::One(key) => vec![key],
            Self::Many(keys) => keys,
        }
    }
}

impl<K, V, S> Collection<K, V, S> {
    /// Returns the first `count` values in iteration order.
    ///
    /// A negative `count` returns [`last`](Self::last) of its magnitude.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap_collection::collection::Collection;
    ///
    /// let collection: Collection<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into();
    /// assert_eq!(collection.first(2), vec![&1, &2]);
    /// assert_eq!(collection.first(10), vec![&1, &2, &3]);
    /// assert_eq!(collection.first(-1), vec![&3]);
    /// assert!(collection.first(0).is_empty());
    /// ```
    pub fn first(&self, count: isize) -> Vec<&V> {
        if count < 0 {
            return self.tail_values(count.unsigned_abs());
        }
        self.values().take(count.unsigned_abs()).collect()
    }

    /// Returns the first `count` keys in iteration order.
    ///
    /// When exactly one key results it is returned bare as
    /// [`KeySelection::One`]. A negative `count` returns
    /// [`last_key`](Self::last_key) of its magnitude as a sequence.
    pub fn first_key(&self, count: isize) -> KeySelection<'_, K> {
        if count < 0 {
            return KeySelection::Many(self.tail_keys(count.unsigned_abs()));
        }
        let keys: Vec<&K> = self.keys().take(count.unsigned_abs()).collect();
        if let [key] = keys[..] {
            return KeySelection::One(key);
        }
        KeySelection::Many(keys)
    }

    /// Returns the last `count` values in iteration order.
    ///
    /// A negative `count` returns [`first`](Self::first) of its magnitude;
    /// a `count` larger than the collection returns every value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap_collection::collection::Collection;
    ///
    /// let collection: Collection<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into();
    /// assert_eq!(collection.last(2), vec![&2, &3]);
    /// assert_eq!(collection.last(-2), vec![&1, &2]);
    /// ```
    pub fn last(&self, count: isize) -> Vec<&V> {
        if count < 0 {
            return self.values().take(count.unsigned_abs()).collect();
        }
        self.tail_values(count.unsigned_abs())
    }

    /// Returns the last `count` keys in iteration order.
    ///
    /// A negative `count` returns the keys [`first_key`](Self::first_key)
    /// selects for its magnitude, flattened into a sequence.
    pub fn last_key(&self, count: isize) -> Vec<&K> {
        if count < 0 {
            return self.keys().take(count.unsigned_abs()).collect();
        }
        self.tail_keys(count.unsigned_abs())
    }

    /// Returns the key at `index` in iteration order.
    ///
    /// Negative or out-of-range indices yield `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap_collection::collection::Collection;
    ///
    /// let collection: Collection<&str, i32> = [("a", 1), ("b", 2)].into();
    /// assert_eq!(collection.key_at(1), Some(&"b"));
    /// assert_eq!(collection.key_at(2), None);
    /// assert_eq!(collection.key_at(-1), None);
    /// ```
    pub fn key_at(&self, index: isize) -> Option<&K> {
        let index = usize::try_from(index).ok()?;
        self.entries.get_index(index).map(|(key, _)| key)
    }

    fn tail_values(&self, count: usize) -> Vec<&V> {
        let skip = self.len().saturating_sub(count);
        self.values().skip(skip).collect()
    }

    fn tail_keys(&self, count: usize) -> Vec<&K> {
        let skip = self.len().saturating_sub(count);
        self.keys().skip(skip).collect()
    }
}
