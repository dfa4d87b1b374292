//! # `ordmap_collection`
//!
//! An insertion-ordered, key-unique collection with list and set
//! conveniences layered on top of a single ordered map.
//!
//! ## Overview
//!
//! [`Collection`](collection::Collection) behaves like a map whose keys
//! remember the order of their first insertion, and adds:
//!
//! - **Membership**: `has`, `has_all`, `has_any`
//! - **Positional slicing**: `first`, `first_key`, `last`, `last_key`, `key_at`
//! - **Random sampling**: `random_key` draws distinct keys
//! - **Predicates and folds**: `every`, `try_every`, `fold`, `reduce`
//! - **Sorting**: stable in-place `sort` / `sort_by` on values
//! - **Set algebra**: `intersection`, `difference`, `symmetric_difference`, `reverse`
//! - **Export**: the backing map, in order, for serialization
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` / `Deserialize` for `Collection`
//! - `fxhash`: use `rustc_hash::FxBuildHasher` as the default hasher
//! - `ahash`: use `ahash::RandomState` as the default hasher
//! - `full`: Enable `serde`
//!
//! ## Example
//!
//! ```rust
//! use ordmap_collection::prelude::*;
//!
//! let mut scores: Collection<&str, u32> = [("ann", 7), ("bob", 3), ("cid", 5)].into();
//! assert_eq!(scores.first(2), vec![&7, &3]);
//!
//! scores.sort();
//! assert_eq!(scores.first_key(1), KeySelection::One(&"bob"));
//!
//! let total: u32 = scores.reduce(|acc, value, _, _| acc + value);
//! assert_eq!(total, 15);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use ordmap_collection::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::{BoxedPredicate, Collection, KeySelection};
    pub use crate::error::CollectionError;
    pub use crate::hashing::DefaultHashBuilder;
}

pub mod collection;
pub mod error;
pub mod hashing;
