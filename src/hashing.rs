//! Hasher selection.
//!
//! The default hasher of [`Collection`](crate::collection::Collection) is
//! chosen at compile time by cargo feature:
//!
//! | Feature  | `DefaultHashBuilder`                 |
//! |----------|--------------------------------------|
//! | (none)   | `std::collections::hash_map::RandomState` |
//! | `ahash`  | `ahash::RandomState`                 |
//! | `fxhash` | `rustc_hash::FxBuildHasher`          |
//!
//! `fxhash` takes precedence when both features are enabled.

/// Hash builder used when no explicit hasher is supplied.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used when no explicit hasher is supplied.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used when no explicit hasher is supplied.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
