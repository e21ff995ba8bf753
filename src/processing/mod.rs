//! Generic collection functions.
//!
//! Every function takes its container as an `Option`: `None` means "no container was given"
//! and is kept apart from an empty one. Callbacks are `Option`s as well; a missing callback is
//! a caller bug and panics, except in [`try_map()`], which returns it as an error.
//!
//! Currently implemented:
//!
//! - [`filter()`]: keep elements matching a predicate
//! - [`find_first()`]: first element matching a predicate
//! - [`map()`]: transform elements, skipping failures
//! - [`try_map()`]: transform elements, stopping at the first failure
//! - [`map_keys()`] / [`map_values()`]: extract keys or values of a [`std::collections::HashMap`]
//!
//! ## Example: filter → map → try_map
//!
//! ```rust
//! use rust_collection_generics::processing::{filter, map, try_map};
//!
//! let raw = ["1", "2", "3", "wtf", "10"];
//!
//! // Unparseable entries are dropped.
//! let parsed = map(Some(&raw[..]), Some(|s: &&str| s.parse::<i64>())).unwrap();
//! assert_eq!(parsed, vec![1, 2, 3, 10]);
//!
//! let small = filter(Some(parsed.as_slice()), Some(|n: &i64| *n < 5)).unwrap();
//! assert_eq!(small, vec![1, 2, 3]);
//!
//! // try_map reports the failing entry instead of dropping it.
//! let err = try_map(Some(&raw[..]), Some(|s: &&str| s.parse::<i64>())).unwrap_err();
//! assert_eq!(err.partial(), Some(&[1, 2, 3][..]));
//! ```

pub mod filter;
pub mod keys;
pub mod map;

pub use filter::{filter, find_first};
pub use keys::{map_keys, map_values};
pub use map::{map, try_map};
