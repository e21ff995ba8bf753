//! `rust-collection-generics` is a small library of generic collection functions over optional
//! slices and hash maps.
//!
//! Every function keeps "no container" (`None`) apart from "empty container" (`Some(&[])`), and
//! has an exact contract for a missing callback and for per-element failures.
//!
//! ## What is included
//!
//! | Function | Absent input | Missing callback | Per-element failure |
//! |---|---|---|---|
//! | [`processing::filter`] | `None` | panics | n/a |
//! | [`processing::find_first`] | `(default, false)` | panics | n/a |
//! | [`processing::map`] | `None` | panics | element skipped |
//! | [`processing::try_map`] | `Ok(None)` | returns [`TryMapError::Contract`] | stops, returns partial result + reason |
//! | [`processing::map_keys`] / [`processing::map_values`] | `None` | n/a | n/a |
//!
//! Missing-callback panics carry the message of a [`ContractError`]
//! (`"predicate is not provided"` / `"transformation is not provided"`).
//!
//! ## Quick examples
//!
//! ```rust
//! use rust_collection_generics::processing::{filter, find_first, map};
//!
//! let is_odd = |i: &i32| i % 2 == 1;
//! let xs = [1, 2, 3, 4, 5, 6];
//!
//! assert_eq!(filter(Some(&xs[..]), Some(is_odd)), Some(vec![1, 3, 5]));
//! assert_eq!(find_first(Some(&[2, 4, 6][..]), Some(is_odd)), (0, false));
//!
//! let double = |i: &i32| Ok::<_, String>(2 * i);
//! assert_eq!(map(Some(&[1, 2, 4][..]), Some(double)), Some(vec![2, 4, 8]));
//!
//! // Absent stays absent.
//! assert_eq!(filter(None::<&[i32]>, Some(is_odd)), None);
//! ```
//!
//! `try_map` stops at the first failure and keeps what it mapped so far:
//!
//! ```rust
//! use rust_collection_generics::processing::try_map;
//!
//! let fail_on_even = |i: &i32| {
//!     if i % 2 == 0 {
//!         Err(format!("{i} is even"))
//!     } else {
//!         Ok(*i)
//!     }
//! };
//! let err = try_map(Some(&[1, 3, 2, 4][..]), Some(fail_on_even)).unwrap_err();
//! assert_eq!(err.partial(), Some(&[1, 3][..]));
//! assert_eq!(err.to_string(), "transformation failed after 2 element(s): 2 is even");
//! ```
//!
//! ## Observed execution
//!
//! [`execution::Executor`] runs the same functions and reports events and metrics to an
//! [`execution::ExecutionObserver`]:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use rust_collection_generics::execution::{ExecutionOptions, Executor, StdErrExecutionObserver};
//!
//! # fn main() -> Result<(), rust_collection_generics::ConfigError> {
//! let opts = ExecutionOptions::from_json(r#"{"label": "parse-ids"}"#)?;
//! let engine = Executor::new(opts).with_observer(Arc::new(StdErrExecutionObserver));
//!
//! let ids = engine.map(Some(&["1", "2", "x"][..]), Some(|s: &&str| s.parse::<u32>()));
//! assert_eq!(ids, Some(vec![1, 2]));
//! assert_eq!(engine.metrics().snapshot().elements_skipped, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`processing`]: the collection functions
//! - [`execution`]: observed runner, metrics and options
//! - [`types`]: callback type aliases
//! - [`error`]: contract and `try_map` error types

pub mod error;
pub mod execution;
pub mod processing;
pub mod types;

pub use error::{ConfigError, ContractError, TryMapError, TryMapResult};
