//! Callback types shared by the processing functions.
//!
//! Every function in [`crate::processing`] is generic over its callback (`FnMut` closures are
//! accepted directly). The aliases here name the plain function-pointer forms, which is mostly
//! useful for spelling an absent callback:
//!
//! ```rust
//! use rust_collection_generics::processing::filter;
//! use rust_collection_generics::types::Predicate;
//!
//! let none: Option<&[i32]> = None;
//! assert_eq!(filter(none, None::<Predicate<i32>>), None);
//! ```

/// A pure boolean test over one element.
pub type Predicate<T> = fn(&T) -> bool;

/// Converts one `From` element into a `To`, or fails with `E`.
pub type Transformation<From, To, E> = fn(&From) -> Result<To, E>;
