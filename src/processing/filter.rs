//! Predicate-driven selection over optional slices.

use crate::error::ContractError;

/// Returns the elements of `items` for which `predicate` returns `true`, in input order.
///
/// - Returns `None` if `items` is `None` (absent input stays absent).
/// - Returns `Some(vec![])` if nothing matches, including for an empty input.
///
/// # Panics
///
/// Panics with "predicate is not provided" if `items` is present and `predicate` is `None`.
pub fn filter<T, P>(items: Option<&[T]>, predicate: Option<P>) -> Option<Vec<T>>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let items = items?;
    let Some(mut predicate) = predicate else {
        panic!("{}", ContractError::PredicateNotProvided);
    };

    let mut out = Vec::with_capacity(items.len());
    for el in items {
        if predicate(el) {
            out.push(el.clone());
        }
    }
    Some(out)
}

/// Returns the first element of `items` for which `predicate` returns `true`.
///
/// The flag is `true` when a match was found. Otherwise the value is `T::default()` and the
/// flag is `false`; this covers an absent input, an empty input and no match.
///
/// # Panics
///
/// Panics with "predicate is not provided" if `items` is present and `predicate` is `None`.
pub fn find_first<T, P>(items: Option<&[T]>, predicate: Option<P>) -> (T, bool)
where
    T: Clone + Default,
    P: FnMut(&T) -> bool,
{
    let Some(items) = items else {
        return (T::default(), false);
    };
    let Some(mut predicate) = predicate else {
        panic!("{}", ContractError::PredicateNotProvided);
    };

    match items.iter().find(|&el| predicate(el)) {
        Some(el) => (el.clone(), true),
        None => (T::default(), false),
    }
}
