//! Element transformation over optional slices.
//!
//! [`map()`] and [`try_map()`] differ only in what they do with a failed element:
//! `map` drops it and keeps going, `try_map` stops and hands the failure back.

use crate::error::{ContractError, TryMapError, TryMapResult};

/// Applies `transform` to every element of `items`, keeping only the successful outputs.
///
/// Elements whose transformation returns `Err` are skipped; the error is discarded. The
/// remaining outputs keep their relative input order, so the result may be shorter than the
/// input. If every element fails the result is `Some(vec![])`.
///
/// Returns `None` if `items` is `None`.
///
/// # Panics
///
/// Panics with "transformation is not provided" if `items` is present and `transform` is `None`.
pub fn map<From, To, E, F>(items: Option<&[From]>, transform: Option<F>) -> Option<Vec<To>>
where
    F: FnMut(&From) -> Result<To, E>,
{
    let items = items?;
    let Some(mut transform) = transform else {
        panic!("{}", ContractError::TransformationNotProvided);
    };

    let mut out = Vec::with_capacity(items.len());
    for el in items {
        if let Ok(v) = transform(el) {
            out.push(v);
        }
    }
    Some(out)
}

/// Applies `transform` to every element of `items`, stopping at the first failure.
///
/// - `Ok(None)` if `items` is `None`, whether or not a transformation was given.
/// - `Err(TryMapError::Contract(..))` if `items` is present and `transform` is `None`.
/// - `Err(TryMapError::Transform { partial, reason })` on the first failing element, where
///   `partial` holds the outputs of the elements before it and `reason` is the error the
///   transformation returned. Later elements are not visited.
/// - `Ok(Some(outputs))` when every element succeeds.
pub fn try_map<From, To, E, F>(items: Option<&[From]>, transform: Option<F>) -> TryMapResult<To, E>
where
    F: FnMut(&From) -> Result<To, E>,
{
    let Some(items) = items else {
        return Ok(None);
    };
    let Some(mut transform) = transform else {
        return Err(ContractError::TransformationNotProvided.into());
    };

    let mut out = Vec::with_capacity(items.len());
    for el in items {
        match transform(el) {
            Ok(v) => out.push(v),
            Err(reason) => {
                return Err(TryMapError::Transform {
                    partial: out,
                    reason,
                })
            }
        }
    }
    Ok(Some(out))
}
