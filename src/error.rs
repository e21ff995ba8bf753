use thiserror::Error;

/// Convenience result type for [`crate::processing::try_map`].
///
/// `Ok(None)` means the input sequence was absent.
pub type TryMapResult<To, E> = Result<Option<Vec<To>>, TryMapError<To, E>>;

/// Error returned when [`crate::execution::ExecutionOptions`] cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input is not valid JSON or does not match the options shape.
    #[error("invalid execution options: {0}")]
    Json(#[from] serde_json::Error),
}

/// A caller broke a function's contract by not providing a required callback.
///
/// [`crate::processing::filter`], [`crate::processing::find_first`] and
/// [`crate::processing::map`] panic with this error's message. [`crate::processing::try_map`]
/// returns it instead, wrapped in [`TryMapError::Contract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractError {
    /// `filter` / `find_first` was called on a present sequence without a predicate.
    #[error("predicate is not provided")]
    PredicateNotProvided,

    /// `map` / `try_map` was called on a present sequence without a transformation.
    #[error("transformation is not provided")]
    TransformationNotProvided,
}

/// Error type returned by [`crate::processing::try_map`].
#[derive(Debug, Error)]
pub enum TryMapError<To, E> {
    /// The transformation was missing. The result sequence is absent.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// The transformation failed on an element; mapping stopped there.
    #[error("transformation failed after {} element(s): {reason}", .partial.len())]
    Transform {
        /// Values produced for every element before the failing one, in input order.
        partial: Vec<To>,
        /// The failure exactly as the transformation returned it.
        reason: E,
    },
}

impl<To, E> TryMapError<To, E> {
    /// Values mapped before the failure, or `None` when the transformation was missing.
    pub fn partial(&self) -> Option<&[To]> {
        match self {
            Self::Contract(_) => None,
            Self::Transform { partial, .. } => Some(partial.as_slice()),
        }
    }

    /// The transformation's own failure, if that is what stopped the run.
    pub fn reason(&self) -> Option<&E> {
        match self {
            Self::Contract(_) => None,
            Self::Transform { reason, .. } => Some(reason),
        }
    }

    /// Splits the error into `(partial result, transformation failure)`.
    pub fn into_parts(self) -> (Option<Vec<To>>, Option<E>) {
        match self {
            Self::Contract(_) => (None, None),
            Self::Transform { partial, reason } => (Some(partial), Some(reason)),
        }
    }
}
