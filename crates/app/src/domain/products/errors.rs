//! Products service errors.

use thiserror::Error;

use kickcraft::forms::ValidationError;

use crate::store::StoreError;

/// The three failure kinds a catalogue request can surface.
///
/// Nothing is swallowed: a request either succeeds, names the missing
/// record, rejects the submitted fields, or reports the store as
/// unavailable. Each request fails independently; none is fatal.
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("product store unavailable")]
    Store(#[source] StoreError),
}

impl From<StoreError> for ProductsServiceError {
    fn from(error: StoreError) -> Self {
        Self::Store(error)
    }
}
