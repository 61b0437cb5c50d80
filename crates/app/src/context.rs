//! App Context

use std::{path::Path, sync::Arc};

use thiserror::Error;

use crate::{
    domain::products::{JsonProductsService, ProductsService},
    store::{Store, StoreError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to open product store")]
    Store(#[source] StoreError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build application context from a store file path.
    ///
    /// # Errors
    ///
    /// Returns an error when the store file exists but cannot be opened.
    pub fn from_store_path(path: &Path) -> Result<Self, AppInitError> {
        let store = Store::open(path).map_err(AppInitError::Store)?;

        Ok(Self {
            products: Arc::new(JsonProductsService::new(store)),
        })
    }
}
