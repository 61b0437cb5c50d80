//! Test context wiring a service to a throwaway store.

use tempfile::TempDir;

use crate::{
    domain::products::JsonProductsService,
    store::{Store, StoreError},
};

pub(crate) struct TestContext {
    pub products: JsonProductsService,
    // Held so the store directory outlives the test.
    _dir: TempDir,
}

impl TestContext {
    pub(crate) fn new() -> Result<Self, StoreError> {
        let dir = tempfile::tempdir().map_err(StoreError::Read)?;
        let store = Store::open(dir.path().join("catalog.json"))?;

        Ok(Self {
            products: JsonProductsService::new(store),
            _dir: dir,
        })
    }
}
