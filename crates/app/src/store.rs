//! Document store backing the product catalogue.
//!
//! A single JSON document on disk holds every product record, keyed by id.
//! Reads are served from an in-memory map; writes go through a
//! single-writer transaction that mutates a working copy and publishes it
//! to memory and disk only on commit. A reader therefore never observes a
//! half-applied update: the scalar fields and the ledger append from one
//! update become visible together, or not at all.
//!
//! Because an update reads current state and commits under the same write
//! lock, two racing sales updates serialize rather than losing a ledger
//! entry.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockWriteGuard},
};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use kickcraft::products::{Product, ProductUuid};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store file")]
    Read(#[source] io::Error),

    #[error("failed to write store file")]
    Write(#[source] io::Error),

    #[error("store file is not a valid product document")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode store contents")]
    Encode(#[source] serde_json::Error),

    #[error("store lock poisoned by an earlier panic")]
    Poisoned,
}

/// On-disk shape of the store file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    products: FxHashMap<ProductUuid, Product>,
}

type Products = FxHashMap<ProductUuid, Product>;

/// Handle to the product document store.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    products: Arc<RwLock<Products>>,
}

impl Store {
    /// Open the store at `path`, creating an empty one if the file does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] when the file exists but cannot be
    /// read, or [`StoreError::Decode`] when its contents are not a valid
    /// product document.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let products = match fs::read_to_string(&path) {
            Ok(contents) => {
                let document: Document =
                    serde_json::from_str(&contents).map_err(StoreError::Decode)?;
                document.products
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => Products::default(),
            Err(error) => return Err(StoreError::Read(error)),
        };

        tracing::debug!(path = %path.display(), products = products.len(), "opened product store");

        Ok(Self {
            path,
            products: Arc::new(RwLock::new(products)),
        })
    }

    /// Begin a write transaction.
    ///
    /// Holds the store's write lock until the transaction is committed or
    /// dropped; mutations land on a working copy and are discarded unless
    /// [`StoreTx::commit`] succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if an earlier writer panicked.
    pub fn begin(&self) -> Result<StoreTx<'_>, StoreError> {
        let guard = self.products.write().map_err(|_| StoreError::Poisoned)?;
        let working = guard.clone();

        Ok(StoreTx {
            guard,
            working,
            path: &self.path,
        })
    }
}

/// A write transaction over the store.
///
/// Mutations apply to a working copy; `commit` encodes the copy, replaces
/// the store file atomically (temp file + rename), and only then publishes
/// the copy to the shared in-memory map.
#[derive(Debug)]
pub struct StoreTx<'a> {
    guard: RwLockWriteGuard<'a, Products>,
    working: Products,
    path: &'a Path,
}

impl StoreTx<'_> {
    /// Fetch a product by id.
    #[must_use]
    pub fn get(&self, id: ProductUuid) -> Option<&Product> {
        self.working.get(&id)
    }

    /// Iterate over every product, in no particular order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.working.values()
    }

    /// Insert or replace a product record.
    pub fn put(&mut self, product: Product) {
        self.working.insert(product.id, product);
    }

    /// Remove a product record, returning it (history and all) if present.
    pub fn remove(&mut self, id: ProductUuid) -> Option<Product> {
        self.working.remove(&id)
    }

    /// Persist the transaction and publish it to readers.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Encode`] or [`StoreError::Write`] when the
    /// document cannot be written; in that case neither disk nor the
    /// in-memory view changes.
    pub fn commit(mut self) -> Result<(), StoreError> {
        let document = Document {
            products: self.working.clone(),
        };

        let encoded = serde_json::to_vec_pretty(&document).map_err(StoreError::Encode)?;
        let staged = self.path.with_extension("json.tmp");

        fs::write(&staged, encoded).map_err(StoreError::Write)?;
        fs::rename(&staged, self.path).map_err(StoreError::Write)?;

        tracing::debug!(
            path = %self.path.display(),
            products = self.working.len(),
            "committed product store"
        );

        *self.guard = self.working;

        Ok(())
    }
}
