// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Sled product store implementation
//!
//! Document-style backend: records are bincode-encoded under their id in a
//! `products` tree, and a `search_index` tree maps `search_key \0 id` to the
//! record id. The index is rewritten in the same guarded write section as
//! the record, so it can never hold a stale `search_key` for a renamed
//! product. `scan_search_prefix` is served as a range scan over the index.

use super::traits::ProductStore;
use super::types::{StorageType, StoreError, StoreResult};
use crate::model::Product;
use parking_lot::Mutex;
use std::path::Path;

/// Tree holding id -> bincode-encoded record
const PRODUCTS_TREE: &str = "products";

/// Tree holding `search_key \0 id` -> id
const SEARCH_INDEX_TREE: &str = "search_index";

/// Separator between search key and id in index keys. Search keys never
/// contain NUL, so keys sort by search_key first and stay unique per record.
const INDEX_SEPARATOR: u8 = 0;

/// Sled-backed product store
pub struct SledProductStore {
    db: sled::Db,
    products: sled::Tree,
    search_index: sled::Tree,
    // Serializes record+index write sections so the index tracks renames
    write_guard: Mutex<()>,
}

fn index_key(search_key: &str, id: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(search_key.len() + 1 + id.len());
    key.extend_from_slice(search_key.as_bytes());
    key.push(INDEX_SEPARATOR);
    key.extend_from_slice(id.as_bytes());
    key
}

impl SledProductStore {
    /// Open or create a sled store at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let db = sled::open(path).map_err(|e| StoreError::BackendSpecific(e.to_string()))?;
        let products = db
            .open_tree(PRODUCTS_TREE)
            .map_err(|e| StoreError::BackendSpecific(e.to_string()))?;
        let search_index = db
            .open_tree(SEARCH_INDEX_TREE)
            .map_err(|e| StoreError::BackendSpecific(e.to_string()))?;
        Ok(SledProductStore {
            db,
            products,
            search_index,
            write_guard: Mutex::new(()),
        })
    }

    fn decode(bytes: &[u8]) -> StoreResult<Product> {
        Ok(bincode::deserialize(bytes)?)
    }

    fn read_record(&self, id: &str) -> StoreResult<Option<Product>> {
        let value = self
            .products
            .get(id.as_bytes())
            .map_err(|e| StoreError::BackendSpecific(e.to_string()))?;
        value.map(|v| Self::decode(&v)).transpose()
    }
}

impl ProductStore for SledProductStore {
    fn insert(&self, product: &Product) -> StoreResult<()> {
        let _guard = self.write_guard.lock();

        if self
            .products
            .contains_key(product.id.as_bytes())
            .map_err(|e| StoreError::BackendSpecific(e.to_string()))?
        {
            return Err(StoreError::DuplicateId(product.id.clone()));
        }

        let encoded = bincode::serialize(product)?;
        self.products
            .insert(product.id.as_bytes(), encoded)
            .map_err(|e| StoreError::BackendSpecific(e.to_string()))?;
        self.search_index
            .insert(index_key(&product.search_key, &product.id), product.id.as_bytes())
            .map_err(|e| StoreError::BackendSpecific(e.to_string()))?;
        Ok(())
    }

    fn update(&self, product: &Product) -> StoreResult<bool> {
        let _guard = self.write_guard.lock();

        let previous = match self.read_record(&product.id)? {
            Some(record) => record,
            None => return Ok(false),
        };

        let encoded = bincode::serialize(product)?;
        self.products
            .insert(product.id.as_bytes(), encoded)
            .map_err(|e| StoreError::BackendSpecific(e.to_string()))?;

        if previous.search_key != product.search_key {
            self.search_index
                .remove(index_key(&previous.search_key, &product.id))
                .map_err(|e| StoreError::BackendSpecific(e.to_string()))?;
            self.search_index
                .insert(index_key(&product.search_key, &product.id), product.id.as_bytes())
                .map_err(|e| StoreError::BackendSpecific(e.to_string()))?;
        }
        Ok(true)
    }

    fn remove(&self, id: &str) -> StoreResult<bool> {
        let _guard = self.write_guard.lock();

        let previous = match self.read_record(id)? {
            Some(record) => record,
            None => return Ok(false),
        };

        self.products
            .remove(id.as_bytes())
            .map_err(|e| StoreError::BackendSpecific(e.to_string()))?;
        self.search_index
            .remove(index_key(&previous.search_key, id))
            .map_err(|e| StoreError::BackendSpecific(e.to_string()))?;
        Ok(true)
    }

    fn get(&self, id: &str) -> StoreResult<Option<Product>> {
        self.read_record(id)
    }

    fn snapshot(&self) -> StoreResult<Vec<Product>> {
        let mut records = Vec::new();
        for entry in self.products.iter() {
            let (_, value) = entry.map_err(|e| StoreError::BackendSpecific(e.to_string()))?;
            records.push(Self::decode(&value)?);
        }
        Ok(records)
    }

    fn scan_search_prefix(&self, prefix: &str) -> StoreResult<Vec<Product>> {
        let mut records = Vec::new();
        for entry in self.search_index.scan_prefix(prefix.as_bytes()) {
            let (_, id) = entry.map_err(|e| StoreError::BackendSpecific(e.to_string()))?;
            let id = String::from_utf8_lossy(&id).to_string();
            // The record can vanish between the index scan and the get; a
            // missing id is a concurrent delete, not an error.
            if let Some(record) = self.read_record(&id)? {
                records.push(record);
            }
        }
        Ok(records)
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.products.len())
    }

    fn clear(&self) -> StoreResult<()> {
        let _guard = self.write_guard.lock();
        self.products
            .clear()
            .map_err(|e| StoreError::BackendSpecific(e.to_string()))?;
        self.search_index
            .clear()
            .map_err(|e| StoreError::BackendSpecific(e.to_string()))?;
        Ok(())
    }

    fn flush(&self) -> StoreResult<()> {
        self.db
            .flush()
            .map_err(|e| StoreError::BackendSpecific(e.to_string()))?;
        Ok(())
    }

    fn storage_type(&self) -> StorageType {
        StorageType::Sled
    }
}
