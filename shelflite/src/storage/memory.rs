// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! In-memory product store implementation
//!
//! Backs the catalog with a lock-guarded map. Every mutation takes the write
//! lock, so readers see pre- or post-state of a mutation, never a torn
//! record. Each store is an explicit instance with its own lifetime,
//! injected into the engine; there is no process-wide shared state.

use super::traits::ProductStore;
use super::types::{StorageType, StoreError, StoreResult};
use crate::model::Product;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory product store
pub struct MemoryProductStore {
    records: Arc<RwLock<HashMap<String, Product>>>,
}

impl MemoryProductStore {
    /// Create a new empty memory store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore for MemoryProductStore {
    fn insert(&self, product: &Product) -> StoreResult<()> {
        let mut records = self.records.write();
        if records.contains_key(&product.id) {
            return Err(StoreError::DuplicateId(product.id.clone()));
        }
        records.insert(product.id.clone(), product.clone());
        Ok(())
    }

    fn update(&self, product: &Product) -> StoreResult<bool> {
        let mut records = self.records.write();
        match records.get_mut(&product.id) {
            Some(existing) => {
                *existing = product.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove(&self, id: &str) -> StoreResult<bool> {
        Ok(self.records.write().remove(id).is_some())
    }

    fn get(&self, id: &str) -> StoreResult<Option<Product>> {
        Ok(self.records.read().get(id).cloned())
    }

    fn snapshot(&self) -> StoreResult<Vec<Product>> {
        Ok(self.records.read().values().cloned().collect())
    }

    fn scan_search_prefix(&self, prefix: &str) -> StoreResult<Vec<Product>> {
        Ok(self
            .records
            .read()
            .values()
            .filter(|p| p.search_key.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.records.read().len())
    }

    fn clear(&self) -> StoreResult<()> {
        self.records.write().clear();
        Ok(())
    }

    fn flush(&self) -> StoreResult<()> {
        // No-op for memory storage
        Ok(())
    }

    fn storage_type(&self) -> StorageType {
        StorageType::Memory
    }
}
