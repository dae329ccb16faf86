// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Product store factory
//!
//! This module provides the factory function for creating product stores
//! based on configuration. It handles the instantiation and setup of the
//! different backend types.

use super::traits::ProductStore;
use super::types::{StorageType, StoreError, StoreResult};
use std::path::Path;
use std::sync::Arc;

/// Factory function to create a product store based on configuration
///
/// This is the main entry point for creating store backends. It takes a
/// storage type and path, then returns the appropriate implementation as a
/// shared trait object ready to inject into a
/// [`CatalogEngine`](crate::CatalogEngine).
///
/// # Arguments
/// * `storage_type` - The backend to create (Memory, Sled, ...)
/// * `path` - Filesystem path for disk-backed stores; ignored by Memory
pub fn create_product_store<P: AsRef<Path>>(
    storage_type: StorageType,
    path: P,
) -> StoreResult<Arc<dyn ProductStore>> {
    match storage_type {
        #[cfg(feature = "sled-backend")]
        StorageType::Sled => {
            use crate::storage::sled::SledProductStore;
            let store = SledProductStore::open(path)?;
            Ok(Arc::new(store) as Arc<dyn ProductStore>)
        }
        #[cfg(not(feature = "sled-backend"))]
        StorageType::Sled => Err(StoreError::BackendSpecific(
            "Sled storage backend not enabled (missing `sled-backend` feature)".to_string(),
        )),
        StorageType::Relational => Err(StoreError::BackendSpecific(
            "Relational storage backend not yet implemented".to_string(),
        )),
        StorageType::Memory => {
            use crate::storage::memory::MemoryProductStore;
            let _ = path;
            Ok(Arc::new(MemoryProductStore::new()) as Arc<dyn ProductStore>)
        }
    }
}
