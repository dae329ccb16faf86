// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! ShelfLite - A lightweight embedded product catalog engine
//!
//! ShelfLite is a standalone product-catalog engine for small storefronts.
//!
//! # Features
//!
//! - **Deterministic pagination**: stable total ordering, gap- and
//!   duplicate-free pages, count/page consistency by construction
//! - **Case-insensitive search**: substring matching over a materialized
//!   case-folded name key, with a documented prefix-only mode for
//!   prefix-indexed backends
//! - **Pluggable storage**: in-memory store or embedded Sled document store
//!   behind one capability interface
//! - **Validated writes**: field-level validation before any store access;
//!   all-or-nothing create/update/delete
//! - **Cart math**: stock-clamped quantities, totals and change-due helpers
//!
//! # Usage
//!
//! ```ignore
//! use shelflite::{CatalogEngine, PageRequest, ProductFilter};
//!
//! let engine = CatalogEngine::from_path("./mycatalog")?;
//! let page = engine.list_products(
//!     &ProductFilter::new().with_category("Fruits"),
//!     &PageRequest::new(1, 8),
//! )?;
//! println!("{} of {} products", page.items.len(), page.total_count);
//! ```

// Public modules - exposed to external users
pub mod cart;
pub mod catalog;
pub mod images;

// Internal modules - only visible within the shelflite crate
pub(crate) mod model;
pub(crate) mod storage;

// Re-export the public API - CatalogEngine is the main entry point
pub use catalog::{
    CatalogEngine, CatalogError, CatalogResult, ChangeEvent, PageRequest, ProductFilter,
    ProductPage, SearchMode,
};
pub use model::{Product, ProductDraft, ValidationErrors};

// Only expose StorageType for configuration
pub use storage::StorageType;
// Public exports for custom backends and tests
pub use storage::{create_product_store, ProductStore, StoreError, StoreResult};

/// ShelfLite version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// ShelfLite crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
