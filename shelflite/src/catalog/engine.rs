// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog Engine - Central orchestration for catalog operations
//!
//! The CatalogEngine is the single entry point for the catalog: it wires a
//! product store behind the query pipeline and coordinates validation,
//! mutation, and change notification. It is stateless with respect to
//! execution — each call reads or writes the store and returns; there are no
//! background tasks or timers.

use super::error::{CatalogError, CatalogResult};
use super::feed::{ChangeEvent, ChangeFeed};
use super::query::{paginate, PageRequest, ProductFilter, ProductPage, SearchMode};
use super::suggest::suggestions;
use crate::model::{validate_draft, Product, ProductDraft};
use crate::storage::{MemoryProductStore, ProductStore, StorageType};
use log::{debug, info};
use std::collections::BTreeSet;
use std::sync::Arc;
use uuid::Uuid;

/// Catalog Engine - filters, sorts, and paginates products over a pluggable
/// product store
///
/// All reads and writes go through the injected [`ProductStore`]; the engine
/// holds no product state of its own, so any number of engines can share a
/// store and concurrent calls interleave with read-committed semantics.
pub struct CatalogEngine {
    /// Backing store, injected at construction
    store: Arc<dyn ProductStore>,

    /// Search matching policy; fixed per engine so count and page can never
    /// be computed under different predicates
    search_mode: SearchMode,

    /// Mutation notifications for callers holding cached listings
    feed: ChangeFeed,
}

impl CatalogEngine {
    /// Create an engine over the given store with the default
    /// (substring) search mode
    pub fn new(store: Arc<dyn ProductStore>) -> Arc<Self> {
        Self::with_search_mode(store, SearchMode::default())
    }

    /// Create an engine with an explicit search mode
    ///
    /// `SearchMode::Prefix` is the documented reduced-capability mode for
    /// prefix-indexed backends; see [`SearchMode`].
    pub fn with_search_mode(store: Arc<dyn ProductStore>, search_mode: SearchMode) -> Arc<Self> {
        info!(
            "Creating catalog engine over {} store ({:?} search)",
            store.storage_type(),
            search_mode
        );
        Arc::new(Self {
            store,
            search_mode,
            feed: ChangeFeed::new(),
        })
    }

    /// Create an engine over a fresh in-memory store
    pub fn in_memory() -> Arc<Self> {
        Self::new(Arc::new(MemoryProductStore::new()))
    }

    /// Create an engine over a sled store at the given path (Simplified API)
    ///
    /// This is the recommended way to embed a persistent catalog. It opens
    /// or creates the store directory and wires everything up.
    #[cfg(feature = "sled-backend")]
    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> CatalogResult<Arc<Self>> {
        let store = crate::storage::create_product_store(StorageType::Sled, path)?;
        Ok(Self::new(store))
    }

    /// The search matching policy this engine was built with
    pub fn search_mode(&self) -> SearchMode {
        self.search_mode
    }

    /// The backend type behind this engine
    pub fn storage_type(&self) -> StorageType {
        self.store.storage_type()
    }

    /// One page of products matching the filter, plus the total match count
    ///
    /// The page is cut from a stable total order (folded name, then name,
    /// then id), so consecutive pages concatenate to the full filtered set
    /// without gaps or duplicates as long as the catalog is not mutated in
    /// between. A page number past the end yields an empty page with the
    /// correct count.
    pub fn list_products(
        &self,
        filter: &ProductFilter,
        request: &PageRequest,
    ) -> CatalogResult<ProductPage> {
        // In prefix mode the backend narrows candidates with a range scan;
        // the pipeline still applies the full predicate to whatever comes
        // back, so count and slice always agree.
        let candidates = match (self.search_mode, filter.folded_search()) {
            (SearchMode::Prefix, Some(prefix)) => self.store.scan_search_prefix(&prefix)?,
            _ => self.store.snapshot()?,
        };

        let page = paginate(candidates, filter, request, self.search_mode);
        debug!(
            "list_products page {}/{} ({} of {} products)",
            page.page,
            page.total_pages(),
            page.items.len(),
            page.total_count
        );
        Ok(page)
    }

    /// A single product by id
    pub fn get_product(&self, id: &str) -> CatalogResult<Option<Product>> {
        Ok(self.store.get(id)?)
    }

    /// The distinct category labels currently present, in lexicographic
    /// order for deterministic display
    pub fn list_categories(&self) -> CatalogResult<Vec<String>> {
        let categories: BTreeSet<String> = self
            .store
            .snapshot()?
            .into_iter()
            .map(|p| p.category)
            .collect();
        Ok(categories.into_iter().collect())
    }

    /// Number of products in the catalog, unfiltered
    pub fn product_count(&self) -> CatalogResult<usize> {
        Ok(self.store.len()?)
    }

    /// Validate and insert a new product
    ///
    /// Validation runs before any store access; on failure the error names
    /// every violated field and nothing is inserted. On success the new
    /// record carries a fresh unique id and its folded search key.
    pub fn create_product(&self, draft: ProductDraft) -> CatalogResult<Product> {
        let draft = draft.normalized();
        validate_draft(&draft)?;

        let product = Product::from_draft(Uuid::new_v4().to_string(), draft);
        self.store.insert(&product)?;
        info!("created product {} ({})", product.id, product.name);
        self.feed.publish(ChangeEvent::Created {
            id: product.id.clone(),
        });
        Ok(product)
    }

    /// Validate and replace every mutable field of an existing product
    ///
    /// The search key is recomputed with the new name. Fails with
    /// [`CatalogError::NotFound`] if the id does not exist; the store is
    /// untouched on validation failure.
    pub fn update_product(&self, id: &str, draft: ProductDraft) -> CatalogResult<Product> {
        let draft = draft.normalized();
        validate_draft(&draft)?;

        let product = Product::from_draft(id.to_string(), draft);
        if !self.store.update(&product)? {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        info!("updated product {} ({})", product.id, product.name);
        self.feed.publish(ChangeEvent::Updated {
            id: product.id.clone(),
        });
        Ok(product)
    }

    /// Remove a product
    ///
    /// Deleting an id that is already gone fails with
    /// [`CatalogError::NotFound`]; repeating the call keeps failing the same
    /// way rather than crashing.
    pub fn delete_product(&self, id: &str) -> CatalogResult<()> {
        if !self.store.remove(id)? {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        info!("deleted product {}", id);
        self.feed.publish(ChangeEvent::Deleted { id: id.to_string() });
        Ok(())
    }

    /// Up to `limit` search suggestions for a partially typed query
    ///
    /// Names whose folded form starts with the input rank ahead of names
    /// that merely contain it. Blank input suggests nothing.
    pub fn search_suggestions(&self, text: &str, limit: usize) -> CatalogResult<Vec<String>> {
        Ok(suggestions(self.store.snapshot()?, text, limit))
    }

    /// Validate and insert a batch of drafts
    ///
    /// Every draft is validated before the first insert; the draft that
    /// fails first aborts the whole batch, leaving the store unchanged.
    /// Returns the number of products inserted.
    pub fn seed(&self, drafts: Vec<ProductDraft>) -> CatalogResult<usize> {
        let mut normalized = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let draft = draft.normalized();
            validate_draft(&draft)?;
            normalized.push(draft);
        }

        let count = normalized.len();
        for draft in normalized {
            let product = Product::from_draft(Uuid::new_v4().to_string(), draft);
            self.store.insert(&product)?;
        }
        info!("seeded {} products", count);
        self.feed.publish(ChangeEvent::Seeded { count });
        Ok(count)
    }

    /// Parse a JSON array of drafts and seed it
    pub fn seed_from_json(&self, json: &str) -> CatalogResult<usize> {
        let drafts: Vec<ProductDraft> = serde_json::from_str(json)?;
        self.seed(drafts)
    }

    /// Current catalog revision; bumped by every successful mutation
    pub fn revision(&self) -> u64 {
        self.feed.revision()
    }

    /// Register a listener invoked after every successful mutation
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        self.feed.subscribe(Box::new(listener));
    }
}
