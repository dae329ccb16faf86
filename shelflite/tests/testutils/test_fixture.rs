//! Test fixture for ShelfLite integration tests
//!
//! Provides isolated catalog instances using ONLY the public CatalogEngine
//! API. Sled-backed fixtures own a temporary directory that lives as long
//! as the fixture.

use shelflite::{CatalogEngine, ProductDraft, SearchMode, StorageType};
use std::sync::Arc;

/// Test fixture with an isolated catalog instance
pub struct TestFixture {
    engine: Arc<CatalogEngine>,
    _temp_dir: Option<tempfile::TempDir>,
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

impl TestFixture {
    /// Catalog over a fresh in-memory store
    pub fn memory() -> Self {
        init_logging();
        TestFixture {
            engine: CatalogEngine::in_memory(),
            _temp_dir: None,
        }
    }

    /// Catalog over a fresh in-memory store with an explicit search mode
    pub fn memory_with_mode(mode: SearchMode) -> Self {
        init_logging();
        let store = shelflite::create_product_store(StorageType::Memory, "unused")
            .expect("Failed to create memory store");
        TestFixture {
            engine: CatalogEngine::with_search_mode(store, mode),
            _temp_dir: None,
        }
    }

    /// Catalog over a sled store in a temporary directory
    #[cfg(feature = "sled-backend")]
    pub fn sled() -> Result<Self, Box<dyn std::error::Error>> {
        init_logging();
        let temp_dir = tempfile::tempdir()?;
        let engine = CatalogEngine::from_path(temp_dir.path().join("catalog"))?;
        Ok(TestFixture {
            engine,
            _temp_dir: Some(temp_dir),
        })
    }

    /// The engine under test
    pub fn engine(&self) -> &Arc<CatalogEngine> {
        &self.engine
    }

    /// Create every draft through the public API, failing the test on error
    pub fn create_all(&self, drafts: Vec<ProductDraft>) {
        for draft in drafts {
            self.engine
                .create_product(draft)
                .expect("Failed to create product");
        }
    }
}
