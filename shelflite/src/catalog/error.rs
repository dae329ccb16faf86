// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for the catalog engine

use crate::model::ValidationErrors;
use crate::storage::StoreError;
use log::error;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    /// One or more field constraints were violated; nothing was applied
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// The referenced product id does not exist
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The backing store could not be reached or the backend query failed
    #[error("Product store unavailable: {0}")]
    StoreUnavailable(String),

    /// Malformed input that is not a field-level validation issue
    /// (e.g. an unparseable seed document)
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CatalogError {
    /// Message for a failed field, if this is a validation error
    pub fn field_error(&self, field: &str) -> Option<&str> {
        match self {
            CatalogError::Validation(errors) => errors.field(field),
            _ => None,
        }
    }
}

// Store failures are an infrastructure concern: log the cause at the
// boundary, hand the caller a StoreUnavailable with a short description.
impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        error!("product store failure: {}", err);
        CatalogError::StoreUnavailable(err.to_string())
    }
}

impl From<ValidationErrors> for CatalogError {
    fn from(errors: ValidationErrors) -> Self {
        CatalogError::Validation(errors)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Serialization(err.to_string())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
