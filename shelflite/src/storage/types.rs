// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Storage backend types and error handling
//!
//! This module defines the types, enums, and error handling used throughout
//! the product store system.

use serde::{Deserialize, Serialize};

/// Storage backend configuration
///
/// Specifies which underlying storage technology holds the catalog.
/// Each type has different durability and performance characteristics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum StorageType {
    /// Memory - In-memory storage
    /// Best for: unit testing, demos, ephemeral catalogs
    Memory,

    /// Sled - Pure Rust embedded document store
    /// Best for: single-node deployments, development, pure Rust environments
    Sled,

    /// Relational - SQL database backend
    /// Best for: catalogs shared with an existing relational schema
    Relational,
}

impl Default for StorageType {
    fn default() -> Self {
        // Sled is default for development convenience
        StorageType::Sled
    }
}

impl std::str::FromStr for StorageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(StorageType::Memory),
            "sled" => Ok(StorageType::Sled),
            "relational" => Ok(StorageType::Relational),
            _ => Err(format!(
                "Unknown storage type: {}. Valid options: memory, sled, relational",
                s
            )),
        }
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StorageType::Memory => "memory",
            StorageType::Sled => "sled",
            StorageType::Relational => "relational",
        };
        write!(f, "{}", name)
    }
}

/// Error type for product store operations
///
/// Covers the failure modes of store backends. Designed to be easily
/// converted from underlying storage engine errors.
#[derive(Debug)]
pub enum StoreError {
    /// I/O related errors (file system, network, etc.)
    IoError(std::io::Error),

    /// Record serialization or deserialization failed
    SerializationError(String),

    /// Insert attempted with an id that is already present
    DuplicateId(String),

    /// Backend-specific error (Sled, SQL driver, etc.)
    BackendSpecific(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "I/O error: {}", e),
            StoreError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            StoreError::DuplicateId(id) => write!(f, "Duplicate product id: {}", id),
            StoreError::BackendSpecific(e) => write!(f, "Product store error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::IoError(e)
    }
}

impl From<bincode::Error> for StoreError {
    fn from(e: bincode::Error) -> Self {
        StoreError::SerializationError(e.to_string())
    }
}

/// Result type for product store operations
pub type StoreResult<T> = Result<T, StoreError>;
