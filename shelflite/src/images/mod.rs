// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Image storage collaborator
//!
//! The catalog treats `image_url` as an opaque string; this module is the
//! collaborator that turns raw image bytes into such a string. The shipped
//! backend encodes the payload as a data URL, which keeps the catalog
//! self-contained without a file store.

use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;

/// Largest accepted image payload (4 MiB, the storefront's upload cap)
pub const MAX_IMAGE_BYTES: usize = 4 * 1024 * 1024;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("Image payload is empty")]
    Empty,

    #[error("Image payload is {0} bytes; larger than the 4 MiB limit")]
    TooLarge(usize),
}

/// Capability for persisting a raw image and handing back an opaque URL
pub trait ImageStore: Send + Sync {
    /// Store the payload and return a URL for it
    fn save_image(&self, bytes: &[u8], content_type: &str) -> Result<String, ImageError>;
}

/// Image store that inlines the payload as a base64 data URL
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlImageStore;

impl DataUrlImageStore {
    pub fn new() -> Self {
        Self
    }
}

impl ImageStore for DataUrlImageStore {
    fn save_image(&self, bytes: &[u8], content_type: &str) -> Result<String, ImageError> {
        if bytes.is_empty() {
            return Err(ImageError::Empty);
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(ImageError::TooLarge(bytes.len()));
        }
        Ok(format!(
            "data:{};base64,{}",
            content_type,
            STANDARD.encode(bytes)
        ))
    }
}
