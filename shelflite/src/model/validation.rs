// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Draft validation
//!
//! Validation runs as a whole before any store access: a draft that fails
//! any field check never reaches a backend, so invalid input can never be
//! partially applied.

use super::product::ProductDraft;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Minimum length of a product name (after trimming)
pub const MIN_NAME_LEN: usize = 3;

/// Minimum length of a product description
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// Minimum length of a category label
pub const MIN_CATEGORY_LEN: usize = 2;

/// Field-level validation failures, keyed by field name
///
/// The map is ordered so error listings render deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Record a failure for a field
    pub(crate) fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }

    /// Whether any field failed
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failed fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for a specific field, if it failed
    pub fn field(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Names of the failed fields, in sorted order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Iterate over (field, message) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Validate a (normalized) draft against the catalog's field constraints
///
/// Checks every field and reports all failures at once rather than stopping
/// at the first, so a form can surface them together.
pub fn validate_draft(draft: &ProductDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().chars().count() < MIN_NAME_LEN {
        errors.add(
            "name",
            format!("name must be at least {} characters", MIN_NAME_LEN),
        );
    }

    if draft.description.chars().count() < MIN_DESCRIPTION_LEN {
        errors.add(
            "description",
            format!(
                "description must be at least {} characters",
                MIN_DESCRIPTION_LEN
            ),
        );
    }

    if !(draft.price.is_finite() && draft.price > 0.0) {
        errors.add("price", "price must be a positive number");
    }

    if draft.unit.trim().is_empty() {
        errors.add("unit", "unit is required");
    }

    // stock is a u32: non-negative integer by construction

    if draft.image_url.is_empty() {
        errors.add("image_url", "image is required");
    }

    if draft.category.trim().chars().count() < MIN_CATEGORY_LEN {
        errors.add(
            "category",
            format!("category must be at least {} characters", MIN_CATEGORY_LEN),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
