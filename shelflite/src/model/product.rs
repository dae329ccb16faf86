// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Product record and draft types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A product record as stored in the catalog
///
/// Records are immutable-by-replacement: updates swap every mutable field at
/// once, and the `id` assigned on creation is never reassigned. `search_key`
/// is the case-folded `name`, materialized so that case-insensitive search
/// and ordering never recompute it at query time. It is rewritten together
/// with `name` on every update, so it can never go stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque unique identifier, assigned on creation
    pub id: String,

    /// Display name
    pub name: String,

    /// Case-folded copy of `name`, maintained for search and ordering
    pub search_key: String,

    /// Free-text category label, matched exactly (case-sensitive)
    pub category: String,

    /// Non-negative unit price
    pub price: f64,

    /// Non-negative stock count
    pub stock: u32,

    /// Expiry date
    pub expiry_date: NaiveDate,

    /// Display description
    pub description: String,

    /// Sales unit label (e.g. "kg", "box")
    pub unit: String,

    /// Opaque image URL; reachability is never validated
    pub image_url: String,
}

impl Product {
    /// Case-fold a product name into its search key
    ///
    /// This is the single place the folding rule lives; stores and the query
    /// pipeline all compare against keys produced here.
    pub fn fold_name(name: &str) -> String {
        name.to_lowercase()
    }

    /// Build a record from a validated draft, assigning the given id
    pub(crate) fn from_draft(id: String, draft: ProductDraft) -> Self {
        let search_key = Self::fold_name(&draft.name);
        Product {
            id,
            name: draft.name,
            search_key,
            category: draft.category,
            price: draft.price,
            stock: draft.stock,
            expiry_date: draft.expiry_date,
            description: draft.description,
            unit: draft.unit,
            image_url: draft.image_url,
        }
    }
}

/// Admin form payload for creating or updating a product
///
/// Drafts carry every mutable field of a record. They are validated as a
/// whole before any store access; see [`validate_draft`](super::validate_draft).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub expiry_date: NaiveDate,
    pub description: String,
    pub unit: String,
    pub image_url: String,
}

impl ProductDraft {
    /// Normalize a draft before validation: the stored name is trimmed
    pub(crate) fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            category: "Fruits".to_string(),
            price: 1.5,
            stock: 10,
            expiry_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            description: "A reasonably long description.".to_string(),
            unit: "kg".to_string(),
            image_url: "https://example.com/p.jpg".to_string(),
        }
    }

    #[test]
    fn search_key_is_folded_name() {
        let p = Product::from_draft("p1".to_string(), draft("Organic Bananas"));
        assert_eq!(p.search_key, "organic bananas");
        assert_eq!(p.name, "Organic Bananas");
    }

    #[test]
    fn folding_is_unicode_aware() {
        assert_eq!(Product::fold_name("CÀ PHÊ"), "cà phê");
    }

    #[test]
    fn normalized_trims_name() {
        let d = draft("  Banana  ").normalized();
        assert_eq!(d.name, "Banana");
    }
}
