// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Search suggestions
//!
//! Deterministic, catalog-derived suggestions for a partially typed search:
//! names whose folded form starts with the input rank ahead of names that
//! merely contain it, each group in catalog order, deduplicated by name.

use crate::model::Product;

/// Compute up to `limit` suggestions for the given input
pub(crate) fn suggestions(mut candidates: Vec<Product>, text: &str, limit: usize) -> Vec<String> {
    let folded = Product::fold_name(text.trim());
    if folded.is_empty() || limit == 0 {
        return Vec::new();
    }

    candidates.sort_by(|a, b| {
        a.search_key
            .cmp(&b.search_key)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut results: Vec<String> = Vec::new();
    let mut push = |name: &str, results: &mut Vec<String>| {
        if results.len() < limit && !results.iter().any(|n| n == name) {
            results.push(name.to_string());
        }
    };

    for product in candidates.iter().filter(|p| p.search_key.starts_with(&folded)) {
        push(&product.name, &mut results);
    }
    for product in candidates.iter().filter(|p| {
        p.search_key.contains(&folded) && !p.search_key.starts_with(&folded)
    }) {
        push(&product.name, &mut results);
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductDraft;
    use chrono::NaiveDate;

    fn product(id: &str, name: &str) -> Product {
        Product::from_draft(
            id.to_string(),
            ProductDraft {
                name: name.to_string(),
                category: "Fruits".to_string(),
                price: 1.0,
                stock: 5,
                expiry_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
                description: "Ten characters or more.".to_string(),
                unit: "pc".to_string(),
                image_url: "https://example.com/x.jpg".to_string(),
            },
        )
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("p1", "Banana"),
            product("p2", "Organic Bananas"),
            product("p3", "Bandages"),
            product("p4", "Bread"),
        ]
    }

    #[test]
    fn prefix_matches_rank_before_substring_matches() {
        let result = suggestions(fixture(), "ban", 10);
        assert_eq!(result, vec!["Banana", "Bandages", "Organic Bananas"]);
    }

    #[test]
    fn input_casing_is_irrelevant() {
        assert_eq!(suggestions(fixture(), "BAN", 10), suggestions(fixture(), "ban", 10));
    }

    #[test]
    fn limit_is_respected() {
        let result = suggestions(fixture(), "ban", 2);
        assert_eq!(result, vec!["Banana", "Bandages"]);
    }

    #[test]
    fn blank_input_suggests_nothing() {
        assert!(suggestions(fixture(), "   ", 10).is_empty());
        assert!(suggestions(fixture(), "", 10).is_empty());
    }

    #[test]
    fn duplicate_names_are_suggested_once() {
        let mut candidates = fixture();
        candidates.push(product("p5", "Banana"));
        let result = suggestions(candidates, "banana", 10);
        assert_eq!(result, vec!["Banana", "Organic Bananas"]);
    }
}
