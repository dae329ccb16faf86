// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Shopping cart
//!
//! In-memory cart for a single checkout session: lines keep the order they
//! were added in, quantities are clamped to the product's stock, and the
//! checkout math (total, change due on a cash payment) lives here rather
//! than in the presentation layer.

use crate::model::Product;

/// One cart line: a product snapshot and the chosen quantity
///
/// The line holds the product as it was when added; a later catalog update
/// does not rewrite lines already in a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line (unit price × quantity)
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

/// A cart: product lines in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product
    ///
    /// An existing line is incremented; a new line starts at quantity 1.
    /// The quantity never exceeds the product's stock. Returns `false` when
    /// nothing changed (out-of-stock product, or the line is already at
    /// stock).
    pub fn add(&mut self, product: &Product) -> bool {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            if line.quantity >= line.product.stock {
                return false;
            }
            line.quantity += 1;
            return true;
        }

        if product.stock == 0 {
            return false;
        }
        self.lines.push(CartLine {
            product: product.clone(),
            quantity: 1,
        });
        true
    }

    /// Set a line's quantity, clamped to `[0, stock]`; 0 removes the line
    ///
    /// Returns `false` if no line holds the given product id.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) -> bool {
        let Some(index) = self.lines.iter().position(|l| l.product.id == product_id) else {
            return false;
        };
        let clamped = quantity.min(self.lines[index].product.stock);
        if clamped == 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = clamped;
        }
        true
    }

    /// Remove a line. Returns `false` if no line holds the given id.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() != before
    }

    /// Empty the cart
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The lines, in the order they were added
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Total number of units across all lines
    pub fn unit_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Cart total
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Change due on a cash payment
    ///
    /// `Some(change)` when `cash_given` covers the total, `None` when it
    /// falls short.
    pub fn change_due(&self, cash_given: f64) -> Option<f64> {
        let total = self.total();
        if cash_given >= total {
            Some(cash_given - total)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductDraft;
    use chrono::NaiveDate;

    fn product(id: &str, name: &str, price: f64, stock: u32) -> Product {
        Product::from_draft(
            id.to_string(),
            ProductDraft {
                name: name.to_string(),
                category: "Fruits".to_string(),
                price,
                stock,
                expiry_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
                description: "Ten characters or more.".to_string(),
                unit: "pc".to_string(),
                image_url: "https://example.com/x.jpg".to_string(),
            },
        )
    }

    #[test]
    fn add_increments_existing_line() {
        let mut cart = Cart::new();
        let banana = product("p1", "Banana", 2.0, 5);
        assert!(cart.add(&banana));
        assert!(cart.add(&banana));
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.unit_count(), 2);
        assert_eq!(cart.total(), 4.0);
    }

    #[test]
    fn add_clamps_at_stock() {
        let mut cart = Cart::new();
        let scarce = product("p1", "Truffle", 50.0, 2);
        assert!(cart.add(&scarce));
        assert!(cart.add(&scarce));
        assert!(!cart.add(&scarce));
        assert_eq!(cart.unit_count(), 2);
    }

    #[test]
    fn out_of_stock_add_is_refused() {
        let mut cart = Cart::new();
        let gone = product("p1", "Sold Out", 1.0, 0);
        assert!(!cart.add(&gone));
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_clamps_and_removes_at_zero() {
        let mut cart = Cart::new();
        let banana = product("p1", "Banana", 2.0, 5);
        cart.add(&banana);

        assert!(cart.set_quantity("p1", 99));
        assert_eq!(cart.unit_count(), 5);

        assert!(cart.set_quantity("p1", 0));
        assert!(cart.is_empty());

        assert!(!cart.set_quantity("p1", 1));
    }

    #[test]
    fn change_due_requires_sufficient_cash() {
        let mut cart = Cart::new();
        cart.add(&product("p1", "Banana", 2.5, 5));
        cart.add(&product("p2", "Bread", 3.0, 5));

        assert_eq!(cart.change_due(10.0), Some(4.5));
        assert_eq!(cart.change_due(5.5), Some(0.0));
        assert_eq!(cart.change_due(5.0), None);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(&product("p1", "Banana", 2.0, 5));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }
}
