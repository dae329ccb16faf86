//! Sample grocery data for integration tests

use chrono::NaiveDate;
use shelflite::ProductDraft;

/// A valid draft with the given name and category and unremarkable fields
pub fn draft(name: &str, category: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        category: category.to_string(),
        price: 2.5,
        stock: 40,
        expiry_date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
        description: format!("A crate of fresh {}.", name.to_lowercase()),
        unit: "kg".to_string(),
        image_url: format!("https://example.com/{}.jpg", name.len()),
    }
}

/// A valid draft with explicit price and stock
pub fn priced_draft(name: &str, category: &str, price: f64, stock: u32) -> ProductDraft {
    ProductDraft {
        price,
        stock,
        ..draft(name, category)
    }
}

/// The three-product scenario from the storefront: two fruits, one bakery item
pub fn basic_drafts() -> Vec<ProductDraft> {
    vec![
        draft("Avocado", "Fruits"),
        draft("Banana", "Fruits"),
        draft("Bread", "Bakery"),
    ]
}

/// A larger catalog spanning several categories, for pagination sweeps
pub fn grocery_drafts() -> Vec<ProductDraft> {
    let names = [
        ("Apple", "Fruits"),
        ("Avocado", "Fruits"),
        ("Banana", "Fruits"),
        ("Blueberries", "Fruits"),
        ("Bread", "Bakery"),
        ("Baguette", "Bakery"),
        ("Croissant", "Bakery"),
        ("Milk", "Dairy"),
        ("Butter", "Dairy"),
        ("Yogurt", "Dairy"),
        ("Cheddar", "Dairy"),
        ("Eggs", "Dairy"),
        ("Rice", "Pantry"),
        ("Pasta", "Pantry"),
        ("Olive Oil", "Pantry"),
        ("Black Beans", "Pantry"),
        ("Coffee Beans", "Beverages"),
        ("Green Tea", "Beverages"),
        ("Orange Juice", "Beverages"),
        ("Sparkling Water", "Beverages"),
        ("Carrots", "Vegetables"),
        ("Spinach", "Vegetables"),
        ("Tomatoes", "Vegetables"),
        ("Potatoes", "Vegetables"),
        ("Onions", "Vegetables"),
    ];
    names.iter().map(|(n, c)| draft(n, c)).collect()
}
