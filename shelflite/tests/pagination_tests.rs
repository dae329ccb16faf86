#[path = "testutils/mod.rs"]
mod testutils;

use shelflite::{PageRequest, ProductFilter};
use std::collections::HashSet;
use testutils::sample_data::{basic_drafts, grocery_drafts};
use testutils::test_fixture::TestFixture;

#[test]
fn concrete_category_paging_scenario() {
    let fixture = TestFixture::memory();
    fixture.create_all(basic_drafts());
    let engine = fixture.engine();

    let fruits = ProductFilter::new().with_category("Fruits");

    let page1 = engine
        .list_products(&fruits, &PageRequest::new(1, 1))
        .expect("Failed to list page 1");
    assert_eq!(page1.total_count, 2);
    assert_eq!(page1.items.len(), 1);
    assert_eq!(page1.items[0].name, "Avocado");

    let page2 = engine
        .list_products(&fruits, &PageRequest::new(2, 1))
        .expect("Failed to list page 2");
    assert_eq!(page2.total_count, 2);
    assert_eq!(page2.items[0].name, "Banana");

    let page3 = engine
        .list_products(&fruits, &PageRequest::new(3, 1))
        .expect("Failed to list page 3");
    assert_eq!(page3.total_count, 2);
    assert!(page3.is_empty());
}

#[test]
fn concatenated_pages_reconstruct_the_filtered_set() {
    let fixture = TestFixture::memory();
    fixture.create_all(grocery_drafts());
    let engine = fixture.engine();

    let filter = ProductFilter::new();
    let first = engine
        .list_products(&filter, &PageRequest::new(1, 8))
        .expect("Failed to list first page");
    let total_pages = first.total_pages();
    assert_eq!(first.total_count, 25);
    assert_eq!(total_pages, 4);

    let mut collected = Vec::new();
    for page_number in 1..=total_pages {
        let page = engine
            .list_products(&filter, &PageRequest::new(page_number, 8))
            .expect("Failed to list page");
        // Count is identical on every page of a fixed filter
        assert_eq!(page.total_count, 25);
        collected.extend(page.items);
    }

    // No omissions, no duplicates
    assert_eq!(collected.len(), 25);
    let ids: HashSet<&str> = collected.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), 25);

    // And the concatenation is sorted by the catalog order
    let keys: Vec<&str> = collected.iter().map(|p| p.search_key.as_str()).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn out_of_range_page_is_empty_not_an_error() {
    let fixture = TestFixture::memory();
    fixture.create_all(basic_drafts());
    let engine = fixture.engine();

    let page = engine
        .list_products(&ProductFilter::new(), &PageRequest::new(40, 8))
        .expect("Out-of-range page must not be an error");
    assert!(page.is_empty());
    assert_eq!(page.total_count, 3);
}

#[test]
fn default_request_is_first_page_of_eight() {
    let fixture = TestFixture::memory();
    fixture.create_all(grocery_drafts());
    let engine = fixture.engine();

    let page = engine
        .list_products(&ProductFilter::new(), &PageRequest::default())
        .expect("Failed to list with defaults");
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 8);
    assert_eq!(page.items.len(), 8);
}

#[test]
fn display_range_covers_the_page() {
    let fixture = TestFixture::memory();
    fixture.create_all(grocery_drafts());
    let engine = fixture.engine();

    let page = engine
        .list_products(&ProductFilter::new(), &PageRequest::new(2, 8))
        .expect("Failed to list page 2");
    assert_eq!(page.first_item(), 9);
    assert_eq!(page.last_item(), 16);

    let last = engine
        .list_products(&ProductFilter::new(), &PageRequest::new(4, 8))
        .expect("Failed to list page 4");
    assert_eq!(last.first_item(), 25);
    assert_eq!(last.last_item(), 25);
    assert_eq!(last.items.len(), 1);
}
