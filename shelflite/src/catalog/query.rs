// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query pipeline: filter, sort, count, slice
//!
//! The pipeline runs in exactly one place ([`paginate`]) and computes the
//! total count and the page slice from the same filtered set, so the two can
//! never disagree regardless of backend. Ordering is a stable total order
//! (search_key, then name, then id): concatenating consecutive pages
//! reconstructs the filtered set with no gaps or duplicates.

use crate::model::Product;

/// Default page size, matching the storefront's product grid
pub const DEFAULT_PAGE_SIZE: u32 = 8;

/// Page sizes the storefront offers
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [8, 16, 24, 32];

/// Category sentinel meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// How search text is matched against the case-folded name key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Contains-match over a full store snapshot. The default; every search
    /// guarantee holds.
    Substring,

    /// Prefix-only match served from the store's search-key range scan.
    /// Reduced-capability mode for backends where a contains-scan is not
    /// expressible as a single range query; documented trade-off is that
    /// "nana" does not find "Banana".
    Prefix,
}

impl Default for SearchMode {
    fn default() -> Self {
        SearchMode::Substring
    }
}

/// Product listing filter
///
/// Both parts are optional. An empty search string is equivalent to no
/// search, and the `"all"` sentinel (what the storefront's category dropdown
/// submits) is equivalent to no category. Category matching is exact and
/// case-sensitive; search matching is case-insensitive via `search_key`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    category: Option<String>,
    search: Option<String>,
}

impl ProductFilter {
    /// Filter matching every product
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to an exact category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to products whose name contains (or starts with, in prefix
    /// mode) the given text, case-insensitively
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// The category predicate, with the sentinel and empty values removed
    pub(crate) fn active_category(&self) -> Option<&str> {
        match self.category.as_deref() {
            None | Some("") | Some(ALL_CATEGORIES) => None,
            Some(category) => Some(category),
        }
    }

    /// The case-folded search text, with empty values removed
    pub(crate) fn folded_search(&self) -> Option<String> {
        match self.search.as_deref() {
            None | Some("") => None,
            Some(text) => Some(Product::fold_name(text)),
        }
    }
}

/// A page request: 1-based page number and page size
///
/// Constructors clamp both values to at least 1, keeping the public
/// contract (positive integers) enforced by the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// First page at the default page size
    pub fn first() -> Self {
        Self::default()
    }

    /// Same page size, given page number
    pub fn page(self, page: u32) -> Self {
        Self::new(page, self.page_size)
    }

    pub fn page_number(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    fn offset(&self) -> usize {
        (self.page as usize - 1) * self.page_size as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// An item in a rendered page-number range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRangeItem {
    Page(u32),
    Ellipsis,
}

/// One page of filtered products plus the total match count
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    /// The page slice, in stable catalog order
    pub items: Vec<Product>,

    /// Number of products matching the filter, independent of pagination
    pub total_count: usize,

    /// 1-based page number this slice corresponds to
    pub page: u32,

    /// Page size the slice was cut with
    pub page_size: u32,
}

impl ProductPage {
    /// Number of pages needed for the full filtered set
    pub fn total_pages(&self) -> u32 {
        (self.total_count as u64).div_ceil(self.page_size as u64) as u32
    }

    /// Whether the slice holds no products
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 1-based index of the first product on this page within the filtered
    /// set, or 0 for an empty page (the "1-8 / 97" display range)
    pub fn first_item(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page as usize - 1) * self.page_size as usize + 1
        }
    }

    /// 1-based index of the last product on this page, or 0 for an empty page
    pub fn last_item(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page as usize - 1) * self.page_size as usize + self.items.len()
        }
    }

    /// Page numbers to render around the current page, with ellipses where
    /// ranges are elided
    ///
    /// `sibling_count` is how many neighbors to keep on each side of the
    /// current page. The window always pins the first and last page.
    pub fn page_range(&self, sibling_count: u32) -> Vec<PageRangeItem> {
        page_range(self.total_pages(), self.page, sibling_count)
    }
}

fn page_range(total_pages: u32, current_page: u32, sibling_count: u32) -> Vec<PageRangeItem> {
    use PageRangeItem::{Ellipsis, Page};

    // Current page + siblings + first/last + two ellipsis slots
    let total_page_numbers = sibling_count + 5;

    if total_page_numbers >= total_pages {
        return (1..=total_pages).map(Page).collect();
    }

    let left_sibling = current_page.saturating_sub(sibling_count).max(1);
    let right_sibling = (current_page + sibling_count).min(total_pages);

    let show_left_dots = left_sibling > 2;
    let show_right_dots = right_sibling < total_pages - 2;

    if !show_left_dots && show_right_dots {
        let left_item_count = 3 + 2 * sibling_count;
        let mut range: Vec<PageRangeItem> = (1..=left_item_count).map(Page).collect();
        range.push(Ellipsis);
        range.push(Page(total_pages));
        return range;
    }

    if show_left_dots && !show_right_dots {
        let right_item_count = 3 + 2 * sibling_count;
        let mut range = vec![Page(1), Ellipsis];
        range.extend((total_pages - right_item_count + 1..=total_pages).map(Page));
        return range;
    }

    let mut range = vec![Page(1), Ellipsis];
    range.extend((left_sibling..=right_sibling).map(Page));
    range.push(Ellipsis);
    range.push(Page(total_pages));
    range
}

/// Run the full pipeline over a candidate set
///
/// Candidates come from either a store snapshot (substring mode) or a
/// search-key range scan (prefix mode); this function applies the complete
/// filter either way, so backends only ever narrow the candidate set, never
/// decide membership.
pub(crate) fn paginate(
    candidates: Vec<Product>,
    filter: &ProductFilter,
    request: &PageRequest,
    mode: SearchMode,
) -> ProductPage {
    let category = filter.active_category();
    let search = filter.folded_search();

    let mut matches: Vec<Product> = candidates
        .into_iter()
        .filter(|product| {
            category.map_or(true, |c| product.category == c)
                && search.as_deref().map_or(true, |q| match mode {
                    SearchMode::Substring => product.search_key.contains(q),
                    SearchMode::Prefix => product.search_key.starts_with(q),
                })
        })
        .collect();

    matches.sort_by(|a, b| {
        a.search_key
            .cmp(&b.search_key)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });

    let total_count = matches.len();
    let start = request.offset().min(total_count);
    let end = (start + request.page_size() as usize).min(total_count);
    matches.truncate(end);
    let items = matches.split_off(start);

    ProductPage {
        items,
        total_count,
        page: request.page_number(),
        page_size: request.page_size(),
    }
}
