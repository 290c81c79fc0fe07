use std::cmp::Reverse;
use std::sync::Arc;

use storefront_cart::CartStore;
use storefront_catalog::{CatalogClient, CatalogResult, Product};
use storefront_core::ProductId;

/// Fixed page size of the listing.
pub const PAGE_SIZE: usize = 10;

/// Price sort direction. Sorting is stable: ties keep their prior
/// relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSort {
    Ascending,
    Descending,
}

/// The product listing: filter by exact category, sort by price, paginate
/// in fixed pages of [`PAGE_SIZE`].
///
/// The pristine catalog order is kept and the visible sequence is derived
/// from it on every read, so clearing filter and sort restores the
/// original order exactly. Changing filter or sort resets pagination to
/// page 1.
#[derive(Debug)]
pub struct ProductListView {
    cart: Arc<CartStore>,
    products: Vec<Product>,
    categories: Vec<String>,
    category: Option<String>,
    sort: Option<PriceSort>,
    page: usize,
}

impl ProductListView {
    /// Fetch the full product sequence and the category labels, once each.
    pub async fn load(client: &CatalogClient, cart: Arc<CartStore>) -> CatalogResult<Self> {
        let products = client.fetch_products().await?;
        let categories = client.fetch_categories().await?;
        tracing::debug!(
            products = products.len(),
            categories = categories.len(),
            "product list loaded"
        );
        Ok(Self::from_parts(products, categories, cart))
    }

    /// Build from an already-fetched catalog snapshot.
    pub fn from_parts(products: Vec<Product>, categories: Vec<String>, cart: Arc<CartStore>) -> Self {
        Self {
            cart,
            products,
            categories,
            category: None,
            sort: None,
            page: 1,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn sort(&self) -> Option<PriceSort> {
        self.sort
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Filter by exact category match; `None` clears the filter. Resets to
    /// page 1.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
        self.page = 1;
    }

    /// Sort by price; `None` restores catalog order. Resets to page 1.
    pub fn set_sort(&mut self, sort: Option<PriceSort>) {
        self.sort = sort;
        self.page = 1;
    }

    fn filtered(&self) -> Vec<&Product> {
        let mut filtered: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| self.category.as_deref().map_or(true, |c| p.category == c))
            .collect();

        match self.sort {
            Some(PriceSort::Ascending) => filtered.sort_by_key(|p| p.price),
            Some(PriceSort::Descending) => filtered.sort_by_key(|p| Reverse(p.price)),
            None => {}
        }

        filtered
    }

    /// Size of the filtered (pre-pagination) sequence.
    pub fn filtered_len(&self) -> usize {
        self.filtered().len()
    }

    /// ⌈filtered / page size⌉; 0 when the filtered sequence is empty.
    pub fn page_count(&self) -> usize {
        self.filtered_len().div_ceil(PAGE_SIZE)
    }

    /// The products on the current page, in filtered/sorted order.
    pub fn page_items(&self) -> Vec<&Product> {
        self.filtered()
            .into_iter()
            .skip((self.page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    /// Navigate; clamped to [1, page count]. An empty result set pins the
    /// view to page 1 (with an empty page).
    pub fn goto_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count().max(1));
    }

    pub fn next_page(&mut self) {
        self.goto_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.goto_page(self.page.saturating_sub(1));
    }

    /// In-cart quantity for a listed product; 0 when absent. The UI shows
    /// "Add to Cart" at 0 and a ± stepper otherwise.
    pub fn quantity_in_cart(&self, product_id: ProductId) -> u32 {
        self.cart.quantity_of(product_id)
    }

    /// Put one unit of a listed product into the cart. Unknown ids are
    /// ignored.
    pub fn add_to_cart(&self, product_id: ProductId) {
        if let Some(product) = self.products.iter().find(|p| p.id == product_id) {
            self.cart.add(product.clone(), 1);
        }
    }

    pub fn increment(&self, product_id: ProductId) {
        self.cart.update_quantity(product_id, 1);
    }

    /// Decrement by one; the store removes the item when it reaches zero.
    pub fn decrement(&self, product_id: ProductId) {
        self.cart.update_quantity(product_id, -1);
    }
}
