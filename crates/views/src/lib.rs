//! `storefront-views` — render-free view-models.
//!
//! Each view owns its per-view state (filter, sort, page, load state,
//! mirrored quantity), reads the shared cart store for in-cart quantities,
//! and dispatches all cart mutation back to the store. An embedding UI
//! renders these types; nothing here draws anything.

pub mod cart_view;
pub mod load;
pub mod product_detail;
pub mod product_list;

pub use cart_view::CartView;
pub use load::LoadState;
pub use product_detail::ProductDetailView;
pub use product_list::{PAGE_SIZE, PriceSort, ProductListView};
