//! Filtering and sorting over a product catalog joined from users,
//! categories and products.
//!
//! A [`Catalog`] is built once from the three source datasets. Every change to
//! a [`SelectionState`] then produces a fresh [`VisibleProducts`] through
//! [`Catalog::visible`], which filters and then sorts the joined rows.

pub mod data;
pub mod view;

pub use data::{
    Catalog, Category, CategoryId, Dataset, LoadError, Product, ProductId, ProductView, Sex, User,
    UserId,
};
pub use view::{
    filter_products, sort_products, visible_products, FilterCriteria, SelectionEvent,
    SelectionState, SortColumn, SortOrder, VisibleProducts,
};
