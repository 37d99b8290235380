mod filter;
mod selection;
mod sort;

use tracing::trace;

pub use filter::{filter_products, FilterCriteria};
pub use selection::{SelectionEvent, SelectionState};
pub use sort::{sort_products, SortColumn, SortOrder};

use crate::data::{Catalog, ProductView};

/// The rows of the product table for one selection, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleProducts<'a> {
    rows: Vec<&'a ProductView>,
    /// How many products the catalog holds before filtering.
    catalog_len: usize,
}

impl<'a> VisibleProducts<'a> {
    pub fn rows(&self) -> &[&'a ProductView] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<&'a ProductView> {
        self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ProductView> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The catalog has products but the selection filtered all of them out.
    pub fn is_no_match(&self) -> bool {
        self.rows.is_empty() && self.catalog_len > 0
    }

    /// There was nothing to show even before filtering.
    pub fn catalog_is_empty(&self) -> bool {
        self.catalog_len == 0
    }
}

/// Filters the catalog by the selection's criteria, then sorts what is left by
/// its sort column.
pub fn visible_products<'a>(catalog: &'a Catalog, selection: &SelectionState) -> VisibleProducts<'a> {
    let filtered = filter_products(catalog.products(), &selection.filter_criteria());
    let rows = sort_products(&filtered, selection.sort_column(), selection.sort_order());
    trace!(?selection, total = catalog.len(), visible = rows.len(), "computed visible products");
    VisibleProducts { rows, catalog_len: catalog.len() }
}
