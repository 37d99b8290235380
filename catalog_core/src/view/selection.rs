use serde::{Deserialize, Serialize};

use super::{
    filter::FilterCriteria,
    sort::{SortColumn, SortOrder},
};

/// The filter and sort choices currently applied to the product table.
///
/// The default state shows everything in catalog order: no owner, no
/// category, an empty query and no sort column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    user_name: Option<String>,
    category_title: Option<String>,
    query: String,
    sort_column: Option<SortColumn>,
    /// Only meaningful while `sort_column` is set, but remembered regardless.
    sort_order: SortOrder,
}

/// A change to a [`SelectionState`], one per control of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Picks an owner to filter by, or `None` for all owners.
    SelectUser(Option<String>),
    /// Picks a category to filter by, or `None` for all categories.
    SelectCategory(Option<String>),
    /// Replaces the search text as typed.
    SetQuery(String),
    ClearQuery,
    /// Clears the owner, the category and the query. The sort is kept.
    ResetFilters,
    /// Activates a column header. A new column starts ascending; the active
    /// column flips between ascending and descending.
    ToggleSort(SortColumn),
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    pub fn with_category_title(mut self, category_title: impl Into<String>) -> Self {
        self.category_title = Some(category_title.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_sort(mut self, column: SortColumn, order: SortOrder) -> Self {
        self.sort_column = Some(column);
        self.sort_order = order;
        self
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn category_title(&self) -> Option<&str> {
        self.category_title.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether anything has been typed into the search box, whitespace
    /// included.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn sort_column(&self) -> Option<SortColumn> {
        self.sort_column
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The direction `column` is sorted in, or `None` if another column (or no
    /// column) is active.
    pub fn sort_order_for(&self, column: SortColumn) -> Option<SortOrder> {
        (self.sort_column == Some(column)).then_some(self.sort_order)
    }

    /// Borrows the filter part of the selection.
    pub fn filter_criteria(&self) -> FilterCriteria<'_> {
        FilterCriteria {
            user_name: self.user_name.as_deref(),
            category_title: self.category_title.as_deref(),
            query: &self.query,
        }
    }

    /// Returns the state that follows this one after `event`.
    pub fn apply(self, event: SelectionEvent) -> Self {
        match event {
            SelectionEvent::SelectUser(user_name) => SelectionState { user_name, ..self },
            SelectionEvent::SelectCategory(category_title) => {
                SelectionState { category_title, ..self }
            }
            SelectionEvent::SetQuery(query) => SelectionState { query, ..self },
            SelectionEvent::ClearQuery => SelectionState { query: String::new(), ..self },
            SelectionEvent::ResetFilters => SelectionState {
                user_name: None,
                category_title: None,
                query: String::new(),
                ..self
            },
            SelectionEvent::ToggleSort(column) => self.toggle_sort(column),
        }
    }

    fn toggle_sort(self, column: SortColumn) -> Self {
        let sort_order = match self.sort_order_for(column) {
            Some(order) => order.toggled(),
            None => SortOrder::Asc,
        };
        SelectionState { sort_column: Some(column), sort_order, ..self }
    }
}
