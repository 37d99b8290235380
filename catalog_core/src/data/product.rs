use serde::{Deserialize, Serialize};

use super::{
    category::{Category, CategoryId},
    user::{Sex, User},
};

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

/// A product record as it appears in the source dataset.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
}

/// A product together with its resolved category and the owner of that
/// category.
///
/// If `category` is `Some`, its id equals `category_id`. If `user` is `Some`,
/// `category` is also `Some` and the user's id equals the category's
/// `owner_id`. Views are only produced by [`Catalog`](super::Catalog), which
/// upholds both.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
    pub category: Option<Category>,
    pub user: Option<User>,
}

impl ProductView {
    pub(super) fn new(product: Product, category: Option<Category>, user: Option<User>) -> Self {
        let Product { id, name, category_id } = product;
        ProductView { id, name, category_id, category, user }
    }

    /// The category title, or `None` if the category did not resolve.
    pub fn category_title(&self) -> Option<&str> {
        self.category.as_ref().map(|category| category.title.as_str())
    }

    /// The owner's name, or `None` if the owner did not resolve.
    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.name.as_str())
    }

    pub fn user_sex(&self) -> Option<Sex> {
        self.user.as_ref().map(|user| user.sex)
    }

    /// Text for the category cell of the table, e.g. "🍞 - Grocery".
    pub fn category_label(&self) -> String {
        match &self.category {
            Some(category) => format!("{} - {}", category.icon, category.title),
            None => "No category".to_owned(),
        }
    }

    /// Text for the user cell of the table.
    pub fn user_label(&self) -> &str {
        self.user_name().unwrap_or("No user")
    }
}
