use std::fmt;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use super::{
    category::{Category, CategoryId},
    product::{Product, ProductView},
    table::Table,
    user::{User, UserId},
};
use crate::view::{visible_products, SelectionState, VisibleProducts};

/// The joined product catalog. Built once from the source datasets and never
/// modified afterwards; everything that reads it borrows it.
#[derive(Debug, Default)]
pub struct Catalog {
    users: Table<User>,
    categories: Table<Category>,
    /// One view per source product, in the order the products were given.
    products: Vec<ProductView>,
}

/// Names one of the three source datasets.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Dataset {
    Users,
    Categories,
    Products,
}

/// Error type for building a catalog from serialized datasets.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("The {dataset} dataset could not be parsed: {source}")]
    Parse {
        dataset: Dataset,
        #[source]
        source: serde_json::Error,
    },
}

impl Catalog {
    /// Joins every product with its category and that category's owner.
    ///
    /// A product whose category id matches no category gets neither a category
    /// nor a user. A category whose owner id matches no user leaves only the
    /// user unresolved. Neither case is an error.
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        let users = Table::new(users);
        let categories = Table::new(categories);
        debug!(
            users = users.len(),
            categories = categories.len(),
            products = products.len(),
            "building catalog"
        );

        let products = products
            .into_iter()
            .map(|product| join_product(&users, &categories, product))
            .collect();

        Catalog { users, categories, products }
    }

    /// Parses the three datasets from JSON arrays of records and joins them.
    pub fn from_json(users: &str, categories: &str, products: &str) -> Result<Self, LoadError> {
        let users = parse_dataset(Dataset::Users, users)?;
        let categories = parse_dataset(Dataset::Categories, categories)?;
        let products = parse_dataset(Dataset::Products, products)?;
        Ok(Catalog::new(users, categories, products))
    }

    /// All joined products, in source order.
    pub fn products(&self) -> &[ProductView] {
        &self.products
    }

    /// All users, in source order. These are the choices for the owner filter.
    pub fn users(&self) -> &[User] {
        self.users.records()
    }

    /// All categories, in source order. These are the choices for the category
    /// filter.
    pub fn categories(&self) -> &[Category] {
        self.categories.records()
    }

    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.users.get(id)
    }

    pub fn get_category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Filters and then sorts the catalog according to `selection`.
    pub fn visible(&self, selection: &SelectionState) -> VisibleProducts<'_> {
        visible_products(self, selection)
    }
}

fn join_product(users: &Table<User>, categories: &Table<Category>, product: Product) -> ProductView {
    let category = categories.get(product.category_id).cloned();
    let user = match &category {
        Some(category) => {
            let user = users.get(category.owner_id).cloned();
            if user.is_none() {
                debug!(product = product.id.0, owner = category.owner_id.0, "owner not found");
            }
            user
        }
        None => {
            debug!(product = product.id.0, category = product.category_id.0, "category not found");
            None
        }
    };
    ProductView::new(product, category, user)
}

fn parse_dataset<T: DeserializeOwned>(dataset: Dataset, json: &str) -> Result<Vec<T>, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::Parse { dataset, source })
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dataset::Users => "users",
            Dataset::Categories => "categories",
            Dataset::Products => "products",
        })
    }
}
