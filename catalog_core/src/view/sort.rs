use std::{borrow::Cow, cmp::Ordering};

use serde::{Deserialize, Serialize};

use crate::data::{ProductId, ProductView};

/// A sortable column of the product table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Id,
    Product,
    Category,
    User,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// The value a row is ordered by. Rows are only ever compared under a single
/// column, so the two variants never meet.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey<'a> {
    Id(ProductId),
    Text(Cow<'a, str>),
}

impl SortColumn {
    /// Every column, in the order the table shows them.
    pub const ALL: [SortColumn; 4] =
        [SortColumn::Id, SortColumn::Product, SortColumn::Category, SortColumn::User];

    /// The column header.
    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::Product => "Product",
            SortColumn::Category => "Category",
            SortColumn::User => "User",
        }
    }

    fn key(self, view: &ProductView) -> SortKey<'_> {
        match self {
            SortColumn::Id => SortKey::Id(view.id),
            SortColumn::Product => SortKey::Text(Cow::Owned(view.name.to_lowercase())),
            SortColumn::Category => SortKey::Text(Cow::Borrowed(view.category_title().unwrap_or(""))),
            SortColumn::User => SortKey::Text(Cow::Borrowed(view.user_name().unwrap_or(""))),
        }
    }

    /// Three-way comparison of two rows under this column in ascending order.
    pub fn compare(self, a: &ProductView, b: &ProductView) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }
}

impl SortOrder {
    /// The other direction.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Turns an ascending comparison into one for this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Returns `rows` ordered by `column` in `order`. Rows with equal keys keep
/// their relative order in either direction. Without a column the rows come
/// back in their original order.
pub fn sort_products<'a>(
    rows: &[&'a ProductView],
    column: Option<SortColumn>,
    order: SortOrder,
) -> Vec<&'a ProductView> {
    let mut sorted = rows.to_vec();
    if let Some(column) = column {
        // `sort_by` is stable, and reversing `Equal` is still `Equal`
        sorted.sort_by(|a, b| order.apply(column.compare(a, b)));
    }
    sorted
}

#[cfg(test)]
mod test {
    use crate::data::{Catalog, Category, CategoryId, Product, Sex, User, UserId};

    use super::*;

    /// Builds a catalog from `(id, name, category)` triples. Category 1 is
    /// "Grocery" owned by Roma, category 2 is "Drinks" owned by Anna, category
    /// 3 is "Clothes" owned by nobody; anything else is unresolved.
    fn gen_catalog(products: &[(u64, &str, u64)]) -> Catalog {
        let users = vec![
            User { id: UserId(1), name: "Roma".to_owned(), sex: Sex::Male },
            User { id: UserId(2), name: "Anna".to_owned(), sex: Sex::Female },
        ];
        let categories = [(1, "Grocery", 1), (2, "Drinks", 2), (3, "Clothes", 9)]
            .into_iter()
            .map(|(id, title, owner)| Category {
                id: CategoryId(id),
                title: title.to_owned(),
                icon: String::new(),
                owner_id: UserId(owner),
            })
            .collect();
        let products = products
            .iter()
            .map(|&(id, name, category)| Product {
                id: ProductId(id),
                name: name.to_owned(),
                category_id: CategoryId(category),
            })
            .collect();
        Catalog::new(users, categories, products)
    }

    fn sorted_ids(catalog: &Catalog, column: Option<SortColumn>, order: SortOrder) -> Vec<u64> {
        let rows = catalog.products().iter().collect::<Vec<_>>();
        sort_products(&rows, column, order).iter().map(|view| view.id.0).collect()
    }

    #[test]
    fn by_id() {
        let catalog = gen_catalog(&[(3, "c", 1), (1, "a", 1), (2, "b", 1)]);
        assert_eq!(sorted_ids(&catalog, Some(SortColumn::Id), SortOrder::Asc), vec![1, 2, 3]);
        assert_eq!(sorted_ids(&catalog, Some(SortColumn::Id), SortOrder::Desc), vec![3, 2, 1]);
    }

    #[test]
    fn ids_compare_numerically() {
        let catalog = gen_catalog(&[(10, "a", 1), (9, "b", 1), (100, "c", 1)]);
        assert_eq!(sorted_ids(&catalog, Some(SortColumn::Id), SortOrder::Asc), vec![9, 10, 100]);
    }

    #[test]
    fn by_product_ignores_case() {
        let catalog = gen_catalog(&[(1, "banana", 1), (2, "Apple", 1), (3, "cherry", 1)]);
        assert_eq!(
            sorted_ids(&catalog, Some(SortColumn::Product), SortOrder::Asc),
            vec![2, 1, 3]
        );
        assert_eq!(
            sorted_ids(&catalog, Some(SortColumn::Product), SortOrder::Desc),
            vec![3, 1, 2]
        );
    }

    #[test]
    fn by_category_puts_unresolved_first() {
        let catalog = gen_catalog(&[(1, "a", 1), (2, "b", 7), (3, "c", 2), (4, "d", 3)]);
        // "" < "Clothes" < "Drinks" < "Grocery"
        assert_eq!(
            sorted_ids(&catalog, Some(SortColumn::Category), SortOrder::Asc),
            vec![2, 4, 3, 1]
        );
    }

    #[test]
    fn by_user_puts_unresolved_first() {
        let catalog = gen_catalog(&[(1, "a", 1), (2, "b", 3), (3, "c", 2), (4, "d", 7)]);
        // products 2 and 4 have no user and tie on ""
        assert_eq!(sorted_ids(&catalog, Some(SortColumn::User), SortOrder::Asc), vec![2, 4, 3, 1]);
        assert_eq!(sorted_ids(&catalog, Some(SortColumn::User), SortOrder::Desc), vec![1, 3, 2, 4]);
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let catalog =
            gen_catalog(&[(5, "x", 1), (2, "y", 2), (4, "z", 1), (1, "w", 2), (3, "v", 1)]);
        assert_eq!(
            sorted_ids(&catalog, Some(SortColumn::Category), SortOrder::Asc),
            vec![2, 1, 5, 4, 3]
        );
        assert_eq!(
            sorted_ids(&catalog, Some(SortColumn::Category), SortOrder::Desc),
            vec![5, 4, 3, 2, 1]
        );
    }

    #[test]
    fn no_column_is_identity() {
        let catalog = gen_catalog(&[(3, "c", 1), (1, "a", 1), (2, "b", 1)]);
        assert_eq!(sorted_ids(&catalog, None, SortOrder::Asc), vec![3, 1, 2]);
        assert_eq!(sorted_ids(&catalog, None, SortOrder::Desc), vec![3, 1, 2]);
    }

    #[test]
    fn input_is_left_untouched() {
        let catalog = gen_catalog(&[(3, "c", 1), (1, "a", 1), (2, "b", 1)]);
        let rows = catalog.products().iter().collect::<Vec<_>>();
        let sorted = sort_products(&rows, Some(SortColumn::Id), SortOrder::Asc);
        assert_eq!(rows.iter().map(|view| view.id.0).collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(sorted.len(), rows.len());
    }

    #[test]
    fn order_toggles() {
        assert_eq!(SortOrder::default(), SortOrder::Asc);
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
    }

    #[test]
    fn column_labels() {
        let labels = SortColumn::ALL.iter().map(|column| column.label()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["ID", "Product", "Category", "User"]);
    }
}
