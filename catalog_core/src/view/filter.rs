use crate::data::ProductView;

/// The inclusion tests applied to every product. A product is visible only if
/// it passes all of them.
///
/// `None` means the corresponding test is off. `Some("")` is a real filter that
/// only matches an empty name or title.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria<'a> {
    /// Exact name of the category owner.
    pub user_name: Option<&'a str>,
    /// Exact title of the category.
    pub category_title: Option<&'a str>,
    /// Case-insensitive substring of the product name. Surrounding whitespace
    /// is ignored and a blank query matches everything.
    pub query: &'a str,
}

impl<'a> FilterCriteria<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_name(mut self, user_name: &'a str) -> Self {
        self.user_name = Some(user_name);
        self
    }

    pub fn with_category_title(mut self, category_title: &'a str) -> Self {
        self.category_title = Some(category_title);
        self
    }

    pub fn with_query(mut self, query: &'a str) -> Self {
        self.query = query;
        self
    }

    /// Whether a single product passes every test.
    pub fn matches(&self, view: &ProductView) -> bool {
        Predicate::new(self).matches(view)
    }
}

/// Criteria with the query normalized once, so a pass over many products does
/// not lowercase it again for each of them.
struct Predicate<'a> {
    user_name: Option<&'a str>,
    category_title: Option<&'a str>,
    query: String,
}

impl<'a> Predicate<'a> {
    fn new(criteria: &FilterCriteria<'a>) -> Self {
        Predicate {
            user_name: criteria.user_name,
            category_title: criteria.category_title,
            query: criteria.query.trim().to_lowercase(),
        }
    }

    fn matches(&self, view: &ProductView) -> bool {
        let matches_user = self.user_name.map_or(true, |name| view.user_name() == Some(name));
        let matches_category =
            self.category_title.map_or(true, |title| view.category_title() == Some(title));
        let matches_query = self.query.is_empty() || view.name.to_lowercase().contains(&self.query);

        matches_user && matches_category && matches_query
    }
}

/// Returns the views that pass `criteria`, keeping their relative order.
pub fn filter_products<'a, I>(views: I, criteria: &FilterCriteria<'_>) -> Vec<&'a ProductView>
where
    I: IntoIterator<Item = &'a ProductView>,
{
    let predicate = Predicate::new(criteria);
    views.into_iter().filter(|view| predicate.matches(view)).collect()
}
