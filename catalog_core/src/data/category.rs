use serde::{Deserialize, Serialize};

use super::{table::Keyed, user::UserId};

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    /// A short name of the category, e.g. "Grocery"
    pub title: String,
    /// A glyph shown next to the title, usually a single emoji.
    pub icon: String,
    /// The user that owns every product in this category.
    pub owner_id: UserId,
}

impl Keyed for Category {
    type Key = CategoryId;
    const KIND: &'static str = "category";

    fn key(&self) -> CategoryId {
        self.id
    }
}
