use serde::{Deserialize, Serialize};

use super::table::Keyed;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// The display name, which is also what the owner filter matches on.
    pub name: String,
    pub sex: Sex,
}

impl Keyed for User {
    type Key = UserId;
    const KIND: &'static str = "user";

    fn key(&self) -> UserId {
        self.id
    }
}
