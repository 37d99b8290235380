mod catalog;
mod category;
mod product;
mod table;
mod user;

pub use catalog::{Catalog, Dataset, LoadError};
pub use category::{Category, CategoryId};
pub use product::{Product, ProductId, ProductView};
pub use table::{Keyed, Table};
pub use user::{Sex, User, UserId};
