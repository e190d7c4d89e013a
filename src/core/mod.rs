pub mod creator;
pub mod driver;
pub mod products;

pub use crate::domain::model::{CreatorId, ProductHandle, ProductKind};
#[cfg(test)]
pub use crate::domain::ports::{MockCreator, MockProduct};
pub use crate::domain::ports::{create_product, Creator, Product};
pub use crate::utils::error::Result;
pub use creator::ConcreteCreator;
