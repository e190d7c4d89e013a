use crate::domain::model::{ProductKind, ProductHandle};
use crate::utils::error::Result;

/// Products share one interface so callers never name a concrete product.
#[cfg_attr(test, mockall::automock)]
pub trait Product: Send + Sync {
    fn name(&self) -> &str;
}

/// Factory methods for every product slot, plus disposal.
///
/// Handles are moved into `remove_product`, so a product cannot be released twice.
#[cfg_attr(test, mockall::automock)]
pub trait Creator: Send + Sync {
    fn create_product_a(&self) -> Result<ProductHandle>;
    fn create_product_b(&self) -> Result<ProductHandle>;

    fn remove_product(&self, handle: ProductHandle) -> Result<()>;
}

pub fn create_product<C: Creator + ?Sized>(creator: &C, kind: ProductKind) -> Result<ProductHandle> {
    match kind {
        ProductKind::A => creator.create_product_a(),
        ProductKind::B => creator.create_product_b(),
    }
}
