use crate::core::products::{ConcreteProductA, ConcreteProductB};
use crate::core::{Creator, CreatorId, ProductHandle, ProductKind};
use crate::utils::error::{FactoryError, Result};

/// Creator bound to `ConcreteProductA` / `ConcreteProductB`.
///
/// Holds no products; each handle is stamped with this creator's id so
/// foreign handles can be rejected on removal.
#[derive(Debug)]
pub struct ConcreteCreator {
    id: CreatorId,
}

impl ConcreteCreator {
    pub fn new() -> Self {
        let id = CreatorId::next();
        tracing::debug!("Creator {} ready", id);
        Self { id }
    }

    pub fn id(&self) -> CreatorId {
        self.id
    }
}

impl Default for ConcreteCreator {
    fn default() -> Self {
        Self::new()
    }
}

impl Creator for ConcreteCreator {
    fn create_product_a(&self) -> Result<ProductHandle> {
        tracing::debug!("{} creating product A", self.id);
        Ok(ProductHandle::new(
            Box::new(ConcreteProductA),
            ProductKind::A,
            self.id,
        ))
    }

    fn create_product_b(&self) -> Result<ProductHandle> {
        tracing::debug!("{} creating product B", self.id);
        Ok(ProductHandle::new(
            Box::new(ConcreteProductB),
            ProductKind::B,
            self.id,
        ))
    }

    fn remove_product(&self, handle: ProductHandle) -> Result<()> {
        let issuer = handle.issuer();
        let kind = handle.kind();

        // handle 已經移入，不論結果如何都會在這裡釋放
        drop(handle);

        if issuer != self.id {
            tracing::warn!("{} refused product {} issued by {}", self.id, kind, issuer);
            return Err(FactoryError::invalid_handle(issuer, self.id));
        }

        tracing::debug!("{} removed product {}", self.id, kind);
        Ok(())
    }
}
