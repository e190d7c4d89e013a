use crate::core::{create_product, Creator, ProductKind};
use crate::utils::error::Result;
use std::io::Write;

pub const DEFAULT_LABEL_PREFIX: &str = "Product";

/// Walks a creator through create, print, remove for each product kind.
pub struct Driver<C: Creator> {
    creator: C,
    sequence: Vec<ProductKind>,
    label_prefix: String,
}

impl<C: Creator> Driver<C> {
    pub fn new(creator: C) -> Self {
        Self {
            creator,
            sequence: ProductKind::ALL.to_vec(),
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
        }
    }

    pub fn with_sequence(mut self, sequence: Vec<ProductKind>) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn with_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = prefix.into();
        self
    }

    /// Returns the product names in the order they were written.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<String>> {
        tracing::info!("Starting driver with {} product(s)", self.sequence.len());
        let mut names = Vec::with_capacity(self.sequence.len());

        for &kind in &self.sequence {
            let handle = create_product(&self.creator, kind)?;
            let name = handle.name().to_string();
            tracing::debug!("Created product {} named '{}'", kind, name);

            writeln!(out, "{}: {}", self.label_prefix, name)?;

            self.creator.remove_product(handle)?;
            names.push(name);
        }

        out.flush()?;
        tracing::info!("✅ Driver finished, {} product(s) created and removed", names.len());
        Ok(names)
    }
}
