use crate::domain::ports::Product;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CREATOR_ID: AtomicU64 = AtomicU64::new(1);

/// The two factory slots a creator exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProductKind {
    A,
    B,
}

impl ProductKind {
    pub const ALL: [ProductKind; 2] = [ProductKind::A, ProductKind::B];
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductKind::A => write!(f, "A"),
            ProductKind::B => write!(f, "B"),
        }
    }
}

impl FromStr for ProductKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        // 也接受產品名稱本身，例如 "type A"
        let normalized = normalized.strip_prefix("type ").unwrap_or(&normalized);
        match normalized.trim() {
            "a" => Ok(ProductKind::A),
            "b" => Ok(ProductKind::B),
            _ => Err(format!("unknown product kind '{}', expected A or B", s)),
        }
    }
}

impl TryFrom<String> for ProductKind {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProductKind> for String {
    fn from(kind: ProductKind) -> Self {
        kind.to_string()
    }
}

/// Process-unique identity of a creator instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreatorId(u64);

impl CreatorId {
    pub fn next() -> Self {
        Self(NEXT_CREATOR_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CreatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "creator-{}", self.0)
    }
}

/// Uniquely-owned product returned by a factory operation.
///
/// Disposal takes the handle by value, so it cannot be released twice.
/// A handle that is dropped without disposal still frees its product.
pub struct ProductHandle {
    product: Box<dyn Product>,
    kind: ProductKind,
    issuer: CreatorId,
}

impl ProductHandle {
    pub fn new(product: Box<dyn Product>, kind: ProductKind, issuer: CreatorId) -> Self {
        Self {
            product,
            kind,
            issuer,
        }
    }

    pub fn name(&self) -> &str {
        self.product.name()
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    pub fn issuer(&self) -> CreatorId {
        self.issuer
    }

    pub fn product(&self) -> &dyn Product {
        self.product.as_ref()
    }

    pub fn into_product(self) -> Box<dyn Product> {
        self.product
    }
}

impl fmt::Debug for ProductHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductHandle")
            .field("name", &self.name())
            .field("kind", &self.kind)
            .field("issuer", &self.issuer)
            .finish()
    }
}
