pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{toml_config::TomlConfig, RunSettings};

pub use core::{
    create_product, driver::Driver, products::ConcreteProductA, products::ConcreteProductB,
    ConcreteCreator, Creator, CreatorId, Product, ProductHandle, ProductKind,
};
pub use utils::error::{FactoryError, Result};
