use crate::core::Product;

pub const PRODUCT_A_NAME: &str = "type A";
pub const PRODUCT_B_NAME: &str = "type B";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductA;

impl Product for ConcreteProductA {
    fn name(&self) -> &str {
        PRODUCT_A_NAME
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductB;

impl Product for ConcreteProductB {
    fn name(&self) -> &str {
        PRODUCT_B_NAME
    }
}
