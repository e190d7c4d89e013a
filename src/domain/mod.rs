// Domain layer: product/creator capabilities and the values they exchange.

pub mod model;
pub mod ports;
