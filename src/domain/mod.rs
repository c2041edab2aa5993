//! Domain layer: the purchase order value object and the builder that assembles it.

pub mod builder;
pub mod order;
