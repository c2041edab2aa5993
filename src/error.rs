use std::fmt;
use thiserror::Error;

/// A field a purchase order cannot be built without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    CustomerName,
    Product,
}

impl RequiredField {
    pub fn name(&self) -> &'static str {
        match self {
            RequiredField::CustomerName => "customer_name",
            RequiredField::Product => "product",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderError {
    #[error("Invalid required field: {0}")]
    InvalidRequiredField(RequiredField),
}

pub type Result<T> = std::result::Result<T, OrderError>;
