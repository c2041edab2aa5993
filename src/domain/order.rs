use crate::error::{OrderError, RequiredField, Result};
use std::fmt;

/// A finalized purchase order.
///
/// Fields are private and only readable through accessors, so an order cannot change after
/// construction. Prefer [`PurchaseOrderBuilder`](super::builder::PurchaseOrderBuilder) over
/// calling [`PurchaseOrder::new`] directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOrder {
    customer_name: String,
    product: String,
    quantity: i32,
    shipping_method: String,
    gift_wrap: bool,
    notes: String,
}

impl PurchaseOrder {
    /// Creates a new order.
    ///
    /// Only `customer_name` and `product` are checked: either one being empty yields
    /// [`OrderError::InvalidRequiredField`]. Quantity and shipping method are stored as given,
    /// and missing notes become an empty string.
    pub fn new(
        customer_name: impl Into<String>,
        product: impl Into<String>,
        quantity: i32,
        shipping_method: impl Into<String>,
        gift_wrap: bool,
        notes: Option<String>,
    ) -> Result<Self> {
        let customer_name = customer_name.into();
        if customer_name.is_empty() {
            return Err(OrderError::InvalidRequiredField(RequiredField::CustomerName));
        }
        let product = product.into();
        if product.is_empty() {
            return Err(OrderError::InvalidRequiredField(RequiredField::Product));
        }

        Ok(Self {
            customer_name,
            product,
            quantity,
            shipping_method: shipping_method.into(),
            gift_wrap,
            notes: notes.unwrap_or_default(),
        })
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn shipping_method(&self) -> &str {
        &self.shipping_method
    }

    pub fn gift_wrap(&self) -> bool {
        self.gift_wrap
    }

    /// Notes for the order, empty when none were given.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Renders the order as a single line of text.
    ///
    /// The gift wrap clause replaces the closing period, and the notes segment is appended
    /// only when notes are non-empty.
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} ordenó {} unidad(es) de {} con envío {}",
            self.customer_name, self.quantity, self.product, self.shipping_method
        );
        summary.push_str(if self.gift_wrap {
            " y envoltura de regalo."
        } else {
            "."
        });
        if !self.notes.is_empty() {
            summary.push_str(" Nota: ");
            summary.push_str(&self.notes);
        }
        summary
    }
}

impl fmt::Display for PurchaseOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
