use super::order::PurchaseOrder;
use crate::error::Result;

pub const DEFAULT_QUANTITY: i32 = 1;
pub const DEFAULT_SHIPPING_METHOD: &str = "Estándar";

/// Fluent builder for [`PurchaseOrder`].
///
/// Customer name and product are fixed when the builder is created; everything else starts
/// at a default (quantity 1, standard shipping, no gift wrap, no notes). Required fields are
/// validated by [`build`](Self::build), not here.
///
/// ```
/// use purchase_order::domain::builder::PurchaseOrderBuilder;
///
/// let order = PurchaseOrderBuilder::new("Carlos Ruiz", "Tablet")
///     .with_quantity(2)
///     .with_shipping("Express")
///     .build()
///     .unwrap();
/// assert_eq!(order.quantity(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOrderBuilder {
    customer_name: String,
    product: String,
    quantity: i32,
    shipping_method: String,
    gift_wrap: bool,
    notes: String,
}

impl PurchaseOrderBuilder {
    pub fn new(customer_name: impl Into<String>, product: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            product: product.into(),
            quantity: DEFAULT_QUANTITY,
            shipping_method: DEFAULT_SHIPPING_METHOD.to_string(),
            gift_wrap: false,
            notes: String::new(),
        }
    }

    pub fn with_quantity(&mut self, quantity: i32) -> &mut Self {
        self.quantity = quantity;
        self
    }

    pub fn with_shipping(&mut self, shipping_method: impl Into<String>) -> &mut Self {
        self.shipping_method = shipping_method.into();
        self
    }

    /// Enables gift wrap. There is no way to turn it off again on the same builder.
    pub fn with_gift_wrap(&mut self) -> &mut Self {
        self.gift_wrap = true;
        self
    }

    pub fn with_notes(&mut self, notes: impl Into<String>) -> &mut Self {
        self.notes = notes.into();
        self
    }

    /// Builds an order from the current configuration.
    ///
    /// The builder is left untouched, so it can be adjusted and built again.
    pub fn build(&self) -> Result<PurchaseOrder> {
        PurchaseOrder::new(
            self.customer_name.clone(),
            self.product.clone(),
            self.quantity,
            self.shipping_method.clone(),
            self.gift_wrap,
            Some(self.notes.clone()),
        )
    }
}
