use crate::domain::builder::PurchaseOrderBuilder;
use clap::Parser;

/// Build a purchase order and print its summary.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the customer placing the order
    pub customer: String,

    /// Product being ordered
    pub product: String,

    /// Number of units (defaults to 1)
    #[arg(long, allow_hyphen_values = true)]
    pub quantity: Option<i32>,

    /// Shipping method label (defaults to "Estándar")
    #[arg(long)]
    pub shipping: Option<String>,

    /// Add gift wrap to the order
    #[arg(long)]
    pub gift_wrap: bool,

    /// Free-form notes appended to the summary
    #[arg(long)]
    pub notes: Option<String>,
}

impl Cli {
    /// Maps the parsed arguments onto a builder, leaving defaults in place for
    /// anything that was not passed.
    pub fn to_builder(&self) -> PurchaseOrderBuilder {
        let mut builder = PurchaseOrderBuilder::new(&self.customer, &self.product);
        if let Some(quantity) = self.quantity {
            builder.with_quantity(quantity);
        }
        if let Some(shipping) = &self.shipping {
            builder.with_shipping(shipping);
        }
        if self.gift_wrap {
            builder.with_gift_wrap();
        }
        if let Some(notes) = &self.notes {
            builder.with_notes(notes);
        }
        builder
    }
}
