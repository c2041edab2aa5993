use clap::Parser;
use miette::{IntoDiagnostic, Result};
use purchase_order::interfaces::cli::Cli;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // Logs go to stderr; stdout carries only the summary.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let order = cli
        .to_builder()
        .build()
        .inspect_err(|e| {
            error!(
                customer = %cli.customer,
                product = %cli.product,
                "Rejected order: {}",
                e
            )
        })
        .into_diagnostic()?;

    debug!(
        customer = order.customer_name(),
        product = order.product(),
        quantity = order.quantity(),
        shipping = order.shipping_method(),
        gift_wrap = order.gift_wrap(),
        "Order built"
    );

    println!("{}", order.summary());
    Ok(())
}
