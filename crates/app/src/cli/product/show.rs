use std::path::PathBuf;

use clap::Args;
use tabled::{builder::Builder, settings::Style};
use uuid::Uuid;

use kickcraft::{pricing, products::ProductUuid};

use kickcraft_app::{context::AppContext, domain::products::ProductsService as _};

#[derive(Debug, Args)]
pub(crate) struct ShowArgs {
    /// Product id
    #[arg(long)]
    id: Uuid,

    /// Store file path
    #[arg(long, env = "KICKCRAFT_STORE", default_value = "kickcraft.json")]
    store: PathBuf,
}

pub(crate) async fn run(args: ShowArgs) -> Result<(), String> {
    let context = AppContext::from_store_path(&args.store)
        .map_err(|error| format!("failed to open store: {error}"))?;

    let product = context
        .products
        .get_product(ProductUuid::from_uuid(args.id))
        .await
        .map_err(|error| format!("failed to fetch product: {error}"))?;

    let money = |minor: u64| {
        pricing::to_money(minor)
            .map(|m| m.to_string())
            .map_err(|error| format!("bad amount: {error}"))
    };

    println!("{} — {} ({})", product.name, product.brand, product.category);
    println!("id: {}", product.id);

    let final_price = pricing::final_price(product.price, product.discount)
        .map_err(|error| format!("bad price: {error}"))?;

    if product.discount > rust_decimal::Decimal::ZERO {
        println!(
            "price: {} ({}% off {})",
            money(final_price)?,
            product.discount,
            money(product.price)?
        );
    } else {
        println!("price: {}", money(product.price)?);
    }

    if product.is_out_of_stock() {
        println!("stock: out of stock");
    } else {
        println!("stock: {} units", product.stock);
    }

    println!("sales counter: {}", product.sales);
    println!("total sales: {}", product.total_sales());
    println!("created: {}", product.created_at);
    println!("updated: {}", product.updated_at);

    if product.sales_history.is_empty() {
        println!("no ledger entries yet");
    } else {
        let mut builder = Builder::default();
        builder.push_record(["When", "Sales", "Price", "Discount"]);

        for record in &product.sales_history {
            builder.push_record([
                record.timestamp.to_string(),
                record.sales.to_string(),
                money(record.price)?,
                format!("{}%", record.discount),
            ]);
        }

        println!("{}", builder.build().with(Style::rounded()));
    }

    Ok(())
}
