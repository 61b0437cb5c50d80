use std::path::PathBuf;

use clap::Args;
use tabled::{builder::Builder, settings::Style};

use kickcraft::{pricing, products::Product};

use kickcraft_app::{context::AppContext, domain::products::ProductsService as _};

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    /// Store file path
    #[arg(long, env = "KICKCRAFT_STORE", default_value = "kickcraft.json")]
    store: PathBuf,
}

pub(crate) async fn run(args: ListArgs) -> Result<(), String> {
    let context = AppContext::from_store_path(&args.store)
        .map_err(|error| format!("failed to open store: {error}"))?;

    let products = context
        .products
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products in the catalogue yet");
        return Ok(());
    }

    println!("{}", catalog_table(&products)?);

    Ok(())
}

pub(super) fn catalog_table(products: &[Product]) -> Result<String, String> {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Name", "Brand", "Category", "Price", "Stock", "Sales"]);

    for product in products {
        let price = pricing::to_money(product.price)
            .map_err(|error| format!("bad price on {}: {error}", product.id))?;

        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.brand.clone(),
            product.category.clone(),
            price.to_string(),
            product.stock.to_string(),
            product.total_sales().to_string(),
        ]);
    }

    Ok(builder.build().with(Style::rounded()).to_string())
}
