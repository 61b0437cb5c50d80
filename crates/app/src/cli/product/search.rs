use std::path::PathBuf;

use clap::Args;

use kickcraft::metrics;

use kickcraft_app::{context::AppContext, domain::products::ProductsService as _};

use super::list::catalog_table;

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Query matched against name, brand and category
    query: String,

    /// Store file path
    #[arg(long, env = "KICKCRAFT_STORE", default_value = "kickcraft.json")]
    store: PathBuf,
}

pub(crate) async fn run(args: SearchArgs) -> Result<(), String> {
    let context = AppContext::from_store_path(&args.store)
        .map_err(|error| format!("failed to open store: {error}"))?;

    let products = context
        .products
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    let found: Vec<_> = metrics::search(&products, &args.query)
        .into_iter()
        .cloned()
        .collect();

    if found.is_empty() {
        println!("no products found for \"{}\"", args.query);
        return Ok(());
    }

    println!("found {} matching \"{}\"", found.len(), args.query);
    println!("{}", catalog_table(&found)?);

    Ok(())
}
