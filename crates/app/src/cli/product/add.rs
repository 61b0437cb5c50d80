use std::path::PathBuf;

use clap::Args;

use kickcraft::forms::ProductForm;

use kickcraft_app::{context::AppContext, domain::products::ProductsService as _};

#[derive(Debug, Args)]
pub(crate) struct AddArgs {
    /// Product display name
    #[arg(long)]
    name: String,

    /// Manufacturer brand
    #[arg(long)]
    brand: String,

    /// Catalogue category
    #[arg(long)]
    category: String,

    /// Price in rupees, e.g. 4999 or 4999.50
    #[arg(long)]
    price: String,

    /// Discount percentage; omitted means no discount
    #[arg(long)]
    discount: Option<String>,

    /// Units in stock
    #[arg(long)]
    stock: String,

    /// Initial sales counter
    #[arg(long, default_value = "0")]
    sales: String,

    /// Store file path
    #[arg(long, env = "KICKCRAFT_STORE", default_value = "kickcraft.json")]
    store: PathBuf,
}

pub(crate) async fn run(args: AddArgs) -> Result<(), String> {
    let context = AppContext::from_store_path(&args.store)
        .map_err(|error| format!("failed to open store: {error}"))?;

    let form = ProductForm {
        name: args.name,
        brand: args.brand,
        category: args.category,
        price: args.price,
        discount: args.discount,
        stock: args.stock,
        sales: args.sales,
    };

    let new = form
        .parse_new()
        .map_err(|error| format!("invalid product: {error}"))?;

    let product = context
        .products
        .create_product(new)
        .await
        .map_err(|error| format!("failed to add product: {error}"))?;

    println!("id: {}", product.id);
    println!("name: {}", product.name);

    Ok(())
}
