use std::path::PathBuf;

use clap::Args;
use uuid::Uuid;

use kickcraft::{forms::ProductForm, products::ProductUuid};

use kickcraft_app::{context::AppContext, domain::products::ProductsService as _};

/// An update replaces all mutable fields: pass the full current value of
/// every field you do not intend to change.
#[derive(Debug, Args)]
pub(crate) struct UpdateArgs {
    /// Product id
    #[arg(long)]
    id: Uuid,

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

    /// Sales counter; a changed value is snapshotted to the ledger
    #[arg(long)]
    sales: String,

    /// Store file path
    #[arg(long, env = "KICKCRAFT_STORE", default_value = "kickcraft.json")]
    store: PathBuf,
}

pub(crate) async fn run(args: UpdateArgs) -> Result<(), String> {
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

    let update = form
        .parse_update()
        .map_err(|error| format!("invalid update: {error}"))?;

    let product = context
        .products
        .update_product(ProductUuid::from_uuid(args.id), update)
        .await
        .map_err(|error| format!("failed to update product: {error}"))?;

    println!("id: {}", product.id);
    println!("ledger entries: {}", product.sales_history.len());

    Ok(())
}
