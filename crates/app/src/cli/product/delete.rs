use std::path::PathBuf;

use clap::Args;
use uuid::Uuid;

use kickcraft::products::ProductUuid;

use kickcraft_app::{context::AppContext, domain::products::ProductsService as _};

#[derive(Debug, Args)]
pub(crate) struct DeleteArgs {
    /// Product id
    #[arg(long)]
    id: Uuid,

    /// Store file path
    #[arg(long, env = "KICKCRAFT_STORE", default_value = "kickcraft.json")]
    store: PathBuf,
}

pub(crate) async fn run(args: DeleteArgs) -> Result<(), String> {
    let context = AppContext::from_store_path(&args.store)
        .map_err(|error| format!("failed to open store: {error}"))?;

    context
        .products
        .delete_product(ProductUuid::from_uuid(args.id))
        .await
        .map_err(|error| format!("failed to delete product: {error}"))?;

    println!("deleted {} and its sales ledger", args.id);

    Ok(())
}
