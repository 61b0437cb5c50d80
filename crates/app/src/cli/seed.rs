use std::path::PathBuf;

use clap::Args;

use kickcraft::fixtures;

use kickcraft_app::{context::AppContext, domain::products::ProductsService as _};

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// Fixture file to load; the bundled demo catalogue when omitted
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Store file path
    #[arg(long, env = "KICKCRAFT_STORE", default_value = "kickcraft.json")]
    store: PathBuf,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let catalog = match &args.fixture {
        Some(path) => fixtures::load_catalog(path),
        None => fixtures::demo_catalog(),
    }
    .map_err(|error| format!("failed to load fixture: {error}"))?;

    let context = AppContext::from_store_path(&args.store)
        .map_err(|error| format!("failed to open store: {error}"))?;

    let mut seeded = 0usize;

    for new in catalog {
        let name = new.name.clone();

        context
            .products
            .create_product(new)
            .await
            .map_err(|error| format!("failed to seed \"{name}\": {error}"))?;

        seeded += 1;
    }

    tracing::info!(seeded, store = %args.store.display(), "seeded catalogue");
    println!("seeded {seeded} products into {}", args.store.display());

    Ok(())
}
