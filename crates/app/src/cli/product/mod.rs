use clap::{Args, Subcommand};

mod add;
mod delete;
mod list;
mod search;
mod show;
mod update;

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// Add a product to the catalogue
    Add(add::AddArgs),
    /// List every product
    List(list::ListArgs),
    /// Show one product in detail, ledger included
    Show(show::ShowArgs),
    /// Replace every mutable field of a product
    Update(update::UpdateArgs),
    /// Delete a product and its sales ledger
    Delete(delete::DeleteArgs),
    /// Search by name, brand or category
    Search(search::SearchArgs),
}

pub(crate) async fn run(command: ProductCommand) -> Result<(), String> {
    match command.command {
        ProductSubcommand::Add(args) => add::run(args).await,
        ProductSubcommand::List(args) => list::run(args).await,
        ProductSubcommand::Show(args) => show::run(args).await,
        ProductSubcommand::Update(args) => update::run(args).await,
        ProductSubcommand::Delete(args) => delete::run(args).await,
        ProductSubcommand::Search(args) => search::run(args).await,
    }
}
