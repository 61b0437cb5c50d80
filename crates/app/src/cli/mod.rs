use clap::{Parser, Subcommand};

mod product;
mod report;
mod seed;

#[derive(Debug, Parser)]
#[command(name = "kickcraft", about = "KickCraft inventory CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage catalogue products
    Product(product::ProductCommand),
    /// Render the dashboard figures as tables
    Report(report::ReportArgs),
    /// Seed the store from a fixture catalogue
    Seed(seed::SeedArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Product(command) => product::run(command).await,
            Commands::Report(args) => report::run(args).await,
            Commands::Seed(args) => seed::run(args).await,
        }
    }
}
