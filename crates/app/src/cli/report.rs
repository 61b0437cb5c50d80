use std::path::PathBuf;

use clap::Args;
use tabled::{builder::Builder, settings::Style};
use thiserror::Error;

use kickcraft::{
    metrics::{
        self, BreakdownEntry, LOW_STOCK_THRESHOLD, TOP_BRAND_GROUPS, TOP_SELLERS_LIMIT,
    },
    pricing::{self, PriceError},
    products::Product,
};

use kickcraft_app::{
    context::AppContext,
    domain::products::{ProductsService, ProductsServiceError},
};

#[derive(Debug, Args)]
pub(crate) struct ReportArgs {
    /// Store file path
    #[arg(long, env = "KICKCRAFT_STORE", default_value = "kickcraft.json")]
    store: PathBuf,
}

#[derive(Debug, Error)]
enum ReportError {
    #[error(transparent)]
    Service(#[from] ProductsServiceError),

    #[error(transparent)]
    Price(#[from] PriceError),
}

pub(crate) async fn run(args: ReportArgs) -> Result<(), String> {
    let context = AppContext::from_store_path(&args.store)
        .map_err(|error| format!("failed to open store: {error}"))?;

    let report = render(context.products.as_ref())
        .await
        .map_err(|error| format!("failed to build report: {error}"))?;

    println!("{report}");

    Ok(())
}

/// Assemble the full dashboard report from the current catalogue.
async fn render(products: &dyn ProductsService) -> Result<String, ReportError> {
    let catalog = products.list_products().await?;

    let totals = metrics::fleet_totals(&catalog)?;
    let revenue = pricing::to_money(totals.total_revenue).map_err(ReportError::Price)?;

    let mut out = String::new();

    let mut summary = Builder::default();
    summary.push_record(["Total Sales", "Total Stock", "Total Revenue", "Products"]);
    summary.push_record([
        totals.total_sales.to_string(),
        totals.total_stock.to_string(),
        revenue.to_string(),
        totals.product_count.to_string(),
    ]);

    push_section(&mut out, "Overview", &summary.build().with(Style::rounded()).to_string());

    push_section(
        &mut out,
        "Sales by Category",
        &breakdown_table(&metrics::sales_by_category(&catalog)),
    );

    let brands = metrics::top_with_overflow(&metrics::sales_by_brand(&catalog), TOP_BRAND_GROUPS);
    push_section(&mut out, "Sales by Brand", &breakdown_table(&brands));

    push_section(
        &mut out,
        "Sales by Price Range",
        &breakdown_table(&metrics::sales_by_price_band(&catalog)?),
    );

    push_section(
        &mut out,
        "Sales by Discount Range",
        &breakdown_table(&metrics::sales_by_discount_band(&catalog)),
    );

    push_section(
        &mut out,
        "Top Sellers",
        &sellers_table(&metrics::top_sellers(&catalog, TOP_SELLERS_LIMIT)),
    );

    let low = metrics::ranked_low_stock(&catalog, LOW_STOCK_THRESHOLD);

    if low.is_empty() {
        push_section(&mut out, "Low Stock", "all products are well stocked");
    } else {
        push_section(&mut out, "Low Stock", &stock_table(&low));
    }

    Ok(out)
}

fn push_section(out: &mut String, title: &str, body: &str) {
    if !out.is_empty() {
        out.push('\n');
    }

    out.push_str(title);
    out.push('\n');
    out.push_str(body);
    out.push('\n');
}

fn breakdown_table(entries: &[BreakdownEntry]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Group", "Sales"]);

    for entry in entries {
        builder.push_record([entry.label.clone(), entry.sales.to_string()]);
    }

    builder.build().with(Style::rounded()).to_string()
}

fn sellers_table(products: &[&Product]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Name", "Brand", "Sales"]);

    for product in products {
        builder.push_record([
            product.name.clone(),
            product.brand.clone(),
            product.total_sales().to_string(),
        ]);
    }

    builder.build().with(Style::rounded()).to_string()
}

fn stock_table(products: &[&Product]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Name", "Brand", "Stock"]);

    for product in products {
        builder.push_record([
            product.name.clone(),
            product.brand.clone(),
            product.stock.to_string(),
        ]);
    }

    builder.build().with(Style::rounded()).to_string()
}
