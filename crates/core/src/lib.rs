//! KickCraft
//!
//! KickCraft is the inventory and sales-reporting core for a shoe retailer.
//! It models the product catalogue, maintains an append-only ledger of
//! sales-counter changes, and derives the aggregate figures the dashboard
//! reports on: fleet totals, category/brand/band breakdowns, top sellers,
//! and low-stock rankings.

pub mod bands;
pub mod fixtures;
pub mod forms;
pub mod ledger;
pub mod metrics;
pub mod pricing;
pub mod products;
pub mod uuids;
