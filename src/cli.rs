//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

/// Terminal storefront for a remote product catalog.
#[derive(Debug, Parser)]
#[command(name = "stockroom", version, about)]
pub struct Args {
    /// Override the catalog API base URL from the config file.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Open the app at this route, e.g. /products or /products/7.
    #[arg(long, value_name = "ROUTE", default_value = "/")]
    pub route: String,
}
