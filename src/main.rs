use anyhow::{bail, Context};
use clap::Parser;
use stockroom::cli::Args;
use stockroom::config::Config;
use stockroom::logging;
use stockroom::ui::router::Route;
use stockroom::ui::runtime;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
        config.validate()?;
    }

    let Some(route) = Route::parse(&args.route) else {
        bail!("Unknown route '{}'", args.route);
    };

    tracing::info!(base_url = %config.api.base_url, route = %route.path(), "starting");
    runtime::run(config, route).context("UI loop failed")
}
