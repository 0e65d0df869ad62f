use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;

use cheat_sheet_core::{ConfigLoader, Request, Resolver};

/// Load configuration and resolve `request`, printing to `out`.
pub fn run_command<W: Write>(request: &Request, out: &mut W) -> Result<()> {
    debug!("create a new command {:?}", request);

    let config = ConfigLoader::load().context("Failed to load configuration")?;
    debug!("Loaded config: {:?}", config);

    let resolver = Resolver::new(config);
    resolver
        .execute(request, out)
        .with_context(|| format!("Failed to {}", request.action))?;
    out.flush()?;

    Ok(())
}
