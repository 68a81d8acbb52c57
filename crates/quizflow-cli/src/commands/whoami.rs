use anyhow::{Context, Result};
use quizflow_core::IdentityProvider;
use quizflow_store::LocalBackend;
use std::path::Path;

pub fn run(data_dir: &Path) -> Result<()> {
    let backend =
        LocalBackend::open_or_create(data_dir).context("could not open the data directory")?;
    let principal = backend
        .identity
        .get_or_create_principal()
        .context("could not acquire a principal")?;
    println!("{}", principal);
    Ok(())
}
