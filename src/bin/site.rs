// src/bin/site.rs
use color_eyre::eyre::{Result, WrapErr, eyre};
use two_per_division::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run()
        .map_err(|e| eyre!("{e}"))
        .wrap_err("site tool failed")
}
