// src/bin/cli.rs
use color_eyre::eyre::eyre;
use dishcat::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let params = cli::parse_args().map_err(|e| eyre!("{e}"))?;
    cli::run(&params).map_err(|e| eyre!("{e}"))
}
