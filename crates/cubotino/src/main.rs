//! Command-line front end for translating cube solver output into CUBOTino
//! robot moves.

mod cli;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    color_eyre::install()?;

    // Initialize logging.
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    cli::exec(args)
}
