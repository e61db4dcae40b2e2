use std::io::Read;
use std::path::{Path, PathBuf};

use cubotino_moves::{StartLayout, Translation, Translator, TranslatorConfig};
use eyre::{Context, Result};
use serde::Serialize;

const CONFIG_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_CONFIG_STR: &str = include_str!("default.yaml");
const ENV_PREFIX: &str = "CUBOTINO";

/// CUBOTino move translator
///
/// Turns cube solver output such as `U2 L1 R3` into the flip, spin, and
/// rotate commands that drive the robot's servos.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,

    /// Configuration file to layer over the defaults.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log more (repeat for even more).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Translate a solver solution into robot moves.
    Translate {
        /// Solver moves (such as `U2 L1 R3`). Words are joined with spaces.
        #[arg(required_unless_present = "input")]
        solution: Vec<String>,

        /// Read the solution from a file instead, use '-' for stdin.
        #[arg(long, value_parser, conflicts_with = "solution")]
        input: Option<clio::Input>,

        /// Print the whole translation as JSON.
        #[arg(long)]
        json: bool,

        /// Start with U on top and F in front.
        #[arg(long, conflicts_with = "scanned")]
        aligned: bool,
        /// Start with the cube as the color scanner leaves it.
        #[arg(long)]
        scanned: bool,

        /// Remove adjacent opposite spins before merging flips.
        #[arg(long)]
        cancel_opposite_spins: bool,
    },
    /// Optimize a string of robot moves (such as `F1S3R0`).
    Optimize {
        /// Robot moves.
        ops: String,

        /// Remove adjacent opposite spins before merging flips.
        #[arg(long)]
        cancel_opposite_spins: bool,
    },
    /// Count the physical movements in a string of robot moves.
    Count {
        /// Robot moves.
        ops: String,
    },
    /// Print the effective configuration as YAML.
    Config,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let Args {
        subcommand, config, ..
    } = args;

    match subcommand {
        Subcommand::Translate {
            solution,
            input,
            json,
            aligned,
            scanned,
            cancel_opposite_spins,
        } => {
            let config = override_config(
                load_config(config.as_deref())?,
                aligned,
                scanned,
                cancel_opposite_spins,
            );

            let solution = match input {
                Some(mut input) => {
                    let mut buffer = String::new();
                    input
                        .read_to_string(&mut buffer)
                        .context("error reading solution")?;
                    buffer
                }
                None => solution.join(" "),
            };

            let translation = Translator::new(config)
                .translate(&solution)
                .wrap_err("error translating solution")?;

            if json {
                write_json_output(&translation)
            } else {
                print_translation(&translation);
                Ok(())
            }
        }

        Subcommand::Optimize {
            ops,
            cancel_opposite_spins,
        } => {
            let ops = cubotino_moves::parse_ops(&ops).wrap_err("error parsing robot moves")?;
            let (optimized, fired) = cubotino_moves::optimize(&ops, cancel_opposite_spins);
            println!("robot moves: {optimized}");
            println!(
                "total moves: {} ({} before optimization)",
                optimized.move_count(),
                ops.move_count(),
            );
            println!("optimizations: {}", optimizations_str(fired));
            Ok(())
        }

        Subcommand::Count { ops } => {
            let ops = cubotino_moves::parse_ops(&ops).wrap_err("error parsing robot moves")?;
            println!("{}", ops.move_count());
            Ok(())
        }

        Subcommand::Config => {
            let config = load_config(config.as_deref())?;
            let yaml = serde_norway::to_string(&config).context("error serializing config")?;
            print!("{yaml}");
            Ok(())
        }
    }
}

/// Loads the configuration from the embedded defaults, then `user_file` (if
/// any), then `CUBOTINO_*` environment variables.
fn load_config(user_file: Option<&Path>) -> Result<TranslatorConfig> {
    load_config_with_env(user_file, config::Environment::with_prefix(ENV_PREFIX))
}

fn load_config_with_env(
    user_file: Option<&Path>,
    env: config::Environment,
) -> Result<TranslatorConfig> {
    let mut config = config::Config::builder()
        .add_source(config::File::from_str(DEFAULT_CONFIG_STR, CONFIG_FILE_FORMAT));

    if let Some(path) = user_file {
        config = config.add_source(config::File::from(path));
    }

    let config = config
        .add_source(env.try_parsing(true))
        .build()
        .and_then(|c| c.try_deserialize::<TranslatorConfig>())
        .wrap_err("error loading configuration")?;

    log::debug!("loaded configuration: {config:?}");
    Ok(config)
}

/// Applies command-line flags, which take priority over every config source.
fn override_config(
    mut config: TranslatorConfig,
    aligned: bool,
    scanned: bool,
    cancel_opposite_spins: bool,
) -> TranslatorConfig {
    if aligned {
        config.start_layout = StartLayout::Aligned;
    }
    if scanned {
        config.start_layout = StartLayout::Scanned;
    }
    config.cancel_opposite_spins |= cancel_opposite_spins;
    config
}

fn print_translation(translation: &Translation) {
    for (i, step) in translation.steps.iter().enumerate() {
        println!("step:{i}, robot moves:{}", step.ops);
    }
    println!("robot moves: {}", translation.ops);
    println!(
        "total moves: {} ({} before optimization)",
        translation.move_count, translation.unoptimized_count,
    );
    println!(
        "optimizations: {}",
        optimizations_str(translation.optimizations),
    );
}

fn optimizations_str(fired: cubotino_moves::Optimizations) -> String {
    let mut names = vec![];
    if fired.cancel_opposite_spins {
        names.push("cancel_opposite_spins");
    }
    if fired.merge_trailing_flips {
        names.push("merge_trailing_flips");
    }
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value).context("error writing output")?;
    println!();
    Ok(())
}
