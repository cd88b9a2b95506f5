use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use depopts::config::{apply_overrides, DependencyOverride};
use depopts::ConfigLoader;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Dependency option trees
///
/// Shows the dependency catalog, the options synthesized from it, and the
/// package list the current configuration resolves to.
#[derive(Parser, Debug)]
#[command(name = "depopts")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to use instead of the default search locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    ///
    /// Defaults to `settings.log_level` from the config file, then `warn`.
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log to file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog entries with their default packages
    List,

    /// Print the synthesized option tree (after overrides) as JSON
    Options,

    /// Print the packages selected by enabled options
    Resolve {
        /// Enable an option in addition to the config file (repeatable)
        #[arg(short, long = "enable", value_name = "NAME")]
        enable: Vec<String>,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

fn setup_logging(log_level: &str, log_file: Option<PathBuf>) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if let Some(log_path) = log_file {
        let file = std::fs::File::create(log_path)?;
        subscriber.with_writer(file).init();
    } else {
        subscriber.with_writer(std::io::stderr).init();
    }

    Ok(())
}

/// `--enable NAME` flags as overrides, so they go through the same checks
/// as the config file's `[dependencies]` table.
fn enable_overrides(names: &[String]) -> BTreeMap<String, DependencyOverride> {
    names
        .iter()
        .map(|name| {
            let ov = DependencyOverride {
                enable: Some(true),
                package: None,
            };
            (name.clone(), ov)
        })
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Only the config file is read before logging is up; it may set the level.
    let config_file = ConfigLoader::locate_user_config(args.config.as_deref())
        .context("Failed to load configuration")?;

    let log_level = args
        .log_level
        .as_deref()
        .or_else(|| config_file.as_ref().and_then(|f| f.config.log_level()))
        .unwrap_or("warn")
        .to_string();
    setup_logging(&log_level, args.log_file)?;

    info!("Starting depopts v{}", env!("CARGO_PKG_VERSION"));
    if let Some(file) = &config_file {
        info!("Using config file: {}", file.path.display());
    }

    let loader =
        ConfigLoader::from_config_file(config_file).context("Failed to load configuration")?;

    match args.command {
        Command::List => {
            for def in loader.catalog().definitions().values() {
                println!("{}\t{}", def.name, def.default);
            }
        }
        Command::Options => {
            let tree = loader.option_tree()?;
            println!("{}", tree.to_json_pretty()?);
        }
        Command::Resolve { enable, format } => {
            let mut tree = loader.option_tree()?;
            apply_overrides(&mut tree, &enable_overrides(&enable))?;

            let packages = tree.resolve();
            info!("Resolved {} packages", packages.len());

            match format {
                Format::Text => {
                    for package in &packages {
                        println!("{}", package);
                    }
                }
                Format::Json => println!("{}", serde_json::to_string(&packages)?),
            }
        }
    }

    Ok(())
}
