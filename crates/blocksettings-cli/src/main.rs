mod literal;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use blocksettings_core::config::STORE_ENV;
use blocksettings_core::{JsonFileStore, Settings, StoreConfig, Word};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "blocksettings",
    version,
    about = "Read and write typed settings in a number-array store"
)]
struct Cli {
    /// Settings file to use (overrides the config file and BLOCKSETTINGS_STORE).
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// JSON config file with `path` and `default_number`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log codec and store activity to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Store a boolean.
    SetBool {
        name: String,
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
    /// Print a boolean (missing settings print `false`).
    GetBool { name: String },
    /// Store a number.
    SetNumber {
        name: String,
        #[arg(allow_negative_numbers = true)]
        value: Word,
    },
    /// Print a number (missing settings print the default number).
    GetNumber { name: String },
    /// Store an array of strings.
    SetStrings {
        name: String,
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Print an array of strings, one per line.
    GetStrings { name: String },
    /// Store an array of booleans.
    SetBools {
        name: String,
        #[arg(action = ArgAction::Append)]
        values: Vec<bool>,
    },
    /// Print an array of booleans, one per line.
    GetBools { name: String },
    /// Store an image given as a literal such as `. 1 / 1 .`.
    SetImage { name: String, literal: String },
    /// Print an image literal.
    GetImage { name: String },
    /// Store an array of images, one literal per argument.
    SetImages { name: String, literals: Vec<String> },
    /// Print image literals separated by blank lines.
    GetImages { name: String },
    /// Print the stored value as JSON.
    Raw { name: String },
    /// List stored setting names.
    List,
    /// Remove a setting.
    Remove { name: String },
    /// Remove every setting.
    Clear,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "blocksettings=debug"
    } else {
        "blocksettings=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => StoreConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => StoreConfig::default(),
    };
    let config = config.with_overrides(cli.store, std::env::var_os(STORE_ENV).map(PathBuf::from));
    tracing::debug!(path = %config.path.display(), "using settings store");
    let store = config
        .open()
        .with_context(|| format!("failed to open store {}", config.path.display()))?;

    let mut settings = Settings::new(store);
    let code = run(&mut settings, cli.command)?;
    settings.storage_mut().flush()?;
    Ok(code)
}

/// Exit status for a read of a setting that was never written.
fn absent() -> ExitCode {
    ExitCode::from(1)
}

fn run(settings: &mut Settings<JsonFileStore>, command: Command) -> Result<ExitCode> {
    match command {
        Command::SetBool { name, value } => settings.write_boolean(&name, value),
        Command::GetBool { name } => println!("{}", settings.read_boolean(&name)),
        Command::SetNumber { name, value } => settings.write_number(&name, value),
        Command::GetNumber { name } => println!("{}", settings.read_number(&name)),
        Command::SetStrings { name, values } => settings.write_strings(&name, values.as_slice()),
        Command::GetStrings { name } => {
            let Some(strings) = settings.read_strings(&name)? else {
                return Ok(absent());
            };
            for s in strings {
                println!("{s}");
            }
        }
        Command::SetBools { name, values } => settings.write_booleans(&name, &values),
        Command::GetBools { name } => {
            let Some(values) = settings.read_booleans(&name) else {
                return Ok(absent());
            };
            for v in values {
                println!("{v}");
            }
        }
        Command::SetImage { name, literal } => {
            let image = literal::parse_image(&literal)?;
            settings.write_image(&name, &image);
        }
        Command::GetImage { name } => {
            let Some(image) = settings.read_image(&name)? else {
                return Ok(absent());
            };
            print!("{}", literal::format_image(&image));
        }
        Command::SetImages { name, literals } => {
            let images = literals
                .iter()
                .enumerate()
                .map(|(i, text)| {
                    literal::parse_image(text).with_context(|| format!("image {i}"))
                })
                .collect::<Result<Vec<_>>>()?;
            settings.write_images(&name, &images);
        }
        Command::GetImages { name } => {
            let Some(images) = settings.read_images(&name)? else {
                return Ok(absent());
            };
            let blocks: Vec<String> = images.iter().map(literal::format_image).collect();
            print!("{}", blocks.join("\n"));
        }
        Command::Raw { name } => {
            let Some(value) = settings.storage().get(&name) else {
                return Ok(absent());
            };
            println!("{}", serde_json::to_string(value)?);
        }
        Command::List => {
            for name in settings.storage().names() {
                println!("{name}");
            }
        }
        Command::Remove { name } => {
            if !settings.storage_mut().remove(&name) {
                return Ok(absent());
            }
        }
        Command::Clear => settings.storage_mut().clear(),
    }
    Ok(ExitCode::SUCCESS)
}
