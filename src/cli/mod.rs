mod args;
mod config;
mod global;
mod handlers;

use clap::{Parser, Subcommand};
use std::io::Write;

use args::{ConfigAction, DecodeArgs, EncodeArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "printable-string")]
#[command(version)]
#[command(about = "Encode binary data as text over any alphabet, truncated to a power of two", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode binary data into printable text
    Encode(EncodeArgs),

    /// Decode printable text back into binary data
    Decode(DecodeArgs),

    /// Inspect the alphabet registry
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.global);

    let registry = config::load_registry(&cli.global)?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &registry),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &registry),
        Commands::Config { action } => handlers::config::handle(action, &registry),
    }
}

/// Installs `env_logger`. `RUST_LOG`, when set, overrides the level picked
/// from `-q`/`-v`.
fn init_logging(global: &GlobalArgs) {
    let level = if global.quiet {
        log::LevelFilter::Off
    } else {
        match global.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .try_init();
}
