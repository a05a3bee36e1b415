use clap::{Parser, Subcommand};

use morse_cli::commands::{config_ops, resolve_ops};
use morse_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "morsetool", about = "Resolve partial Morse patterns into ranked letters")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the ranked candidate letters of each pattern
    Resolve {
        /// Patterns of '.', '-' and the wildcard '?'
        #[arg(required = true, allow_hyphen_values = true)]
        patterns: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Show code and weight of each candidate
        #[arg(long)]
        weights: bool,
        /// Path to a custom code table TOML (optional)
        #[arg(long)]
        table: Option<String>,
        /// Path to a custom settings TOML (optional)
        #[arg(long)]
        settings: Option<String>,
    },
    /// Resolve the example patterns ".?", "?." and "?"
    Demo,
    /// Code table operations
    Table {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Settings operations
    Settings {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the embedded default TOML
    Export,
    /// Validate a TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve {
            patterns,
            json,
            weights,
            table,
            settings,
        } => {
            let opts = resolve_ops::ResolveOptions {
                json,
                weights,
                table: table.as_deref(),
                settings: settings.as_deref(),
            };
            resolve_ops::resolve_cmd(&patterns, &opts);
        }
        Command::Demo => resolve_ops::demo_cmd(),
        Command::Table { command } => match command {
            ConfigCommand::Export => config_ops::table_export(),
            ConfigCommand::Validate { file } => config_ops::table_validate(&file),
        },
        Command::Settings { command } => match command {
            ConfigCommand::Export => config_ops::settings_export(),
            ConfigCommand::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
