mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "Browse a catalog of marketplace deals from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory for config, preferences and logs [env: VITRINE_PATH]"
    )]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Catalog JSON file or http(s) URL")]
    pub catalog: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
