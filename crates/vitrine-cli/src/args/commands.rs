use super::enums::{SortArg, ThemeArg};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive catalog browser (default)")]
    Browse,

    #[command(about = "Print the filtered and sorted catalog")]
    List {
        #[arg(long, help = "Only products in this category (exact match)")]
        category: Option<String>,

        #[arg(long, help = "Case-insensitive match on title or code")]
        search: Option<String>,

        #[arg(long, default_value = "default")]
        sort: SortArg,

        #[arg(long, help = "Show at most this many products")]
        limit: Option<usize>,
    },

    #[command(about = "List catalog categories in display order")]
    Categories,

    #[command(about = "Show or change the persisted color theme")]
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommand>,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    #[command(about = "Print the current theme")]
    Show,

    #[command(about = "Switch between light and dark")]
    Toggle,

    #[command(about = "Set the theme explicitly")]
    Set { theme: ThemeArg },
}
