use super::args::{Cli, Commands};
use super::context::ExecutionContext;
use super::handlers;
use super::logging::{self, LogTarget};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::new(cli.data_dir.as_deref(), cli.catalog, cli.format.into())?;

    let interactive = matches!(cli.command, None | Some(Commands::Browse));
    let log_path = ctx.log_path();
    let target = if interactive {
        LogTarget::File(&log_path)
    } else {
        LogTarget::Stderr
    };
    logging::init(cli.log_level, target)?;

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => handlers::browse::handle(&ctx),

        Commands::List {
            category,
            search,
            sort,
            limit,
        } => handlers::list::handle(&ctx, category, search, sort.into(), limit),

        Commands::Categories => handlers::categories::handle(&ctx),

        Commands::Theme { command } => handlers::theme::handle(&ctx, command),
    }
}
