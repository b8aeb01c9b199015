use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use taskheap::cli::handlers::{self, CommandContext};
use taskheap::cli::{Cli, Commands, StudentAction};
use taskheap::config::TaskheapConfig;
use taskheap::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone())?;

    match cli.command {
        Commands::Init {
            data_file,
            direction,
        } => handlers::handle_init(data_file, direction.into()),
        command => {
            let ctx = load_context(cli.config)?;
            tracing::debug!(root = %ctx.root.display(), "Loaded configuration");
            run(&ctx, command)
        }
    }
}

fn run(ctx: &CommandContext, command: Commands) -> Result<()> {
    match command {
        Commands::Init { .. } => anyhow::bail!("Project is already initialized"),
        Commands::Student { action } => match action {
            StudentAction::Add { name, year } => handlers::handle_student_add(ctx, name, year),
            StudentAction::List { json } => handlers::handle_student_list(ctx, json),
        },
        Commands::Add {
            priority,
            assignee,
            description,
            json,
        } => handlers::handle_add(ctx, priority, assignee, description, json),
        Commands::List { sorted, json } => handlers::handle_list(ctx, sorted, json),
        Commands::Peek { json } => handlers::handle_peek(ctx, json),
        Commands::Pop { count, json } => handlers::handle_pop(ctx, count, json),
        Commands::Import { input, force } => handlers::handle_import(ctx, input, force),
        Commands::Export { path, force } => handlers::handle_export(ctx, path, force),
        Commands::Check { repair } => handlers::handle_check(ctx, repair),
        Commands::Shell => handlers::handle_shell(ctx),
    }
}

fn load_context(config_path: Option<PathBuf>) -> Result<CommandContext> {
    let (config, root) = match config_path {
        Some(path) => TaskheapConfig::load_from(&path),
        None => TaskheapConfig::load(&std::env::current_dir()?),
    }
    .context("Failed to load taskheap configuration")?;
    Ok(CommandContext::new(config, root))
}
