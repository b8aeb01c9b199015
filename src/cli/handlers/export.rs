use crate::cli::menu::confirm;
use crate::storage::{atomic_write, render_lines};
use anyhow::Result;
use colored::Colorize;
use std::io;
use std::path::PathBuf;

use super::CommandContext;

pub fn handle_export(ctx: &CommandContext, path: PathBuf, force: bool) -> Result<()> {
    let board = ctx.repo.load()?;

    if path.exists() && !force {
        let message = format!("{} exists. Overwrite?", path.display());
        if !confirm(&mut io::stdin().lock(), &mut io::stdout(), &message)? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    atomic_write(&path, &render_lines(&board))?;
    println!(
        "{} {} tasks to {}",
        "Exported".green(),
        board.tasks().size(),
        path.display()
    );
    Ok(())
}
