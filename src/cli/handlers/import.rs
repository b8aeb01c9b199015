use crate::heap::PriorityHeap;
use crate::model::Board;
use crate::storage::parse_console;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Read};

use super::CommandContext;

pub fn handle_import(ctx: &CommandContext, input: String, force: bool) -> Result<()> {
    let content = if input == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        content
    } else {
        std::fs::read_to_string(&input).with_context(|| format!("Failed to read {}", input))?
    };

    // Forced imports never read the current file, which may not even load
    if !force {
        let current = ctx.repo.load()?;
        if !current.is_empty() {
            anyhow::bail!(
                "The board already has {} students and {} tasks. Use --force to replace it.",
                current.students().len(),
                current.tasks().size()
            );
        }
    }

    let (students, tasks) =
        parse_console(&content).with_context(|| format!("Failed to import {}", input))?;
    // Freshly typed tasks come in any order
    let heap = PriorityHeap::from_untrusted(tasks, ctx.repo.direction());
    let board = Board::from_parts(students, heap)?;
    ctx.repo.save(&board)?;

    println!(
        "{} {} students and {} tasks",
        "Imported".green(),
        board.students().len(),
        board.tasks().size()
    );
    Ok(())
}
