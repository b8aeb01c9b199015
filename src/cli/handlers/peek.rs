use crate::error::TaskheapError;
use anyhow::Result;

use super::CommandContext;
use super::utils::{print_task, task_json};

pub fn handle_peek(ctx: &CommandContext, json: bool) -> Result<()> {
    let board = ctx.repo.load()?;

    match board.tasks().peek() {
        Ok(task) if json => println!("{}", serde_json::to_string_pretty(&task_json(&board, task))?),
        Ok(task) => print_task(&board, task),
        Err(TaskheapError::EmptyHeap) if json => println!("null"),
        Err(TaskheapError::EmptyHeap) => println!("No tasks found."),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
