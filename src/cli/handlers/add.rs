use crate::model::{Priority, Task};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::task_json;

pub fn handle_add(
    ctx: &CommandContext,
    priority: i32,
    assignee: usize,
    description: Vec<String>,
    json: bool,
) -> Result<()> {
    let mut board = ctx.repo.load()?;

    if assignee == 0 || assignee > board.students().len() {
        anyhow::bail!(
            "Assignee #{} is not on the roster ({} students). Add one with 'taskheap student add'.",
            assignee,
            board.students().len()
        );
    }

    let task = Task::new(Priority::new(priority)?, assignee - 1, description.join(" "))?;
    let summary = board.describe(&task);
    let view = task_json(&board, &task);
    board.add_task(task)?;
    ctx.repo.save(&board)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{} {}", "Added".green(), summary);
    }
    Ok(())
}
