use anyhow::Result;

use super::CommandContext;
use super::utils::{print_task_list, tasks_json};

pub fn handle_list(ctx: &CommandContext, sorted: bool, json: bool) -> Result<()> {
    let board = ctx.repo.load()?;

    let ordered = if sorted {
        board.tasks().clone().into_sorted_vec()
    } else {
        board.tasks().snapshot().to_vec()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks_json(&board, &ordered))?);
    } else {
        print_task_list(&board, &ordered);
    }
    Ok(())
}
