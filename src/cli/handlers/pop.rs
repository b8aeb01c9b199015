use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{print_task_list, tasks_json};

pub fn handle_pop(ctx: &CommandContext, count: Option<usize>, json: bool) -> Result<()> {
    let count = count.unwrap_or(ctx.config.taskheap.default_pop_count);
    let mut board = ctx.repo.load()?;

    let popped = board.pop_most_urgent(count)?;
    if !popped.is_empty() {
        ctx.repo.save(&board)?;
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "requested": count,
                "popped": tasks_json(&board, &popped),
                "remaining": board.tasks().size(),
            }))?
        );
        return Ok(());
    }

    println!("The {} most important tasks are:", popped.len());
    print_task_list(&board, &popped);
    if popped.len() < count {
        println!(
            "{}",
            format!("Only {} of {} requested tasks were available.", popped.len(), count).yellow()
        );
    }
    Ok(())
}
