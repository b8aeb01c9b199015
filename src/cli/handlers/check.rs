use crate::error::TaskheapError;
use crate::heap::Layout;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_check(ctx: &CommandContext, repair: bool) -> Result<()> {
    match ctx.repo.load_with(Layout::Trusted) {
        Ok(board) => {
            println!(
                "{} {} tasks in {} order",
                "OK".green(),
                board.tasks().size(),
                board.direction()
            );
            Ok(())
        }
        Err(TaskheapError::HeapViolation { parent, child }) if repair => {
            let board = ctx.repo.load_with(Layout::Untrusted)?;
            ctx.repo.save(&board)?;
            println!(
                "{} task {} was out of order under task {}; rebuilt {} tasks",
                "Repaired".yellow(),
                child + 1,
                parent + 1,
                board.tasks().size()
            );
            Ok(())
        }
        Err(TaskheapError::HeapViolation { parent, child }) => {
            anyhow::bail!(
                "{} is not in {} heap order: task {} ranks above its parent task {}. Run 'taskheap check --repair' to rebuild it.",
                ctx.repo.data_path().display(),
                ctx.repo.direction(),
                child + 1,
                parent + 1
            )
        }
        Err(e) => Err(e.into()),
    }
}
