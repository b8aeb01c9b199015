use crate::cli::menu::{prompt, prompt_line, read_choice};
use crate::error::TaskheapError;
use crate::model::{Board, Priority, Student, Task};
use anyhow::Result;
use std::io::{self, BufRead, Write};

use super::CommandContext;

const MENU: [&str; 7] = [
    "Add student",
    "Add task",
    "Peek at the most urgent task",
    "Pop the most urgent tasks",
    "List tasks",
    "Save and quit",
    "Quit without saving",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellOutcome {
    Save,
    Discard,
}

pub fn handle_shell(ctx: &CommandContext) -> Result<()> {
    let mut board = ctx.repo.load()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match run_shell(&mut board, &mut input, &mut output)? {
        ShellOutcome::Save => {
            ctx.repo.save(&board)?;
            writeln!(output, "Saved to {}", ctx.repo.data_path().display())?;
        }
        ShellOutcome::Discard => writeln!(output, "Changes discarded.")?,
    }
    Ok(())
}

/// Runs the menu loop against `board` until the user quits.
pub fn run_shell<R: BufRead, W: Write>(
    board: &mut Board,
    input: &mut R,
    output: &mut W,
) -> Result<ShellOutcome> {
    loop {
        writeln!(output)?;
        match read_choice(input, output, &MENU)? {
            0 => {
                let name = prompt_line(input, output, "Name: ")?;
                let year: u32 = prompt(input, output, "Year: ")?;
                match Student::new(name.trim(), year) {
                    Ok(student) => {
                        let number = board.add_student(student);
                        writeln!(output, "Added student #{}", number)?;
                    }
                    Err(e) => writeln!(output, "{}", e)?,
                }
            }
            1 => {
                if board.students().is_empty() {
                    writeln!(output, "Add a student first.")?;
                    continue;
                }
                for (i, student) in board.students().iter().enumerate() {
                    writeln!(output, "  #{} {}", i + 1, student)?;
                }
                let priority: i32 = prompt(input, output, "Priority: ")?;
                let assignee: usize = prompt(input, output, "Assignee #: ")?;
                let description = prompt_line(input, output, "Description: ")?;
                let added = match assignee.checked_sub(1) {
                    Some(index) => Priority::new(priority)
                        .and_then(|p| Task::new(p, index, description))
                        .and_then(|task| board.add_task(task)),
                    None => Err(TaskheapError::UnknownAssignee(assignee)),
                };
                match added {
                    Ok(()) => writeln!(output, "Task added.")?,
                    Err(e) => writeln!(output, "{}", e)?,
                }
            }
            2 => match board.tasks().peek() {
                Ok(task) => writeln!(output, "{}", board.describe(task))?,
                Err(e) => writeln!(output, "{}", e)?,
            },
            3 => {
                let count: usize = prompt(input, output, "How many: ")?;
                let popped = board.pop_most_urgent(count)?;
                writeln!(output, "The {} most important tasks are:", popped.len())?;
                for task in &popped {
                    writeln!(output, "{}", board.describe(task))?;
                }
            }
            4 => {
                writeln!(output, "Heap of size {}", board.tasks().size())?;
                for task in board.tasks().snapshot() {
                    writeln!(output, "{}", board.describe(task))?;
                }
            }
            5 => return Ok(ShellOutcome::Save),
            _ => return Ok(ShellOutcome::Discard),
        }
    }
}
