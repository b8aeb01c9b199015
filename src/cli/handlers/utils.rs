use crate::model::{Board, Priority, Task};
use colored::Colorize;

/// Format priority with color coding by band
pub fn format_priority(priority: Priority) -> colored::ColoredString {
    let label = format!("{:>3} {}", priority.value(), priority.name());
    match priority.name() {
        "critical" => label.red().bold(),
        "high" => label.red(),
        "normal" => label.white(),
        _ => label.dimmed(),
    }
}

/// Print a single task on one line
pub fn print_task(board: &Board, task: &Task) {
    let assignee = board
        .assignee_of(task)
        .map(|s| s.to_string())
        .unwrap_or_else(|| "nobody".to_string());
    println!(
        "{}  {} {}",
        format_priority(task.priority),
        task.description.bold(),
        format!("-> {}", assignee).cyan()
    );
}

/// Print a list of tasks, one per line
pub fn print_task_list<'a>(board: &Board, tasks: impl IntoIterator<Item = &'a Task>) {
    let mut any = false;
    for task in tasks {
        print_task(board, task);
        any = true;
    }
    if !any {
        println!("No tasks found.");
    }
}

/// JSON view of a task with its assignee resolved
pub fn task_json(board: &Board, task: &Task) -> serde_json::Value {
    serde_json::json!({
        "priority": task.priority.value(),
        "priority_name": task.priority.name(),
        "description": task.description,
        "assignee": board.assignee_of(task),
    })
}

pub fn tasks_json<'a>(board: &Board, tasks: impl IntoIterator<Item = &'a Task>) -> serde_json::Value {
    serde_json::Value::Array(tasks.into_iter().map(|t| task_json(board, t)).collect())
}
