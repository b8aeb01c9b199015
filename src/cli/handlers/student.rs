use crate::model::Student;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_student_add(ctx: &CommandContext, name: String, year: u32) -> Result<()> {
    let student = Student::new(name, year)?;
    let mut board = ctx.repo.load()?;
    let number = board.add_student(student.clone());
    ctx.repo.save(&board)?;

    println!("{} #{} {}", "Added".green(), number, student);
    Ok(())
}

pub fn handle_student_list(ctx: &CommandContext, json: bool) -> Result<()> {
    let board = ctx.repo.load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(board.students())?);
        return Ok(());
    }

    if board.students().is_empty() {
        println!("No students found.");
        return Ok(());
    }
    for (i, student) in board.students().iter().enumerate() {
        println!("{} {}", format!("#{}", i + 1).cyan(), student);
    }
    Ok(())
}
