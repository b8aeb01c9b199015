use crate::error::{Result, TaskheapError};
use crate::model::{Board, Priority, Student, Task};
use std::str::FromStr;

/// Renders a board in the one-field-per-line save format. Tasks are written
/// in heap array order so a trusted load restores the same layout.
pub fn render_lines(board: &Board) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", board.students().len()));
    for student in board.students() {
        output.push_str(&format!("{}\n{}\n", student.name, student.year));
    }

    let tasks = board.tasks().snapshot();
    output.push_str(&format!("{}\n", tasks.len()));
    for task in tasks {
        output.push_str(&format!(
            "{}\n{}\n{}\n",
            task.priority.value(),
            task.assignee + 1,
            task.description
        ));
    }

    output
}

/// Parses the one-field-per-line save format.
///
/// Returns the roster and the tasks in file order; building the heap is left
/// to the caller so it can pick a layout.
pub fn parse_lines(content: &str) -> Result<(Vec<Student>, Vec<Task>)> {
    let mut lines = LineReader::new(content);
    let students = read_records(&mut lines, |lines| {
        let name = lines.next_line("student name")?.to_string();
        let (line, year) = lines.parse::<u32>("student year")?;
        Student::new(name, year).map_err(|e| at_line(line, e))
    })?;
    let tasks = read_records(&mut lines, |lines| {
        let (line, priority) = lines.parse::<i32>("task priority")?;
        let priority = Priority::new(priority).map_err(|e| at_line(line, e))?;
        let (line, assignee) = lines.parse::<usize>("task assignee")?;
        let assignee = roster_index(assignee, students.len(), line)?;
        let line = lines.line + 1;
        let description = lines.next_line("task description")?;
        Task::new(priority, assignee, description).map_err(|e| at_line(line, e))
    })?;
    lines.expect_end()?;
    Ok((students, tasks))
}

/// Parses the whitespace-separated console format: a student count followed by
/// `name year` pairs, then a task count followed by `priority assignee
/// description` entries where the description runs to the end of the line.
pub fn parse_console(content: &str) -> Result<(Vec<Student>, Vec<Task>)> {
    let mut tokens = TokenReader::new(content);

    let (_, student_count) = tokens.parse::<usize>("student count")?;
    let mut students = Vec::with_capacity(student_count);
    for _ in 0..student_count {
        let (_, name) = tokens.parse::<String>("student name")?;
        let (line, year) = tokens.parse::<u32>("student year")?;
        students.push(Student::new(name, year).map_err(|e| at_line(line, e))?);
    }

    let (_, task_count) = tokens.parse::<usize>("task count")?;
    let mut tasks = Vec::with_capacity(task_count);
    for _ in 0..task_count {
        let (line, priority) = tokens.parse::<i32>("task priority")?;
        let priority = Priority::new(priority).map_err(|e| at_line(line, e))?;
        let (line, assignee) = tokens.parse::<usize>("task assignee")?;
        let assignee = roster_index(assignee, students.len(), line)?;
        let description = tokens.rest_of_line();
        tasks.push(Task::new(priority, assignee, description).map_err(|e| at_line(line, e))?);
    }

    Ok((students, tasks))
}

fn read_records<T>(
    lines: &mut LineReader<'_>,
    mut read_one: impl FnMut(&mut LineReader<'_>) -> Result<T>,
) -> Result<Vec<T>> {
    let (_, count) = lines.parse::<usize>("record count")?;
    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        records.push(read_one(lines)?);
    }
    Ok(records)
}

/// Converts a 1-based roster number into an index.
fn roster_index(number: usize, roster_len: usize, line: usize) -> Result<usize> {
    if number == 0 || number > roster_len {
        return Err(TaskheapError::parse(
            line,
            format!("assignee {} is not in the roster of {}", number, roster_len),
        ));
    }
    Ok(number - 1)
}

fn at_line(line: usize, err: TaskheapError) -> TaskheapError {
    match err {
        TaskheapError::Validation(message) => TaskheapError::parse(line, message),
        other => other,
    }
}

struct LineReader<'a> {
    lines: std::str::Lines<'a>,
    /// Number of the last line handed out.
    line: usize,
}

impl<'a> LineReader<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self, what: &str) -> Result<&'a str> {
        self.line += 1;
        self.lines
            .next()
            .map(|l| l.trim_end_matches('\r'))
            .ok_or_else(|| TaskheapError::parse(self.line, format!("expected {}", what)))
    }

    fn parse<T: FromStr>(&mut self, what: &str) -> Result<(usize, T)> {
        let raw = self.next_line(what)?.trim();
        let value = raw.parse::<T>().map_err(|_| {
            TaskheapError::parse(self.line, format!("invalid {}: '{}'", what, raw))
        })?;
        Ok((self.line, value))
    }

    fn expect_end(&mut self) -> Result<()> {
        for rest in self.lines.by_ref() {
            self.line += 1;
            if !rest.trim().is_empty() {
                return Err(TaskheapError::parse(self.line, "unexpected trailing data"));
            }
        }
        Ok(())
    }
}

struct TokenReader<'a> {
    text: &'a str,
    pos: usize,
    /// Line holding `pos`, 1-based.
    line: usize,
}

impl<'a> TokenReader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            line: 1,
        }
    }

    fn advance(&mut self, len: usize) -> &'a str {
        let skipped = &self.text[self.pos..self.pos + len];
        self.line += skipped.matches('\n').count();
        self.pos += len;
        skipped
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let rest = &self.text[self.pos..];
        self.advance(rest.len() - rest.trim_start().len());
        let rest = &self.text[self.pos..];
        if rest.is_empty() {
            return None;
        }
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        Some(self.advance(end))
    }

    fn parse<T: FromStr>(&mut self, what: &str) -> Result<(usize, T)> {
        let token = self
            .next_token()
            .ok_or_else(|| TaskheapError::parse(self.line, format!("expected {}", what)))?;
        let value = token.parse::<T>().map_err(|_| {
            TaskheapError::parse(self.line, format!("invalid {}: '{}'", what, token))
        })?;
        Ok((self.line, value))
    }

    fn rest_of_line(&mut self) -> &'a str {
        let rest = &self.text[self.pos..];
        let end = rest.find('\n').map_or(rest.len(), |i| i + 1);
        self.advance(end).trim()
    }
}
