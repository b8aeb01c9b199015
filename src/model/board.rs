use super::{Student, Task};
use crate::error::{Result, TaskheapError};
use crate::heap::{Direction, PriorityHeap};

/// The roster of students together with the task heap.
#[derive(Debug, Clone)]
pub struct Board {
    students: Vec<Student>,
    tasks: PriorityHeap<Task>,
}

impl Board {
    pub fn new(direction: Direction) -> Self {
        Self {
            students: Vec::new(),
            tasks: PriorityHeap::new(direction),
        }
    }

    /// Assembles a board, checking that every task points into the roster.
    pub fn from_parts(students: Vec<Student>, tasks: PriorityHeap<Task>) -> Result<Self> {
        if let Some(task) = tasks.snapshot().iter().find(|t| t.assignee >= students.len()) {
            return Err(TaskheapError::UnknownAssignee(task.assignee + 1));
        }
        Ok(Self { students, tasks })
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn tasks(&self) -> &PriorityHeap<Task> {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut PriorityHeap<Task> {
        &mut self.tasks
    }

    pub fn direction(&self) -> Direction {
        self.tasks.direction()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.tasks.is_empty()
    }

    /// Adds a student and returns its 1-based roster number.
    pub fn add_student(&mut self, student: Student) -> usize {
        self.students.push(student);
        self.students.len()
    }

    pub fn add_task(&mut self, task: Task) -> Result<()> {
        if task.assignee >= self.students.len() {
            return Err(TaskheapError::UnknownAssignee(task.assignee + 1));
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Pops up to `count` tasks, stopping early once the heap runs dry.
    pub fn pop_most_urgent(&mut self, count: usize) -> Result<Vec<Task>> {
        let mut popped = Vec::with_capacity(count.min(self.tasks.size()));
        for _ in 0..count {
            match self.tasks.pop() {
                Ok(task) => popped.push(task),
                Err(TaskheapError::EmptyHeap) => break,
                Err(e) => return Err(e),
            }
        }
        Ok(popped)
    }

    pub fn assignee_of(&self, task: &Task) -> Option<&Student> {
        self.students.get(task.assignee)
    }

    /// Renders a task as `{description, priority P, assigned to {name, year: Y}}`.
    pub fn describe(&self, task: &Task) -> String {
        let assignee = self
            .assignee_of(task)
            .map(|s| s.to_string())
            .unwrap_or_else(|| "nobody".to_string());
        format!(
            "{{{}, priority {}, assigned to {}}}",
            task.description,
            task.priority.value(),
            assignee
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Direction::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    fn board_with_student() -> Board {
        let mut board = Board::new(Direction::Descending);
        board.add_student(Student::new("Theo", 2).unwrap());
        board
    }

    #[test]
    fn test_add_task_checks_assignee() {
        let mut board = board_with_student();
        let task = Task::new(Priority::new(5).unwrap(), 1, "orphan").unwrap();
        assert!(matches!(
            board.add_task(task),
            Err(TaskheapError::UnknownAssignee(2))
        ));
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn test_describe() {
        let mut board = board_with_student();
        board
            .add_task(Task::new(Priority::new(7).unwrap(), 0, "grade labs").unwrap())
            .unwrap();
        let task = board.tasks().peek().unwrap();
        assert_eq!(
            board.describe(task),
            "{grade labs, priority 7, assigned to {Theo, year: 2}}"
        );
    }

    #[test]
    fn test_pop_most_urgent_stops_early() {
        let mut board = board_with_student();
        for priority in [4, 8, 6] {
            board
                .add_task(Task::new(Priority::new(priority).unwrap(), 0, "work").unwrap())
                .unwrap();
        }
        let popped = board.pop_most_urgent(5).unwrap();
        let priorities: Vec<i32> = popped.iter().map(|t| t.priority.value()).collect();
        assert_eq!(priorities, vec![8, 6, 4]);
        assert!(board.tasks().is_empty());
        assert!(board.pop_most_urgent(2).unwrap().is_empty());
    }

    #[test]
    fn test_from_parts_rejects_dangling_assignee() {
        let mut heap = PriorityHeap::new(Direction::Descending);
        heap.push(Task::new(Priority::new(3).unwrap(), 4, "lost").unwrap());
        assert!(Board::from_parts(vec![], heap).is_err());
    }
}
