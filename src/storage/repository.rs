use super::lines::{parse_lines, render_lines};
use crate::{
    config::TaskheapConfig,
    error::{Result, TaskheapError},
    heap::{Direction, Layout, PriorityHeap},
    model::Board,
};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Loads and saves a board from the project's data file.
pub struct BoardRepository {
    data_path: PathBuf,
    direction: Direction,
    repair_on_load: bool,
}

impl BoardRepository {
    pub fn new(config: &TaskheapConfig, project_root: &Path) -> Self {
        Self {
            data_path: config.data_path(project_root),
            direction: config.taskheap.direction,
            repair_on_load: config.taskheap.repair_on_load,
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn exists(&self) -> bool {
        self.data_path.exists()
    }

    /// Loads the board, trusting the stored task order.
    ///
    /// A file whose task order breaks the heap property is rejected unless
    /// `repair_on_load` is configured, in which case it is heapified.
    pub fn load(&self) -> Result<Board> {
        match self.load_with(Layout::Trusted) {
            Err(TaskheapError::HeapViolation { parent, child }) if self.repair_on_load => {
                tracing::warn!(
                    path = %self.data_path.display(),
                    parent,
                    child,
                    "Data file is not in heap order, repairing"
                );
                self.load_with(Layout::Untrusted)
            }
            other => other,
        }
    }

    /// Loads the board with an explicit layout. A missing file is an empty board.
    pub fn load_with(&self, layout: Layout) -> Result<Board> {
        if !self.data_path.exists() {
            tracing::debug!(path = %self.data_path.display(), "No data file, starting empty");
            return Ok(Board::new(self.direction));
        }

        let content = std::fs::read_to_string(&self.data_path)?;
        let (students, tasks) = parse_lines(&content)?;
        let heap = PriorityHeap::from_sequence(tasks, self.direction, layout)?;
        let board = Board::from_parts(students, heap)?;

        tracing::info!(
            path = %self.data_path.display(),
            students = board.students().len(),
            tasks = board.tasks().size(),
            "Loaded board"
        );
        Ok(board)
    }

    pub fn save(&self, board: &Board) -> Result<()> {
        tracing::info!(
            path = %self.data_path.display(),
            students = board.students().len(),
            tasks = board.tasks().size(),
            "Saving board"
        );
        atomic_write(&self.data_path, &render_lines(board))
    }
}

/// Writes `content` through a temp file in the target directory and renames it
/// into place.
pub fn atomic_write(target_path: &Path, content: &str) -> Result<()> {
    let target_dir = match target_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(target_dir)
        .map_err(|e| TaskheapError::Storage(format!("Failed to create temp file: {}", e)))?;

    use std::io::Write;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| TaskheapError::Storage(format!("Failed to write to temp file: {}", e)))?;

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| TaskheapError::Storage(format!("Failed to sync temp file: {}", e)))?;

    temp_file.persist(target_path).map_err(|e| {
        TaskheapError::Storage(format!(
            "Failed to persist {}: {}",
            target_path.display(),
            e.error
        ))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaskheapSettings;
    use crate::model::{Priority, Student, Task};
    use tempfile::TempDir;

    fn setup_test_repo(repair_on_load: bool) -> (BoardRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config = TaskheapConfig {
            taskheap: TaskheapSettings {
                data_file: "tasks.txt".to_string(),
                direction: Direction::Descending,
                default_pop_count: 1,
                repair_on_load,
            },
        };
        let repo = BoardRepository::new(&config, temp_dir.path());
        (repo, temp_dir)
    }

    fn sample_board() -> Board {
        let mut board = Board::new(Direction::Descending);
        board.add_student(Student::new("Ana", 1).unwrap());
        for (priority, description) in [(3, "c"), (1, "a"), (4, "d"), (1, "b"), (5, "e"), (9, "f")] {
            board
                .add_task(Task::new(Priority::new(priority).unwrap(), 0, description).unwrap())
                .unwrap();
        }
        board
    }

    #[test]
    fn test_missing_file_is_empty_board() {
        let (repo, _temp_dir) = setup_test_repo(false);
        let board = repo.load().unwrap();
        assert!(board.is_empty());
        assert_eq!(board.direction(), Direction::Descending);
    }

    #[test]
    fn test_save_then_load_is_trusted() {
        let (repo, _temp_dir) = setup_test_repo(false);
        let board = sample_board();
        repo.save(&board).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.students(), board.students());
        let original: Vec<_> = board.tasks().snapshot().iter().map(|t| &t.description).collect();
        let reloaded: Vec<_> = loaded.tasks().snapshot().iter().map(|t| &t.description).collect();
        assert_eq!(original, reloaded);
    }

    #[test]
    fn test_hand_edited_file_is_rejected() {
        let (repo, _temp_dir) = setup_test_repo(false);
        std::fs::write(repo.data_path(), "1\nAna\n1\n2\n1\n1\nlow\n9\n1\nhigh\n").unwrap();

        let result = repo.load();
        assert!(matches!(
            result,
            Err(TaskheapError::HeapViolation { parent: 0, child: 1 })
        ));
    }

    #[test]
    fn test_repair_on_load_heapifies() {
        let (repo, _temp_dir) = setup_test_repo(true);
        std::fs::write(repo.data_path(), "1\nAna\n1\n2\n1\n1\nlow\n9\n1\nhigh\n").unwrap();

        let mut board = repo.load().unwrap();
        assert!(board.tasks().is_valid());
        assert_eq!(board.tasks_mut().pop().unwrap().description, "high");
    }
}
