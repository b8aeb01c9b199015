use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskheapError {
    #[error("Heap is empty")]
    EmptyHeap,

    #[error("Heap property violated: element {child} is better than its parent {parent}")]
    HeapViolation { parent: usize, child: usize },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unknown assignee: {0}")]
    UnknownAssignee(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Project not initialized. Run 'taskheap init' first.")]
    NotInitialized,

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

impl TaskheapError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        TaskheapError::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskheapError>;
