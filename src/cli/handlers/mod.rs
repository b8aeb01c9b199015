mod add;
mod check;
mod export;
mod import;
mod init;
mod list;
mod peek;
mod pop;
mod shell;
mod student;
mod utils;

pub use add::handle_add;
pub use check::handle_check;
pub use export::handle_export;
pub use import::handle_import;
pub use init::handle_init;
pub use list::handle_list;
pub use peek::handle_peek;
pub use pop::handle_pop;
pub use shell::{ShellOutcome, handle_shell, run_shell};
pub use student::{handle_student_add, handle_student_list};

use crate::config::TaskheapConfig;
use crate::storage::BoardRepository;
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: TaskheapConfig,
    pub root: PathBuf,
    pub repo: BoardRepository,
}

impl CommandContext {
    pub fn new(config: TaskheapConfig, root: PathBuf) -> Self {
        let repo = BoardRepository::new(&config, &root);
        Self { config, root, repo }
    }
}
