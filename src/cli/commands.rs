use crate::config::TaskheapSettings;
use crate::heap::Direction;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "taskheap")]
#[command(
    author,
    version,
    about = "A flat-file task tracker that pops the most urgent tasks first"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .taskheap.toml by default)
    #[arg(long, global = true, env = "TASKHEAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new taskheap project
    Init {
        /// Data file, relative to the project root
        #[arg(long, default_value_t = TaskheapSettings::default().data_file)]
        data_file: String,

        /// Which tasks come out first
        #[arg(long, value_enum, default_value = "descending")]
        direction: DirectionArg,
    },

    /// Manage the student roster
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Add a task
    #[command(visible_alias = "a")]
    Add {
        /// Task priority
        #[arg(allow_negative_numbers = true)]
        priority: i32,

        /// Roster number of the assignee (see `student list`)
        assignee: usize,

        /// Task description
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all tasks
    #[command(visible_alias = "ls")]
    List {
        /// Show tasks in pop order instead of heap order
        #[arg(long)]
        sorted: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the most urgent task without removing it
    Peek {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove and show the most urgent tasks
    Pop {
        /// How many tasks to pop (defaults to the configured count)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace the board with whitespace-separated console input
    Import {
        /// Input file, or '-' for stdin
        input: String,

        /// Replace a board that already has data
        #[arg(long)]
        force: bool,
    },

    /// Write the board to a file in the save format
    Export {
        /// Destination path
        path: PathBuf,

        /// Overwrite without asking
        #[arg(long)]
        force: bool,
    },

    /// Verify that the data file is in heap order
    Check {
        /// Rebuild the heap and save it if the check fails
        #[arg(long)]
        repair: bool,
    },

    /// Interactive menu
    Shell,
}

#[derive(Subcommand)]
pub enum StudentAction {
    /// Add a student to the roster
    Add {
        /// Name (a single word)
        name: String,

        /// Study year
        year: u32,
    },

    /// List the roster
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    Ascending,
    Descending,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Ascending => Direction::Ascending,
            DirectionArg::Descending => Direction::Descending,
        }
    }
}
