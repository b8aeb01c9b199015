use crate::config::{CONFIG_FILE_NAME, TaskheapConfig, TaskheapSettings};
use crate::error::TaskheapError;
use crate::heap::Direction;
use crate::model::Board;
use crate::storage::BoardRepository;
use anyhow::{Context, Result};
use colored::Colorize;

pub fn handle_init(data_file: String, direction: Direction) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(
            TaskheapError::AlreadyInitialized(config_path.display().to_string()).into(),
        );
    }

    let config = TaskheapConfig {
        taskheap: TaskheapSettings {
            data_file,
            direction,
            ..Default::default()
        },
    };
    let repo = BoardRepository::new(&config, &cwd);

    if repo.exists() {
        // An existing data file has to be in heap order for the chosen direction
        repo.load().with_context(|| {
            format!(
                "Existing data file {} cannot be used",
                repo.data_path().display()
            )
        })?;
    } else {
        if let Some(parent) = repo.data_path().parent() {
            std::fs::create_dir_all(parent)?;
        }
        repo.save(&Board::new(direction))?;
    }

    config.save(&config_path)?;

    println!(
        "{} taskheap project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config:    {}", config_path.display());
    println!("  Data:      {}", repo.data_path().display());
    println!("  Direction: {}", direction);

    Ok(())
}
