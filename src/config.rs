use crate::error::{Result, TaskheapError};
use crate::heap::Direction;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".taskheap.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskheapConfig {
    #[serde(default)]
    pub taskheap: TaskheapSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskheapSettings {
    #[serde(default = "default_data_file")]
    pub data_file: String,

    #[serde(default)]
    pub direction: Direction,

    #[serde(default = "default_pop_count")]
    pub default_pop_count: usize,

    /// Heapify a data file that fails the trusted load instead of failing.
    #[serde(default)]
    pub repair_on_load: bool,
}

fn default_data_file() -> String {
    "tasks.txt".to_string()
}

fn default_pop_count() -> usize {
    1
}

impl Default for TaskheapSettings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            direction: Direction::default(),
            default_pop_count: default_pop_count(),
            repair_on_load: false,
        }
    }
}

impl TaskheapConfig {
    /// Searches upward from `start_path` and returns the config with its project root.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<(Self, PathBuf)> {
        if !config_path.exists() {
            return Err(TaskheapError::NotInitialized);
        }
        let content = std::fs::read_to_string(config_path)?;
        let config: TaskheapConfig = toml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| {
                TaskheapError::Config("Config file has no parent directory".to_string())
            })?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(TaskheapError::NotInitialized);
            }
        }
    }

    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.taskheap.data_file)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
