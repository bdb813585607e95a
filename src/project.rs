use std::path::{Path, PathBuf};

pub const DEFAULT_SRC_DIR: &str = "src";
pub const CONFIG_FILE_NAME: &str = "config.ts";
pub const ENV_EXAMPLE_NAME: &str = ".env.example";

/// Where a command looks for its inputs.
///
/// Every handler receives one of these instead of resolving paths on its own,
/// so the same tree can be inspected from any working directory.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    src_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_src_dir(root, DEFAULT_SRC_DIR)
    }

    pub fn with_src_dir(root: impl Into<PathBuf>, src_dir: impl AsRef<Path>) -> Self {
        let root = root.into();
        let src_dir = root.join(src_dir);
        Self { root, src_dir }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn src_dir(&self) -> &Path {
        &self.src_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.src_dir.join(CONFIG_FILE_NAME)
    }

    pub fn env_example(&self) -> PathBuf {
        self.root.join(ENV_EXAMPLE_NAME)
    }

    /// Path as shown to the user: relative to the project root when possible.
    pub fn display_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative.to_string_lossy().to_string()
    }
}
