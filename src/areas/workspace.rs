use crate::artifacts::diff::source::ListSource;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Resolves and reads the files being compared
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Absolute location of `file_path`, relative paths resolved against the workspace
    pub fn resolve(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let full_path = self.resolve(file_path);

        // Check if the file exists and is not a directory
        if !full_path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", file_path);
        }
        if full_path.is_dir() {
            anyhow::bail!("The specified path is a directory: {:?}", file_path);
        }

        std::fs::read_to_string(&full_path)
            .with_context(|| format!("cannot read {} as UTF-8 text", file_path.display()))
    }

    /// Reads `file_path` line by line into a source called `name`
    pub fn read_source(&self, file_path: &Path, name: &str) -> anyhow::Result<ListSource<String>> {
        let content = self.read_file(file_path)?;

        Ok(ListSource::from_text(&content, name))
    }
}
