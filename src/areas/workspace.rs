use anyhow::Context;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Path argument naming standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Raw contents loaded for diffing, with the name shown in the diff header.
///
/// Contents are kept as bytes; no encoding is assumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    data: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Directory relative paths are resolved against.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads `file_path`, or standard input for `-`.
    ///
    /// The document is named after the path exactly as given.
    pub fn load(&self, file_path: &Path) -> anyhow::Result<Document> {
        let name = file_path.display().to_string();
        if file_path == Path::new(STDIN_PATH) {
            let mut data = Vec::new();
            std::io::stdin()
                .read_to_end(&mut data)
                .context("Failed to read standard input")?;
            return Ok(Document::new(name, data));
        }
        Ok(Document::new(name, self.read_file(file_path)?))
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Vec<u8>> {
        let full_path = self.resolve(file_path);

        if full_path.is_dir() {
            anyhow::bail!("The specified path is a directory: {:?}", file_path);
        }

        std::fs::read(&full_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))
    }

    fn resolve(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }
}
