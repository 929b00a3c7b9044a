use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ResourceError {
    NotFound(String),
    ReadError(std::io::Error),
}

impl std::fmt::Display for ResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceError::NotFound(path) => write!(f, "Resource not found: {path}"),
            ResourceError::ReadError(err) => write!(f, "Failed to read resource: {err}"),
        }
    }
}

impl std::error::Error for ResourceError {}

/// A source of bundled resources, addressed by logical path.
///
/// Implementations must be safe to call from multiple threads; every
/// call returns a fresh buffer and mutates nothing.
pub trait ResourceBundle: Send + Sync {
    fn read(&self, path: &str) -> Result<Vec<u8>, ResourceError>;
}

/// Bundle backed by a resource directory on disk.
#[derive(Debug, Clone)]
pub struct DirBundle {
    root: PathBuf,
}

impl DirBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceBundle for DirBundle {
    fn read(&self, path: &str) -> Result<Vec<u8>, ResourceError> {
        use std::io::Read;

        let full_path = self.root.join(path);
        let file = std::fs::File::open(&full_path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::ReadError(err)
            }
        })?;
        let mut reader = std::io::BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data).map_err(ResourceError::ReadError)?;
        Ok(data)
    }
}

/// Bundle over byte slices compiled into the binary, typically via
/// `include_bytes!`. Lets a packaged client serve icons without
/// shipping a resource tree next to the executable.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedBundle {
    entries: HashMap<&'static str, &'static [u8]>,
}

impl EmbeddedBundle {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    pub fn with(mut self, path: &'static str, data: &'static [u8]) -> Self {
        self.entries.insert(path, data);
        self
    }
}

impl ResourceBundle for EmbeddedBundle {
    fn read(&self, path: &str) -> Result<Vec<u8>, ResourceError> {
        self.entries
            .get(path)
            .map(|data| data.to_vec())
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }
}
