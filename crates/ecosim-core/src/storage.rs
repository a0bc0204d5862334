//! Byte-level access to named resources.
//!
//! Persistence only needs "read these bytes" and "write these bytes" for a
//! name. [`FileStorage`] maps names onto the file system; [`MemoryStorage`]
//! keeps them in a map and is what tests use.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// A place documents can be read from and written to by name.
pub trait Storage {
    /// Read every byte of the named resource.
    fn read(&self, name: &Path) -> io::Result<Vec<u8>>;

    /// Replace the named resource with `bytes`.
    fn write(&mut self, name: &Path, bytes: &[u8]) -> io::Result<()>;
}

/// File-system storage. Relative names resolve against `root`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `root`. An empty root means the working directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The path a name resolves to.
    pub fn resolve(&self, name: &Path) -> PathBuf {
        self.root.join(name)
    }
}

impl Storage for FileStorage {
    fn read(&self, name: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(self.resolve(name))
    }

    fn write(&mut self, name: &Path, bytes: &[u8]) -> io::Result<()> {
        let path = self.resolve(name);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)
    }
}

/// In-memory storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Borrow the stored bytes for a name, if present.
    pub fn get(&self, name: &Path) -> Option<&[u8]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, name: &Path) -> io::Result<Vec<u8>> {
        self.entries.get(name).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no entry named {}", name.display()),
            )
        })
    }

    fn write(&mut self, name: &Path, bytes: &[u8]) -> io::Result<()> {
        self.entries.insert(name.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}
