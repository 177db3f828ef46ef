//! Part storage for relationship parts.
//!
//! A relationships part is written back through a [`PartStorage`] after every
//! change. Two implementations are provided:
//!
//! - [`MemoryStorage`]: parts kept in a map, for in-memory packages and tests
//! - [`DirStorage`]: an unpacked package directory on disk

use crate::ooxml::opc::error::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Backing store that a relationships part is loaded from and saved to.
pub trait PartStorage {
    /// Read the content of a part. Returns `None` if the part does not exist.
    fn load(&self, partname: &str) -> Result<Option<Vec<u8>>>;

    /// Write the content of a part, replacing any previous content.
    fn save(&mut self, partname: &str, blob: &[u8]) -> Result<()>;
}

/// Normalize a partname to a member name (no leading slash).
#[inline]
fn membername(partname: &str) -> &str {
    partname.trim_start_matches('/')
}

/// In-memory part storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    parts: HashMap<String, Vec<u8>>,
    saves: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the storage with an existing part.
    pub fn with_part(mut self, partname: &str, blob: impl Into<Vec<u8>>) -> Self {
        self.parts.insert(membername(partname).to_string(), blob.into());
        self
    }

    /// Get the stored content of a part.
    #[inline]
    pub fn get(&self, partname: &str) -> Option<&[u8]> {
        self.parts.get(membername(partname)).map(Vec::as_slice)
    }

    /// Number of `save` calls made so far.
    #[inline]
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl PartStorage for MemoryStorage {
    fn load(&self, partname: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.get(partname).map(<[u8]>::to_vec))
    }

    fn save(&mut self, partname: &str, blob: &[u8]) -> Result<()> {
        self.parts.insert(membername(partname).to_string(), blob.to_vec());
        self.saves += 1;
        Ok(())
    }
}

/// Storage over an unpacked package directory.
///
/// Partnames are resolved relative to the root, so `/xl/_rels/workbook.xml.rels`
/// and `xl/_rels/workbook.xml.rels` name the same file.
#[derive(Debug, Clone)]
pub struct DirStorage {
    root: PathBuf,
}

impl DirStorage {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the filesystem path of a part.
    pub fn path_for(&self, partname: &str) -> PathBuf {
        self.root.join(membername(partname))
    }
}

impl PartStorage for DirStorage {
    fn load(&self, partname: &str) -> Result<Option<Vec<u8>>> {
        match std::fs::read(self.path_for(partname)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, partname: &str, blob: &[u8]) -> Result<()> {
        let path = self.path_for(partname);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, blob)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.load("/_rels/.rels").unwrap().is_none());

        storage.save("/_rels/.rels", b"<Relationships/>").unwrap();
        assert_eq!(storage.get("_rels/.rels"), Some(&b"<Relationships/>"[..]));
        assert_eq!(
            storage.load("/_rels/.rels").unwrap().as_deref(),
            Some(&b"<Relationships/>"[..])
        );
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn test_memory_storage_seeded_part() {
        let storage = MemoryStorage::new().with_part("xl/_rels/workbook.xml.rels", "<x/>");
        assert_eq!(storage.get("/xl/_rels/workbook.xml.rels"), Some(&b"<x/>"[..]));
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn test_dir_storage_creates_directories() {
        let dir = tempdir().expect("create temp dir");
        let mut storage = DirStorage::new(dir.path());

        assert!(storage.load("/xl/_rels/workbook.xml.rels").unwrap().is_none());

        storage
            .save("/xl/_rels/workbook.xml.rels", b"<Relationships/>")
            .unwrap();
        let on_disk = std::fs::read(dir.path().join("xl/_rels/workbook.xml.rels")).unwrap();
        assert_eq!(on_disk, b"<Relationships/>");
        assert_eq!(
            storage.load("xl/_rels/workbook.xml.rels").unwrap(),
            Some(b"<Relationships/>".to_vec())
        );
    }
}
