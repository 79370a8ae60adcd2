use std::{fmt, io::Error, path::PathBuf};

#[derive(Debug)]
pub enum ArchiveError {
    IoError(Error),
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveError::IoError(e) => write!(f, "archive io error: {}", e),
        }
    }
}

impl std::error::Error for ArchiveError {}

impl From<Error> for ArchiveError {
    fn from(err: Error) -> Self {
        ArchiveError::IoError(err)
    }
}

/// Bucket-keyed blob store for snapshot archives.
///
/// Buckets map to directories under the archive root; objects are plain
/// files named by their key. The default root lives in the platform data
/// directory, tests point it at a temp directory instead.
pub struct ArchiveManager {
    bucket: String,
    root: PathBuf,
}

impl ArchiveManager {
    pub fn new(bucket: String) -> Self {
        let mut root = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        root.push("spotivault/archive");
        Self { bucket, root }
    }

    pub fn with_root(bucket: String, root: PathBuf) -> Self {
        Self { bucket, root }
    }

    /// Stores a blob under the given key, creating the bucket directory
    /// on first use. Returns the path the object landed at.
    pub async fn put(&self, key: &str, bytes: &[u8]) -> Result<PathBuf, ArchiveError> {
        let path = self.object_path(key);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(ArchiveError::IoError)?;
        }

        async_fs::write(&path, bytes)
            .await
            .map_err(ArchiveError::IoError)?;
        Ok(path)
    }

    pub fn object_path(&self, key: &str) -> PathBuf {
        let mut path = self.root.clone();
        path.push(&self.bucket);
        path.push(key);
        path
    }
}
