//! Async file helpers for cache entries.

use std::path::Path;

use crate::Error;

/// Whether a cache entry is present. Presence alone means valid.
pub async fn exists(path: &Path) -> Result<bool, Error> {
    tokio::fs::try_exists(path).await.map_err(|e| Error::io(path, e))
}

pub async fn read_text(path: &Path) -> Result<String, Error> {
    tokio::fs::read_to_string(path).await.map_err(|e| Error::io(path, e))
}

/// Write `data` to `path`, creating missing parent directories first.
pub async fn write_creating_parents(path: &Path, data: &[u8]) -> Result<(), Error> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await.map_err(|e| Error::io(parent, e))?;
    }

    tokio::fs::write(path, data).await.map_err(|e| Error::io(path, e))?;
    tracing::debug!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn read_bytes(path: &Path) -> Vec<u8> {
        tokio::fs::read(path).await.unwrap()
    }

    #[tokio::test]
    async fn test_write_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/c/file.html");

        assert!(!exists(&path).await.unwrap());
        write_creating_parents(&path, b"<html></html>").await.unwrap();
        assert!(exists(&path).await.unwrap());
        assert_eq!(read_text(&path).await.unwrap(), "<html></html>");
    }

    #[tokio::test]
    async fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.zip");

        write_creating_parents(&path, &[1, 2, 3]).await.unwrap();
        write_creating_parents(&path, &[4]).await.unwrap();
        assert_eq!(read_bytes(&path).await, vec![4]);
    }

    #[tokio::test]
    async fn test_empty_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.zip");
        write_creating_parents(&path, &[]).await.unwrap();
        assert!(exists(&path).await.unwrap());
    }

    #[tokio::test]
    async fn test_read_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.html");
        let err = read_text(&path).await.unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
