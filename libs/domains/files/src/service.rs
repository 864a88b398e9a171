use regex::Regex;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tokio::fs;
use tracing::{debug, info, instrument};

use crate::config::FileStorageConfig;
use crate::error::{FileError, FileResult};

/// Letters, digits, space, dot, underscore and hyphen; must start alphanumeric
static DIRECTORY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 _.-]*$").unwrap());

/// File names are single path segments that can be quoted in a
/// `Content-Disposition` header.
fn validate_file_name(name: &str) -> FileResult<()> {
    let forbidden = name.is_empty()
        || name.chars().all(|c| c == '.')
        || name.contains("..")
        || name.contains(['/', '\\', '"'])
        || name.chars().any(char::is_control);

    if forbidden {
        return Err(FileError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn validate_directory_name(name: &str) -> FileResult<()> {
    if !DIRECTORY_NAME.is_match(name) || name.contains("..") {
        return Err(FileError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Flat file storage: one level of named directories under a fixed root.
#[derive(Clone, Debug)]
pub struct FileStorageService {
    root: PathBuf,
}

impl FileStorageService {
    /// Resolve the upload root to an absolute path, creating it if missing.
    pub async fn new(config: &FileStorageConfig) -> FileResult<Self> {
        fs::create_dir_all(&config.upload_dir).await.map_err(|e| {
            FileError::Storage(format!(
                "Could not create upload directory {}: {}",
                config.upload_dir.display(),
                e
            ))
        })?;
        let root = fs::canonicalize(&config.upload_dir).await?;

        info!(root = %root.display(), "File storage ready");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of an existing directory under the root.
    async fn existing_directory(&self, directory: &str) -> FileResult<PathBuf> {
        validate_directory_name(directory)?;
        let path = self.root.join(directory);

        match fs::metadata(&path).await {
            Ok(meta) if meta.is_dir() => Ok(path),
            Ok(_) => Err(FileError::DirectoryNotFound(directory.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(FileError::DirectoryNotFound(directory.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write `bytes` as `directory/file_name`, replacing any existing file.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn store_file(
        &self,
        file_name: &str,
        bytes: &[u8],
        directory: &str,
    ) -> FileResult<String> {
        validate_file_name(file_name)?;
        let dir = self.existing_directory(directory).await?;

        fs::write(dir.join(file_name), bytes).await?;
        info!("File stored");
        Ok(file_name.to_string())
    }

    /// Names of the regular files in `directory`, sorted.
    #[instrument(skip(self))]
    pub async fn list_file_names(&self, directory: &str) -> FileResult<Vec<String>> {
        let dir = self.existing_directory(directory).await?;

        let mut names = Vec::new();
        let mut entries = fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        if names.is_empty() {
            return Err(FileError::NoFiles(directory.to_string()));
        }

        names.sort();
        debug!(count = names.len(), "Listed files");
        Ok(names)
    }

    #[instrument(skip(self))]
    pub async fn load_file(&self, directory: &str, file_name: &str) -> FileResult<Vec<u8>> {
        validate_file_name(file_name)?;
        let dir = self.existing_directory(directory).await?;

        match fs::read(dir.join(file_name)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(FileError::FileNotFound(file_name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Create `name` under the root. Existing directories are left as they are.
    #[instrument(skip(self))]
    pub async fn create_directory(&self, name: &str) -> FileResult<()> {
        validate_directory_name(name)?;

        fs::create_dir_all(self.root.join(name)).await?;
        info!("Directory ready");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_file(&self, directory: &str, file_name: &str) -> FileResult<()> {
        validate_file_name(file_name)?;
        let dir = self.existing_directory(directory).await?;

        match fs::remove_file(dir.join(file_name)).await {
            Ok(()) => {
                info!("File deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(FileError::FileNotFound(file_name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn service() -> (TempDir, FileStorageService) {
        let tmp = TempDir::new().unwrap();
        let service = FileStorageService::new(&FileStorageConfig::new(tmp.path()))
            .await
            .unwrap();
        (tmp, service)
    }

    #[tokio::test]
    async fn test_new_creates_missing_root() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("nested").join("uploads");

        let service = FileStorageService::new(&FileStorageConfig::new(&root))
            .await
            .unwrap();

        assert!(root.is_dir());
        assert!(service.root().is_absolute());
    }

    #[tokio::test]
    async fn test_store_file_rejects_dotted_name() {
        let (_tmp, service) = service().await;
        service.create_directory("lesson-1").await.unwrap();

        let err = service
            .store_file("hello..txt", b"hello", "lesson-1")
            .await
            .unwrap_err();
        assert!(matches!(err, FileError::InvalidName(_)));
    }

    #[tokio::test]
    async fn test_store_file_rejects_path_separators() {
        let (_tmp, service) = service().await;
        service.create_directory("lesson-1").await.unwrap();

        for name in ["", ".", "a/b.txt", "a\\b.txt"] {
            assert!(matches!(
                service.store_file(name, b"x", "lesson-1").await,
                Err(FileError::InvalidName(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_file_names_must_be_quotable() {
        let (_tmp, service) = service().await;
        service.create_directory("lesson-1").await.unwrap();

        for name in ["say \"hi\".txt", "line\nbreak.txt", "nul\0.txt"] {
            assert!(matches!(
                service.store_file(name, b"x", "lesson-1").await,
                Err(FileError::InvalidName(_))
            ));
        }
        assert!(matches!(
            service.load_file("lesson-1", "a\"b.txt").await,
            Err(FileError::InvalidName(_))
        ));
    }

    #[tokio::test]
    async fn test_store_file_requires_existing_directory() {
        let (_tmp, service) = service().await;

        let err = service
            .store_file("notes.txt", b"hello", "missing")
            .await
            .unwrap_err();
        assert!(matches!(err, FileError::DirectoryNotFound(_)));
    }

    #[tokio::test]
    async fn test_store_then_load_and_replace() {
        let (_tmp, service) = service().await;
        service.create_directory("lesson-1").await.unwrap();

        let stored = service
            .store_file("notes.txt", b"first", "lesson-1")
            .await
            .unwrap();
        assert_eq!(stored, "notes.txt");

        service
            .store_file("notes.txt", b"second", "lesson-1")
            .await
            .unwrap();
        let bytes = service.load_file("lesson-1", "notes.txt").await.unwrap();
        assert_eq!(bytes, b"second");
    }

    #[tokio::test]
    async fn test_list_missing_directory() {
        let (_tmp, service) = service().await;

        let err = service
            .list_file_names("not-existing-folder-name")
            .await
            .unwrap_err();
        assert!(matches!(err, FileError::DirectoryNotFound(_)));
    }

    #[tokio::test]
    async fn test_list_empty_directory() {
        let (_tmp, service) = service().await;
        service.create_directory("empty-dir").await.unwrap();

        let err = service.list_file_names("empty-dir").await.unwrap_err();
        assert!(matches!(err, FileError::NoFiles(_)));
    }

    #[tokio::test]
    async fn test_list_returns_sorted_file_names_only() {
        let (tmp, service) = service().await;
        service.create_directory("not-empty-dir").await.unwrap();
        std::fs::write(tmp.path().join("not-empty-dir").join("b.txt"), b"b").unwrap();
        std::fs::write(tmp.path().join("not-empty-dir").join("a.txt"), b"a").unwrap();
        std::fs::create_dir(tmp.path().join("not-empty-dir").join("nested")).unwrap();

        let names = service.list_file_names("not-empty-dir").await.unwrap();
        assert_eq!(names, vec!["a.txt".to_string(), "b.txt".to_string()]);
    }

    #[tokio::test]
    async fn test_create_directory_is_idempotent() {
        let (tmp, service) = service().await;

        service.create_directory("sub-directory").await.unwrap();
        service.create_directory("sub-directory").await.unwrap();

        assert!(tmp.path().join("sub-directory").is_dir());
    }

    #[tokio::test]
    async fn test_create_directory_rejects_invalid_names() {
        let (_tmp, service) = service().await;

        for name in ["!@#$%^&*()", "", ".hidden", "a..b", "a/b"] {
            assert!(
                matches!(
                    service.create_directory(name).await,
                    Err(FileError::InvalidName(_))
                ),
                "{name} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let (_tmp, service) = service().await;
        service.create_directory("lesson-1").await.unwrap();

        let err = service.load_file("lesson-1", "ghost.txt").await.unwrap_err();
        assert!(matches!(err, FileError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_file() {
        let (_tmp, service) = service().await;
        service.create_directory("lesson-1").await.unwrap();
        service
            .store_file("notes.txt", b"hello", "lesson-1")
            .await
            .unwrap();

        service.delete_file("lesson-1", "notes.txt").await.unwrap();

        assert!(matches!(
            service.delete_file("lesson-1", "notes.txt").await,
            Err(FileError::FileNotFound(_))
        ));
    }
}
