use std::{fs::Metadata, path::PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use scopeguard::ScopeGuard;
use uuid::Uuid;

use crate::{
    application::repositories::photo_repository::PhotoRepository,
    domain::{config::upload::has_allowed_extension, models::photo::StoredPhoto},
    services::StorageError,
};

/// Photos stored as plain files in a single local directory.
pub struct FsPhotoRepository {
    root: PathBuf,
}

impl FsPhotoRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Exact-name match against the regular files in the directory. Names
    /// containing separators can never match, so nothing outside the root is
    /// reachable.
    async fn find_file(&self, name: &str) -> Result<Option<(PathBuf, Metadata)>, StorageError> {
        let mut entries = tokio::fs::read_dir(&self.root).await?;

        while let Some(entry) = entries.next_entry().await? {
            if entry.file_name().to_str() != Some(name) {
                continue;
            }
            let metadata = entry.metadata().await?;
            if metadata.is_file() {
                return Ok(Some((entry.path(), metadata)));
            }
        }

        Ok(None)
    }

    fn temp_path(&self) -> PathBuf {
        self.root.join(format!(".upload-{}.part", Uuid::new_v4()))
    }
}

fn validate_name(name: &str) -> Result<(), StorageError> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn to_stored_photo(name: String, metadata: &Metadata) -> StoredPhoto {
    let modified_at = metadata
        .modified()
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now());
    // Not every filesystem records a birth time.
    let created_at = metadata
        .created()
        .map(DateTime::<Utc>::from)
        .unwrap_or(modified_at);

    StoredPhoto::new(name, created_at, modified_at, metadata.len())
}

fn remove_quietly(path: PathBuf) {
    if let Err(e) = std::fs::remove_file(&path) {
        tracing::warn!("Could not remove temporary file {}: {}", path.display(), e);
    }
}

#[async_trait]
impl PhotoRepository for FsPhotoRepository {
    async fn list(&self) -> Result<Vec<StoredPhoto>, StorageError> {
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        let mut photos = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if !has_allowed_extension(&name) {
                continue;
            }

            let metadata = entry.metadata().await?;
            if metadata.is_file() {
                photos.push(to_stored_photo(name, &metadata));
            }
        }

        photos.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(photos)
    }

    async fn get(&self, name: &str) -> Result<StoredPhoto, StorageError> {
        match self.find_file(name).await? {
            Some((_, metadata)) => Ok(to_stored_photo(name.to_string(), &metadata)),
            None => Err(StorageError::NotFound(name.to_string())),
        }
    }

    async fn put(&self, name: &str, content: Vec<u8>) -> Result<StoredPhoto, StorageError> {
        validate_name(name)?;
        let target = self.root.join(name);

        // Removed on every early return; defused once the rename succeeds.
        let temp = scopeguard::guard(self.temp_path(), remove_quietly);
        tokio::fs::write(&*temp, &content).await?;
        tokio::fs::rename(&*temp, &target).await?;
        ScopeGuard::into_inner(temp);

        let metadata = tokio::fs::metadata(&target).await?;
        Ok(to_stored_photo(name.to_string(), &metadata))
    }

    async fn delete(&self, name: &str) -> Result<(), StorageError> {
        let (path, _) = self
            .find_file(name)
            .await?
            .ok_or_else(|| StorageError::NotFound(name.to_string()))?;

        tokio::fs::remove_file(path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, len: usize) {
        std::fs::write(dir.join(name), vec![7u8; len]).unwrap();
    }

    fn names(photos: &[StoredPhoto]) -> Vec<&str> {
        photos.iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test]
    async fn list_reports_one_entry_per_image_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.png", 2048);
        write(dir.path(), "a.jpg", 3000);
        write(dir.path(), "c.gif", 10);
        let repo = FsPhotoRepository::new(dir.path());

        let photos = repo.list().await.unwrap();

        assert_eq!(names(&photos), vec!["a.jpg", "b.png", "c.gif"]);
        assert_eq!(photos[0].size_kib, 2);
        assert_eq!(photos[1].size_kib, 2);
        assert_eq!(photos[2].size_kib, 0);
    }

    #[tokio::test]
    async fn list_filters_extensions_case_insensitively() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "notes.txt", 10);
        write(dir.path(), "LOUD.JPG", 10);
        write(dir.path(), "scan.Tiff", 10);
        write(dir.path(), "photo.jpeg", 10);
        std::fs::create_dir(dir.path().join("folder.png")).unwrap();
        let repo = FsPhotoRepository::new(dir.path());

        let photos = repo.list().await.unwrap();

        assert_eq!(names(&photos), vec!["LOUD.JPG", "scan.Tiff"]);
    }

    #[tokio::test]
    async fn list_fails_for_missing_directory() {
        let dir = TempDir::new().unwrap();
        let repo = FsPhotoRepository::new(dir.path().join("gone"));

        assert!(matches!(repo.list().await, Err(StorageError::Io(_))));
    }

    #[tokio::test]
    async fn get_matches_exact_names_only() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "cat.jpg", 10);
        let repo = FsPhotoRepository::new(dir.path());

        assert_eq!(repo.get("cat.jpg").await.unwrap().name, "cat.jpg");
        assert!(matches!(repo.get("*.jpg").await, Err(StorageError::NotFound(_))));
        assert!(matches!(repo.get("cat").await, Err(StorageError::NotFound(_))));
        assert!(matches!(repo.get("../cat.jpg").await, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn put_writes_and_overwrites_without_leaving_temp_files() {
        let dir = TempDir::new().unwrap();
        let repo = FsPhotoRepository::new(dir.path());

        repo.put("dog.png", vec![1; 4096]).await.unwrap();
        let photo = repo.put("dog.png", vec![2; 1024]).await.unwrap();

        assert_eq!(photo.size_kib, 1);
        assert_eq!(std::fs::read(dir.path().join("dog.png")).unwrap(), vec![2; 1024]);
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn put_rejects_names_with_separators() {
        let dir = TempDir::new().unwrap();
        let repo = FsPhotoRepository::new(dir.path());

        for name in ["", ".", "..", "a/b.png", r"a\b.png"] {
            assert!(matches!(
                repo.put(name, vec![1]).await,
                Err(StorageError::InvalidName(_))
            ));
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn failed_put_cleans_up_temp_file() {
        let dir = TempDir::new().unwrap();
        // A directory in the way makes the final rename fail.
        std::fs::create_dir(dir.path().join("blocked.png")).unwrap();
        std::fs::write(dir.path().join("blocked.png").join("inner"), b"x").unwrap();
        let repo = FsPhotoRepository::new(dir.path());

        assert!(repo.put("blocked.png", vec![1; 16]).await.is_err());

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".part"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn delete_removes_file_and_reports_missing() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "cat.jpg", 10);
        let repo = FsPhotoRepository::new(dir.path());

        repo.delete("cat.jpg").await.unwrap();

        assert!(!dir.path().join("cat.jpg").exists());
        assert!(matches!(
            repo.delete("cat.jpg").await,
            Err(StorageError::NotFound(_))
        ));
    }
}
