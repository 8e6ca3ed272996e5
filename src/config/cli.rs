use crate::core::PreferenceStore;
use crate::utils::error::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// File-backed key/value store standing in for browser local storage.
///
/// The whole map is kept as one JSON object. A missing file reads as empty;
/// a corrupt one is logged and treated as empty so a bad file never blocks
/// startup.
#[derive(Debug)]
pub struct LocalStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&data) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!(
                    "⚠️ Ignoring unreadable preference file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(BTreeMap::new())
            }
        }
    }
}

impl PreferenceStore for LocalStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.remove(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut items = self.read_all().await?;
        items.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&self.path, serde_json::to_vec_pretty(&items)?).await?;
        tracing::debug!("Saved preference {} to {}", key, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().join("prefs.json"));

        assert_eq!(storage.get_item("paradaim-language").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().join("nested/state/prefs.json"));

        storage.set_item("paradaim-language", "de").await.unwrap();
        storage.set_item("other", "value").await.unwrap();

        assert_eq!(
            storage.get_item("paradaim-language").await.unwrap().as_deref(),
            Some("de")
        );
        assert_eq!(storage.get_item("other").await.unwrap().as_deref(), Some("value"));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_treated_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();
        let storage = LocalStorage::new(&path);

        assert_eq!(storage.get_item("paradaim-language").await.unwrap(), None);

        storage.set_item("paradaim-language", "en").await.unwrap();
        assert_eq!(
            storage.get_item("paradaim-language").await.unwrap().as_deref(),
            Some("en")
        );
    }
}
