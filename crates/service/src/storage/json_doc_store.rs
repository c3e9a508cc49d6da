use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;

use crate::errors::StoreError;

/// Generic JSON file-backed document store.
///
/// Persists a single serde document to a JSON file. Intended for lightweight
/// state where a database is overkill.
pub struct JsonDocStore {
    file_path: PathBuf,
}

impl JsonDocStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read and deserialize the document. Returns `Ok(None)` when the file
    /// does not exist. A file that exists but cannot be read or parsed is an
    /// error, never silently replaced.
    pub async fn load<T: DeserializeOwned>(&self) -> Result<Option<T>, StoreError> {
        let bytes = match fs::read(&self.file_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Persistence(e.to_string())),
        };
        let doc =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Persistence(e.to_string()))?;
        Ok(Some(doc))
    }

    /// Serialize and write the document, creating parent directories as needed.
    pub async fn save<T: Serialize>(&self, doc: &T) -> Result<(), StoreError> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.ok();
            }
        }
        let data = serde_json::to_vec(doc).map_err(|e| StoreError::Persistence(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| StoreError::Persistence(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("json_doc_store_{}_{}.json", tag, uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn missing_file_loads_as_none() -> Result<(), anyhow::Error> {
        let store = JsonDocStore::new(temp_path("missing"));
        let doc: Option<HashMap<String, String>> = store.load().await?;
        assert!(doc.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn save_then_load_round_trips() -> Result<(), anyhow::Error> {
        let store = JsonDocStore::new(temp_path("roundtrip"));
        let mut doc = HashMap::new();
        doc.insert("a".to_string(), "1".to_string());
        store.save(&doc).await?;

        let loaded: Option<HashMap<String, String>> = store.load().await?;
        assert_eq!(loaded, Some(doc));

        let _ = fs::remove_file(store.path()).await;
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_is_a_persistence_error() -> Result<(), anyhow::Error> {
        let path = temp_path("corrupt");
        fs::write(&path, b"{ not json").await?;

        let store = JsonDocStore::new(&path);
        let res: Result<Option<HashMap<String, String>>, _> = store.load().await;
        assert!(matches!(res, Err(StoreError::Persistence(_))));

        let _ = fs::remove_file(&path).await;
        Ok(())
    }
}
