//! On-disk export of records fetched outside the bulk-read API

use crate::error::{ClientError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name the users export is written to
pub const USERS_FILE: &str = "users.json";

/// Writes exported records as pretty-printed JSON under a data directory
#[derive(Debug, Clone)]
pub struct UserStore {
    data_dir: PathBuf,
}

impl UserStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Serialize `records` to `<data_dir>/<file_name>`, creating the directory
    /// if needed
    ///
    /// # Returns
    /// The path written
    pub fn save<T: Serialize + ?Sized>(&self, file_name: &str, records: &T) -> Result<PathBuf> {
        let path = self.data_dir.join(file_name);
        let json = serde_json::to_vec_pretty(records)?;

        std::fs::create_dir_all(&self.data_dir).map_err(|source| ClientError::Store {
            path: self.data_dir.clone(),
            source,
        })?;
        std::fs::write(&path, json).map_err(|source| ClientError::Store {
            path: path.clone(),
            source,
        })?;

        info!("Saved {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_save_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UserStore::new(tmp.path().join("nested").join("data"));

        let path = store.save(USERS_FILE, &vec![json!({ "id": "1" })]).unwrap();

        assert_eq!(path, tmp.path().join("nested/data/users.json"));
        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(written, json!([{ "id": "1" }]));
    }

    #[test]
    fn test_save_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UserStore::new(tmp.path());

        store.save(USERS_FILE, &[1, 2, 3]).unwrap();
        let path = store.save(USERS_FILE, &[4]).unwrap();

        let written: Vec<i32> = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(written, vec![4]);
    }

    #[test]
    fn test_save_into_file_path_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        let store = UserStore::new(&blocker);
        let err = store.save(USERS_FILE, &[1]).unwrap_err();
        assert!(matches!(err, ClientError::Store { .. }));
    }
}
