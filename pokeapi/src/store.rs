use crate::Error;

use std::path::PathBuf;
use tokio::fs;

/// Persistent key-value storage for serialized snapshots.
#[allow(async_fn_in_trait)]
pub trait Store {
    async fn get(&self, key: &str) -> Result<Option<String>, Error>;

    async fn set(&self, key: &str, value: String) -> Result<(), Error>;
}

/// On-disk storage under the platform data directory, one file per key.
#[derive(Debug, Clone)]
pub struct File {
    root: PathBuf,
}

impl File {
    pub fn new() -> Self {
        Self {
            root: dirs::data_dir().unwrap_or_default().join("pokedex"),
        }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.ron"))
    }
}

impl Store for File {
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.path(key);

        if !fs::try_exists(&path).await? {
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(path).await?))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), Error> {
        fs::create_dir_all(&self.root).await?;
        fs::write(self.path(key), value).await?;

        Ok(())
    }
}

impl Default for File {
    fn default() -> Self {
        Self::new()
    }
}
