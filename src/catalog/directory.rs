/// Filesystem directory catalog
///
/// Treats a directory as the database: every file with the configured
/// extension is a table. Decoded tables are cached in an LRU keyed by
/// the lowercased table name.
use super::{Catalog, Table, TableDecoder};
use crate::config::DbConfig;
use crate::error::{ParadoxError, Result};
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct DirectoryCatalog {
    dir: PathBuf,
    extension: String,
    decoder: Arc<dyn TableDecoder>,
    cache: Mutex<LruCache<String, Arc<dyn Table>>>,
}

impl DirectoryCatalog {
    pub fn new(
        dir: impl AsRef<Path>,
        config: &DbConfig,
        decoder: Arc<dyn TableDecoder>,
    ) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.is_dir() {
            return Err(ParadoxError::ConnectionFailure(format!(
                "Directory not found: {}",
                dir.display()
            )));
        }
        let capacity =
            NonZeroUsize::new(config.table_cache_size).unwrap_or(NonZeroUsize::MIN);
        Ok(Self {
            dir,
            extension: config.table_extension.clone(),
            decoder,
            cache: Mutex::new(LruCache::new(capacity)),
        })
    }

    /// Table files in the directory, as (name, path) pairs.
    fn table_files(&self) -> Result<Vec<(String, PathBuf)>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            let matches_ext = path
                .extension()
                .map(|e| e.eq_ignore_ascii_case(self.extension.as_str()))
                .unwrap_or(false);
            if !matches_ext {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                files.push((stem.to_string(), path.clone()));
            }
        }
        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }

    fn open(&self, name: &str, path: &Path) -> Result<Arc<dyn Table>> {
        let key = name.to_ascii_lowercase();
        if let Some(table) = self.cache.lock().get(&key) {
            return Ok(table.clone());
        }
        tracing::debug!(table = name, path = %path.display(), "decoding table file");
        let table = self.decoder.decode(path)?;
        self.cache.lock().put(key, table.clone());
        Ok(table)
    }
}

impl Catalog for DirectoryCatalog {
    fn list_tables(&self, pattern: &str) -> Result<Vec<Arc<dyn Table>>> {
        let all = pattern.is_empty() || pattern == "%";
        let mut tables = Vec::new();
        for (name, path) in self.table_files()? {
            if all || name.eq_ignore_ascii_case(pattern) {
                tables.push(self.open(&name, &path)?);
            }
        }
        Ok(tables)
    }
}
