//! src/store.rs

use crate::errors::DevlogError;
use crate::record::Record;
use anyhow::Result;
use std::path::PathBuf;
use tokio::fs;

/// One pretty-printed JSON file per record under the log directory.
pub struct LogStore {
    log_dir: PathBuf,
}

impl LogStore {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
        }
    }

    /// Writes `record`, creating the directory if needed. An existing file for the
    /// same commit and day is overwritten.
    pub async fn append(&self, record: &Record) -> Result<PathBuf> {
        fs::create_dir_all(&self.log_dir)
            .await
            .map_err(|e| DevlogError::filesystem(&self.log_dir, e))?;

        let file_path = self.log_dir.join(record.file_name());
        if file_path.exists() {
            log::debug!("Overwriting existing record {}", file_path.display());
        }

        let content = serde_json::to_string_pretty(record)?;
        fs::write(&file_path, content)
            .await
            .map_err(|e| DevlogError::filesystem(&file_path, e))?;

        Ok(file_path)
    }

    /// All records, in file-name order. A missing directory yields an empty list;
    /// an unreadable or unparsable file fails the whole listing.
    pub async fn list_all(&self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        for path in self.record_files().await? {
            let content = fs::read_to_string(&path)
                .await
                .map_err(|e| DevlogError::filesystem(&path, e))?;
            let record: Record = serde_json::from_str(&content)
                .map_err(|source| DevlogError::CorruptRecord {
                    path: path.clone(),
                    source,
                })?;
            records.push(record);
        }
        log::debug!("Loaded {} records from {}", records.len(), self.log_dir.display());
        Ok(records)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Record>> {
        let records = self.list_all().await?;
        Ok(records.into_iter().filter(|r| r.matches(query)).collect())
    }

    async fn record_files(&self) -> Result<Vec<PathBuf>> {
        if !self.log_dir.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        let mut entries = fs::read_dir(&self.log_dir)
            .await
            .map_err(|e| DevlogError::filesystem(&self.log_dir, e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| DevlogError::filesystem(&self.log_dir, e))?
        {
            let path = entry.path();
            if path.is_file() && path.extension().map_or(false, |ext| ext == "json") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Orders records by timestamp, oldest first.
pub fn sort_chronologically(records: &mut [Record]) {
    records.sort_by_key(|r| r.timestamp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(day: u32, commit: &str, message: &str, why: &str, notes: &str) -> Record {
        Record::new(
            Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap(),
            commit,
            message,
            Some(why.to_string()),
            Some(notes.to_string()),
        )
    }

    #[tokio::test]
    async fn append_then_list_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::new(dir.path().join("nested").join("logs"));
        let original = record(1, "abc123", "fix bug", "null deref", "");

        let path = store.append(&original).await.unwrap();
        assert!(path.ends_with("2024-05-01--abc123.json"));

        let records = store.list_all().await.unwrap();
        assert_eq!(records, vec![original]);
    }

    #[tokio::test]
    async fn same_commit_same_day_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::new(dir.path());
        store.append(&record(1, "abc123", "m", "first", "")).await.unwrap();
        store.append(&record(1, "abc123", "m", "second", "")).await.unwrap();

        let records = store.list_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].why_text(), "second");
    }

    #[tokio::test]
    async fn missing_directory_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::new(dir.path().join("absent"));
        assert!(store.list_all().await.unwrap().is_empty());
        assert!(store.search("anything").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_json_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README.txt"), "not a record").unwrap();
        let store = LogStore::new(dir.path());
        store.append(&record(2, "def456", "m", "", "")).await.unwrap();

        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn corrupt_record_fails_the_listing() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::new(dir.path());
        store.append(&record(2, "def456", "m", "", "")).await.unwrap();
        std::fs::write(dir.path().join("2024-05-03--broken.json"), "{ nope").unwrap();

        let err = store.list_all().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DevlogError>(),
            Some(DevlogError::CorruptRecord { .. })
        ));
    }

    #[tokio::test]
    async fn search_returns_exact_matching_subset() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::new(dir.path());
        store.append(&record(1, "aaa111", "Fix parser BUG", "", "")).await.unwrap();
        store.append(&record(2, "bbb222", "refactor", "bug in lexer", "")).await.unwrap();
        store.append(&record(3, "ccc333", "docs", "", "mentions Bugs")).await.unwrap();
        store.append(&record(4, "ddd444", "release", "version bump", "")).await.unwrap();

        let all = store.list_all().await.unwrap();
        let expected: Vec<Record> = all.iter().filter(|r| r.matches("bug")).cloned().collect();
        let hits = store.search("bug").await.unwrap();

        assert_eq!(hits, expected);
        let commits: Vec<&str> = hits.iter().map(|r| r.commit.as_str()).collect();
        assert_eq!(commits, vec!["aaa111", "bbb222", "ccc333"]);
        assert!(store.search("xyz").await.unwrap().is_empty());
    }

    #[test]
    fn sorts_by_timestamp_ascending() {
        let mut records = vec![
            record(3, "c", "third", "", ""),
            record(1, "a", "first", "", ""),
            record(2, "b", "second", "", ""),
        ];
        sort_chronologically(&mut records);
        let commits: Vec<&str> = records.iter().map(|r| r.commit.as_str()).collect();
        assert_eq!(commits, vec!["a", "b", "c"]);
    }
}
