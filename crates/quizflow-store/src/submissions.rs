use crate::error::StoreError;
use quizflow_core::{Principal, ServiceError, SubmissionRecord, SubmissionStore};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Submission store holding one JSON document per principal.
///
/// Layout: `<dir>/<principal>.json`. Writes are atomic (temp file + rename),
/// so a failed write leaves the prior record untouched.
pub struct FileSubmissionStore {
    dir: PathBuf,
}

impl FileSubmissionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Validate a principal id before using it as a file name. Rejects empty
    /// ids, path separators, null bytes, and leading dots.
    fn validate_key(principal: &Principal) -> Result<(), StoreError> {
        let id = principal.as_str();
        if id.is_empty() {
            return Err(StoreError::InvalidPrincipal(
                id.into(),
                "principal id cannot be empty".into(),
            ));
        }
        if id.contains('/') || id.contains('\\') {
            return Err(StoreError::InvalidPrincipal(
                id.into(),
                "principal id cannot contain path separators".into(),
            ));
        }
        if id.contains('\0') {
            return Err(StoreError::InvalidPrincipal(
                id.replace('\0', "\\0"),
                "principal id cannot contain null bytes".into(),
            ));
        }
        if id.starts_with('.') {
            return Err(StoreError::InvalidPrincipal(
                id.into(),
                "principal id cannot start with '.'".into(),
            ));
        }
        Ok(())
    }

    fn record_path(&self, principal: &Principal) -> PathBuf {
        self.dir.join(format!("{}.json", principal.as_str()))
    }

    fn read(&self, principal: &Principal) -> Result<Option<SubmissionRecord>, StoreError> {
        Self::validate_key(principal)?;
        let path = self.record_path(principal);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e)),
        };
        Ok(Some(serde_json::from_str(&data)?))
    }

    fn write(&self, principal: &Principal, record: &SubmissionRecord) -> Result<(), StoreError> {
        Self::validate_key(principal)?;
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(record)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.flush()?;
        tmp.persist(self.record_path(principal))
            .map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

impl SubmissionStore for FileSubmissionStore {
    fn get(&self, principal: &Principal) -> Result<Option<SubmissionRecord>, ServiceError> {
        self.read(principal)
            .map_err(|e| ServiceError::Read(e.to_string()))
    }

    fn put(&self, principal: &Principal, record: &SubmissionRecord) -> Result<(), ServiceError> {
        self.write(principal, record)
            .map_err(|e| ServiceError::Write(e.to_string()))
    }
}
