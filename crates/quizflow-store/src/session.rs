use crate::error::StoreError;
use quizflow_core::{IdentityProvider, Principal, ServiceError};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Identity provider backed by a session file.
///
/// The file holds one line: the principal identifier. First contact mints a
/// new anonymous principal and persists it atomically; every later call
/// returns the same one.
pub struct FileIdentityProvider {
    session_path: PathBuf,
}

impl FileIdentityProvider {
    pub fn new(session_path: impl Into<PathBuf>) -> Self {
        Self {
            session_path: session_path.into(),
        }
    }

    fn load_or_mint(&self) -> Result<Principal, StoreError> {
        if let Ok(content) = fs::read_to_string(&self.session_path) {
            let id = content.trim();
            if !id.is_empty() {
                return Ok(Principal::new(id));
            }
        }

        let principal = mint_principal();
        if let Some(parent) = self.session_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Atomic write: temp file in the same directory + rename.
        let parent = self.session_path.parent().unwrap_or_else(|| Path::new(""));
        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        writeln!(tmp, "{}", principal)?;
        tmp.flush()?;
        tmp.persist(&self.session_path)
            .map_err(|e| StoreError::Io(e.error))?;

        Ok(principal)
    }
}

impl IdentityProvider for FileIdentityProvider {
    fn get_or_create_principal(&self) -> Result<Principal, ServiceError> {
        self.load_or_mint()
            .map_err(|e| ServiceError::Identity(e.to_string()))
    }
}

/// Mint a fresh anonymous principal: SHA-256 over wall-clock nanos and the
/// process id, hex-encoded.
fn mint_principal() -> Principal {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let mut hasher = Sha256::new();
    hasher.update(nanos.to_be_bytes());
    hasher.update(std::process::id().to_be_bytes());
    Principal::new(hex::encode(hasher.finalize()))
}
