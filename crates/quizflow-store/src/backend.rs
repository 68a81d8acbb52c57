use crate::error::StoreError;
use crate::session::FileIdentityProvider;
use crate::submissions::FileSubmissionStore;
use std::fs;
use std::path::{Path, PathBuf};

const QUIZFLOW_DIR: &str = ".quizflow";

/// The local stand-in for the managed backend: a session file plus a
/// submissions directory under `<root>/.quizflow/`.
///
/// Layout:
/// - `session`        — the principal identifier
/// - `submissions/`   — one `<principal>.json` per principal
pub struct LocalBackend {
    root: PathBuf,
    pub identity: FileIdentityProvider,
    pub submissions: FileSubmissionStore,
}

impl LocalBackend {
    /// Open the backend at `root`, creating the layout if it is not there.
    ///
    /// Create-if-absent mirrors the identity contract: first contact mints
    /// state rather than failing.
    pub fn open_or_create(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        let data_dir = root.join(QUIZFLOW_DIR);
        fs::create_dir_all(data_dir.join("submissions"))?;

        Ok(Self {
            identity: FileIdentityProvider::new(data_dir.join("session")),
            submissions: FileSubmissionStore::new(data_dir.join("submissions")),
            root,
        })
    }

    /// Root path the backend was opened at.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
