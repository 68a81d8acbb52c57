use quizflow_core::{
    IdentityProvider, Principal, ServiceError, SubmissionRecord, SubmissionStore,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory identity provider: always hands out the same fixed principal.
pub struct MemoryIdentityProvider {
    principal: Principal,
}

impl MemoryIdentityProvider {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            principal: Principal::new(id),
        }
    }
}

impl IdentityProvider for MemoryIdentityProvider {
    fn get_or_create_principal(&self) -> Result<Principal, ServiceError> {
        Ok(self.principal.clone())
    }
}

/// In-memory submission store: a mutex-guarded map from principal id to
/// record, with the same overwrite semantics as the file store.
#[derive(Default)]
pub struct MemorySubmissionStore {
    records: Mutex<HashMap<String, SubmissionRecord>>,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held.
    pub fn len(&self) -> Result<usize, ServiceError> {
        Ok(self
            .records
            .lock()
            .map_err(|_| ServiceError::Read("store mutex poisoned".into()))?
            .len())
    }

    pub fn is_empty(&self) -> Result<bool, ServiceError> {
        Ok(self.len()? == 0)
    }
}

impl SubmissionStore for MemorySubmissionStore {
    fn get(&self, principal: &Principal) -> Result<Option<SubmissionRecord>, ServiceError> {
        Ok(self
            .records
            .lock()
            .map_err(|_| ServiceError::Read("store mutex poisoned".into()))?
            .get(principal.as_str())
            .cloned())
    }

    fn put(&self, principal: &Principal, record: &SubmissionRecord) -> Result<(), ServiceError> {
        self.records
            .lock()
            .map_err(|_| ServiceError::Write("store mutex poisoned".into()))?
            .insert(principal.as_str().to_string(), record.clone());
        Ok(())
    }
}
