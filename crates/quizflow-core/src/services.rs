use crate::error::ServiceError;
use crate::principal::Principal;
use crate::record::SubmissionRecord;

/// Anonymous identity acquisition.
///
/// `get_or_create_principal` is idempotent: if the environment already has a
/// principal bound to this session it is returned, otherwise a new anonymous
/// one is minted. Repeated calls return the same principal.
pub trait IdentityProvider {
    fn get_or_create_principal(&self) -> Result<Principal, ServiceError>;
}

/// Key-value document store holding at most one record per principal.
///
/// Read-by-key and write-by-key only; `put` is a full overwrite of whatever
/// was stored before.
pub trait SubmissionStore {
    fn get(&self, principal: &Principal) -> Result<Option<SubmissionRecord>, ServiceError>;
    fn put(&self, principal: &Principal, record: &SubmissionRecord) -> Result<(), ServiceError>;
}

// Shared references work wherever the traits are expected, so one backend
// instance can serve several controllers.

impl<T: IdentityProvider + ?Sized> IdentityProvider for &T {
    fn get_or_create_principal(&self) -> Result<Principal, ServiceError> {
        (**self).get_or_create_principal()
    }
}

impl<T: SubmissionStore + ?Sized> SubmissionStore for &T {
    fn get(&self, principal: &Principal) -> Result<Option<SubmissionRecord>, ServiceError> {
        (**self).get(principal)
    }

    fn put(&self, principal: &Principal, record: &SubmissionRecord) -> Result<(), ServiceError> {
        (**self).put(principal, record)
    }
}
