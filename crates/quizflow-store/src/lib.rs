//! Local adapters for the quizflow service traits.
//!
//! The real system delegates identity and persistence to an external managed
//! backend; these adapters are the substitutable local stand-ins: a session
//! file for identity, one JSON document per principal for submissions, and
//! in-memory implementations for tests.

pub mod backend;
pub mod error;
pub mod memory;
pub mod session;
pub mod submissions;

pub use backend::LocalBackend;
pub use error::StoreError;
pub use memory::{MemoryIdentityProvider, MemorySubmissionStore};
pub use session::FileIdentityProvider;
pub use submissions::FileSubmissionStore;
