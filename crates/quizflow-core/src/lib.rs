//! Core types and flow logic for the quizflow submission client.
//!
//! Everything here is pure: the two external collaborators (identity
//! provider and submission store) are trait seams in [`services`], and the
//! [`controller::QuizController`] orchestrates them without doing any I/O
//! of its own.

pub mod controller;
pub mod error;
pub mod form;
pub mod principal;
pub mod record;
pub mod services;

pub use controller::QuizController;
pub use error::ServiceError;
pub use form::FormState;
pub use principal::Principal;
pub use record::SubmissionRecord;
pub use services::{IdentityProvider, SubmissionStore};
