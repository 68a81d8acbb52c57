use crate::error::ServiceError;
use crate::form::FormState;
use crate::record::SubmissionRecord;
use crate::services::{IdentityProvider, SubmissionStore};

/// Orchestrates the submission flow: get-or-create principal, check for a
/// prior submission, load-or-create the form, submit/overwrite.
///
/// UI-level state machine:
/// `Loading -> {Empty, Filled(already_submitted)} -> Editing -> Submitting
///  -> {SuccessModal -> ReadOnlyFilled, ErrorModal -> Editing}`
///
/// Both collaborators are injected so tests can substitute in-memory fakes.
/// All calls are issued strictly in sequence; store access always happens
/// after identity resolution.
pub struct QuizController<I, S> {
    identity: I,
    store: S,
    pub form: FormState,
}

impl<I: IdentityProvider, S: SubmissionStore> QuizController<I, S> {
    pub fn new(identity: I, store: S) -> Self {
        Self {
            identity,
            store,
            form: FormState::default(),
        }
    }

    /// Acquire the principal and look up a prior submission.
    ///
    /// If a record exists the form is pre-filled and marked already
    /// submitted; otherwise it stays empty. Failures are swallowed: the form
    /// ends in the empty state with `loading` cleared and no error surface.
    pub fn initialize(&mut self) {
        self.form.loading = true;
        let looked_up = self.fetch_existing();
        self.form.loading = false;

        if let Ok(Some(record)) = looked_up {
            self.form.selected_answer = Some(record.answer);
            self.form.full_name = record.full_name;
            self.form.already_submitted = true;
        }
    }

    fn fetch_existing(&self) -> Result<Option<SubmissionRecord>, ServiceError> {
        let principal = self.identity.get_or_create_principal()?;
        self.store.get(&principal)
    }

    /// Presence validation of the current form.
    pub fn is_valid(&self) -> bool {
        self.form.is_valid()
    }

    /// Write the current form as this principal's record, overwriting any
    /// prior one.
    ///
    /// Does not re-validate: the UI is expected to gate on [`is_valid`]
    /// first, and an unset answer submits as the empty string. Success opens
    /// the success modal; any failure opens the error modal with no retry
    /// and no rollback. `loading` is cleared on every path.
    ///
    /// [`is_valid`]: QuizController::is_valid
    pub fn submit(&mut self) {
        self.form.loading = true;
        let written = self.write_record();
        self.form.loading = false;

        match written {
            Ok(()) => self.form.show_success_modal = true,
            Err(_) => self.form.show_error_modal = true,
        }
    }

    fn write_record(&self) -> Result<(), ServiceError> {
        // Re-acquire rather than cache: get-or-create is idempotent.
        let principal = self.identity.get_or_create_principal()?;
        let record = SubmissionRecord::now(
            self.form.selected_answer.clone().unwrap_or_default(),
            self.form.full_name.clone(),
        );
        self.store.put(&principal, &record)
    }

    pub fn open_terms(&mut self) {
        self.form.show_terms_modal = true;
    }

    pub fn close_terms(&mut self) {
        self.form.show_terms_modal = false;
    }

    /// Dismiss the success modal and transition to the read-only filled view.
    pub fn close_success(&mut self) {
        self.form.show_success_modal = false;
        self.form.already_submitted = true;
    }

    /// Dismiss the error modal. Nothing else changes: the user may retry
    /// `submit()` manually.
    pub fn close_error(&mut self) {
        self.form.show_error_modal = false;
    }
}
