/// Transient form state. Created when the flow starts, mutated by user
/// interaction and by the two remote calls, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub selected_answer: Option<String>,
    pub full_name: String,
    pub terms_accepted: bool,

    // UI flags
    pub loading: bool,
    pub show_terms_modal: bool,
    pub show_success_modal: bool,
    pub show_error_modal: bool,
    pub already_submitted: bool,
}

impl FormState {
    /// Presence checks only: an answer is selected, the trimmed name is
    /// non-empty, and the terms were accepted.
    pub fn is_valid(&self) -> bool {
        self.selected_answer.is_some() && !self.full_name.trim().is_empty() && self.terms_accepted
    }
}
