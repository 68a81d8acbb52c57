use anyhow::{Context, Result};
use quizflow_core::QuizController;
use quizflow_store::LocalBackend;
use std::path::Path;

pub fn run(data_dir: &Path, answer: String, name: String, accept_terms: bool) -> Result<()> {
    let backend =
        LocalBackend::open_or_create(data_dir).context("could not open the data directory")?;
    let mut ctrl = QuizController::new(&backend.identity, &backend.submissions);
    ctrl.initialize();

    ctrl.form.selected_answer = Some(answer);
    ctrl.form.full_name = name;
    ctrl.form.terms_accepted = accept_terms;

    // Presence checks; the controller itself does not re-validate.
    if !ctrl.is_valid() {
        if ctrl.form.full_name.trim().is_empty() {
            anyhow::bail!("a non-empty name is required");
        }
        anyhow::bail!("the terms must be accepted (pass --accept-terms)");
    }

    let replacing = ctrl.form.already_submitted;
    ctrl.submit();

    if ctrl.form.show_error_modal {
        ctrl.close_error();
        anyhow::bail!("submission failed, please try again");
    }

    ctrl.close_success();
    if replacing {
        println!("Submitted successfully (previous response replaced).");
    } else {
        println!("Submitted successfully!");
    }
    Ok(())
}
