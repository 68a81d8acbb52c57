use anyhow::{Context, Result};
use quizflow_core::{IdentityProvider, QuizController, SubmissionRecord, SubmissionStore};
use quizflow_store::LocalBackend;
use std::path::Path;

pub fn run(data_dir: &Path, json: bool) -> Result<()> {
    let backend =
        LocalBackend::open_or_create(data_dir).context("could not open the data directory")?;
    let mut ctrl = QuizController::new(&backend.identity, &backend.submissions);
    ctrl.initialize();

    // The form keeps only answer and name; fetch the record again for the
    // submitted-at line. A failed fetch just omits it, matching the silent
    // initialize path.
    let record = prior_record(&backend);

    if json {
        let form = &ctrl.form;
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "selected_answer": form.selected_answer,
                "full_name": form.full_name,
                "already_submitted": form.already_submitted,
                "submitted_at": record.as_ref().map(|r| r.timestamp.to_rfc3339()),
            }))?
        );
        return Ok(());
    }

    if ctrl.form.already_submitted {
        println!("You already submitted a response:");
        println!(
            "  Answer:    {}",
            ctrl.form.selected_answer.as_deref().unwrap_or("")
        );
        println!("  Name:      {}", ctrl.form.full_name);
        if let Some(rec) = &record {
            println!(
                "  Submitted: {}",
                rec.timestamp.format("%Y-%m-%d %H:%M:%S %Z")
            );
        }
        println!();
        println!("Submitting again will replace it.");
    } else {
        println!("No submission yet.");
        println!("Use 'quizflow submit --answer <A> --name <N> --accept-terms' to respond.");
    }

    Ok(())
}

fn prior_record(backend: &LocalBackend) -> Option<SubmissionRecord> {
    let principal = backend.identity.get_or_create_principal().ok()?;
    backend.submissions.get(&principal).ok().flatten()
}
