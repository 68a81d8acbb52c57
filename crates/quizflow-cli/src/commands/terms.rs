use anyhow::Result;

const TERMS: &str = "\
Terms and Conditions

1. Your response is stored under an anonymous identifier together with the
   name you provide and the time of submission.
2. Submitting again replaces your previous response; only the most recent
   one is kept.
3. Responses are used solely to tally quiz results.
";

pub fn run() -> Result<()> {
    print!("{}", TERMS);
    Ok(())
}
