mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quizflow", about = "Single-question quiz submission client", version)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Directory holding the .quizflow data directory
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current form state, pre-filled from any prior submission
    Show,

    /// Submit (or resubmit) an answer
    Submit {
        /// The selected answer
        #[arg(short, long)]
        answer: String,

        /// Full name of the respondent
        #[arg(short, long)]
        name: String,

        /// Accept the terms and conditions
        #[arg(long)]
        accept_terms: bool,
    },

    /// Print the anonymous principal identifier for this data directory
    Whoami,

    /// Print the terms and conditions
    Terms,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show => commands::show::run(&cli.data_dir, cli.json),
        Commands::Submit {
            answer,
            name,
            accept_terms,
        } => commands::submit::run(&cli.data_dir, answer, name, accept_terms),
        Commands::Whoami => commands::whoami::run(&cli.data_dir),
        Commands::Terms => commands::terms::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
