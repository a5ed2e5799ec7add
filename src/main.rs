use clap::{Parser, Subcommand};
use std::path::PathBuf;

use quizdeck::progress::ProgressStore;
use quizdeck::session::QuizSession;

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 1;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive quiz (default if no subcommand)
    Run,
    /// Print current stats and the answered-only review
    Stats,
    /// Print the full review, unanswered questions included
    Review,
    /// Clear saved progress
    Reset,
}

#[derive(Parser, Debug)]
#[command(name = "quizdeck")]
#[command(about = "Terminal multiple-choice quiz runner", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a questions file (defaults to ~/.config/quizdeck/questions.yaml,
    /// falling back to the built-in sample set)
    #[arg(short, long, global = true)]
    questions: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Run);

    let bank_path = cli.questions.clone().map(PathBuf::from);
    let bank = match quizdeck::bank::load_bank(bank_path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Questions error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate the bank at startup, listing every problem at once
    if let Err(errors) = quizdeck::bank::validate_bank(&bank) {
        eprintln!("Question bank errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!("Loaded {} questions", bank.len());
    }

    let store = ProgressStore::default_paths();
    let mut session = QuizSession::new(bank, store);

    if cli.verbose && session.stats().answered > 0 {
        eprintln!("Resumed {} saved answers", session.stats().answered);
    }

    match command {
        Commands::Run => {
            let theme = quizdeck::tui::ThemeColors::for_theme(quizdeck::tui::resolve_theme());
            let app = quizdeck::tui::App::new(session, bank_label(cli.questions.as_deref()), theme);

            if let Err(e) = quizdeck::tui::run_tui(app).await {
                eprintln!("Terminal error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Stats => {
            let use_colors = quizdeck::output::should_use_colors();
            println!(
                "{}",
                quizdeck::output::format_stats(
                    &session.stats(),
                    session.question_count(),
                    use_colors
                )
            );
            println!();
            println!(
                "{}",
                quizdeck::output::format_quick_review(&session.quick_review(), use_colors)
            );
        }
        Commands::Review => {
            let use_colors = quizdeck::output::should_use_colors();
            println!(
                "{}",
                quizdeck::output::format_full_review(&session.full_review(), use_colors)
            );
        }
        Commands::Reset => {
            if let Err(e) = session.restart() {
                eprintln!("Failed to clear saved progress: {}", e);
                std::process::exit(1);
            }
            println!("Progress cleared.");
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Label shown in the TUI title bar for where the questions came from
fn bank_label(questions_flag: Option<&str>) -> String {
    match questions_flag {
        Some(path) => path.to_string(),
        None => {
            let default_path = quizdeck::bank::get_questions_path();
            if default_path.exists() {
                default_path.display().to_string()
            } else {
                "built-in sample set".to_string()
            }
        }
    }
}
