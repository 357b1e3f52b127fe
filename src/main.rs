//! Word Scramble Scorer - CLI
//!
//! Scores word scrambles from the command line, from files or stdin, or interactively.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use scramble_score::{
    commands::{
        BatchConfig, GenerateConfig, analyze_pair, generate_scrambles, run_batch, score_pair,
    },
    output::{print_analysis_result, print_batch_summary, print_generate_result, print_outcome},
    records::loader::{Line, load_from_file, read_records},
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "scramble_score",
    about = "Scores how hard a word scramble is to solve (not, poor, fair or hard)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Worker threads for batch scoring (0 = one per core)
    #[arg(short, long, global = true, default_value = "0")]
    jobs: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Score a single scramble
    Score {
        /// The scrambled letters
        scrambled: String,

        /// The word they were scrambled from
        word: String,
    },

    /// Score records from a file or stdin
    ///
    /// Each line is `SCRAMBLE WORD`, or `SCRAMBLE WORD EXPECTED` to check the
    /// score against an expected label.
    Batch {
        /// Input file (reads stdin when omitted)
        path: Option<PathBuf>,

        /// Print totals after the results
        #[arg(short, long)]
        summary: bool,
    },

    /// Explain how a scramble was scored
    Analyze {
        /// The scrambled letters
        scrambled: String,

        /// The word they were scrambled from
        word: String,
    },

    /// Score random scrambles of a word
    Generate {
        /// The word to scramble
        word: String,

        /// Number of scrambles to draw
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command().map(|()| ExitCode::SUCCESS),
        Commands::Score { scrambled, word } => {
            run_score_command(&scrambled, &word).map(|()| ExitCode::SUCCESS)
        }
        Commands::Batch { path, summary } => run_batch_command(path, summary, cli.jobs),
        Commands::Analyze { scrambled, word } => {
            run_analyze_command(&scrambled, &word).map(|()| ExitCode::SUCCESS)
        }
        Commands::Generate { word, count, seed } => {
            run_generate_command(&word, count, seed).map(|()| ExitCode::SUCCESS)
        }
    }
}

fn run_score_command(scrambled: &str, word: &str) -> Result<()> {
    let result = score_pair(scrambled, word)?;
    println!("{}", result.message);
    Ok(())
}

fn run_batch_command(path: Option<PathBuf>, summary: bool, jobs: usize) -> Result<ExitCode> {
    let lines: Vec<Line> = match &path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read records from {}", path.display()))?,
        None => read_records(io::stdin().lock()).context("Failed to read records from stdin")?,
    };

    let config = BatchConfig::new().with_jobs(jobs);
    let report = run_batch(&lines, config)?;

    for outcome in &report.outcomes {
        print_outcome(outcome);
    }

    if summary {
        print_batch_summary(&report.summary);
    }

    Ok(if report.summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_analyze_command(scrambled: &str, word: &str) -> Result<()> {
    let result = analyze_pair(scrambled, word)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_generate_command(word: &str, count: usize, seed: Option<u64>) -> Result<()> {
    let mut config = GenerateConfig::new(count);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let result = generate_scrambles(word, config)?;
    print_generate_result(&result);
    Ok(())
}

fn run_play_command() -> Result<()> {
    use scramble_score::interactive::{App, run_tui};

    run_tui(App::new())
}
