//! Mirror Backup CLI
//!
//! Replicates source directory trees beneath a destination root,
//! versioning changed files and marking deletions via renames.

mod cli;
mod error;

use std::env;
use std::process::ExitCode;

use clap::CommandFactory;
use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::Result;
use mirror_core::{MirrorEngine, MirrorJob, MirrorOptions};

fn main() -> ExitCode {
    let args: Vec<_> = env::args_os().collect();

    // Bare invocation prints usage and succeeds
    if args.len() <= 1 {
        print!("{}", Cli::command().render_help());
        return ExitCode::SUCCESS;
    }

    let cli = match Cli::try_parse_from(cli::normalize_args(args)) {
        Ok(cli) => cli,
        Err(e)
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprint!("{}", e.render());
            println!("{}", Cli::command().render_usage());
            return ExitCode::from(1);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<()> {
    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!(
            skip_backup = cli.skip_backup,
            skip_hidden = cli.skip_hidden,
            dry_run = cli.dry_run,
            "Verbose mode enabled"
        );
    }

    let sources = cli
        .sources
        .iter()
        .map(|path| cli::strip_trailing_separator(path))
        .collect();
    let options = MirrorOptions {
        skip_backup: cli.skip_backup,
        skip_hidden: cli.skip_hidden,
        dry_run: cli.dry_run,
    };

    let job = MirrorJob::new(&cli.dest, sources);
    let report = MirrorEngine::new(options).execute(&job)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let label = if cli.dry_run { "mirror (dry run)" } else { "mirror" };
        println!(
            "{} {} new, {} updated, {} backed up, {} skipped, {} marked deleted",
            label.green().bold(),
            report.copied,
            report.updated,
            report.backed_up,
            report.skipped,
            report.marked_deleted
        );
    }

    Ok(())
}
