//! release-readme
//!
//! Regenerates the release index README from the metadata file in each
//! release folder. Run with no arguments from the repository root to rewrite
//! `releases/README.md`.

mod cli_config;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use release_readme::writer::{self, WriteOutcome};
use tracing_subscriber::EnvFilter;

use cli_config::ResolvedPaths;

/// Exit code when `--check` finds a stale README.
const EXIT_STALE: u8 = 1;

/// Exit code for I/O and metadata errors.
const EXIT_FAILURE: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "release-readme", version, about, styles = output::clap_styles())]
struct Cli {
    /// Directory containing one subdirectory per release
    #[arg(short = 'd', long, env = "RELEASE_README_DIR", value_name = "DIR")]
    releases_dir: Option<PathBuf>,

    /// File to write [default: <releases-dir>/README.md]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Compare the rendered README with the existing file and exit 1 if it is stale
    #[arg(long, conflicts_with = "stdout")]
    check: bool,

    /// Print the rendered README instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        output::error(format!("Invalid log filter: {e}"));
        return ExitCode::from(EXIT_FAILURE);
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            output::error(format!("{e:#}"));
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("release_readme={level}").parse()?),
        )
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = cli_config::load_cli_config(&std::env::current_dir()?);
    let ResolvedPaths {
        releases_dir,
        output: output_path,
    } = config.resolve(cli.releases_dir, cli.output);
    tracing::debug!(?releases_dir, ?output_path, "Resolved paths");

    let table = release_readme::build_table(&releases_dir)?;
    let document = writer::render_document(table.lines());

    if cli.stdout {
        output::document(&document);
        return Ok(ExitCode::SUCCESS);
    }

    if cli.check {
        if writer::is_up_to_date(&output_path, &document)? {
            output::success(format!("{} is up to date", output_path.display()));
            return Ok(ExitCode::SUCCESS);
        }
        output::warning(format!("{} is out of date", output_path.display()));
        output::hint("Run `release-readme` to regenerate it.");
        return Ok(ExitCode::from(EXIT_STALE));
    }

    let outcome = writer::write_document(&output_path, &document)?;
    let verb = match outcome {
        WriteOutcome::Created => "Created",
        WriteOutcome::Updated => "Updated",
        WriteOutcome::Unchanged => "Unchanged",
    };
    output::success(format!(
        "{verb} {} ({} releases)",
        output_path.display(),
        table.len()
    ));
    Ok(ExitCode::SUCCESS)
}
