use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context as _, anyhow};
use log::info;
use word_align::{AlignmentSession, Operator, SessionOutcome, WordText, filters};

use crate::{
    cli::args::{Args, CliCommand, FilterArgs, SessionArgs},
    config::{Config, default_config_path, session_config::SessionConfig},
    consts::MODIFIED_FILE_PREFIX,
    errors::{PowerEditError, filter_error, init_error, job_error, session_error},
    job::{EditingJob, JobStore, side::Side},
    terminal::{TerminalOperator, clear_screen},
};

/// Where a session stopped and whether anything had to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    pub edit_index: usize,
    pub source_index: usize,
}

pub fn run(args: Args) -> Result<(), PowerEditError> {
    match args.command {
        CliCommand::New {
            edit,
            source,
            session,
        } => {
            let (config, store) = open_store(args.config)?;
            let mut job = store.create(&edit, &source).map_err(job_error)?;
            run_interactive_session(&mut job, &store, &config.session, &session)
        }
        CliCommand::Resume { job, session } => {
            let (config, store) = open_store(args.config)?;
            let mut job = store.load(&job).map_err(job_error)?;
            run_interactive_session(&mut job, &store, &config.session, &session)
        }
        CliCommand::Jobs => {
            let (_, store) = open_store(args.config)?;
            print_jobs(&store, &mut io::stdout().lock())
        }
        CliCommand::PlainQuotes(target) => apply_filter(&target, filters::plain_quotes),
        CliCommand::CurlyQuotes(target) => apply_filter(&target, filters::curly_quotes),
        CliCommand::TidyPunctuation(target) => {
            apply_filter(&target, filters::remove_space_before_punctuation)
        }
    }
}

fn open_store(config_path: Option<PathBuf>) -> Result<(Config, JobStore), PowerEditError> {
    let config_path = config_path.unwrap_or_else(default_config_path);
    let config = Config::read_or_create(&config_path).map_err(init_error)?;
    let store = JobStore::open(config.storage.clone()).map_err(init_error)?;

    Ok((config, store))
}

fn run_interactive_session(
    job: &mut EditingJob,
    store: &JobStore,
    settings: &SessionConfig,
    session: &SessionArgs,
) -> Result<(), PowerEditError> {
    let mut operator = TerminalOperator::new(
        io::stdin().lock(),
        io::stdout(),
        display_name(job.latest_file(Side::Edit)),
        display_name(job.latest_file(Side::Source)),
    );
    if session.keep_screen {
        operator = operator.without_clearing();
    }

    let report = reconcile_job(job, store, settings, session, &mut operator)?;

    let mut stdout = operator.into_output();
    print_report(&report, session.keep_screen, &mut stdout)
        .context("Failed to print the session report")
        .map_err(session_error)
}

/// Runs one session over the latest editions of a job and saves its result.
pub fn reconcile_job(
    job: &mut EditingJob,
    store: &JobStore,
    settings: &SessionConfig,
    session: &SessionArgs,
    operator: &mut impl Operator,
) -> Result<SessionReport, PowerEditError> {
    let edit_index = session.edit_index.unwrap_or(job.last_editing_index);
    let source_index = session.source_index.unwrap_or(job.last_source_index);
    let normalizer = session.normalizer.unwrap_or(settings.normalizer);

    let edit = WordText::from_file(&job.latest_edit_file)
        .context("Error getting edit words")
        .map_err(session_error)?;
    let source = WordText::from_file(&job.latest_source_file)
        .context("Error getting source words")
        .map_err(session_error)?;

    info!(
        "Reconciling '{}' from [{edit_index}, {source_index}] comparing {normalizer} words",
        job.name
    );
    let mut alignment = AlignmentSession::new(edit, source)
        .starting_at(edit_index, source_index)
        .with_builtin_normalizer(normalizer)
        .with_context_radius(settings.context_radius);

    let outcome = alignment
        .run(operator)
        .context("Session aborted")
        .map_err(session_error)?;

    let report = SessionReport {
        outcome,
        edit_index: alignment.edit_index(),
        source_index: alignment.source_index(),
    };

    if let SessionOutcome::Saved {
        edit_index,
        source_index,
    } = outcome
    {
        let (edit, source) = alignment.into_documents();
        store.save_edition(job, &edit.text(), &source.text(), edit_index, source_index)?;
    }

    Ok(report)
}

/// Quitting without saving prints nothing and clears the screen, unless the
/// screen is to be kept.
pub fn print_report(
    report: &SessionReport,
    keep_screen: bool,
    output: &mut impl Write,
) -> io::Result<()> {
    match report.outcome {
        SessionOutcome::Discarded if keep_screen => return Ok(()),
        SessionOutcome::Discarded => return clear_screen(output),
        SessionOutcome::Identical => writeln!(output, "Files are identical.")?,
        SessionOutcome::Saved { .. } => {
            writeln!(output, "Files have been updated based on user choices.")?;
        }
    }

    write!(
        output,
        "\n\nleft at indexes [i = {}] [j = {}]\n\n",
        report.edit_index, report.source_index
    )
}

fn print_jobs(store: &JobStore, output: &mut impl Write) -> Result<(), PowerEditError> {
    let names = store.list().map_err(job_error)?;

    write_jobs(&names, output)
        .context("Failed to print the jobs")
        .map_err(job_error)
}

fn write_jobs(names: &[String], output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "All available jobs:\n")?;
    for name in names {
        writeln!(output, "\t{name}")?;
    }
    Ok(())
}

/// Runs a whole-text filter over a file, writing the result next to it
/// unless asked to overwrite it.
pub fn apply_filter(target: &FilterArgs, filter: fn(&str) -> String) -> Result<(), PowerEditError> {
    let text = fs::read_to_string(&target.file)
        .with_context(|| format!("Failed to read {}", target.file.display()))
        .map_err(filter_error)?;

    let destination = if target.in_place {
        target.file.clone()
    } else {
        modified_copy_path(&target.file).map_err(filter_error)?
    };

    fs::write(&destination, filter(&text))
        .with_context(|| format!("Failed to write {}", destination.display()))
        .map_err(filter_error)?;

    info!("Wrote filtered text to '{}'", destination.display());
    Ok(())
}

fn modified_copy_path(path: &Path) -> anyhow::Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| anyhow!("{} is not a file", path.display()))?;

    Ok(path.with_file_name(format!("{MODIFIED_FILE_PREFIX}{}", name.to_string_lossy())))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
