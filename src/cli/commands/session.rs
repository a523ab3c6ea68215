//! Session commands (`p`, `s`, `l`).

use std::io::Write;

use chrono::{NaiveDate, NaiveTime};
use tracing::info;

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::PomoError;
use crate::features::focus::{
    Clock, Countdown, JournalStore, Progress, SessionKind, SessionRecord, SessionRunner,
    SystemClock,
};
use crate::output::{
    format_countdown, format_countdown_start, format_finished, format_started, format_today,
    to_json, JournalEntry,
};

/// Run a default-length session of `kind` and record it in today's journal.
///
/// With JSON output the countdown is drawn on stderr and the recorded entry
/// is returned for stdout.
///
/// # Errors
///
/// Returns an error if the countdown cannot be drawn or the journal cannot
/// be updated.
pub fn session(kind: SessionKind, paths: &Paths, format: OutputFormat) -> Result<String, PomoError> {
    let runner = SessionRunner::new(SystemClock);
    let store = JournalStore::new(paths);
    let seconds = kind.default_seconds();

    match format {
        OutputFormat::Pretty => {
            run_session(&runner, &store, kind, seconds, std::io::stdout().lock())?;
            Ok(String::new())
        }
        OutputFormat::Json => {
            let (date, record) =
                run_session(&runner, &store, kind, seconds, std::io::stderr().lock())?;
            to_json(&JournalEntry {
                date,
                record: &record,
            })
        }
    }
}

/// Run a session, drawing it to `out`, then append it to the journal.
///
/// The journal day is the date the session started on. Nothing is appended
/// unless the countdown reaches zero.
///
/// # Errors
///
/// Returns an error if `duration_seconds` is not positive, `out` fails, or
/// the journal cannot be updated.
pub fn run_session<C: Clock, W: Write>(
    runner: &SessionRunner<C>,
    store: &JournalStore,
    kind: SessionKind,
    duration_seconds: i64,
    mut out: W,
) -> Result<(NaiveDate, SessionRecord), PomoError> {
    let today = runner.clock().now().date();
    writeln!(out, "{}", format_today(today))?;

    let mut progress = TerminalProgress {
        out: &mut out,
        total_seconds: duration_seconds,
    };
    let record = runner.start(kind, duration_seconds, &mut progress)?;

    writeln!(out)?;
    writeln!(out, "{}", format_finished(kind, record.end))?;

    store.append(today, &record)?;
    info!(%today, %kind, "session recorded");

    Ok((today, record))
}

/// Draws the countdown on one terminal line.
struct TerminalProgress<W: Write> {
    out: W,
    total_seconds: i64,
}

impl<W: Write> Progress for TerminalProgress<W> {
    fn started(&mut self, kind: SessionKind, at: NaiveTime) -> std::io::Result<()> {
        writeln!(self.out, "{}", format_started(kind, at))?;
        write!(self.out, "{}\r", format_countdown_start(self.total_seconds))?;
        self.out.flush()
    }

    fn tick(&mut self, countdown: &Countdown) -> std::io::Result<()> {
        write!(self.out, "{}\r", format_countdown(countdown))?;
        self.out.flush()
    }
}
