use std::io::{IsTerminal, Write};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::attack::AttackDispatcher;
use crate::metrics::{StatsSnapshot, format_elapsed, format_milli, format_x100};
use crate::shutdown_handlers::ShutdownSender;

const ELAPSED_TICK: Duration = Duration::from_secs(1);
const RATE_TICK: Duration = Duration::from_millis(500);
const BAR_WIDTH: u64 = 24;

/// Polls the dispatcher's stats and redraws one progress line on stderr.
/// Does nothing when stderr is not a terminal.
pub(crate) fn setup_progress_reporter(
    dispatcher: Arc<AttackDispatcher>,
    planned: u64,
    shutdown_tx: &ShutdownSender,
) -> tokio::task::JoinHandle<()> {
    let mut shutdown_rx = shutdown_tx.subscribe();

    tokio::spawn(async move {
        if !std::io::stderr().is_terminal() {
            return;
        }

        let mut elapsed_ticker = tokio::time::interval(ELAPSED_TICK);
        let mut rate_ticker = tokio::time::interval(RATE_TICK);
        let mut elapsed_text = format_elapsed(Duration::ZERO);

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    let snapshot = dispatcher.stats().snapshot();
                    let elapsed = format_elapsed(snapshot.elapsed());
                    if render_progress_line(&build_progress_line(&snapshot, planned, &elapsed)).is_err() {
                        break;
                    }
                    if finish_progress_line().is_err() {
                        break;
                    }
                    break;
                }
                _ = elapsed_ticker.tick() => {
                    elapsed_text = format_elapsed(dispatcher.stats().elapsed());
                }
                _ = rate_ticker.tick() => {
                    let snapshot = dispatcher.stats().snapshot();
                    if render_progress_line(&build_progress_line(&snapshot, planned, &elapsed_text)).is_err() {
                        break;
                    }
                }
            }
        }
    })
}

fn render_progress_line(line: &[ProgressSegment]) -> Result<(), std::io::Error> {
    let mut out = std::io::stderr();
    queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    for segment in line {
        if let Some(color) = segment.color {
            queue!(
                out,
                SetForegroundColor(color),
                Print(&segment.text),
                ResetColor
            )?;
        } else {
            queue!(out, Print(&segment.text))?;
        }
    }
    out.flush()?;
    Ok(())
}

fn finish_progress_line() -> Result<(), std::io::Error> {
    let mut out = std::io::stderr();
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

pub(crate) fn build_progress_line(
    snapshot: &StatsSnapshot,
    planned: u64,
    elapsed_text: &str,
) -> Vec<ProgressSegment> {
    let goal = planned.max(1);
    let current = snapshot.requests_sent.min(goal);
    let complete = current
        .saturating_mul(BAR_WIDTH)
        .checked_div(goal)
        .unwrap_or(0)
        .min(BAR_WIDTH);
    let bar = format!(
        "[{}{}]",
        "#".repeat(usize::try_from(complete).unwrap_or(0)),
        "-".repeat(usize::try_from(BAR_WIDTH.saturating_sub(complete)).unwrap_or(0))
    );
    let rate = snapshot
        .current_rate_milli
        .map_or_else(|| "-".to_owned(), format_milli);

    vec![
        ProgressSegment::plain(bar),
        ProgressSegment::colored(
            format!(" {}/{} ", snapshot.requests_sent, planned),
            Color::Cyan,
        ),
        ProgressSegment::plain(format!("| {} | ", elapsed_text)),
        ProgressSegment::colored(format!("ok {} ", snapshot.successful), Color::Green),
        ProgressSegment::plain(format!(
            "3xx {} 1xx {} ",
            snapshot.redirected, snapshot.info
        )),
        ProgressSegment::colored(
            format!(
                "fail {} 5xx {} timeout {} ",
                snapshot.failed, snapshot.server_error, snapshot.timed_out
            ),
            Color::Red,
        ),
        ProgressSegment::colored(
            format!(
                "| {}% | {} req/s",
                format_x100(snapshot.success_rate_x100),
                rate
            ),
            Color::Yellow,
        ),
    ]
}

pub(crate) struct ProgressSegment {
    pub(crate) text: String,
    color: Option<Color>,
}

impl ProgressSegment {
    const fn plain(text: String) -> Self {
        Self { text, color: None }
    }

    const fn colored(text: String, color: Color) -> Self {
        Self {
            text,
            color: Some(color),
        }
    }
}
