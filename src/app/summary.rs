use serde::Serialize;

use crate::args::OutputFormat;
use crate::attack::RunReport;
use crate::error::{AppResult, MetricsError};
use crate::metrics::{
    LatencyHistogram, average_rate_milli, format_bytes_compact, format_elapsed, format_milli,
    format_x100,
};
use crate::template::Template;

/// One line of run history: what was hit, how hard, and how it went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRecord {
    pub date: String,
    pub target: String,
    pub requests: u64,
    pub success_rate: String,
    pub duration: String,
}

/// End-of-run report, printed as text or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub template: String,
    pub method: &'static str,
    pub url: String,
    pub state: &'static str,
    pub duration: String,
    pub duration_ms: u64,
    pub requests_planned: u64,
    pub requests_sent: u64,
    pub successful: u64,
    pub failed: u64,
    pub redirected: u64,
    pub info: u64,
    pub server_error: u64,
    pub timed_out: u64,
    pub success_rate: String,
    pub average_rate: String,
    pub p50_ms: u64,
    pub p90_ms: u64,
    pub p99_ms: u64,
    pub max_ms: u64,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub workers: usize,
    pub abandoned_workers: usize,
    pub history: HistoryRecord,
}

/// # Errors
///
/// Returns an error if the latency histogram cannot be built.
pub(crate) fn build_summary(
    template: &Template,
    report: &RunReport,
    test: bool,
) -> Result<RunSummary, MetricsError> {
    let snapshot = report.stats.snapshot();
    let histogram = LatencyHistogram::from_samples(&report.stats.response_times_ms())?;
    let (p50_ms, p90_ms, p99_ms) = histogram.percentiles();
    let duration = format_elapsed(snapshot.elapsed());
    let success_rate = format_x100(snapshot.success_rate_x100);
    let requests_planned = if test { 1 } else { template.config.request_count };

    Ok(RunSummary {
        template: template.name.clone(),
        method: template.request_data.method.as_str(),
        url: template.request_data.url.clone(),
        state: report.state.as_str(),
        duration: duration.clone(),
        duration_ms: snapshot.elapsed_ms,
        requests_planned,
        requests_sent: snapshot.requests_sent,
        successful: snapshot.successful,
        failed: snapshot.failed,
        redirected: snapshot.redirected,
        info: snapshot.info,
        server_error: snapshot.server_error,
        timed_out: snapshot.timed_out,
        success_rate: success_rate.clone(),
        average_rate: format_milli(average_rate_milli(
            snapshot.requests_sent,
            snapshot.elapsed(),
        )),
        p50_ms,
        p90_ms,
        p99_ms,
        max_ms: histogram.max(),
        bytes_sent: snapshot.bytes_sent,
        bytes_received: snapshot.bytes_received,
        workers: report.workers,
        abandoned_workers: report.abandoned,
        history: HistoryRecord {
            date: snapshot.started_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            target: template.request_data.url.clone(),
            requests: snapshot.requests_sent,
            success_rate,
            duration,
        },
    })
}

pub(crate) fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![
        format!("Template: {}", summary.template),
        format!("Target: {} {}", summary.method, summary.url),
        format!("Run: {}", summary.state),
        format!("Duration: {}", summary.duration),
        format!(
            "Requests Sent: {}/{}",
            summary.requests_sent, summary.requests_planned
        ),
        format!(
            "Successful: {} ({}%)",
            summary.successful, summary.success_rate
        ),
        format!("Failed: {}", summary.failed),
        format!("Redirected: {}", summary.redirected),
        format!("Informational: {}", summary.info),
        format!("Server Errors: {}", summary.server_error),
        format!("Timeouts: {}", summary.timed_out),
        format!("Avg Rate: {} req/s", summary.average_rate),
        format!(
            "Response Time p50/p90/p99/max: {}ms / {}ms / {}ms / {}ms",
            summary.p50_ms, summary.p90_ms, summary.p99_ms, summary.max_ms
        ),
        format!(
            "Bytes Sent/Received: {} / {}",
            format_bytes_compact(summary.bytes_sent),
            format_bytes_compact(summary.bytes_received)
        ),
    ];
    if summary.abandoned_workers > 0 {
        lines.push(format!(
            "Abandoned Workers: {}/{}",
            summary.abandoned_workers, summary.workers
        ));
    }
    lines
}

/// # Errors
///
/// Returns an error when JSON serialization fails.
pub(crate) fn print_summary(summary: &RunSummary, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Text => {
            for line in summary_lines(summary) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }
    }
    Ok(())
}
