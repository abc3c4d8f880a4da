//! Parsers for the colon-delimited events and stats text formats.
//!
//! Events:
//! ```text
//! 3
//! Logins:D:0::2
//! Time online:C:0:1440:3
//! Emails sent:D:0::1
//! ```
//!
//! Stats:
//! ```text
//! 3
//! Logins:4:1.5
//! Time online:150.5:25.5
//! Emails sent:10:3
//! ```
//!
//! The first line is the declared row count. The parsers only tokenize;
//! count checks and semantic validation belong to `EventCatalog::from_rows`
//! and `BaselineLoader::load`.

use crate::baseline::StatsRow;
use crate::catalog::EventRow;
use crate::error::{SimError, SimResult};

/// Parse an events file into its declared count and rows.
pub fn parse_events(text: &str) -> SimResult<(usize, Vec<EventRow>)> {
    let (declared, lines) = split_body(text)?;
    let rows = lines
        .into_iter()
        .map(|(line_no, line)| parse_event_line(line_no, line))
        .collect::<SimResult<Vec<_>>>()?;
    Ok((declared, rows))
}

/// Parse a stats file into its declared count and rows.
pub fn parse_stats(text: &str) -> SimResult<(usize, Vec<StatsRow>)> {
    let (declared, lines) = split_body(text)?;
    let rows = lines
        .into_iter()
        .map(|(line_no, line)| parse_stats_line(line_no, line))
        .collect::<SimResult<Vec<_>>>()?;
    Ok((declared, rows))
}

// ── Private helpers ─────────────────────────────────────────────────────

/// Split off the count header and return the numbered body lines, with
/// trailing blank lines removed.
fn split_body(text: &str) -> SimResult<(usize, Vec<(usize, &str)>)> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

    let (_, header) = lines
        .next()
        .ok_or_else(|| SimError::Format("input is empty; expected an event count".into()))?;
    let declared = header.parse::<usize>().map_err(|_| {
        SimError::Format(format!("line 1: expected an event count, found '{}'", header))
    })?;

    let mut body: Vec<(usize, &str)> = lines.collect();
    while body.last().is_some_and(|(_, l)| l.is_empty()) {
        body.pop();
    }
    if let Some((line_no, _)) = body.iter().find(|(_, l)| l.is_empty()) {
        return Err(SimError::Format(format!("line {}: unexpected blank line", line_no)));
    }

    Ok((declared, body))
}

fn fields<'a>(line_no: usize, line: &'a str, expected: usize) -> SimResult<Vec<&'a str>> {
    let parts: Vec<&str> = line.split(':').map(str::trim).collect();
    if parts.len() != expected {
        return Err(SimError::Format(format!(
            "line {}: expected {} ':'-separated fields, found {}",
            line_no,
            expected,
            parts.len()
        )));
    }
    Ok(parts)
}

fn parse_real(line_no: usize, field: &str, what: &str) -> SimResult<f64> {
    let value = field.parse::<f64>().map_err(|_| {
        SimError::Format(format!("line {}: {} '{}' is not a number", line_no, what, field))
    })?;
    if !value.is_finite() {
        return Err(SimError::Format(format!(
            "line {}: {} '{}' is not a finite number",
            line_no, what, field
        )));
    }
    Ok(value)
}

fn parse_bound(line_no: usize, field: &str, what: &str) -> SimResult<Option<f64>> {
    if field.is_empty() {
        Ok(None)
    } else {
        parse_real(line_no, field, what).map(Some)
    }
}

fn parse_event_line(line_no: usize, line: &str) -> SimResult<EventRow> {
    let f = fields(line_no, line, 5)?;
    let weight = f[4].parse::<i64>().map_err(|_| {
        SimError::Format(format!(
            "line {}: weight '{}' is not an integer",
            line_no, f[4]
        ))
    })?;

    Ok(EventRow::new(
        f[0],
        f[1],
        parse_bound(line_no, f[2], "minimum")?,
        parse_bound(line_no, f[3], "maximum")?,
        weight,
    ))
}

fn parse_stats_line(line_no: usize, line: &str) -> SimResult<StatsRow> {
    let f = fields(line_no, line, 3)?;
    Ok(StatsRow::new(
        f[0],
        parse_real(line_no, f[1], "mean")?,
        parse_real(line_no, f[2], "standard deviation")?,
    ))
}
