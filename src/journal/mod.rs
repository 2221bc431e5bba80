//! Entry-log analysis
//!
//! Computes the maximum number of people simultaneously inside a building
//! from a journal of entry/exit times, and the longest time interval during
//! which that maximum held (earliest interval on ties).
//!
//! Journal format: a first line with the record count, then one `"H1:M1 H2:M2"`
//! line per visit. All times are minutes from midnight internally.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Upper bound on the number of journal records
pub const MAX_RECORDS: usize = 10_000;

/// One visit: entry and exit time, in minutes from midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub enter: u32,
    pub leave: u32,
}

/// Kind of a sweep event. Entries sort before exits at the same time so that
/// back-to-back visits count as overlapping on the boundary minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    Enter,
    Leave,
}

#[derive(Debug, Clone, Copy)]
struct Event {
    minutes: u32,
    kind: EventKind,
}

/// Result of the sweep: peak occupancy and the interval it was held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peak {
    pub people: u32,
    /// Start of the longest peak interval, minutes from midnight
    pub start: u32,
    /// End of the longest peak interval, minutes from midnight
    pub end: u32,
}

/// Parse the journal text into visits.
///
/// The first line carries the record count; it must not exceed
/// [`MAX_RECORDS`]. Times are unsigned `H:M` pairs with no range check on
/// hours or minutes.
pub fn parse_journal(input: &str) -> Result<Vec<Visit>> {
    let mut lines = input.lines();

    let count_line = lines.next().context("journal is empty")?;
    let count: usize = count_line
        .trim()
        .parse()
        .with_context(|| format!("invalid record count '{}'", count_line.trim()))?;
    if count > MAX_RECORDS {
        bail!("record count {} exceeds the maximum of {}", count, MAX_RECORDS);
    }

    let mut visits = Vec::with_capacity(count);
    for i in 0..count {
        let line = lines
            .next()
            .with_context(|| format!("journal ends after {} of {} records", i, count))?;
        visits.push(parse_visit(line).with_context(|| format!("record {}: '{}'", i + 1, line))?);
    }

    Ok(visits)
}

fn parse_visit(line: &str) -> Result<Visit> {
    let mut fields = line.split_whitespace();
    let enter = fields.next().context("missing entry time")?;
    let leave = fields.next().context("missing exit time")?;
    if fields.next().is_some() {
        bail!("trailing data after exit time");
    }

    Ok(Visit {
        enter: parse_time(enter)?,
        leave: parse_time(leave)?,
    })
}

fn parse_time(text: &str) -> Result<u32> {
    let (hours, minutes) = text
        .split_once(':')
        .with_context(|| format!("time '{}' is not in H:M form", text))?;
    let hours: u32 = hours
        .parse()
        .with_context(|| format!("invalid hours in '{}'", text))?;
    let minutes: u32 = minutes
        .parse()
        .with_context(|| format!("invalid minutes in '{}'", text))?;
    Ok(hours * 60 + minutes)
}

/// Sweep over all entry/exit events and find the peak occupancy together
/// with the longest interval at that occupancy.
///
/// When a new occupancy maximum appears, interval bookkeeping for the old
/// maximum is discarded. A drop from the maximum closes the current peak
/// period; it replaces the best one only if strictly longer, so ties keep
/// the earliest interval. A climb back to the maximum opens a new period.
pub fn busiest_interval(visits: &[Visit]) -> Peak {
    let mut events = Vec::with_capacity(visits.len() * 2);
    for v in visits {
        events.push(Event {
            minutes: v.enter,
            kind: EventKind::Enter,
        });
        events.push(Event {
            minutes: v.leave,
            kind: EventKind::Leave,
        });
    }
    events.sort_by_key(|e| (e.minutes, e.kind));

    // Signed counter: a journal with an exit before its entry must not
    // underflow, it just dips below zero
    let mut current: i32 = 0;
    let mut max: i32 = 0;

    let mut period_start: u32 = 0;
    let mut best_duration: i64 = -1;
    let mut best_start: u32 = 0;
    let mut best_end: u32 = 0;

    for event in &events {
        let prev = current;
        let time = event.minutes;

        match event.kind {
            EventKind::Enter => current += 1,
            EventKind::Leave => current -= 1,
        }

        if current > max {
            // New maximum; previous intervals no longer matter
            max = current;
            period_start = time;
            best_duration = -1;
        } else if prev == max && current < max {
            // Peak period just ended
            let duration = i64::from(time) - i64::from(period_start);
            if duration > best_duration {
                best_duration = duration;
                best_start = period_start;
                best_end = time;
            }
        } else if prev < max && current == max {
            // Back at the maximum; a new peak period starts
            period_start = time;
        }
    }

    Peak {
        people: max as u32,
        start: best_start,
        end: best_end,
    }
}

/// Render minutes from midnight as `HH:MM`
pub fn format_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Render the sweep result as the two-line report
pub fn format_peak(peak: &Peak) -> String {
    format!(
        "{}\n{} {}\n",
        peak.people,
        format_time(peak.start),
        format_time(peak.end)
    )
}

/// Read a journal file, analyze it, and write the report
pub fn process_file(input: &Path, output: &Path) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read journal '{}'", input.display()))?;
    let visits = parse_journal(&text)?;
    log::debug!("parsed {} visits from '{}'", visits.len(), input.display());

    let peak = busiest_interval(&visits);
    fs::write(output, format_peak(&peak))
        .with_context(|| format!("failed to write report '{}'", output.display()))?;
    Ok(())
}
