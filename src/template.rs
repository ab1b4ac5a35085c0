//! Template files: the numbered schedule for one `(N, K, W)` triple.
//!
//! ```text
//! Week 1
//! 0,5,9,13
//! 2,7,11,14
//! Week 2
//! ...
//! ```
use crate::error::{CfResult, ScheduleError};
use crate::schedule::{Quad, Schedule};
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const WEEK_PREFIX: &str = "Week ";

/// `<N>-<K>-<W>.csv`
pub fn template_file_name(n: usize, k: usize, w: usize) -> String {
    format!("{}-{}-{}.csv", n, k, w)
}

/// Recovers `(N, K, W)` from a template file name.
pub fn parse_template_name(name: &str) -> Option<(usize, usize, usize)> {
    let stem = name.strip_suffix(".csv")?;
    let mut parts = stem.split('-').map(|p| p.parse::<usize>().ok());
    let triple = (parts.next()??, parts.next()??, parts.next()??);
    if parts.next().is_some() {
        return None;
    }
    Some(triple)
}

pub fn write_template<W: Write>(writer: W, schedule: &Schedule) -> CfResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for (i, week) in schedule.weeks.iter().enumerate() {
        wtr.write_record([format!("{}{}", WEEK_PREFIX, i + 1)])?;
        for quad in week {
            wtr.write_record(quad.iter().map(|p| p.to_string()))?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `schedule` to `<dir>/<N>-<K>-<W>.csv`, creating `dir` if needed.
pub fn save_template(
    dir: &Path,
    n: usize,
    k: usize,
    w: usize,
    schedule: &Schedule,
) -> CfResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(template_file_name(n, k, w));
    let file = File::create(&path)?;
    write_template(BufWriter::new(file), schedule)?;
    debug!("Wrote template {}", path.display());
    Ok(path)
}

/// Parses template text. Rows before the first week header, rows that are
/// not four integers, and headers out of sequence are rejected. The result
/// is checked against `n` players, or against the highest id seen when `n`
/// is `None`.
pub fn read_template<R: Read>(reader: R, n: Option<usize>) -> CfResult<Schedule> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut schedule = Schedule::default();

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = result?;
        let line = row_idx + 1;

        if rec.len() == 1 && rec[0].starts_with(WEEK_PREFIX) {
            let num: usize = rec[0][WEEK_PREFIX.len()..].trim().parse().map_err(|_| {
                ScheduleError::Template(format!("Row {}: bad week header '{}'", line, &rec[0]))
            })?;
            if num != schedule.weeks.len() + 1 {
                return Err(ScheduleError::Template(format!(
                    "Row {}: expected Week {}, found Week {}",
                    line,
                    schedule.weeks.len() + 1,
                    num
                )));
            }
            schedule.weeks.push(Vec::new());
            continue;
        }

        let week = schedule.weeks.last_mut().ok_or_else(|| {
            ScheduleError::Template(format!("Row {}: court listed before any week header", line))
        })?;

        if rec.len() != 4 {
            return Err(ScheduleError::Template(format!(
                "Row {}: expected 4 players, found {}",
                line,
                rec.len()
            )));
        }

        let mut quad: Quad = [0; 4];
        for (slot, field) in quad.iter_mut().zip(rec.iter()) {
            *slot = field.parse().map_err(|_| {
                ScheduleError::Template(format!("Row {}: '{}' is not a player number", line, field))
            })?;
        }
        week.push(quad);
    }

    let n = n.unwrap_or_else(|| schedule.player_span());
    schedule.validate(n)?;
    Ok(schedule)
}

/// Reads a template file. When the file name follows `<N>-<K>-<W>.csv`,
/// the schedule is checked against that player count and shape.
pub fn load_template(path: &Path) -> CfResult<Schedule> {
    let triple = path
        .file_name()
        .and_then(|f| f.to_str())
        .and_then(parse_template_name);

    let file = File::open(path)?;
    let schedule = read_template(file, triple.map(|(n, _, _)| n))?;

    if let Some((_, k, w)) = triple {
        let courts = schedule.weeks.first().map(Vec::len).unwrap_or(0);
        if schedule.num_weeks() != w || courts * 4 != k {
            return Err(ScheduleError::Template(format!(
                "{} holds {} weeks of {} courts, name says {} weeks of {} players",
                path.display(),
                schedule.num_weeks(),
                courts,
                w,
                k
            )));
        }
    }
    Ok(schedule)
}
