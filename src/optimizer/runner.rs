use crate::config::{Config, SearchParams};
use crate::error::CfResult;
use crate::optimizer::initialization::build_schedule_seeded;
use crate::optimizer::{LocalSearch, SearchOptions, StopReason};
use crate::schedule::Schedule;
use crate::scorer::Evaluation;
use crate::template;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// A finished schedule for one `(n, k, w)` triple.
#[derive(Debug, Clone)]
pub struct Generated {
    pub n: usize,
    pub k: usize,
    pub w: usize,
    pub schedule: Schedule,
    pub initial: Evaluation,
    pub evaluation: Evaluation,
    pub iterations: usize,
    pub accepted: usize,
    pub stop: StopReason,
}

/// Construct, then repair.
pub fn generate(n: usize, k: usize, w: usize, params: &SearchParams) -> CfResult<Generated> {
    let schedule = build_schedule_seeded(n, k, w, params.seed)?;
    let initial = crate::scorer::evaluate(&schedule, n);

    let outcome = LocalSearch::new(SearchOptions::from(params)).run(schedule, n);

    info!(
        "({},{},{}) -> ({}, {}) [{} after {} iterations]",
        n,
        k,
        w,
        outcome.evaluation.max_count,
        outcome.evaluation.num_at_max,
        outcome.stop,
        outcome.iterations
    );

    Ok(Generated {
        n,
        k,
        w,
        schedule: outcome.schedule,
        initial,
        evaluation: outcome.evaluation,
        iterations: outcome.iterations,
        accepted: outcome.accepted,
        stop: outcome.stop,
    })
}

#[derive(Debug, Clone)]
pub struct SweepEntry {
    pub n: usize,
    pub k: usize,
    pub w: usize,
    pub evaluation: Evaluation,
    pub stop: StopReason,
    pub path: PathBuf,
}

/// Generates and saves a template for every valid triple in the sweep.
/// Triples run in parallel; the first failure aborts the sweep.
pub fn run_sweep(config: &Config, out_dir: &Path) -> CfResult<Vec<SweepEntry>> {
    let triples = config.sweep.triples();
    info!(
        "Sweeping {} triples into {}",
        triples.len(),
        out_dir.display()
    );

    triples
        .par_iter()
        .map(|&(n, k, w)| {
            sweep_one(n, k, w, &config.search, out_dir).inspect_err(|e| {
                error!("Failed on ({},{},{}): {}", n, k, w, e);
            })
        })
        .collect()
}

fn sweep_one(
    n: usize,
    k: usize,
    w: usize,
    params: &SearchParams,
    out_dir: &Path,
) -> CfResult<SweepEntry> {
    let generated = generate(n, k, w, params)?;
    let path = template::save_template(out_dir, n, k, w, &generated.schedule)?;
    Ok(SweepEntry {
        n,
        k,
        w,
        evaluation: generated.evaluation,
        stop: generated.stop,
        path,
    })
}
