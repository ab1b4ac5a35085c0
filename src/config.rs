use crate::error::CfResult;
use crate::scorer::FairnessPolicy;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub sweep: SweepParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Stop repairing once no pair meets more often than this.
    #[arg(long, default_value_t = 1)]
    pub threshold: u32,
    #[arg(long, default_value_t = 100)]
    pub max_iterations: usize,
    /// Seed for the least-played tie-break during construction.
    #[arg(long, default_value_t = 12)]
    pub seed: u64,
    #[arg(long, value_enum, default_value_t = FairnessPolicy::Strict)]
    pub fairness: FairnessPolicy,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            threshold: 1,
            max_iterations: 100,
            seed: 12,
            fairness: FairnessPolicy::Strict,
        }
    }
}

/// Bounds of the parameter sweep. `n` is inclusive on both ends, `k` runs
/// from `k_step` below `n`, and `w` stops before `min(n, w_max)`.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepParams {
    #[arg(long, default_value_t = 24)]
    pub n_min: usize,
    #[arg(long, default_value_t = 50)]
    pub n_max: usize,
    #[arg(long, default_value_t = 4)]
    pub k_step: usize,
    #[arg(long, default_value_t = 2)]
    pub w_min: usize,
    #[arg(long, default_value_t = 16)]
    pub w_max: usize,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            n_min: 24,
            n_max: 50,
            k_step: 4,
            w_min: 2,
            w_max: 16,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays arguments the user actually typed onto a file-loaded config.
    /// Defaults filled in by clap do not override file values.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(search.threshold);
        update_if_present!(search.max_iterations);
        update_if_present!(search.seed);
        update_if_present!(search.fairness);

        update_if_present!(sweep.n_min);
        update_if_present!(sweep.n_max);
        update_if_present!(sweep.k_step);
        update_if_present!(sweep.w_min);
        update_if_present!(sweep.w_max);
    }
}

impl SweepParams {
    /// Every `(n, k, w)` in the sweep bounds with `k * w` divisible by `n`.
    pub fn triples(&self) -> Vec<(usize, usize, usize)> {
        let step = self.k_step.max(4) / 4 * 4;
        let mut out = Vec::new();
        for n in self.n_min..=self.n_max {
            for k in (step..n).step_by(step) {
                for w in self.w_min..n.min(self.w_max) {
                    if (k * w) % n == 0 {
                        out.push((n, k, w));
                    }
                }
            }
        }
        out
    }
}
