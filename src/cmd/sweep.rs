use crate::reports;
use clap::Args;
use courtforge::config::Config;
use courtforge::error::CfResult;
use courtforge::optimizer::runner;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub config: Config,

    /// Directory receiving one template per valid triple.
    #[arg(short, long, default_value = "tennis_templates")]
    pub out: PathBuf,
}

pub fn run(args: &SweepArgs, config: &Config) -> CfResult<()> {
    let start = Instant::now();
    let entries = runner::run_sweep(config, &args.out)?;

    info!(
        "🏁 Wrote {} templates in {:.1}s",
        entries.len(),
        start.elapsed().as_secs_f32()
    );
    reports::print_sweep_report(&entries);
    Ok(())
}
