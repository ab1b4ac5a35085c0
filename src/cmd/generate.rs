use crate::reports;
use clap::Args;
use courtforge::config::Config;
use courtforge::error::CfResult;
use courtforge::optimizer::runner;
use courtforge::template;
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Total number of players (N).
    #[arg(short = 'n', long)]
    pub players: usize,

    /// Players on court each week (K), a multiple of 4.
    #[arg(short = 'k', long)]
    pub per_week: usize,

    /// Number of weeks (W).
    #[arg(short = 'w', long)]
    pub weeks: usize,

    /// Directory for `<N>-<K>-<W>.csv`. When omitted, the template goes to
    /// stdout and the summary to stderr.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &GenerateArgs, config: &Config) -> CfResult<()> {
    let g = runner::generate(args.players, args.per_week, args.weeks, &config.search)?;

    match &args.out {
        Some(dir) => {
            reports::print_generation_report(&g);
            let path = template::save_template(dir, g.n, g.k, g.w, &g.schedule)?;
            info!("💾 Saved {}", path.display());
            reports::print_schedule_grid(&template::template_file_name(g.n, g.k, g.w), &g.schedule);
        }
        None => {
            // stdout holds only the template
            eprintln!("{}", reports::generation_table(&g));
            template::write_template(io::stdout().lock(), &g.schedule)?;
        }
    }
    Ok(())
}
