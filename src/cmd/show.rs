use crate::reports;
use clap::Args;
use courtforge::error::{CfResult, ScheduleError};
use courtforge::roster::{parse_names, Roster};
use courtforge::template;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Template to fill. Defaults to `<dir>/<N>-<4*courts>-<weeks>.csv`.
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    #[arg(short, long, default_value = "tennis_templates")]
    pub dir: PathBuf,

    #[arg(short, long, required_unless_present = "template")]
    pub courts: Option<usize>,

    #[arg(short, long, required_unless_present = "template")]
    pub weeks: Option<usize>,

    /// Comma separated player names.
    #[arg(long, conflicts_with = "names_file")]
    pub names: Option<String>,

    /// File of comma or newline separated player names.
    #[arg(long)]
    pub names_file: Option<PathBuf>,

    /// Seed for the name-to-number shuffle. Random when omitted.
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Write the named schedule and mapping as CSV.
    #[arg(short, long)]
    pub export: Option<PathBuf>,
}

pub fn run(args: &ShowArgs) -> CfResult<()> {
    let names = match (&args.names, &args.names_file) {
        (Some(list), _) => parse_names(list),
        (None, Some(path)) => parse_names(&fs::read_to_string(path)?),
        (None, None) => {
            return Err(ScheduleError::Roster(
                "provide --names or --names-file".to_string(),
            ))
        }
    };

    let path = match (&args.template, args.courts, args.weeks) {
        (Some(p), _, _) => p.clone(),
        (None, Some(courts), Some(weeks)) => args
            .dir
            .join(template::template_file_name(names.len(), courts * 4, weeks)),
        _ => {
            return Err(ScheduleError::Template(
                "provide --template or both --courts and --weeks".to_string(),
            ))
        }
    };

    info!("📂 Loading template {}", path.display());
    let schedule = template::load_template(&path)?;

    let expected = path
        .file_name()
        .and_then(|f| f.to_str())
        .and_then(template::parse_template_name)
        .map(|(n, _, _)| n);
    if let Some(n) = expected.filter(|&n| n != names.len()) {
        return Err(ScheduleError::Roster(format!(
            "template is for {} players but {} names were given",
            n,
            names.len()
        )));
    }

    let mut rng = match args.seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    let roster = Roster::shuffled(names, &mut rng)?;
    let named = roster.apply(&schedule)?;

    reports::print_named_schedule(&roster, &named);

    if let Some(out) = &args.export {
        roster.export(BufWriter::new(File::create(out)?), &schedule)?;
        info!("💾 Exported {}", out.display());
    }
    Ok(())
}
