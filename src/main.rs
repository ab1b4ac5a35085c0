use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use courtforge::config::Config;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config. Arguments typed on the command line take precedence.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build and repair one schedule.
    Generate(cmd::generate::GenerateArgs),
    /// Build templates for every valid (N, K, W) in range.
    Sweep(cmd::sweep::SweepArgs),
    /// Fill a template with player names.
    Show(cmd::show::ShowArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    // stdout carries templates; logs go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Search and sweep settings live inside the subcommand's matches.
    let resolve = |cli_config: &Config, sub_name: &str| -> Config {
        let Some(path) = &cli.config else {
            return cli_config.clone();
        };
        info!("⚙️  Loading config from {}", path);
        let mut config = Config::load_from_file(path).unwrap_or_else(|e| {
            error!("Failed to load config '{}': {}", path, e);
            process::exit(1);
        });
        if let Some(sub) = matches.subcommand_matches(sub_name) {
            config.merge_from_cli(cli_config, sub);
        }
        config
    };

    let result = match &cli.command {
        Commands::Generate(args) => {
            let config = resolve(&args.config, "generate");
            cmd::generate::run(args, &config)
        }
        Commands::Sweep(args) => {
            let config = resolve(&args.config, "sweep");
            cmd::sweep::run(args, &config)
        }
        Commands::Show(args) => cmd::show::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
