use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use whatif::util::atomic_write;
use whatif::{Command, LogTarget, OutputFormat, ScenarioDirectory, execute, init_logging};

#[derive(Parser, Debug)]
#[command(name = "whatif")]
#[command(about = "Project DAU and revenue for game scenarios under what-if changes")]
struct Args {
    /// Path to the data directory (default: ~/.whatif/)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Write logs to stderr instead of the data directory
    #[arg(long, global = true)]
    log_stderr: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(ScenarioDirectory::default_path);
    let log_target = if args.log_stderr {
        LogTarget::Stderr
    } else {
        LogTarget::File
    };

    init_logging(&data_dir, &args.log_level, log_target)?;

    let store = ScenarioDirectory::new(data_dir);
    let report = execute(&args.command, &store)?;
    let rendered = report.render(args.format)?;

    match args.output {
        Some(path) => {
            atomic_write(&path, &rendered)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
