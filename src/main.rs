use env_logger::Target;
use eyre::{Report, Result};
use jina_complete::app;
use jina_complete::cli::Cli;
use log::info;
use std::fs::OpenOptions;
use std::io::{self, Write};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "JINA_COMPLETE_LOG";

// The shell reads stdout and completion runs on every tab press, so logs go to a file only.
fn setup_logging() -> Result<(), Report> {
    let log_dir = dirs::data_local_dir()
        .ok_or_else(|| eyre::eyre!("Could not determine local data directory"))?
        .join("jina-complete")
        .join("logs");

    std::fs::create_dir_all(&log_dir)?;
    let log_file_path = log_dir.join("jina-complete.log");

    let log_file = OpenOptions::new().create(true).append(true).open(&log_file_path)?;

    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn"))
        .target(Target::Pipe(Box::new(log_file)))
        .try_init()?;

    Ok(())
}

fn main() {
    // Completion must keep working without a log file.
    let _ = setup_logging();

    let cli = <Cli as clap::Parser>::parse();
    info!("Starting jina-complete: {:?}", cli.command);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = app::run(&cli, &mut out).and_then(|()| out.flush().map_err(Report::from)) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
