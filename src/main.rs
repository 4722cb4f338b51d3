use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "itca",
    about = "IT Career Advisor: simple expert system for IT career progression",
    long_about = "IT Career Advisor: simple expert system for IT career progression.\n\
Runs in one of two modes:\n  \
1. Interactive mode (default): asks questions, gives advice, and saves a session log.\n  \
2. Load mode (--load-json): loads and displays a previously saved JSON log file."
)]
struct Cli {
    /// Load and display a previously saved JSON log file instead of running
    /// interactively, e.g. `itca --load-json IT-career-advice-YYYYMMDD-HHMMSS.json`.
    #[arg(long, value_name = "FILENAME")]
    load_json: Option<PathBuf>,

    /// Write debug logs to <tmpdir>/itca-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let path = std::env::temp_dir().join("itca-debug.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(path = %path.display(), "itca debug log started");
    }

    if let Some(path) = cli.load_json {
        return itca::run_viewer(&path, std::io::stdout().lock());
    }

    let config = itca_core::config::Config::load().unwrap_or_else(|err| {
        let path = itca_core::config::config_path();
        tracing::warn!(path = %path.display(), error = %err, "config unreadable, using defaults");
        eprintln!("Ignoring unreadable config at {}: {err}", path.display());
        itca_core::config::Config::defaults()
    });
    let program = std::env::args_os()
        .next()
        .map(PathBuf::from)
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "itca".to_string());

    itca::run_interactive(
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        &config,
        &program,
    )?;
    Ok(())
}
