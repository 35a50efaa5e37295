use anyhow::Context;
use clap::Parser;
use qmgtools_core::command::ShellRunner;
use qmgtools_core::config::UpdateConfig;
use qmgtools_core::log::FileLog;
use qmgtools_core::runner::UpdateRunner;

/// Scheduled job: run QMGTOOLS/CMPVER and notify *SYSOPR when it succeeds.
///
/// Takes no options. Outcomes are written to the operator log; the process
/// exits 0 whatever the update result.
#[derive(Parser)]
#[command(name = "qmgtools-update", version)]
struct Cli {
    /// Ignored; scheduler entries may pass stray arguments
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if !cli.ignored.is_empty() {
        tracing::warn!(args = ?cli.ignored, "ignoring command-line arguments");
    }

    if let Err(e) = run_with(&UpdateConfig::default()) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run_with(config: &UpdateConfig) -> anyhow::Result<()> {
    let mut log = FileLog::open(&config.log_path)
        .with_context(|| format!("failed to open log file {}", config.log_path.display()))?;

    let summary = UpdateRunner::new(config, &ShellRunner, &mut log).run_update();
    tracing::debug!(log = %log.path().display(), ?summary, "run finished");
    Ok(())
}
