mod cli;
mod commands;
mod domain;
mod error;
mod services;

use clap::Parser;
use cli::Cli;
use domain::models::{JsonOut, Phase};
use services::diagnostics::{DiagnosticSink, LogFile};
use services::report;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if !cli.input.to_string_lossy().ends_with(".tar.gz") {
        anyhow::bail!(
            "input {} does not look like a .tar.gz backup",
            cli.input.display()
        );
    }
    std::fs::create_dir_all(&cli.out)?;

    let mut diag = LogFile::create(&cli.out, cli.verbose)?;
    diag.event(&format!("+- phase: {}", Phase::Idle));
    diag.event("+- Starting configuration analysis");

    let report = match commands::run_analysis(&cli.input, &mut diag) {
        Ok(report) => report,
        Err(err) => {
            diag.event(&format!("+- phase: {}", Phase::Failed));
            return Err(err.into());
        }
    };

    diag.event("+- Saving analysis output to disk");
    let files = report::write_csv(&report, &cli.out)?;
    diag.event(&format!("+- phase: {}", Phase::Reported));
    diag.event(&format!("+- phase: {}", Phase::Done));

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: &report
            })?
        );
    } else {
        println!("tenants: {}", report.tenants.len());
        println!("domain associations: {}", report.domains.len());
        println!(
            "report: {} {}",
            files.tenants.display(),
            files.domains.display()
        );
        println!("log: {}", diag.path().display());
    }
    Ok(())
}
