// ferrokin_sim/src/lib.rs

//! Headless scenario runner for the ferrokin kinematics library.

use std::path::Path;

use serde::Serialize;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

// This prelude is for convenience for other files WITHIN the ferrokin_sim crate.
pub mod prelude;

pub mod cli;
pub mod error;
pub mod simulation;

use crate::cli::Cli;
use crate::error::SimError;
use crate::simulation::config::{discover_scenarios, load_scenario};
use crate::simulation::core::runner::run_scenario;
use crate::simulation::core::validation::ValidationReport;

/// Installs the global `tracing` subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    // A subscriber may already be installed (e.g. by a test harness).
    let _ = Registry::default().with(filter).with(fmt_layer).try_init();
}

#[derive(Serialize)]
struct ReportFile<'a> {
    reports: &'a [ValidationReport],
}

fn write_reports(path: &Path, reports: &[ValidationReport]) -> Result<(), SimError> {
    let text = toml::to_string_pretty(&ReportFile { reports })?;
    std::fs::write(path, text).map_err(|source| SimError::Report {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote validation report to {:?}", path);
    Ok(())
}

/// Runs every scenario selected by `cli`. Returns `Ok(true)` when every
/// check stayed within tolerance.
pub fn run(cli: &Cli) -> Result<bool, SimError> {
    let mut reports = Vec::new();
    for path in discover_scenarios(&cli.scenario)? {
        let mut config = load_scenario(&path)?;
        if let Some(seed) = cli.seed {
            config.simulation.seed = Some(seed);
        }
        if let Some(samples) = cli.samples {
            config.simulation.samples = samples;
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let report = run_scenario(&name, &config)?;
        if report.passed() {
            info!(
                "Scenario '{}' passed (max error {:.3e})",
                name,
                report.max_error()
            );
        } else {
            warn!(
                "Scenario '{}' failed {} checks:\n{}",
                name,
                report.failures(),
                report
            );
        }
        reports.push(report);
    }

    if let Some(path) = &cli.report {
        write_reports(path, &reports)?;
    }

    let passed = reports.iter().all(ValidationReport::passed);
    if !passed {
        error!("Derivative validation failed");
    }
    Ok(passed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn bundled_scenarios() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../assets/scenarios")
    }

    #[test]
    fn test_bundled_scenarios_pass() {
        let report = std::env::temp_dir().join(format!("ferrokin_report_{}.toml", std::process::id()));
        let cli = Cli {
            scenario: bundled_scenarios(),
            seed: None,
            samples: Some(2),
            report: Some(report.clone()),
            verbose: false,
        };
        assert!(run(&cli).unwrap());

        let written = std::fs::read_to_string(&report).unwrap();
        assert!(written.contains("two_link_planar"));
        assert!(written.contains("local_world_aligned"));
        std::fs::remove_file(report).unwrap();
    }

    #[test]
    fn test_missing_scenario_is_an_error() {
        let cli = Cli {
            scenario: PathBuf::from("assets/scenarios/does_not_exist.toml"),
            seed: None,
            samples: None,
            report: None,
            verbose: false,
        };
        assert!(matches!(run(&cli), Err(SimError::Config(_))));
    }
}
