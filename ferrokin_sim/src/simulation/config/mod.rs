// ferrokin_sim/src/simulation/config/mod.rs

//! Loading scenario configuration from disk and the environment.

mod catalog;

pub mod structs;

use std::path::Path;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use tracing::info;

use crate::error::SimError;
pub use catalog::discover_scenarios;
pub use structs::{
    Evaluation, FrameConfig, JointConfig, ModelConfig, Pose, Sampling, ScenarioConfig, Simulation,
};

/// Prefix of environment variables that override scenario values,
/// e.g. `FERROKIN_SIMULATION__SAMPLES=4`.
pub const ENV_PREFIX: &str = "FERROKIN_";

/// The layered configuration for one scenario file: the file itself, then
/// any `FERROKIN_` environment overrides.
pub fn scenario_figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, SimError> {
    info!("Loading scenario from: {:?}", path);
    if !path.is_file() {
        // `Toml::file` treats a missing file as empty, which would only
        // surface later as a confusing "missing field" error.
        return Err(figment::Error::from(format!("scenario file {:?} not found", path)).into());
    }
    Ok(scenario_figment(path).extract()?)
}
