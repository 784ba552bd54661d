// ferrokin_sim/src/simulation/core/runner.rs

use tracing::{debug, info, warn};

use super::builder::build_model;
use super::prng::SimulationRng;
use super::sampler::JointStateSampler;
use super::validation::{validate_state, ValidationReport};
use crate::error::SimError;
use crate::simulation::config::ScenarioConfig;

/// Builds the scenario's model, draws `samples` joint states and validates
/// every frame derivative at each of them.
pub fn run_scenario(name: &str, config: &ScenarioConfig) -> Result<ValidationReport, SimError> {
    let model = build_model(&config.model)?;
    if model.frames.is_empty() {
        warn!("Scenario '{}' defines no frames, nothing to validate", name);
    }

    let sampler = JointStateSampler::new(&config.sampling)?;
    let mut rng = SimulationRng::new(config.simulation.seed);
    let mut report = ValidationReport::new(name, config.evaluation.tolerance);

    info!(
        "Running scenario '{}': {} samples over {} frames",
        name,
        config.simulation.samples,
        model.nframes()
    );
    for i in 0..config.simulation.samples {
        let state = sampler.sample(&model, &mut rng.0);
        debug!(sample = i, q = ?state.q.as_slice(), "validating joint state");
        validate_state(&model, &state, &config.evaluation, &mut report)?;
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::{
        providers::{Format, Toml},
        Figment,
    };

    const SCENARIO: &str = r#"
        [simulation]
        seed = 3
        samples = 2

        [[model.joints]]
        name = "A"
        kind = { type = "revolute", axis = [0.0, 0.0, 1.0] }

        [[model.joints]]
        name = "B"
        parent = "A"
        kind = { type = "prismatic", axis = [1.0, 0.0, 0.0] }
        placement = { translation = [1.0, 0.0, 0.0], rotation = [30.0, 0.0, 0.0] }

        [[model.frames]]
        name = "F"
        joint = "B"
        placement = { translation = [0.0, 0.0, 1.0], rotation = [0.0, 45.0, 0.0] }
    "#;

    fn config() -> ScenarioConfig {
        Figment::from(Toml::string(SCENARIO)).extract().unwrap()
    }

    #[test]
    fn test_scenario_passes_and_is_reproducible() {
        let first = run_scenario("inline", &config()).unwrap();
        assert_eq!(first.samples, 2);
        assert!(first.passed(), "{first}");
        let second = run_scenario("inline", &config()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_model_errors_surface() {
        let mut config = config();
        config.model.frames[0].joint = "missing".into();
        assert!(matches!(
            run_scenario("broken", &config),
            Err(SimError::Kinematics(_))
        ));
    }
}
