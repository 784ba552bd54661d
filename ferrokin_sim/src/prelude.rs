// ferrokin_sim/src/prelude.rs

// Re-export the entire ferrokin_core prelude so the runner can reach the
// model, data and derivative entry points from one place.
pub use ferrokin_core::prelude::*;

// Re-export common simulation-specific types.
pub use crate::cli::Cli;
pub use crate::error::SimError;
pub use crate::simulation::config::structs::*;
pub use crate::simulation::config::{discover_scenarios, load_scenario};
pub use crate::simulation::core::builder::build_model;
pub use crate::simulation::core::prng::SimulationRng;
pub use crate::simulation::core::runner::run_scenario;
pub use crate::simulation::core::sampler::{JointState, JointStateSampler};
pub use crate::simulation::core::validation::{Quantity, ReportEntry, ValidationReport};
