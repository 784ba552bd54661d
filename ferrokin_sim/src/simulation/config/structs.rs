// ferrokin_sim/src/simulation/config/structs.rs

use ferrokin_core::prelude::{JointKind, Placement, ReferenceFrame};
use nalgebra::{Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::simulation::utils::serde_helpers;

// =========================================================================
// == Top-Level Configuration ==
// =========================================================================

/// # ScenarioConfig
/// The root of the data parsed from a `scenario.toml` file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)] // Fail if the TOML has fields not in our struct
pub struct ScenarioConfig {
    #[serde(default)] // Use default if the [simulation] section is missing
    pub simulation: Simulation,

    #[serde(default)]
    pub sampling: Sampling,

    #[serde(default)]
    pub evaluation: Evaluation,

    pub model: ModelConfig,
}

// =========================================================================
// == Configuration Sub-Structs ==
// =========================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Simulation {
    /// Optional seed for the pseudo-random number generator for determinism.
    pub seed: Option<u64>,
    /// Number of random joint states to evaluate.
    #[serde(default = "default_samples")]
    pub samples: usize,
}

fn default_samples() -> usize {
    16
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            seed: None,
            samples: default_samples(),
        }
    }
}

/// Standard deviations of the zero-mean normal distributions joint states are drawn from.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Sampling {
    pub configuration_stddev: f64,
    pub velocity_stddev: f64,
    pub acceleration_stddev: f64,
}

impl Default for Sampling {
    fn default() -> Self {
        Self {
            configuration_stddev: 1.0,
            velocity_stddev: 1.0,
            acceleration_stddev: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Evaluation {
    /// Conventions to check. Unknown names are a parse error.
    #[serde(default = "all_reference_frames")]
    pub reference_frames: Vec<ReferenceFrame>,
    /// Step used for the central finite differences.
    pub finite_difference_step: f64,
    /// Largest accepted absolute error between analytic and numerical columns.
    pub tolerance: f64,
}

fn all_reference_frames() -> Vec<ReferenceFrame> {
    ReferenceFrame::ALL.to_vec()
}

impl Default for Evaluation {
    fn default() -> Self {
        Self {
            reference_frames: all_reference_frames(),
            finite_difference_step: 1e-6,
            tolerance: 1e-5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    // The TOML has `[[model.joints]]`, which becomes a Vec of JointConfig structs.
    pub joints: Vec<JointConfig>,
    #[serde(default)]
    pub frames: Vec<FrameConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct JointConfig {
    pub name: String,
    /// Name of the parent joint. Defaults to the universe.
    #[serde(default = "default_parent")]
    pub parent: String,
    pub kind: JointKind,
    #[serde(default)]
    pub placement: Pose,
}

fn default_parent() -> String {
    "universe".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FrameConfig {
    pub name: String,
    /// Name of the supporting joint.
    pub joint: String,
    #[serde(default)]
    pub placement: Pose,
}

// =========================================================================
// == Helper Structs for Nested Configuration ==
// =========================================================================

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Pose {
    #[serde(with = "serde_helpers::vec3_from_array", default = "Vector3::zeros")]
    pub translation: Vector3<f64>,

    #[serde(
        with = "serde_helpers::quat_from_euler_deg",
        default = "UnitQuaternion::identity"
    )]
    pub rotation: UnitQuaternion<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            translation: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
        }
    }
}

impl Pose {
    pub fn to_placement(&self) -> Placement {
        Placement::from_parts(Translation3::from(self.translation), self.rotation)
    }
}
