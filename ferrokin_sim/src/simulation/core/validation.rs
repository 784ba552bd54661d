// ferrokin_sim/src/simulation/core/validation.rs

//! Compares analytic frame derivatives against central finite differences.

use std::fmt;

use ferrokin_core::prelude::*;
use serde::Serialize;
use tracing::warn;

use super::sampler::JointState;
use crate::simulation::config::Evaluation;

/// One compared output of the derivative transformers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// ∂v/∂q against finite differences.
    VelocityDq,
    /// ∂v/∂q̇ against finite differences.
    VelocityDv,
    /// ∂a/∂q against finite differences.
    AccelerationDq,
    /// ∂a/∂q̇ against finite differences.
    AccelerationDv,
    /// ∂a/∂q̈ against finite differences.
    AccelerationDa,
    /// ∂v/∂q from the velocity and the acceleration transformer.
    SharedVelocityDq,
}

impl Quantity {
    pub const ALL: [Quantity; 6] = [
        Quantity::VelocityDq,
        Quantity::VelocityDv,
        Quantity::AccelerationDq,
        Quantity::AccelerationDv,
        Quantity::AccelerationDa,
        Quantity::SharedVelocityDq,
    ];
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::VelocityDq => "dv/dq",
            Quantity::VelocityDv => "dv/dv",
            Quantity::AccelerationDq => "da/dq",
            Quantity::AccelerationDv => "da/dv",
            Quantity::AccelerationDa => "da/da",
            Quantity::SharedVelocityDq => "dv/dq (shared)",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub reference_frame: ReferenceFrame,
    pub quantity: Quantity,
    pub max_error: f64,
    pub checks: usize,
    pub failures: usize,
}

/// Worst-case errors per (convention, quantity) over every sample and frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub scenario: String,
    pub samples: usize,
    pub tolerance: f64,
    pub entries: Vec<ReportEntry>,
}

impl ValidationReport {
    pub fn new(scenario: impl Into<String>, tolerance: f64) -> Self {
        Self {
            scenario: scenario.into(),
            samples: 0,
            tolerance,
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, rf: ReferenceFrame, quantity: Quantity, error: f64) {
        let failed = exceeds(error, self.tolerance);
        let existing = self
            .entries
            .iter()
            .position(|e| e.reference_frame == rf && e.quantity == quantity);
        let entry = match existing {
            Some(i) => &mut self.entries[i],
            None => {
                self.entries.push(ReportEntry {
                    reference_frame: rf,
                    quantity,
                    max_error: 0.0,
                    checks: 0,
                    failures: 0,
                });
                let last = self.entries.len() - 1;
                &mut self.entries[last]
            }
        };
        entry.checks += 1;
        entry.max_error = entry.max_error.max(error);
        if failed {
            entry.failures += 1;
        }
    }

    pub fn failures(&self) -> usize {
        self.entries.iter().map(|e| e.failures).sum()
    }

    pub fn passed(&self) -> bool {
        self.failures() == 0
    }

    pub fn max_error(&self) -> f64 {
        self.entries.iter().map(|e| e.max_error).fold(0.0, f64::max)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "scenario '{}': {} samples, tolerance {:e}",
            self.scenario, self.samples, self.tolerance
        )?;
        for e in &self.entries {
            writeln!(
                f,
                "  {:<20} {:<15} max error {:.3e} ({}/{} failed)",
                e.reference_frame.to_string(),
                e.quantity.to_string(),
                e.max_error,
                e.failures,
                e.checks
            )?;
        }
        Ok(())
    }
}

/// NaN counts as a failure.
fn exceeds(error: f64, tolerance: f64) -> bool {
    error.is_nan() || error > tolerance
}

fn max_abs_difference(a: &Matrix6x, b: &Matrix6x) -> f64 {
    (a - b).amax()
}

/// Numerical derivatives of a frame quantity. For `LocalWorldAligned` the
/// reference point is held at the frame origin of the nominal state.
#[allow(clippy::too_many_arguments)]
fn numerical(
    model: &Model,
    state: &JointState,
    frame: &Frame,
    origin: &nalgebra::Vector3<f64>,
    rf: ReferenceFrame,
    perturbation: Perturbation,
    acceleration: bool,
    step: f64,
) -> Result<Matrix6x, KinematicsError> {
    let query_rf = match rf {
        ReferenceFrame::LocalWorldAligned => ReferenceFrame::World,
        other => other,
    };
    central_difference(
        model,
        &state.q,
        &state.v,
        &state.a,
        perturbation,
        step,
        |data| {
            let m = if acceleration {
                frame_acceleration(model, data, frame.parent, &frame.placement, query_rf)?
            } else {
                frame_velocity(model, data, frame.parent, &frame.placement, query_rf)?
            };
            Ok(match rf {
                ReferenceFrame::LocalWorldAligned => m.translated(origin),
                _ => m,
            })
        },
    )
}

/// Checks every model frame at one joint state and records the errors.
pub fn validate_state(
    model: &Model,
    state: &JointState,
    evaluation: &Evaluation,
    report: &mut ValidationReport,
) -> Result<(), KinematicsError> {
    let mut data = Data::new(model);
    forward_kinematics(model, &mut data, &state.q, &state.v, &state.a)?;
    let step = evaluation.finite_difference_step;

    for (frame_id, frame) in model.frames.iter().enumerate() {
        let origin = frame_placement(model, &data, frame_id)?.translation.vector;
        for &rf in &evaluation.reference_frames {
            let zeros = || Matrix6x::zeros(model.nv);
            let (mut v_dq, mut v_dv) = (zeros(), zeros());
            frame_velocity_derivatives_by_frame(
                model,
                &data,
                frame_id,
                rf,
                VelocityPartials::new(&mut v_dq, &mut v_dv),
            )?;
            let (mut acc_v_dq, mut a_dq, mut a_dv, mut a_da) = (zeros(), zeros(), zeros(), zeros());
            frame_acceleration_derivatives_by_frame(
                model,
                &data,
                frame_id,
                rf,
                AccelerationPartials::new(&mut acc_v_dq, &mut a_dq, &mut a_dv, &mut a_da),
            )?;

            let fd = |perturbation, acceleration| {
                numerical(model, state, frame, &origin, rf, perturbation, acceleration, step)
            };
            let checks = [
                (Quantity::VelocityDq, &v_dq, fd(Perturbation::Configuration, false)?),
                (Quantity::VelocityDv, &v_dv, fd(Perturbation::Velocity, false)?),
                (Quantity::AccelerationDq, &a_dq, fd(Perturbation::Configuration, true)?),
                (Quantity::AccelerationDv, &a_dv, fd(Perturbation::Velocity, true)?),
                (Quantity::AccelerationDa, &a_da, fd(Perturbation::Acceleration, true)?),
                (Quantity::SharedVelocityDq, &acc_v_dq, v_dq.clone()),
            ];
            for (quantity, analytic, reference) in checks {
                let error = max_abs_difference(analytic, &reference);
                if exceeds(error, evaluation.tolerance) {
                    warn!(
                        frame = %frame.name,
                        %rf,
                        %quantity,
                        error,
                        "derivative check exceeded tolerance"
                    );
                }
                report.record(rf, quantity, error);
            }
        }
    }
    report.samples += 1;
    Ok(())
}
