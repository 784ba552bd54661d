// ferrokin_sim/src/simulation/core/sampler.rs

use ferrokin_core::prelude::{Acceleration, Configuration, Model, Velocity};
use nalgebra::DVector;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::SimError;
use crate::simulation::config::Sampling;

/// One randomly drawn joint state.
#[derive(Debug, Clone, PartialEq)]
pub struct JointState {
    pub q: Configuration,
    pub v: Velocity,
    pub a: Acceleration,
}

/// Draws joint states from zero-mean normal distributions.
#[derive(Debug, Clone)]
pub struct JointStateSampler {
    configuration: Normal<f64>,
    velocity: Normal<f64>,
    acceleration: Normal<f64>,
}

fn normal(what: &'static str, stddev: f64) -> Result<Normal<f64>, SimError> {
    Normal::new(0.0, stddev).map_err(|e| SimError::Sampling {
        what,
        reason: e.to_string(),
    })
}

impl JointStateSampler {
    pub fn new(sampling: &Sampling) -> Result<Self, SimError> {
        Ok(Self {
            configuration: normal("configuration", sampling.configuration_stddev)?,
            velocity: normal("velocity", sampling.velocity_stddev)?,
            acceleration: normal("acceleration", sampling.acceleration_stddev)?,
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, model: &Model, rng: &mut R) -> JointState {
        let mut draw = |dist: &Normal<f64>, n: usize| {
            DVector::from_iterator(n, (0..n).map(|_| dist.sample(rng)))
        };
        JointState {
            q: draw(&self.configuration, model.nq),
            v: draw(&self.velocity, model.nv),
            a: draw(&self.acceleration, model.nv),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::core::prng::SimulationRng;
    use ferrokin_core::model::samples;

    #[test]
    fn test_same_seed_same_states() {
        let model = samples::spatial_arm();
        let sampler = JointStateSampler::new(&Sampling::default()).unwrap();
        let mut a = SimulationRng::new(Some(42));
        let mut b = SimulationRng::new(Some(42));
        for _ in 0..3 {
            let state = sampler.sample(&model, &mut a.0);
            assert_eq!(state, sampler.sample(&model, &mut b.0));
            assert_eq!((state.q.len(), state.v.len(), state.a.len()), (6, 6, 6));
        }
    }

    #[test]
    fn test_zero_stddev_gives_zero_state() {
        let model = samples::planar_two_link();
        let sampling = Sampling {
            configuration_stddev: 0.0,
            velocity_stddev: 0.0,
            acceleration_stddev: 0.0,
        };
        let state = JointStateSampler::new(&sampling)
            .unwrap()
            .sample(&model, &mut SimulationRng::new(Some(1)).0);
        assert_eq!(state.q, DVector::zeros(3));
    }

    #[test]
    fn test_rejects_bad_stddev() {
        let sampling = Sampling {
            velocity_stddev: f64::NAN,
            ..Sampling::default()
        };
        assert!(matches!(
            JointStateSampler::new(&sampling),
            Err(SimError::Sampling { what: "velocity", .. })
        ));
    }
}
