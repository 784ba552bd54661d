// ferrokin_sim/src/simulation/core/mod.rs

pub mod builder;
pub mod prng;
pub mod runner;
pub mod sampler;
pub mod validation;
