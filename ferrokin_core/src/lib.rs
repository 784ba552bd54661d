// ferrokin_core/src/lib.rs

// This file defines the public modules of the library.
pub mod algorithms;
pub mod ancestry;
pub mod data;
pub mod error;
pub mod frames;
pub mod model;
pub mod prelude;
pub mod spatial;
pub mod types;
