//! Dataset providers.
//!
//! The engine fits any `&[HorseRecord]`; this module supplies a seeded
//! synthetic dataset for demos and tests.

pub mod sample;

pub use sample::*;
