//! Built-in compiler passes.

pub mod decompose_mcz;
pub mod noise_injection;

pub use decompose_mcz::DecomposeMczPass;
pub use noise_injection::NoiseInjectionPass;
