//! Skinfaxi Hardware Abstraction Layer
//!
//! This crate defines the interface between circuits and the backends that
//! execute them. It covers the full job lifecycle:
//!
//! - **Backend**: the [`Backend`] trait — introspection, validation,
//!   submission, status polling, result retrieval, cancellation
//! - **Capabilities**: [`Capabilities`], [`GateSet`] — what a backend can do
//! - **Jobs**: [`Job`], [`JobId`], [`JobStatus`] — the monotonic state
//!   machine (Queued → Running → Completed | Failed | Cancelled)
//! - **Results**: [`Counts`], [`ExecutionResult`] — measurement outcomes
//!
//! # Example
//!
//! ```rust,ignore
//! use skinfaxi_hal::Backend;
//!
//! let job_id = backend.submit(&circuit, 1024).await?;
//! let result = backend.wait(&job_id).await?;
//! println!("{:?}", result.counts.most_frequent());
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod job;
pub mod result;

pub use backend::{
    Backend, BackendAvailability, BackendConfig, BackendFactory, ValidationResult,
};
pub use capability::{Capabilities, GateSet};
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
pub use result::{Counts, ExecutionResult};
