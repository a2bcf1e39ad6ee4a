//! Lambda function that dispatches HPC cluster lifecycle actions to a cluster backend.
//!
//! The only backend shipped is [`SimulatedCluster`], which logs the `pcluster` command
//! it would run and returns a canned state.

pub mod cluster;
pub mod config;
pub mod dispatcher;
pub mod error;
mod handlers;
pub mod types;

pub use cluster::{ClusterBackend, PclusterCommand, SimulatedCluster};
pub use config::Config;
pub use error::LifecycleError;
pub use types::{Action, ClusterStatus, LifecycleResponse};
