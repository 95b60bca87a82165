//! Ingestion of pod specs for cluster capacity analysis.
//!
//! A pod spec, or a list of them, is read from a file or URL, decoded from
//! JSON or YAML, defaulted and validated the way an API server would on
//! create, and returned in the internal representation the simulator uses.

pub mod admission;
pub mod codec;
pub mod models;
pub mod sources;
pub mod utils;
pub mod workflows;

pub use models::options::{ClusterCapacityConfig, ClusterCapacityOptions, SpecSource};
pub use utils::error::Error;
pub use workflows::ingest;
