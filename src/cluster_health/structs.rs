//! The structs
//!
use crate::client::StatusDocument;

/// The cluster health document, with `status` mapped to its severity.
#[derive(Debug, Default)]
pub struct ClusterHealth {
    pub health: StatusDocument,
}
