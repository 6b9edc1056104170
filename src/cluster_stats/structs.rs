//! The structs
//!
use crate::client::StatusDocument;

#[derive(Debug, Default)]
pub struct ClusterStats {
    pub stats: StatusDocument,
}
