//! The structs
//!
use crate::client::StatusDocument;

#[derive(Debug, Default)]
pub struct ClusterState {
    pub state: StatusDocument,
}
