//! The structs
//!
use crate::client::StatusDocument;
use crate::node_resolver::HostLookup;

#[derive(Debug)]
pub struct NodeStats {
    pub stats: StatusDocument,
    pub(crate) host_lookup: Box<dyn HostLookup>,
}
