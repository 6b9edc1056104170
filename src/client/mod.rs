//! Module for reading the status documents from the Elasticsearch administrative API.
//!
//! There are 5 documents that can be read:
//! - `/_cluster/health`: the cluster health, with the `status` field reading green, yellow or red.
//! - `/_cluster/stats`: cluster wide statistics for the indices and the nodes.
//! - `/_cluster/state`: the cluster state, with the elected master in `master_node`.
//! - `/_nodes/stats`: the statistics per node, in the `nodes` map keyed by node id.
//! - `/_nodes`: the information per node, in the `nodes` map keyed by node id.
//!
//! The [AdminApi] trait is the seam between reading a document and using it.
//! [HttpAdminClient] implements it with a blocking http client, trying the configured hosts in
//! order until one of them answers.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
