//! Module for reading `/_cluster/health`.
//!
//! The `/_cluster/health` endpoint returns a flat document with the cluster name, the health
//! `status`, and the node and shard counts:
//! ```json
//! {
//!   "cluster_name": "elasticsearch",
//!   "status": "yellow",
//!   "timed_out": false,
//!   "number_of_nodes": 1,
//!   "unassigned_shards": 5,
//!   ...
//! }
//! ```
//! The `status` field is replaced with its numeric severity when the document is read, see
//! [status_map](crate::status_map::status_map).
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
