//! Module for reading `/_nodes`.
//!
//! The `/_nodes` endpoint returns the static information of every node in the `nodes` map, keyed by
//! node id. Every node entry holds `name`, `host`, `ip`, `version` and `roles`, and the
//! information groups such as `settings`, `os`, `process`, `jvm`, `thread_pool` and `plugins`.
//!
//! The node is looked up in the node information itself, in the same way as for
//! [NodeStats](crate::node_stats::NodeStats).
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
