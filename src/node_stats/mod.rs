//! Module for reading `/_nodes/stats`.
//!
//! The `/_nodes/stats` endpoint returns the statistics of every node in the `nodes` map, keyed by
//! node id. Every node entry holds `name`, `host`, `transport_address` and the statistics groups
//! such as `indices`, `os`, `process`, `jvm`, `thread_pool`, `fs`, `transport` and `http`.
//!
//! A value is requested for a node by its name, for example `jvm.mem.heap_used_percent` for
//! `es-01`, or for the node running on this machine with `_local`.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
