//! Module for reading `/_cluster/stats`.
//!
//! The `/_cluster/stats` endpoint returns cluster wide statistics, grouped in `indices`
//! (counts, docs, store, fielddata, segments) and `nodes` (counts, versions, os, jvm, fs).
//! Please mind the `nodes` map here holds summaries for all nodes, not entries per node id.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
